//! Watcher state definitions

use serde::{Deserialize, Serialize};

/// The three observable states of a watch session.
/// Alerted overlays Listening: the transcript keeps growing while alerted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WatcherState {
    /// Not listening, no events are processed
    Idle,
    /// Listening, transcript accumulating, no critical word heard yet
    Listening,
    /// Listening with the alert tripped
    Alerted,
}

impl WatcherState {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            WatcherState::Idle => "\x1b[90m",      // Gray
            WatcherState::Listening => "\x1b[36m", // Cyan
            WatcherState::Alerted => "\x1b[31m",   // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for state
    pub fn emoji(&self) -> &'static str {
        match self {
            WatcherState::Idle => "⏸",
            WatcherState::Listening => "🎙",
            WatcherState::Alerted => "🚨",
        }
    }
}

impl std::fmt::Display for WatcherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WatcherState::Idle => "IDLE",
            WatcherState::Listening => "LISTENING",
            WatcherState::Alerted => "ALERTED",
        };
        write!(f, "{}", name)
    }
}
