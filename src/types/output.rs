//! Per-event output from the watcher

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AlertState, WatchReason, WatcherState};

/// Output structure for each watcher update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Current state
    pub state: WatcherState,
    /// Current alert state
    pub alert: AlertState,
    /// True only on the event that tripped the alert
    pub alert_fired: bool,
    /// Working transcript length in characters
    pub transcript_chars: usize,
    /// Reason for this outcome
    pub reason: WatchReason,
    /// Source error message, set with W402_SOURCE_ERROR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WatchOutput {
    /// Create new output
    pub fn new(
        state: WatcherState,
        alert: AlertState,
        alert_fired: bool,
        transcript_chars: usize,
        reason: WatchReason,
        error: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            state,
            alert,
            alert_fired,
            transcript_chars,
            reason,
            error,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.state.color_code();
        let reset = WatcherState::color_reset();
        let emoji = self.state.emoji();

        format!(
            "{}{} state={} | word={} | transcript={} chars | {}{}",
            color,
            emoji,
            self.state,
            self.alert.word.as_deref().unwrap_or("-"),
            self.transcript_chars,
            self.reason.code(),
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "state={} | detected={} | word={} | transcript={} | reason={}",
            self.state,
            self.alert.detected,
            self.alert.word.as_deref().unwrap_or("-"),
            self.transcript_chars,
            self.reason.code()
        )
    }
}
