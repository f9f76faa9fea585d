//! Reason codes for watcher outcomes

use serde::{Deserialize, Serialize};

/// Reason codes for every watcher state change and event outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum WatchReason {
    // =========================================================================
    // W1xx: Lifecycle
    // =========================================================================
    /// Listening started, transcript and alert cleared
    W101_LISTENING_STARTED,
    /// Listening stopped by the user
    W102_LISTENING_STOPPED,
    /// Transcript and alert cleared without a lifecycle change
    W103_SESSION_RESET,

    // =========================================================================
    // W2xx: Segments
    // =========================================================================
    /// Segment appended, no critical word in the transcript
    W201_SEGMENT_ACCEPTED,
    /// Event dropped because the session is idle
    W202_EVENT_IGNORED_IDLE,

    // =========================================================================
    // W3xx: Alerts
    // =========================================================================
    /// First critical-word hit, alert tripped
    W301_ALERT_TRIPPED,
    /// Critical word present but the alert was already tripped
    W302_ALERT_STICKY,

    // =========================================================================
    // W4xx: Source
    // =========================================================================
    /// Source ended on its own, session kept listening
    W401_SOURCE_RESUMED,
    /// Source reported a fatal error, session stopped
    W402_SOURCE_ERROR,
}

impl WatchReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::W101_LISTENING_STARTED => "W101_LISTENING_STARTED",
            Self::W102_LISTENING_STOPPED => "W102_LISTENING_STOPPED",
            Self::W103_SESSION_RESET => "W103_SESSION_RESET",
            Self::W201_SEGMENT_ACCEPTED => "W201_SEGMENT_ACCEPTED",
            Self::W202_EVENT_IGNORED_IDLE => "W202_EVENT_IGNORED_IDLE",
            Self::W301_ALERT_TRIPPED => "W301_ALERT_TRIPPED",
            Self::W302_ALERT_STICKY => "W302_ALERT_STICKY",
            Self::W401_SOURCE_RESUMED => "W401_SOURCE_RESUMED",
            Self::W402_SOURCE_ERROR => "W402_SOURCE_ERROR",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::W101_LISTENING_STARTED => "Listening started",
            Self::W102_LISTENING_STOPPED => "Listening stopped",
            Self::W103_SESSION_RESET => "Transcript and alert cleared",
            Self::W201_SEGMENT_ACCEPTED => "Segment accepted",
            Self::W202_EVENT_IGNORED_IDLE => "Event ignored while idle",
            Self::W301_ALERT_TRIPPED => "Critical word heard - alert tripped",
            Self::W302_ALERT_STICKY => "Alert already tripped",
            Self::W401_SOURCE_RESUMED => "Source ended - listening resumed",
            Self::W402_SOURCE_ERROR => "Source error - listening stopped",
        }
    }
}

impl std::fmt::Display for WatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
