//! Live transcript watcher: critical-word trip-wire over a growing transcript
//!
//! State transitions:
//! - Idle → Listening on start (transcript and alert cleared)
//! - Listening → Alerted on first critical-word containment
//! - Listening/Alerted → Idle on stop or source error
//! - Source Ended while listening auto-resumes
//!
//! Alerted is an overlay on Listening: the transcript keeps accumulating
//! and the alert stays tripped until the next start or reset.

use crate::types::{AlertState, SourceEvent, WatchOutput, WatchReason, WatcherState};
use crate::CRITICAL_WORDS;

/// Watcher over one recognition session
#[derive(Debug, Default)]
pub struct TranscriptWatcher {
    /// The user has asked to listen and no fatal error occurred
    listening: bool,
    /// Finalized transcript segments, space-joined
    finalized: String,
    /// Current partial segment, replaced on every interim result
    partial: String,
    /// Sticky alert state
    alert: AlertState,
    /// Message from the last fatal source error
    last_error: Option<String>,
    /// Number of events processed while listening
    event_count: u64,
}

impl TranscriptWatcher {
    /// Create new watcher in the Idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin listening. Transcript and alert from the previous run are cleared.
    pub fn start(&mut self) -> WatchOutput {
        self.finalized.clear();
        self.partial.clear();
        self.alert = AlertState::clear();
        self.last_error = None;
        self.listening = true;
        self.output(false, WatchReason::W101_LISTENING_STARTED)
    }

    /// Stop listening. Transcript and alert remain readable.
    pub fn stop(&mut self) -> WatchOutput {
        self.listening = false;
        self.output(false, WatchReason::W102_LISTENING_STOPPED)
    }

    /// Clear transcript and alert without changing the listening state
    pub fn reset(&mut self) -> WatchOutput {
        self.finalized.clear();
        self.partial.clear();
        self.alert = AlertState::clear();
        self.output(false, WatchReason::W103_SESSION_RESET)
    }

    /// Process one source event, strictly in arrival order
    pub fn on_event(&mut self, event: SourceEvent) -> WatchOutput {
        if !self.listening {
            // Events from a released source are dropped
            return self.output(false, WatchReason::W202_EVENT_IGNORED_IDLE);
        }

        self.event_count += 1;

        match event {
            SourceEvent::Partial { text } => {
                self.partial = text;
                let (fired, reason) = self.scan_transcript();
                self.output(fired, reason)
            }
            SourceEvent::Final { text } => {
                self.finalized.push_str(&text);
                self.finalized.push(' ');
                self.partial.clear();
                let (fired, reason) = self.scan_transcript();
                self.output(fired, reason)
            }
            SourceEvent::Ended => {
                // The source closed without a user stop: keep the session alive
                self.output(false, WatchReason::W401_SOURCE_RESUMED)
            }
            SourceEvent::Error { message } => {
                self.listening = false;
                self.last_error = Some(message);
                self.output(false, WatchReason::W402_SOURCE_ERROR)
            }
        }
    }

    /// Containment check against the critical-word list, list order wins
    fn scan_transcript(&mut self) -> (bool, WatchReason) {
        let transcript = self.transcript().to_lowercase();
        let hit = CRITICAL_WORDS
            .iter()
            .find(|word| transcript.contains(*word))
            .copied();

        match hit {
            Some(word) if !self.alert.detected => {
                self.alert = AlertState::trip(word);
                print!("\x07"); // Terminal bell, one-shot
                (true, WatchReason::W301_ALERT_TRIPPED)
            }
            Some(_) => (false, WatchReason::W302_ALERT_STICKY),
            None => (false, WatchReason::W201_SEGMENT_ACCEPTED),
        }
    }

    /// Working transcript: finalized segments plus the current partial
    pub fn transcript(&self) -> String {
        format!("{}{}", self.finalized, self.partial)
    }

    /// Get current state
    pub fn state(&self) -> WatcherState {
        match (self.listening, self.alert.detected) {
            (false, _) => WatcherState::Idle,
            (true, false) => WatcherState::Listening,
            (true, true) => WatcherState::Alerted,
        }
    }

    /// Get current alert state
    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    /// Get the last fatal source error, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Get processed event count
    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    /// Get current output without processing an event
    pub fn current_output(&self) -> WatchOutput {
        let reason = match self.state() {
            WatcherState::Idle => WatchReason::W102_LISTENING_STOPPED,
            WatcherState::Listening => WatchReason::W201_SEGMENT_ACCEPTED,
            WatcherState::Alerted => WatchReason::W302_ALERT_STICKY,
        };
        self.output(false, reason)
    }

    fn output(&self, alert_fired: bool, reason: WatchReason) -> WatchOutput {
        WatchOutput::new(
            self.state(),
            self.alert.clone(),
            alert_fired,
            self.transcript().chars().count(),
            reason,
            self.last_error.clone(),
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
