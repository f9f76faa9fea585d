//! Transcript source events consumed by the watcher
//!
//! The speech-recognition collaborator is out of scope; it is only expected
//! to deliver these events in order, one at a time.

use serde::{Deserialize, Serialize};

/// One event from the external speech-recognition source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceEvent {
    /// Interim text, replaces the previous partial segment
    Partial { text: String },
    /// Finalized text, appended to the transcript
    Final { text: String },
    /// Recognition ended without a user stop
    Ended,
    /// Fatal source failure
    Error { message: String },
}
