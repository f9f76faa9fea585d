//! Sticky alert state for the live watcher

use serde::{Deserialize, Serialize};

/// Alert raised on the first critical-word hit.
/// Sticky: once detected, later hits never overwrite the word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertState {
    /// A critical word has been heard since the last reset
    pub detected: bool,
    /// The word that tripped the alert
    pub word: Option<String>,
}

impl AlertState {
    /// Cleared state, no word heard
    pub fn clear() -> Self {
        Self {
            detected: false,
            word: None,
        }
    }

    /// Tripped state naming the word
    pub fn trip(word: impl Into<String>) -> Self {
        Self {
            detected: true,
            word: Some(word.into()),
        }
    }
}

impl Default for AlertState {
    fn default() -> Self {
        Self::clear()
    }
}
