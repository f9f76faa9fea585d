//! Raksha: scam-message scoring engine with a live call-transcript watcher
//!
//! Two cores: MessageAnalyzer (text → scored verdict with reasons) and
//! TranscriptWatcher (streaming transcript → sticky critical-word alert)

pub mod core;
pub mod types;

// =============================================================================
// SCORING WEIGHTS
// =============================================================================

/// Score above which a message is classified as a scam
pub const SCAM_THRESHOLD: i32 = 20;

/// Weight added per matching urgency pattern
pub const WEIGHT_URGENCY_PATTERN: i32 = 10;

/// Weight added when the text contains a link
pub const WEIGHT_LINK: i32 = 15;

/// Bonus weight when a detected link uses a shortener domain
pub const WEIGHT_SHORTENER_BONUS: i32 = 10;

/// Weight added for a phone number once the gate is passed
pub const WEIGHT_PHONE: i32 = 5;

/// Phone numbers only score when the running score already exceeds this
pub const PHONE_SCORE_GATE: i32 = 10;

// =============================================================================
// WATCHER TRIP-WIRE
// =============================================================================

/// Critical words for the live watcher.
/// A strict subset of the highest-risk keyword-table entries. Checked in
/// list order; the first contained word names the alert.
pub const CRITICAL_WORDS: &[&str] = &[
    "otp",
    "bank",
    "password",
    "pin",
    "cvv",
    "transfer",
    "kyc",
    "blocked",
    "suspended",
];

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
