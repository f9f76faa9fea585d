//! Analysis result for a scanned message

use serde::{Deserialize, Serialize};

/// Outcome of scoring one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Final verdict: score exceeded the threshold
    pub is_scam: bool,
    /// Cumulative risk score
    pub score: i32,
    /// Threshold the score was compared against
    pub threshold: i32,
    /// Human-readable warnings, insertion-ordered, no duplicates
    pub reasons: Vec<String>,
    /// Keywords found in the text, in table order
    pub detected_keywords: Vec<String>,
    /// First matched substring per urgency pattern, deduplicated by text
    pub detected_patterns: Vec<String>,
    /// A link-looking substring was present
    pub has_links: bool,
    /// A phone-number-looking substring was present
    pub has_phone_numbers: bool,
}

impl AnalysisResult {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        if self.is_scam {
            "\x1b[31m" // Red
        } else {
            "\x1b[32m" // Green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for the verdict
    pub fn emoji(&self) -> &'static str {
        if self.is_scam {
            "🚨"
        } else {
            "✅"
        }
    }

    /// Verdict label for display
    pub fn verdict(&self) -> &'static str {
        if self.is_scam {
            "SCAM"
        } else {
            "SAFE"
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        format!(
            "{}{} verdict={} | score={}/{} | keywords={} | patterns={}{}",
            self.color_code(),
            self.emoji(),
            self.verdict(),
            self.score,
            self.threshold,
            self.detected_keywords.len(),
            self.detected_patterns.len(),
            Self::color_reset()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "verdict={} | score={} | threshold={} | keywords={} | patterns={} | links={} | phones={}",
            self.verdict(),
            self.score,
            self.threshold,
            self.detected_keywords.len(),
            self.detected_patterns.len(),
            self.has_links,
            self.has_phone_numbers
        )
    }
}
