//! Message analyzer: weighted scoring over keyword and pattern tables
//!
//! Independent checks, single pass: keywords → urgency → links → phones.
//! The listed order fixes the tie-break order of the reasons list.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::AnalysisResult;
use crate::{
    PHONE_SCORE_GATE, SCAM_THRESHOLD, WEIGHT_LINK, WEIGHT_PHONE, WEIGHT_SHORTENER_BONUS,
    WEIGHT_URGENCY_PATTERN,
};

/// Keyword weights. Table order is load-bearing: reasons accumulate in this
/// order, so entries must not be reordered.
pub const KEYWORDS: &[(&str, i32)] = &[
    ("otp", 20),
    ("kyc", 20),
    ("winner", 20),
    ("lottery", 20),
    ("electricity", 20),
    ("blocked", 20),
    ("manager", 20),
    ("prize", 20),
    ("bank", 20),
    ("suspended", 20),
    ("verify", 15),
    ("urgent", 15),
    ("account", 10),
    ("password", 15),
    ("pin", 15),
    ("cvv", 20),
    ("atm", 15),
    ("credit", 10),
    ("debit", 10),
    ("transfer", 10),
    ("refund", 15),
    ("cashback", 15),
    ("reward", 15),
    ("claim", 15),
    ("expire", 15),
    ("immediately", 15),
    ("free", 10),
    ("gift", 15),
    ("offer", 10),
    ("limited", 10),
    ("congratulations", 15),
    ("selected", 15),
    ("lucky", 15),
];

/// Reason attached once when any urgency pattern matched
const REASON_FALSE_URGENCY: &str = "Creates false urgency to pressure you into acting fast";

/// Reason attached when the text contains a link
const REASON_LINK: &str = "Contains suspicious links - never click unknown links";

/// Reason attached when a phone number scores
const REASON_PHONE: &str = "Contains phone number - verify through official channels";

lazy_static! {
    // =========================================================================
    // Urgency patterns (weight: 10 each)
    // =========================================================================
    static ref URGENCY_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)immediate(ly)?").unwrap(),
        Regex::new(r"(?i)within\s*\d+\s*(hour|hr|minute|min|day)").unwrap(),
        Regex::new(r"(?i)today\s+only").unwrap(),
        Regex::new(r"(?i)act\s+(now|fast|quickly)").unwrap(),
        Regex::new(r"(?i)don'?t\s+delay").unwrap(),
        Regex::new(r"(?i)expire[sd]?\s+(soon|today|now)").unwrap(),
        Regex::new(r"(?i)last\s+chance").unwrap(),
        Regex::new(r"(?i)final\s+(notice|warning)").unwrap(),
        Regex::new(r"(?i)time\s+sensitive").unwrap(),
        Regex::new(r"(?i)respond\s+(asap|immediately|now)").unwrap(),
        Regex::new(r"(?i)urgent(ly)?").unwrap(),
        Regex::new(r"(?i)hurry").unwrap(),
    ];

    // =========================================================================
    // Link detection (weight: 15): scheme-prefixed or bare www.
    // =========================================================================
    static ref RE_LINK: Regex = Regex::new(r"(?i)https?://\S+|www\.\S+").unwrap();

    // =========================================================================
    // Phone numbers (weight: 5, gated): 10+ digit runs, tolerating spaces,
    // dashes, parentheses and a leading +
    // =========================================================================
    static ref RE_PHONE: Regex = Regex::new(r"\+?[\d\s\-()]{10,}|\d{10,}").unwrap();

    // =========================================================================
    // Shortener domains that earn the link bonus (weight: 10, first match)
    // =========================================================================
    static ref SHORTENER_DOMAINS: Vec<Regex> = vec![
        Regex::new(r"(?i)bit\.ly").unwrap(),
        Regex::new(r"(?i)tinyurl").unwrap(),
        Regex::new(r"(?i)goo\.gl").unwrap(),
        Regex::new(r"(?i)t\.co").unwrap(),
        Regex::new(r"(?i)short\.link").unwrap(),
        Regex::new(r"(?i)click\.here").unwrap(),
    ];
}

/// Map a keyword to its user-facing warning.
/// Keywords without an entry score silently.
fn reason_for_keyword(keyword: &str) -> Option<&'static str> {
    match keyword {
        "otp" => Some("Asks for your OTP (One Time Password) - Never share this!"),
        "kyc" => Some("Asks for KYC update - Banks don't request this via SMS"),
        "winner" => Some("Promises prize money - This is a common fraud trick"),
        "lottery" => Some("Promises lottery winnings - You cannot win what you didn't enter"),
        "electricity" => Some("Threatens service disconnection - Verify with official sources"),
        "blocked" => Some("Uses fear tactics about account being blocked"),
        "manager" => Some("Claims to be a manager or authority figure"),
        "prize" => Some("Promises prize money - This is a common fraud trick"),
        "bank" => Some("Mentions bank details - Real banks never ask this via message"),
        "suspended" => Some("Uses fear tactics about account suspension"),
        "verify" => Some("Asks to verify personal information"),
        "password" => Some("Asks for password - Never share this with anyone"),
        "pin" => Some("Asks for PIN number - Never share this with anyone"),
        "cvv" => Some("Asks for CVV - Never share this with anyone"),
        "refund" => Some("Promises refund to trick you into sharing details"),
        "cashback" => Some("Promises cashback - Verify through official apps only"),
        "reward" => Some("Promises rewards to trick you"),
        "claim" => Some("Asks you to claim something - Often a scam tactic"),
        "congratulations" => Some("Congratulates you for winning something you didn't enter"),
        "selected" => Some("Claims you were selected - Common scam opening line"),
        "lucky" => Some("Claims you are a lucky winner - Classic scam tactic"),
        _ => None,
    }
}

/// Weighted-scoring analyzer for message text
#[derive(Debug, Default)]
pub struct MessageAnalyzer;

impl MessageAnalyzer {
    /// Create new analyzer
    pub fn new() -> Self {
        Self
    }

    /// Score a message and explain the verdict.
    ///
    /// Total function: any input produces a valid result, score never
    /// decreases as evidence accumulates.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let lower = text.to_lowercase();
        let mut score = 0;
        let mut reasons: Vec<String> = Vec::new();
        let mut detected_keywords: Vec<String> = Vec::new();
        let mut detected_patterns: Vec<String> = Vec::new();

        // Keyword scan: substring containment, every table hit counts
        for &(keyword, weight) in KEYWORDS {
            if lower.contains(keyword) {
                score += weight;
                detected_keywords.push(keyword.to_string());

                if let Some(reason) = reason_for_keyword(keyword) {
                    if !reasons.iter().any(|r| r == reason) {
                        reasons.push(reason.to_string());
                    }
                }
            }
        }

        // Urgency scan: each matching pattern scores, matched text deduplicated
        for pattern in URGENCY_PATTERNS.iter() {
            if let Some(m) = pattern.find(text) {
                score += WEIGHT_URGENCY_PATTERN;
                if !detected_patterns.iter().any(|p| p == m.as_str()) {
                    detected_patterns.push(m.as_str().to_string());
                }
            }
        }

        // Guard against a bare "urgent" entry from the keyword pass
        if !detected_patterns.is_empty() && !reasons.iter().any(|r| r == "urgent") {
            reasons.push(REASON_FALSE_URGENCY.to_string());
        }

        // Link scan, with shortener bonus on the first matching domain
        let has_links = RE_LINK.is_match(text);
        if has_links {
            score += WEIGHT_LINK;
            reasons.push(REASON_LINK.to_string());

            for domain in SHORTENER_DOMAINS.iter() {
                if domain.is_match(text) {
                    score += WEIGHT_SHORTENER_BONUS;
                    break;
                }
            }
        }

        // Phone numbers only score once other evidence has accumulated
        let has_phone_numbers = RE_PHONE.is_match(text);
        if has_phone_numbers && score > PHONE_SCORE_GATE {
            score += WEIGHT_PHONE;
            if !reasons.iter().any(|r| r.contains("phone")) {
                reasons.push(REASON_PHONE.to_string());
            }
        }

        AnalysisResult {
            is_scam: score > SCAM_THRESHOLD,
            score,
            threshold: SCAM_THRESHOLD,
            reasons,
            detected_keywords,
            detected_patterns,
            has_links,
            has_phone_numbers,
        }
    }

    /// Quick verdict - just the boolean
    pub fn is_scam(&self, text: &str) -> bool {
        self.analyze(text).is_scam
    }
}

// =============================================================================
// TESTS
// =============================================================================
