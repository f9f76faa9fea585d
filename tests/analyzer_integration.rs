//! Integration tests for the message analyzer
//!
//! Tests the full path: text → MessageAnalyzer → AnalysisResult → output

use pretty_assertions::assert_eq;
use raksha::core::{MessageAnalyzer, KEYWORDS};
use raksha::types::AnalysisResult;
use raksha::SCAM_THRESHOLD;

/// Test the full analysis path on a classic scam message
#[test]
fn test_full_analysis_path() {
    let analyzer = MessageAnalyzer::new();

    let result = analyzer.analyze(
        "Dear customer, your bank account will be suspended. \
         Verify your KYC immediately at http://bit.ly/kyc-update",
    );

    assert!(result.is_scam);
    assert!(result.score > SCAM_THRESHOLD);
    assert!(result.has_links);
    assert!(!result.reasons.is_empty());
    assert!(!result.detected_keywords.is_empty());
}

/// Scoring is additive across independent signal categories
#[test]
fn test_score_accumulates_across_categories() {
    let analyzer = MessageAnalyzer::new();

    let keywords_only = analyzer.analyze("bank otp");
    let with_urgency = analyzer.analyze("bank otp, act now");
    let with_link = analyzer.analyze("bank otp, act now http://example.com");

    assert!(with_urgency.score > keywords_only.score);
    assert!(with_link.score > with_urgency.score);
}

/// Benign everyday messages stay safe
#[test]
fn test_benign_messages_stay_safe() {
    let analyzer = MessageAnalyzer::new();

    for text in [
        "Let's meet for coffee tomorrow",
        "Happy birthday! See you at dinner",
        "The meeting moved to 3pm",
        "ok",
    ] {
        let result = analyzer.analyze(text);
        assert_eq!(result.score, 0, "unexpected score for {:?}", text);
        assert!(!result.is_scam);
    }
}

/// Verdict always agrees with score and threshold
#[test]
fn test_verdict_invariant_over_corpus() {
    let analyzer = MessageAnalyzer::new();

    let corpus = [
        "",
        "   ",
        "free",
        "free gift",
        "urgent: verify your account",
        "congratulations! you are selected as a lucky winner",
        "your electricity will be disconnected today only, call 9876543210",
        "share your cvv and pin at www.totally-legit.example",
    ];

    for text in corpus {
        let result = analyzer.analyze(text);
        assert_eq!(
            result.is_scam,
            result.score > result.threshold,
            "invariant broken for {:?}",
            text
        );
        assert_eq!(result.threshold, SCAM_THRESHOLD);
    }
}

/// Same input twice gives value-identical results
#[test]
fn test_idempotence() {
    let analyzer = MessageAnalyzer::new();
    let text = "URGENT! Your prize of Rs 10,00,000 awaits. Claim at http://bit.ly/win now!";

    let first = analyzer.analyze(text);
    let second = analyzer.analyze(text);
    assert_eq!(first, second);
}

/// Reason ordering follows the keyword table, then urgency, link, phone
#[test]
fn test_reason_ordering_is_stable() {
    let analyzer = MessageAnalyzer::new();

    let result = analyzer.analyze("otp needed for your bank, hurry: http://bit.ly/x");

    let otp_pos = result
        .reasons
        .iter()
        .position(|r| r.contains("OTP"))
        .expect("otp reason present");
    let bank_pos = result
        .reasons
        .iter()
        .position(|r| r.contains("bank"))
        .expect("bank reason present");
    let urgency_pos = result
        .reasons
        .iter()
        .position(|r| r.contains("urgency"))
        .expect("urgency reason present");
    let link_pos = result
        .reasons
        .iter()
        .position(|r| r.contains("links"))
        .expect("link reason present");

    assert!(otp_pos < bank_pos);
    assert!(bank_pos < urgency_pos);
    assert!(urgency_pos < link_pos);
}

/// Every keyword in the table contributes its weight on its own
#[test]
fn test_each_keyword_scores_alone() {
    let analyzer = MessageAnalyzer::new();

    for &(keyword, weight) in KEYWORDS {
        let result = analyzer.analyze(keyword);
        assert!(
            result.score >= weight,
            "keyword {:?} scored {} < {}",
            keyword,
            result.score,
            weight
        );
        assert!(result.detected_keywords.contains(&keyword.to_string()));
    }
}

/// JSON output round-trips
#[test]
fn test_json_output_valid() {
    let analyzer = MessageAnalyzer::new();
    let result = analyzer.analyze("verify your account at www.example.com");

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"is_scam\""));
    assert!(json.contains("\"score\""));
    assert!(json.contains("\"reasons\""));

    let restored: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, restored);
}

/// Parseable output format contains the expected fields
#[test]
fn test_parseable_output_format() {
    let analyzer = MessageAnalyzer::new();
    let result = analyzer.analyze("claim your reward");

    let formatted = result.to_parseable_string();
    assert!(formatted.contains("verdict="));
    assert!(formatted.contains("score="));
    assert!(formatted.contains("threshold="));
    assert!(formatted.contains("keywords="));
}

/// Extremely long input still produces a valid result
#[test]
fn test_long_input() {
    let analyzer = MessageAnalyzer::new();
    let text = "hello world ".repeat(50_000);

    let result = analyzer.analyze(&text);
    assert_eq!(result.score, 0);
    assert!(!result.is_scam);
}
