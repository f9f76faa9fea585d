//! Integration tests for the live transcript watcher
//!
//! Tests the full path: source events → TranscriptWatcher → WatchOutput

use raksha::core::TranscriptWatcher;
use raksha::types::{SourceEvent, WatchReason, WatcherState};

fn final_segment(text: &str) -> SourceEvent {
    SourceEvent::Final {
        text: text.to_string(),
    }
}

/// Ordered segment stream trips the alert exactly once
#[test]
fn test_ordered_segment_stream() {
    let mut watcher = TranscriptWatcher::new();
    watcher.start();

    let mut fired = 0;
    for segment in ["please share your ", "bank", " account number"] {
        let output = watcher.on_event(final_segment(segment));
        if output.alert_fired {
            fired += 1;
        }
    }

    assert_eq!(fired, 1);
    assert_eq!(watcher.state(), WatcherState::Alerted);
    assert!(watcher.alert().detected);
    assert_eq!(watcher.alert().word.as_deref(), Some("bank"));

    // A second "bank" later in the stream changes nothing
    let output = watcher.on_event(final_segment("the bank again"));
    assert!(!output.alert_fired);
    assert_eq!(watcher.alert().word.as_deref(), Some("bank"));
}

/// Stop then start clears the alert and transcript
#[test]
fn test_stop_start_cycle_resets() {
    let mut watcher = TranscriptWatcher::new();
    watcher.start();
    watcher.on_event(final_segment("give me your otp"));

    assert_eq!(watcher.state(), WatcherState::Alerted);

    watcher.stop();
    watcher.start();

    assert_eq!(watcher.state(), WatcherState::Listening);
    assert!(!watcher.alert().detected);
    assert_eq!(watcher.alert().word, None);
    assert_eq!(watcher.transcript(), "");
}

/// Partial results refine into finals without duplicating text
#[test]
fn test_partial_final_interleaving() {
    let mut watcher = TranscriptWatcher::new();
    watcher.start();

    watcher.on_event(SourceEvent::Partial {
        text: "hello".to_string(),
    });
    watcher.on_event(SourceEvent::Partial {
        text: "hello how are".to_string(),
    });
    watcher.on_event(final_segment("hello how are you"));
    watcher.on_event(SourceEvent::Partial {
        text: "fine".to_string(),
    });

    assert_eq!(watcher.transcript(), "hello how are you fine");
    assert_eq!(watcher.state(), WatcherState::Listening);
}

/// Benign source end keeps the session listening, fatal error ends it
#[test]
fn test_source_end_and_error_policy() {
    let mut watcher = TranscriptWatcher::new();
    watcher.start();
    watcher.on_event(final_segment("hello"));

    let output = watcher.on_event(SourceEvent::Ended);
    assert_eq!(output.state, WatcherState::Listening);
    assert_eq!(output.reason, WatchReason::W401_SOURCE_RESUMED);

    let output = watcher.on_event(SourceEvent::Error {
        message: "not-allowed".to_string(),
    });
    assert_eq!(output.state, WatcherState::Idle);
    assert_eq!(output.error.as_deref(), Some("not-allowed"));

    // Dead source delivers nothing further
    let output = watcher.on_event(final_segment("bank"));
    assert_eq!(output.reason, WatchReason::W202_EVENT_IGNORED_IDLE);
    assert!(!watcher.alert().detected);
}

/// Alert fires from a partial segment too
#[test]
fn test_alert_from_partial() {
    let mut watcher = TranscriptWatcher::new();
    watcher.start();

    let output = watcher.on_event(SourceEvent::Partial {
        text: "tell me the otp now".to_string(),
    });
    assert!(output.alert_fired);
    assert_eq!(output.state, WatcherState::Alerted);
}

/// Watch output serializes for the wire
#[test]
fn test_watch_output_json() {
    let mut watcher = TranscriptWatcher::new();
    watcher.start();
    let output = watcher.on_event(final_segment("suspended"));

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"state\""));
    assert!(json.contains("\"alert\""));
    assert!(json.contains("\"reason\""));
    assert!(json.contains("ALERTED"));
}

/// Source events deserialize from tagged JSON
#[test]
fn test_source_event_wire_format() {
    let event: SourceEvent =
        serde_json::from_str(r#"{"kind": "final", "text": "hello"}"#).unwrap();
    assert_eq!(event, final_segment("hello"));

    let event: SourceEvent = serde_json::from_str(r#"{"kind": "ended"}"#).unwrap();
    assert_eq!(event, SourceEvent::Ended);

    let event: SourceEvent =
        serde_json::from_str(r#"{"kind": "error", "message": "boom"}"#).unwrap();
    assert_eq!(
        event,
        SourceEvent::Error {
            message: "boom".to_string()
        }
    );
}

/// Parseable output format contains the expected fields
#[test]
fn test_parseable_output_format() {
    let mut watcher = TranscriptWatcher::new();
    let output = watcher.start();

    let formatted = output.to_parseable_string();
    assert!(formatted.contains("state="));
    assert!(formatted.contains("detected="));
    assert!(formatted.contains("reason="));
}
