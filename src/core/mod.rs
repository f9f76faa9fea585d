//! Core modules for Raksha

pub mod analyzer;
pub mod api;
pub mod watcher;

pub use analyzer::{MessageAnalyzer, KEYWORDS};
pub use api::{create_router, run_server};
pub use watcher::TranscriptWatcher;
