//! Voice Search Library
//!
//! Voice-driven policyholder search: interprets "search by <number>"
//! transcripts from a platform speech recognizer into search filters.

pub mod audit;
pub mod config;
pub mod core;
pub mod error;
pub mod grammar;
pub mod i18n;
pub mod interpreter;
pub mod language;
pub mod recognition;
pub mod search;

pub use interpreter::{interpret, FailureKind, SearchPolicyholderFilter};
pub use language::Language;
pub use recognition::{RecognitionOutcome, RecognitionService};
