//! Voice Search Error Types
//!
//! Library-level errors. Recognition failures reported to the user are
//! modelled separately as [`crate::interpreter::FailureKind`].

use thiserror::Error;

/// Central error type for voice search
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Speech recognizer error: {0}")]
    Recognizer(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for voice search operations
pub type VoiceResult<T> = Result<T, VoiceError>;
