//! Error types for translation and session operations

use thiserror::Error;

/// Any failure of a translation request.
///
/// Network errors, HTTP status failures, undecodable bodies and provider-side
/// errors all collapse into this one kind. Users only ever see the generic
/// error banner; `reason` is kept for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Translation failed: {reason}")]
pub struct TranslationError {
    reason: String,
}

impl TranslationError {
    /// Create an error with a diagnostic reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Diagnostic reason, not meant for end users
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        TranslationError::new(format!("HTTP client error: {}", err))
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(err: serde_json::Error) -> Self {
        TranslationError::new(format!("JSON error: {}", err))
    }
}

/// Errors raised by a session handle
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The controller task has stopped and no longer accepts input
    #[error("Session is closed")]
    Closed,
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
