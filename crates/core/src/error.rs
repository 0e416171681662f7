//! Error types for the purse tokenizer crates.

use thiserror::Error;

/// Main error type for the tokenizer library.
///
/// Tokenization itself never fails: every single character is a legal
/// token, so the greedy matcher always has a fallback. Errors only come
/// from validated vocabulary insertion and from configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// A token was rejected by validated insertion
    #[error("Invalid token {token:?}: {reason}")]
    InvalidToken { token: String, reason: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TokenizerError {
    pub(crate) fn invalid_token(token: &str, reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
