//! Error types for the tokenizer module

use thiserror::Error;

/// Result type for tokenizer operations
pub type TokenizerResult<T> = Result<T, TokenizerError>;

/// Errors that can occur while setting up a token counter
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// The BPE encoding for the model could not be loaded
    #[error("Failed to load encoding for {model}: {reason}")]
    EncodingUnavailable {
        /// Model identifier
        model: String,
        /// Underlying failure
        reason: String,
    },
}
