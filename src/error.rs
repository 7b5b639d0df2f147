//! Global error handling for promptify
//!
//! Only setup failures (bad patterns, unreadable root, tokenizer init)
//! travel up to the caller. Per-file problems are handled where they occur.

use std::io;
use thiserror::Error;

use crate::tokenizer::TokenizerError;

/// Global error type for promptify operations
#[derive(Error, Debug)]
pub enum PromptifyError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid glob pattern
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] globset::Error),

    /// Tokenizer-related errors
    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    /// JSON report serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized Result type for promptify operations
pub type Result<T> = std::result::Result<T, PromptifyError>;

/// Creates a PromptifyError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::PromptifyError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
