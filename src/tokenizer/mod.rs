//! Token counting for the aggregated document
//!
//! The report only needs a named counter; the tiktoken implementation is
//! the default, and tests plug in their own.

mod error;
mod model;
mod openai;

pub use error::{TokenizerError, TokenizerResult};
pub use model::Model;
pub use openai::TiktokenCounter;

/// A named token-counting scheme
pub trait TokenCounter {
    /// Identity of the counting scheme, shown in the report
    fn name(&self) -> String;

    /// Count tokens in the given text
    fn num_tokens(&self, text: &str) -> usize;

    /// Context window of the underlying model, if known
    fn context_window(&self) -> Option<usize> {
        None
    }
}

/// Create the counter for the specified model
pub fn create_token_counter(model: Model) -> TokenizerResult<Box<dyn TokenCounter>> {
    Ok(Box::new(TiktokenCounter::new(model)?))
}
