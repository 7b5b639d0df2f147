//! Token counting with OpenAI's tiktoken encodings

use tiktoken_rs::CoreBPE;

use super::TokenCounter;
use crate::tokenizer::error::{TokenizerError, TokenizerResult};
use crate::tokenizer::model::Model;

/// Counter backed by the tiktoken BPE for a model
pub struct TiktokenCounter {
    model: Model,
    encoding: CoreBPE,
}

impl TiktokenCounter {
    /// Load the encoding for `model`
    pub fn new(model: Model) -> TokenizerResult<Self> {
        let encoding = tiktoken_rs::get_bpe_from_model(model.model_id()).map_err(|e| {
            TokenizerError::EncodingUnavailable {
                model: model.model_id().to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self { model, encoding })
    }
}

impl TokenCounter for TiktokenCounter {
    fn name(&self) -> String {
        format!("openai/tiktoken ({})", self.model.model_id())
    }

    fn num_tokens(&self, text: &str) -> usize {
        self.encoding.encode_ordinary(text).len()
    }

    fn context_window(&self) -> Option<usize> {
        Some(self.model.context_window())
    }
}
