pub mod completion;
pub mod error;
pub mod generator;
pub mod models;
pub mod prompt;
pub mod validator;

use std::sync::Arc;

use completion::Completion;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub struct QuoteGenerator {
    pub completion: Arc<dyn Completion>,
    pub model: String,
}

impl QuoteGenerator {
    pub fn new(completion: Arc<dyn Completion>, model: impl Into<String>) -> Self {
        Self {
            completion,
            model: model.into(),
        }
    }
}
