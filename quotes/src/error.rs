use crate::completion::CompletionError;

/// Why a completion could not be turned into a quote.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("reply is not valid JSON: {0}")]
    NotJson(String),

    #[error("reply does not match the quote schema: {0}")]
    Schema(String),

    #[error("quote is empty")]
    EmptyQuote,

    #[error("quote is {0} characters long")]
    QuoteTooLong(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Failed to parse AI response")]
    MalformedResponse(Malformed),

    #[error("{0}")]
    UpstreamFailure(String),
}

impl From<Malformed> for QuoteError {
    fn from(reason: Malformed) -> Self {
        QuoteError::MalformedResponse(reason)
    }
}

impl From<CompletionError> for QuoteError {
    fn from(err: CompletionError) -> Self {
        QuoteError::UpstreamFailure(err.to_string())
    }
}
