use chrono::Utc;

use crate::QuoteGenerator;
use crate::error::QuoteError;
use crate::models::quote::{DailyQuoteResult, QuoteRequest, QuoteResult};
use crate::prompt::Prompt;
use crate::validator::{map_daily_quote, map_quote};

impl QuoteGenerator {
    pub async fn generate_quote(&self, request: &QuoteRequest) -> Result<QuoteResult, QuoteError> {
        let prompt = Prompt::for_request(&request.category, &request.style);
        let raw = self.complete(prompt).await?;

        map_quote(&raw, Utc::now()).inspect_err(|e| log_malformed(e, &raw))
    }

    pub async fn quote_of_the_day(&self) -> Result<DailyQuoteResult, QuoteError> {
        let raw = self.complete(Prompt::daily()).await?;

        map_daily_quote(&raw, Utc::now()).inspect_err(|e| log_malformed(e, &raw))
    }

    async fn complete(&self, prompt: Prompt) -> Result<String, QuoteError> {
        let request = prompt.into_completion(&self.model);

        self.completion.complete(request).await.map_err(|e| {
            log::error!("completion call failed: {}", e);
            QuoteError::from(e)
        })
    }
}

fn log_malformed(err: &QuoteError, raw: &str) {
    if let QuoteError::MalformedResponse(reason) = err {
        log::warn!(
            "rejected model reply ({}): {}",
            reason,
            raw.chars().take(200).collect::<String>()
        );
    }
}
