//! Turns raw completion text into a validated quote.
//!
//! Parsing and schema checks fail closed: any reply that is not a JSON object
//! carrying a non-empty `quote`, an `author` and a `category` string is
//! rejected as a whole. Timestamps are always stamped here, never taken from
//! the model.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::error::Category;

use crate::error::{Malformed, QuoteError};
use crate::models::quote::{DAILY_CATEGORY, DailyQuoteResult, QuoteResult};

pub const MAX_QUOTE_CHARS: usize = 500;

/// The fields a model reply must carry, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidQuote {
    pub quote: String,
    pub author: String,
    pub category: String,
}

pub fn validate(raw: &str) -> Result<ValidQuote, Malformed> {
    let parsed: ValidQuote = serde_json::from_str(raw.trim()).map_err(|e| match e.classify() {
        Category::Data => Malformed::Schema(e.to_string()),
        Category::Syntax | Category::Eof | Category::Io => Malformed::NotJson(e.to_string()),
    })?;

    if parsed.quote.trim().is_empty() {
        return Err(Malformed::EmptyQuote);
    }

    let len = parsed.quote.chars().count();
    if len > MAX_QUOTE_CHARS {
        return Err(Malformed::QuoteTooLong(len));
    }

    Ok(parsed)
}

pub fn map_quote(raw: &str, now: DateTime<Utc>) -> Result<QuoteResult, QuoteError> {
    let valid = validate(raw)?;

    Ok(QuoteResult {
        quote: valid.quote,
        author: valid.author,
        category: valid.category,
        generated_at: timestamp(now),
    })
}

/// Like [`map_quote`], but pins the category to `daily-inspiration` and adds
/// the calendar date of `now`.
pub fn map_daily_quote(raw: &str, now: DateTime<Utc>) -> Result<DailyQuoteResult, QuoteError> {
    let mut quote = map_quote(raw, now)?;
    quote.category = DAILY_CATEGORY.to_string();

    Ok(DailyQuoteResult {
        quote,
        date: now.format("%Y-%m-%d").to_string(),
    })
}

pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}
