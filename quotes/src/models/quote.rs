use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "inspirational";
pub const DEFAULT_STYLE: &str = "motivational";
pub const DAILY_CATEGORY: &str = "daily-inspiration";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawQuoteRequest")]
pub struct QuoteRequest {
    pub category: String,
    pub style: String,
}

/// Wire form of [`QuoteRequest`]: a field that is omitted or `null` takes
/// its default.
#[derive(Deserialize)]
struct RawQuoteRequest {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    style: Option<String>,
}

impl From<RawQuoteRequest> for QuoteRequest {
    fn from(raw: RawQuoteRequest) -> Self {
        Self {
            category: raw.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            style: raw.style.unwrap_or_else(|| DEFAULT_STYLE.to_string()),
        }
    }
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            style: DEFAULT_STYLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub quote: String,
    pub author: String,
    pub category: String,
    pub generated_at: String,
}

/// A [`QuoteResult`] stamped with the calendar day it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuoteResult {
    #[serde(flatten)]
    pub quote: QuoteResult,
    pub date: String,
}
