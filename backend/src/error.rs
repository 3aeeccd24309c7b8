use actix_web::HttpResponse;
use quotes::error::QuoteError;
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn bad_request(detail: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        detail: detail.into(),
    })
}

pub fn generate_quote_error(err: &QuoteError) -> HttpResponse {
    let detail = match err {
        QuoteError::MalformedResponse(_) => err.to_string(),
        QuoteError::UpstreamFailure(msg) => format!("Error generating quote: {}", msg),
    };
    internal_error(detail)
}

pub fn daily_quote_error(err: &QuoteError) -> HttpResponse {
    internal_error(format!("Error generating daily quote: {}", err))
}

fn internal_error(detail: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse { detail })
}
