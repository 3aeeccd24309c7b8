use actix_web::{HttpResponse, Result, web};
use quotes::QuoteGenerator;
use quotes::models::quote::QuoteRequest;

use crate::error::{bad_request, daily_quote_error, generate_quote_error};

/// The body is optional: an empty body or `null` means all defaults.
fn parse_request(body: &[u8]) -> Result<QuoteRequest, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(QuoteRequest::default());
    }
    let request: Option<QuoteRequest> = serde_json::from_slice(body)?;
    Ok(request.unwrap_or_default())
}

#[actix_web::post("/generate-quote")]
pub async fn generate_quote(
    generator: web::Data<QuoteGenerator>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => return Ok(bad_request(format!("Invalid request body: {}", e))),
    };

    log::info!("generating {} quote in {} style", request.category, request.style);

    match generator.generate_quote(&request).await {
        Ok(quote) => Ok(HttpResponse::Ok().json(quote)),
        Err(e) => Ok(generate_quote_error(&e)),
    }
}

#[actix_web::get("/quote-of-the-day")]
pub async fn quote_of_the_day(generator: web::Data<QuoteGenerator>) -> Result<HttpResponse> {
    match generator.quote_of_the_day().await {
        Ok(daily) => Ok(HttpResponse::Ok().json(daily)),
        Err(e) => Ok(daily_quote_error(&e)),
    }
}
