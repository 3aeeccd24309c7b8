use actix_web::{HttpResponse, Result};
use chrono::Utc;
use quotes::validator::timestamp;
use serde::Serialize;

#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: [&'static str; 3],
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

#[actix_web::get("/")]
pub async fn index() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(IndexResponse {
        message: "Daily Quote Generator API",
        endpoints: ["/generate-quote", "/quote-of-the-day", "/health"],
    }))
}

#[actix_web::get("/health")]
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: timestamp(Utc::now()),
    }))
}
