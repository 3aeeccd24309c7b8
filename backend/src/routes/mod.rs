pub mod status;
pub mod quote;

pub use status::*;
pub use quote::*;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(health)
        .service(generate_quote)
        .service(quote_of_the_day);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::dev::ServiceResponse;
    use actix_web::{App, http::StatusCode, test, web};
    use async_trait::async_trait;
    use chrono::{DateTime, Days, SubsecRound, Utc};
    use quotes::QuoteGenerator;
    use quotes::completion::{Completion, CompletionError};
    use quotes::models::completion::CompletionRequest;
    use serde_json::{Value, json};

    use super::configure;

    /// Replies with a fixed text, or fails as if no API key were configured.
    struct Stub(Option<&'static str>);

    #[async_trait]
    impl Completion for Stub {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
            self.0.map(str::to_string).ok_or(CompletionError::MissingApiKey)
        }
    }

    async fn send(reply: Option<&'static str>, req: test::TestRequest) -> ServiceResponse {
        let generator = QuoteGenerator::new(Arc::new(Stub(reply)), "gpt-3.5-turbo");
        let app =
            test::init_service(App::new().app_data(web::Data::new(generator)).configure(configure))
                .await;
        test::call_service(&app, req.to_request()).await
    }

    fn generate() -> test::TestRequest {
        test::TestRequest::post().uri("/generate-quote")
    }

    fn daily() -> test::TestRequest {
        test::TestRequest::get().uri("/quote-of-the-day")
    }

    #[actix_web::test]
    async fn index_lists_endpoints() {
        let resp = send(None, test::TestRequest::get().uri("/")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let endpoints = body["endpoints"].as_array().unwrap();
        assert!(endpoints.iter().any(|e| e == "/generate-quote"));
        assert!(endpoints.iter().any(|e| e == "/quote-of-the-day"));
        assert!(endpoints.iter().any(|e| e == "/health"));
    }

    #[actix_web::test]
    async fn health_ignores_upstream_state() {
        let start = Utc::now().trunc_subsecs(6);

        let resp = send(None, test::TestRequest::get().uri("/health")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        let stamped = DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();
        assert!(stamped >= start);
    }

    #[actix_web::test]
    async fn generate_quote_returns_validated_quote() {
        let reply = r#"{"quote": "Courage begins with one step.", "author": "Anonymous", "category": "courage"}"#;
        let req = generate().set_json(json!({"category": "courage", "style": "bold"}));

        let resp = send(Some(reply), req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["quote"], "Courage begins with one step.");
        assert_eq!(body["author"], "Anonymous");
        assert_eq!(body["category"], "courage");
        assert!(DateTime::parse_from_rfc3339(body["generated_at"].as_str().unwrap()).is_ok());
    }

    #[actix_web::test]
    async fn generate_quote_accepts_missing_body() {
        let reply = r#"{"quote": "Keep going.", "author": "Anonymous", "category": "inspirational"}"#;

        let resp = send(Some(reply), generate()).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn generate_quote_accepts_null_fields() {
        let reply = r#"{"quote": "Keep going.", "author": "Anonymous", "category": "inspirational"}"#;
        let req = generate().set_json(json!({"category": null, "style": null}));

        let resp = send(Some(reply), req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn unparsable_reply_is_a_500() {
        let resp = send(Some("Not a quote today"), generate()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Failed to parse AI response");
    }

    #[actix_web::test]
    async fn reply_without_author_is_a_500() {
        let reply = r#"{"quote": "Be bold.", "category": "inspirational"}"#;

        let resp = send(Some(reply), generate()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Failed to parse AI response");
    }

    #[actix_web::test]
    async fn upstream_failure_carries_the_cause() {
        let resp = send(None, generate()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Error generating quote: OPENAI_API_KEY is not set");
    }

    #[actix_web::test]
    async fn invalid_body_is_a_400() {
        let req = generate()
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json");

        let resp = send(None, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn quote_of_the_day_is_pinned_to_today() {
        let reply = r#"{"quote": "Make today count.", "author": "Anonymous", "category": "motivation"}"#;

        let resp = send(Some(reply), daily()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["category"], "daily-inspiration");

        // the request may straddle midnight
        let now = Utc::now().date_naive();
        let today = now.format("%Y-%m-%d").to_string();
        let yesterday = (now - Days::new(1)).format("%Y-%m-%d").to_string();
        let date = body["date"].as_str().unwrap();
        assert!(date == today || date == yesterday, "unexpected date {date}");
        assert!(body["generated_at"].as_str().unwrap().starts_with(date));
    }

    #[actix_web::test]
    async fn quote_of_the_day_failure_is_a_500() {
        let resp = send(Some("{}"), daily()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Error generating daily quote: Failed to parse AI response");
    }
}
