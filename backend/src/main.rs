use std::sync::Arc;

use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use quotes::QuoteGenerator;
use quotes::completion::OpenAiClient;

mod config;
mod error;
mod routes;

use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;
    if config.api_key.is_none() {
        log::warn!("OPENAI_API_KEY is not set; quote endpoints will fail until it is provided");
    }

    let client = OpenAiClient::new(config.api_key.clone(), &config.base_url, config.timeout)
        .map_err(std::io::Error::other)?;
    let generator = web::Data::new(QuoteGenerator::new(Arc::new(client), config.model.clone()));

    log::info!(
        "serving on {}:{} with model {} (timeout {:?})",
        config.host,
        config.port,
        config.model,
        config.timeout
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(generator.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
