use musegen::logger::{self, LoggerConfig};
use musegen::{server, Config};
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv_result = dotenv::dotenv();

    let logger_config = match env::var("MUSEGEN_ENV").as_deref() {
        Ok("production") => LoggerConfig::production(),
        _ => LoggerConfig::development(),
    };
    if let Err(e) = logger::init_with_config(logger_config) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match dotenv_result {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = Config::from_env();

    logger::log_startup_info(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.port.unwrap_or(8080),
    );
    logger::log_config_info(&config);

    if config.gateway.api_key.is_none() {
        log::error!("❌ GATEWAY_API_KEY is not set; generate-image requests will fail");
    }

    server::run(config).await
}
