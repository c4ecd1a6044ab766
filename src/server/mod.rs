pub mod handlers;

use actix_web::{http::Method, middleware, web, App, HttpServer};

use crate::config::Config;
use crate::gateway::PromptClient;
use crate::orchestrator::Orchestrator;
use crate::providers::build_providers;

/// Shared per-process state. Requests share nothing mutable: the config and
/// clients are read-only once built.
pub struct AppState {
    pub config: Config,
    /// Absent when the gateway key is missing; requests then fail with the
    /// stable configuration error instead of the server refusing to boot.
    pub gateway: Option<PromptClient>,
    pub orchestrator: Orchestrator,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let gateway = match PromptClient::new(config.gateway.clone()) {
            Ok(client) => Some(client),
            Err(e) => {
                log::warn!("Prompt expansion disabled: {}", e);
                None
            }
        };

        let orchestrator = Orchestrator::new(build_providers(&config));

        Self {
            config,
            gateway,
            orchestrator,
        }
    }
}

pub fn cors_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/generate-image")
            .route(web::post().to(handlers::generate_image))
            .route(web::method(Method::OPTIONS).to(handlers::preflight))
            .route(web::route().to(handlers::method_not_allowed)),
    )
    .route("/check-status", web::get().to(handlers::check_status));
}

pub async fn run(config: Config) -> std::io::Result<()> {
    let port = config.port.unwrap_or(8080);
    let state = web::Data::new(AppState::from_config(config));

    log::info!("Listening on 0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_headers())
            .app_data(state.clone())
            .configure(routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
