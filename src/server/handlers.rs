use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::error::MusegenError;
use crate::models::{GenerateImageRequest, GenerateImageResponse, StatusResponse};
use crate::server::AppState;
use crate::styles::resolve_style;

pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(json!({ "error": "Method not allowed" }))
}

/// Topic in, expanded prompt out; optionally fans the prompt out to every
/// registered image backend. A provider failure never fails the request:
/// the caller still gets the expanded prompt plus per-provider errors.
pub async fn generate_image(
    state: web::Data<AppState>,
    body: web::Json<GenerateImageRequest>,
) -> Result<HttpResponse, MusegenError> {
    let request = body.into_inner();
    let request_id = Uuid::new_v4();

    // Credential check comes first so a misconfigured deployment fails
    // before any prompt validation or network traffic.
    let gateway = state
        .gateway
        .as_ref()
        .ok_or_else(|| MusegenError::ConfigError("Gateway API key not configured".into()))?;

    let topic = match request.prompt.as_deref().map(str::trim) {
        Some(topic) if !topic.is_empty() => topic.to_string(),
        _ => return Err(MusegenError::ValidationError("Prompt is required".into())),
    };

    log::info!(
        "Generating prompt for topic ({} style) [req:{}]",
        request.style,
        request_id
    );

    let style_context = resolve_style(&request.style);
    let image_prompt = gateway.expand(&topic, style_context).await?;

    if !request.generate_image {
        let available = state.orchestrator.any_configured();
        return Ok(HttpResponse::Ok().json(GenerateImageResponse::prompt_only(
            image_prompt,
            request.style,
            topic,
            available,
        )));
    }

    let aggregate = state.orchestrator.orchestrate(&image_prompt).await;
    log::info!(
        "Fan-out settled: {} provider(s), legacy image {} [req:{}]",
        aggregate.outcomes.len(),
        if aggregate.legacy_image.is_some() {
            "present"
        } else {
            "absent"
        },
        request_id
    );

    Ok(HttpResponse::Ok().json(GenerateImageResponse::from_aggregate(
        topic,
        request.style,
        &aggregate,
    )))
}

/// Configuration and connectivity report. Always 200, even when every
/// probe fails.
pub async fn check_status(state: web::Data<AppState>) -> HttpResponse {
    let provider_status = state.orchestrator.provider_status();
    let configured =
        |name: &str| provider_status.iter().any(|(n, ok)| *n == name && *ok);

    let mut status = StatusResponse {
        api_key_configured: state.config.gateway.api_key.is_some(),
        gateway_url: state.config.gateway.base_url.clone(),
        timestamp: Utc::now().to_rfc3339(),
        gateway_connected: None,
        available_models: None,
        gemini_configured: configured("gemini"),
        bytedance_configured: configured("bytedance"),
        replicate_configured: configured("replicate"),
        image_generation_ready: false,
        error: None,
    };

    if let Some(gateway) = &state.gateway {
        match gateway.list_models().await {
            Ok(models) => {
                status.gateway_connected = Some(true);
                status.available_models =
                    Some(models.into_iter().map(|model| model.id).collect());
            }
            Err(e) => {
                status.gateway_connected = Some(false);
                status.error = Some(e.to_string());
            }
        }
    }

    // Readiness policy: a reachable gateway plus the primary provider's
    // credential.
    status.image_generation_ready =
        status.gateway_connected == Some(true) && status.gemini_configured;

    HttpResponse::Ok().json(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GatewayConfig};
    use crate::server::{cors_headers, routes};
    use actix_web::http::{Method, StatusCode};
    use actix_web::{test, App};

    fn keyed_config() -> Config {
        Config::new().with_gateway(GatewayConfig::new().with_api_key("test-key"))
    }

    macro_rules! test_app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .wrap(cors_headers())
                    .app_data(web::Data::new(AppState::from_config($config)))
                    .configure(routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn options_preflight_returns_200_with_cors() {
        let app = test_app!(keyed_config());
        let request = test::TestRequest::with_uri("/generate-image")
            .method(Method::OPTIONS)
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Origin")
                .unwrap(),
            "*"
        );
    }

    #[actix_web::test]
    async fn non_post_methods_are_rejected() {
        let app = test_app!(keyed_config());
        let request = test::TestRequest::get()
            .uri("/generate-image")
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Method not allowed");
    }

    #[actix_web::test]
    async fn missing_prompt_is_a_stable_400() {
        let app = test_app!(keyed_config());
        let request = test::TestRequest::post()
            .uri("/generate-image")
            .set_json(json!({ "generateImage": false }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Prompt is required");
    }

    #[actix_web::test]
    async fn blank_prompt_is_also_rejected() {
        let app = test_app!(keyed_config());
        let request = test::TestRequest::post()
            .uri("/generate-image")
            .set_json(json!({ "prompt": "   " }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn missing_gateway_key_is_a_stable_500() {
        // No network call happens: the credential gate fires before the
        // prompt is even validated.
        let app = test_app!(Config::new());
        let request = test::TestRequest::post()
            .uri("/generate-image")
            .set_json(json!({ "prompt": "a quiet harbor at dawn" }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Origin")
                .unwrap(),
            "*"
        );

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Gateway API key not configured");
    }
}
