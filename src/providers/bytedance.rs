use crate::{
    config::GatewayConfig,
    models::{ImagePayload, ProviderResult},
    providers::traits::ImageProvider,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const SEEDREAM_MODEL: &str = "bytedance_v4_5_create";

/// ByteDance Seedream adapter, reached through the gateway's image route.
/// Returns a hosted URL to the rendered image.
pub struct BytedanceProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl BytedanceProvider {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key,
            base_url: config.base_url,
        }
    }

    fn parse_response(status: StatusCode, body: Value) -> ProviderResult {
        if status.is_success() && body["success"].as_bool().unwrap_or(false) {
            if let Some(url) = body["images"].get(0).and_then(|image| image["url"].as_str()) {
                return ProviderResult::Success(ImagePayload::Url(url.to_string()));
            }
        }

        let reason = body["error"]
            .as_str()
            .unwrap_or("ByteDance generation failed")
            .to_string();
        ProviderResult::Failure { reason }
    }
}

#[async_trait]
impl ImageProvider for BytedanceProvider {
    fn name(&self) -> &'static str {
        "bytedance"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> ProviderResult {
        let Some(api_key) = &self.api_key else {
            return ProviderResult::not_configured();
        };

        let payload = json!({
            "prompt": prompt,
            "model": SEEDREAM_MODEL,
            "ratio": "portrait",
            "size": "M",
            "num_images": 1
        });

        log::info!("Generating image with {}", SEEDREAM_MODEL);

        let response = match self
            .client
            .post(format!("{}/api/gateway/image/generate", self.base_url))
            .header("X-API-Key", api_key)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::error!("Seedream request failed: {}", e);
                return ProviderResult::Failure {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Self::parse_response(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_adapter_short_circuits() {
        let provider = BytedanceProvider::new(GatewayConfig::new());
        assert!(!provider.is_configured());
        assert_eq!(
            provider.generate("a prompt").await,
            ProviderResult::not_configured()
        );
    }

    #[test]
    fn success_envelope_becomes_a_url() {
        let body = json!({
            "success": true,
            "images": [{ "url": "https://img.example/render.png" }]
        });
        let result = BytedanceProvider::parse_response(StatusCode::OK, body);
        assert_eq!(
            result,
            ProviderResult::Success(ImagePayload::Url(
                "https://img.example/render.png".to_string()
            ))
        );
    }

    #[test]
    fn unsuccessful_envelope_on_200_is_a_failure() {
        let body = json!({ "success": false, "error": "model overloaded" });
        let result = BytedanceProvider::parse_response(StatusCode::OK, body);
        assert_eq!(
            result,
            ProviderResult::Failure {
                reason: "model overloaded".to_string()
            }
        );
    }

    #[test]
    fn empty_image_list_falls_back_to_generic_reason() {
        let body = json!({ "success": true, "images": [] });
        let result = BytedanceProvider::parse_response(StatusCode::OK, body);
        assert_eq!(
            result,
            ProviderResult::Failure {
                reason: "ByteDance generation failed".to_string()
            }
        );
    }

    #[test]
    fn unparseable_error_body_falls_back_to_generic_reason() {
        let result = BytedanceProvider::parse_response(StatusCode::INTERNAL_SERVER_ERROR, Value::Null);
        assert_eq!(
            result,
            ProviderResult::Failure {
                reason: "ByteDance generation failed".to_string()
            }
        );
    }
}
