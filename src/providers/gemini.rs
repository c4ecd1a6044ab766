use crate::{
    config::GoogleConfig,
    models::{ImagePayload, ProviderResult},
    providers::traits::ImageProvider,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const IMAGEN_MODEL: &str = "imagen-4.0-generate-001";

/// Google Imagen adapter. Returns the rendered image inline as a base64
/// data URI.
pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(config: GoogleConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key,
            base_url: config.base_url,
        }
    }

    fn parse_response(status: StatusCode, body: Value) -> ProviderResult {
        if status.is_success() {
            if let Some(prediction) = body["predictions"].get(0) {
                if let Some(bytes) = prediction["bytesBase64Encoded"].as_str() {
                    let mime = prediction["mimeType"].as_str().unwrap_or("image/png");
                    return ProviderResult::Success(ImagePayload::DataUri(format!(
                        "data:{};base64,{}",
                        mime, bytes
                    )));
                }
            }
        }

        let reason = body["error"]["message"]
            .as_str()
            .unwrap_or("Gemini generation failed")
            .to_string();
        ProviderResult::Failure { reason }
    }
}

#[async_trait]
impl ImageProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> ProviderResult {
        let Some(api_key) = &self.api_key else {
            return ProviderResult::not_configured();
        };

        let payload = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": "3:4",
                "personGeneration": "allow_adult"
            }
        });

        log::info!("Generating image with {}", IMAGEN_MODEL);

        let response = match self
            .client
            .post(format!("{}/models/{}:predict", self.base_url, IMAGEN_MODEL))
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::error!("Imagen request failed: {}", e);
                return ProviderResult::Failure {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status();
        // Failure bodies are not always JSON; fall back to the generic
        // reason rather than surfacing a parse error.
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Self::parse_response(status, body)
    }
}
