use crate::{
    config::ReplicateConfig,
    models::{ImagePayload, ProviderResult},
    providers::traits::ImageProvider,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Replicate adapter. Submission is asynchronous: the backend is asked to
/// wait, but when the render outlives that window the adapter hands back
/// the prediction id and status for the caller to poll.
pub struct ReplicateProvider {
    client: Client,
    api_token: Option<String>,
    base_url: String,
    model_version: Option<String>,
}

impl ReplicateProvider {
    pub fn new(config: ReplicateConfig) -> Self {
        Self {
            client: Client::new(),
            api_token: config.api_token,
            base_url: config.base_url,
            model_version: config.model_version,
        }
    }

    fn first_output_url(body: &Value) -> Option<String> {
        match &body["output"] {
            Value::String(url) => Some(url.clone()),
            Value::Array(items) => items.first().and_then(Value::as_str).map(String::from),
            _ => None,
        }
    }

    fn parse_response(status: StatusCode, body: Value) -> ProviderResult {
        if status.is_success() {
            if body["status"].as_str() == Some("succeeded") {
                if let Some(url) = Self::first_output_url(&body) {
                    return ProviderResult::Success(ImagePayload::Url(url));
                }
            }
            if let Some(prediction_id) = body["id"].as_str() {
                let job_status = body["status"].as_str().unwrap_or("starting");
                return ProviderResult::Success(ImagePayload::Pending {
                    prediction_id: prediction_id.to_string(),
                    status: job_status.to_string(),
                });
            }
        }

        let reason = body["detail"]
            .as_str()
            .unwrap_or("Replicate generation failed")
            .to_string();
        ProviderResult::Failure { reason }
    }
}

#[async_trait]
impl ImageProvider for ReplicateProvider {
    fn name(&self) -> &'static str {
        "replicate"
    }

    fn is_configured(&self) -> bool {
        self.api_token.is_some() && self.model_version.is_some()
    }

    async fn generate(&self, prompt: &str) -> ProviderResult {
        let (Some(api_token), Some(model_version)) = (&self.api_token, &self.model_version)
        else {
            return ProviderResult::not_configured();
        };

        let payload = json!({
            "version": model_version,
            "input": { "prompt": prompt }
        });

        log::info!("Submitting prediction to Replicate");

        let response = match self
            .client
            .post(format!("{}/predictions", self.base_url))
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", api_token),
            )
            .header("Prefer", "wait")
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::error!("Replicate request failed: {}", e);
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
    async fn adapter_requires_token_and_version() {
        let token_only = ReplicateProvider::new(ReplicateConfig::new().with_credentials("tok"));
        assert!(!token_only.is_configured());
        assert_eq!(
            token_only.generate("a prompt").await,
            ProviderResult::not_configured()
        );

        let complete = ReplicateProvider::new(
            ReplicateConfig::new()
                .with_credentials("tok")
                .with_model_version("abc123"),
        );
        assert!(complete.is_configured());
    }

    #[test]
    fn finished_prediction_becomes_a_url() {
        let body = json!({
            "id": "pred-42",
            "status": "succeeded",
            "output": ["https://replicate.delivery/out.png"]
        });
        let result = ReplicateProvider::parse_response(StatusCode::CREATED, body);
        assert_eq!(
            result,
            ProviderResult::Success(ImagePayload::Url(
                "https://replicate.delivery/out.png".to_string()
            ))
        );
    }

    #[test]
    fn scalar_output_is_also_accepted() {
        let body = json!({
            "id": "pred-42",
            "status": "succeeded",
            "output": "https://replicate.delivery/out.png"
        });
        assert!(ReplicateProvider::parse_response(StatusCode::OK, body).is_success());
    }

    #[test]
    fn running_prediction_becomes_a_poll_token() {
        let body = json!({ "id": "pred-42", "status": "processing" });
        let result = ReplicateProvider::parse_response(StatusCode::CREATED, body);
        assert_eq!(
            result,
            ProviderResult::Success(ImagePayload::Pending {
                prediction_id: "pred-42".to_string(),
                status: "processing".to_string(),
            })
        );
    }

    #[test]
    fn error_detail_surfaces_as_the_reason() {
        let body = json!({ "detail": "invalid version" });
        let result = ReplicateProvider::parse_response(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(
            result,
            ProviderResult::Failure {
                reason: "invalid version".to_string()
            }
        );
    }

    #[test]
    fn unparseable_error_body_falls_back_to_generic_reason() {
        let result = ReplicateProvider::parse_response(StatusCode::BAD_GATEWAY, Value::Null);
        assert_eq!(
            result,
            ProviderResult::Failure {
                reason: "Replicate generation failed".to_string()
            }
        );
    }
}
