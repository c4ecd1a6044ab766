use serde::Serialize;

use crate::models::provider::{AggregateResult, ImagePayload, ProviderResult};

/// Per-provider slice of the wire response. Exactly one of the payload
/// fields is set on success; `error` is set otherwise.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ProviderResult> for ProviderReport {
    fn from(result: &ProviderResult) -> Self {
        match result {
            ProviderResult::Success(ImagePayload::DataUri(data)) => ProviderReport {
                image_data: Some(data.clone()),
                ..Default::default()
            },
            ProviderResult::Success(ImagePayload::Url(url)) => ProviderReport {
                image_url: Some(url.clone()),
                ..Default::default()
            },
            ProviderResult::Success(ImagePayload::Pending {
                prediction_id,
                status,
            }) => ProviderReport {
                prediction_id: Some(prediction_id.clone()),
                status: Some(status.clone()),
                ..Default::default()
            },
            ProviderResult::Failure { reason } | ProviderResult::Unavailable { reason } => {
                ProviderReport {
                    error: Some(reason.clone()),
                    ..Default::default()
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub success: bool,
    pub image_prompt: String,
    pub style: String,
    pub original_topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini: Option<ProviderReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytedance: Option<ProviderReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicate: Option<ProviderReport>,
    /// Single image preserved for older callers; mirrors whichever provider
    /// succeeded first by precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_generation_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_generation_ready: Option<bool>,
}

impl GenerateImageResponse {
    /// Response for requests that only wanted the expanded prompt.
    pub fn prompt_only(
        image_prompt: String,
        style: String,
        original_topic: String,
        image_generation_available: bool,
    ) -> Self {
        GenerateImageResponse {
            success: true,
            image_prompt,
            style,
            original_topic,
            gemini: None,
            bytedance: None,
            replicate: None,
            image_data: None,
            image_generation_available: Some(image_generation_available),
            image_generation_ready: None,
        }
    }

    /// Maps the fan-out result onto the wire contract. A failed provider
    /// surfaces as an `error` field inside its sub-object; the response
    /// itself stays a success so callers always get the expanded prompt.
    pub fn from_aggregate(
        original_topic: String,
        style: String,
        aggregate: &AggregateResult,
    ) -> Self {
        GenerateImageResponse {
            success: true,
            image_prompt: aggregate.image_prompt.clone(),
            style,
            original_topic,
            gemini: aggregate.outcome("gemini").map(ProviderReport::from),
            bytedance: aggregate.outcome("bytedance").map(ProviderReport::from),
            replicate: aggregate.outcome("replicate").map(ProviderReport::from),
            image_data: aggregate.legacy_image.clone(),
            image_generation_available: None,
            image_generation_ready: Some(aggregate.ready),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub api_key_configured: bool,
    pub gateway_url: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_connected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_models: Option<Vec<String>>,
    pub gemini_configured: bool,
    pub bytedance_configured: bool,
    pub replicate_configured: bool,
    pub image_generation_ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
