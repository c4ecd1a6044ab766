use crate::{
    config::GatewayConfig,
    error::{MusegenError, Result},
    logger,
    models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, GatewayModel},
};
use reqwest::Client;

/// Sampling temperature for prompt expansion. Fixed; not a tuning knob.
const EXPANSION_TEMPERATURE: f32 = 0.8;

/// Client for the language-model gateway that expands a short topic into a
/// detailed image-generation prompt.
#[derive(Clone, Debug)]
pub struct PromptClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_output_tokens: u32,
}

impl PromptClient {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| MusegenError::ConfigError("Gateway API key not configured".into()))?;

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: config.base_url,
            model: config.model,
            max_output_tokens: config.max_output_tokens,
        })
    }

    fn build_headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("X-API-Key", self.api_key.parse().unwrap());
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().unwrap(),
        );
        headers
    }

    /// Builds the system + user instruction pair. The style descriptor and
    /// the topic are embedded verbatim.
    pub fn build_instruction(topic: &str, style_context: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(format!(
                "You are an expert at creating image generation prompts. Given a topic, \
                 create a detailed, evocative prompt. Be specific about composition, \
                 lighting, mood, colors, and details. Keep it under 100 words. Do not \
                 include any markdown, links, citations, or explanations - output ONLY \
                 the pure prompt text. Style: {}",
                style_context
            )),
            ChatMessage::user(format!("Create an image prompt for: \"{}\"", topic)),
        ]
    }

    /// One round trip to the gateway. A non-success status is terminal for
    /// the whole request and carries the raw error body back to the caller.
    pub async fn expand(&self, topic: &str, style_context: &str) -> Result<String> {
        let payload = ChatCompletionRequest {
            messages: Self::build_instruction(topic, style_context),
            model: self.model.clone(),
            temperature: EXPANSION_TEMPERATURE,
            max_output_tokens: self.max_output_tokens,
        };

        log::info!("Expanding topic into image prompt with {}", self.model);
        let _timer = logger::timer("prompt expansion");

        let response = self
            .client
            .post(format!(
                "{}/api/gateway/llm/chat/complete",
                self.base_url
            ))
            .headers(self.build_headers())
            .json(&payload)
            .send()
            .await
            .map_err(|e| MusegenError::RequestError(format!("Gateway request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            log::error!("Gateway error {}: {}", status, details);
            return Err(MusegenError::UpstreamError {
                status: status.as_u16(),
                details,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            MusegenError::ResponseError(format!("Failed to parse gateway response: {}", e))
        })?;

        log::debug!("Expanded prompt: {}", completion.content);
        Ok(completion.content)
    }

    /// Lists the models the gateway exposes. Used by the status endpoint as
    /// a connectivity probe.
    pub async fn list_models(&self) -> Result<Vec<GatewayModel>> {
        let response = self
            .client
            .get(format!("{}/api/gateway/llm/models", self.base_url))
            .headers(self.build_headers())
            .send()
            .await
            .map_err(|e| MusegenError::RequestError(format!("Gateway request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(MusegenError::ResponseError(format!(
                "Gateway models endpoint returned {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            MusegenError::ResponseError(format!("Failed to parse models response: {}", e))
        })
    }
}
