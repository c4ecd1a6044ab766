/// Success payloads differ per backend: Imagen returns the image bytes
/// inline, Seedream a hosted URL, Replicate a prediction that may still be
/// running. Keeping them as a closed enum lets the composer match
/// exhaustively instead of probing optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
    /// Inline base64 artifact already wrapped as a `data:` URI.
    DataUri(String),
    /// Remote URL to a rendered image.
    Url(String),
    /// Poll token for a render the backend has not finished yet.
    Pending {
        prediction_id: String,
        status: String,
    },
}

impl ImagePayload {
    /// Rendering for the single legacy image field. A pending prediction
    /// carries no image yet, so it never satisfies the legacy contract.
    pub fn as_legacy(&self) -> Option<&str> {
        match self {
            ImagePayload::DataUri(data) => Some(data),
            ImagePayload::Url(url) => Some(url),
            ImagePayload::Pending { .. } => None,
        }
    }
}

/// Exactly one of these per provider per request. Failures are values, not
/// errors: one backend falling over must never abort the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderResult {
    Success(ImagePayload),
    Failure { reason: String },
    Unavailable { reason: String },
}

impl ProviderResult {
    pub fn not_configured() -> Self {
        ProviderResult::Unavailable {
            reason: "not configured".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProviderResult::Success(_))
    }
}

/// Everything the fan-out produced for one request. Built fresh per request
/// and discarded once the response is sent.
#[derive(Debug, Clone)]
pub struct AggregateResult {
    pub image_prompt: String,
    /// Every provider's outcome in registry order, tagged by name.
    pub outcomes: Vec<(&'static str, ProviderResult)>,
    /// Single image field preserved for older callers, chosen by the fixed
    /// provider precedence rather than completion order.
    pub legacy_image: Option<String>,
    pub ready: bool,
}

impl AggregateResult {
    pub fn outcome(&self, provider: &str) -> Option<&ProviderResult> {
        self.outcomes
            .iter()
            .find(|(name, _)| *name == provider)
            .map(|(_, result)| result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_payloads_never_satisfy_the_legacy_field() {
        let pending = ImagePayload::Pending {
            prediction_id: "p-1".to_string(),
            status: "processing".to_string(),
        };
        assert!(pending.as_legacy().is_none());
        assert_eq!(
            ImagePayload::Url("https://img.example/1.png".to_string()).as_legacy(),
            Some("https://img.example/1.png")
        );
    }

    #[test]
    fn outcome_lookup_finds_by_provider_name() {
        let aggregate = AggregateResult {
            image_prompt: "p".to_string(),
            outcomes: vec![
                ("gemini", ProviderResult::not_configured()),
                (
                    "bytedance",
                    ProviderResult::Success(ImagePayload::Url("u".to_string())),
                ),
            ],
            legacy_image: Some("u".to_string()),
            ready: false,
        };

        assert!(aggregate.outcome("bytedance").unwrap().is_success());
        assert!(aggregate.outcome("replicate").is_none());
    }
}
