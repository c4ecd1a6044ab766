use crate::models::ProviderResult;
use async_trait::async_trait;

/// Contract every image backend adapter implements. `generate` is
/// infallible at the type level: a backend failure, a malformed body, or a
/// missing credential all come back as `ProviderResult` values so that one
/// adapter can never abort another's in-flight call.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Stable name used to tag outcomes and wire fields.
    fn name(&self) -> &'static str;

    /// Whether the required credential is present. An unconfigured adapter
    /// must return `Unavailable` from `generate` without touching the
    /// network.
    fn is_configured(&self) -> bool;

    /// Exactly one outbound request per invocation; no retries.
    async fn generate(&self, prompt: &str) -> ProviderResult;
}
