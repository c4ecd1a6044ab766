use crate::models::{AggregateResult, ProviderResult};
use crate::providers::ImageProvider;
use futures::future::join_all;
use std::sync::Arc;

/// Order the legacy single-image field consults. Fixed so the choice never
/// depends on which adapter happened to finish first.
pub const LEGACY_PRECEDENCE: [&str; 3] = ["gemini", "bytedance", "replicate"];

/// The provider whose success drives the readiness flag.
pub const PRIMARY_PROVIDER: &str = "gemini";

/// Fans one expanded prompt out to every registered adapter and merges the
/// settled outcomes. Failures are isolated per provider; the join is a
/// barrier, not a race.
pub struct Orchestrator {
    providers: Vec<Arc<dyn ImageProvider>>,
}

impl Orchestrator {
    pub fn new(providers: Vec<Arc<dyn ImageProvider>>) -> Self {
        Self { providers }
    }

    pub fn any_configured(&self) -> bool {
        self.providers.iter().any(|p| p.is_configured())
    }

    pub fn provider_status(&self) -> Vec<(&'static str, bool)> {
        self.providers
            .iter()
            .map(|p| (p.name(), p.is_configured()))
            .collect()
    }

    /// Launches every adapter concurrently and waits for all of them to
    /// settle. Nothing is cancelled: a losing adapter's outcome is still
    /// recorded. With a single registered adapter this degenerates to one
    /// call wrapped in the same aggregate shape.
    pub async fn orchestrate(&self, image_prompt: &str) -> AggregateResult {
        let calls = self.providers.iter().map(|provider| {
            let provider = Arc::clone(provider);
            let prompt = image_prompt.to_string();
            async move { (provider.name(), provider.generate(&prompt).await) }
        });

        let outcomes: Vec<(&'static str, ProviderResult)> = join_all(calls).await;

        for (name, outcome) in &outcomes {
            match outcome {
                ProviderResult::Success(_) => log::info!("Provider {} succeeded", name),
                ProviderResult::Failure { reason } => {
                    log::warn!("Provider {} failed: {}", name, reason)
                }
                ProviderResult::Unavailable { reason } => {
                    log::debug!("Provider {} unavailable: {}", name, reason)
                }
            }
        }

        let legacy_image = LEGACY_PRECEDENCE.iter().find_map(|name| {
            outcomes
                .iter()
                .find(|(outcome_name, _)| outcome_name == name)
                .and_then(|(_, result)| match result {
                    ProviderResult::Success(payload) => payload.as_legacy().map(str::to_string),
                    _ => None,
                })
        });

        let ready = outcomes
            .iter()
            .any(|(name, result)| *name == PRIMARY_PROVIDER && result.is_success());

        AggregateResult {
            image_prompt: image_prompt.to_string(),
            outcomes,
            legacy_image,
            ready,
        }
    }
}
