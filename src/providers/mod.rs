pub mod bytedance;
pub mod gemini;
pub mod replicate;
pub mod traits;

pub use bytedance::BytedanceProvider;
pub use gemini::GeminiProvider;
pub use replicate::ReplicateProvider;
pub use traits::ImageProvider;

use crate::config::Config;
use std::sync::Arc;

/// Builds the adapter registry. The order here is the order outcomes are
/// reported in; it matches the legacy precedence order.
pub fn build_providers(config: &Config) -> Vec<Arc<dyn ImageProvider>> {
    vec![
        Arc::new(GeminiProvider::new(config.google.clone())),
        Arc::new(BytedanceProvider::new(config.gateway.clone())),
        Arc::new(ReplicateProvider::new(config.replicate.clone())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GatewayConfig, GoogleConfig};

    #[test]
    fn registry_order_matches_legacy_precedence() {
        let providers = build_providers(&Config::new());
        let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["gemini", "bytedance", "replicate"]);
    }

    #[test]
    fn configured_flags_follow_the_config() {
        let config = Config::new()
            .with_gateway(GatewayConfig::new().with_api_key("gw"))
            .with_google(GoogleConfig::new().with_api_key("g"));
        let providers = build_providers(&config);

        let configured: Vec<(&str, bool)> = providers
            .iter()
            .map(|p| (p.name(), p.is_configured()))
            .collect();
        assert_eq!(
            configured,
            vec![("gemini", true), ("bytedance", true), ("replicate", false)]
        );
    }
}
