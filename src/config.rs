use std::env;

pub const DEFAULT_GATEWAY_URL: &str = "https://nodes.ivanovskii.com";
pub const DEFAULT_GOOGLE_AI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REPLICATE_URL: &str = "https://api.replicate.com/v1";

/// Hard ceiling on the prompt-expansion output; deployments may lower it.
pub const MAX_OUTPUT_TOKENS_CEILING: u32 = 300;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_output_tokens: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            api_key: None,
            base_url: DEFAULT_GATEWAY_URL.to_string(),
            model: "gemini-3-flash".to_string(),
            max_output_tokens: 200,
        }
    }
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("GATEWAY_API_KEY").ok();
        let base_url = env::var("GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let model = env::var("GATEWAY_PROMPT_MODEL").unwrap_or_else(|_| "gemini-3-flash".to_string());
        let max_output_tokens = env::var("GATEWAY_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(200);

        GatewayConfig {
            api_key,
            base_url,
            model,
            max_output_tokens: max_output_tokens.min(MAX_OUTPUT_TOKENS_CEILING),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens.min(MAX_OUTPUT_TOKENS_CEILING);
        self
    }
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        GoogleConfig {
            api_key: None,
            base_url: DEFAULT_GOOGLE_AI_URL.to_string(),
        }
    }
}

impl GoogleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("GOOGLE_AI_API_KEY").ok();
        let base_url =
            env::var("GOOGLE_AI_URL").unwrap_or_else(|_| DEFAULT_GOOGLE_AI_URL.to_string());

        GoogleConfig { api_key, base_url }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct ReplicateConfig {
    pub api_token: Option<String>,
    pub base_url: String,
    pub model_version: Option<String>,
}

impl Default for ReplicateConfig {
    fn default() -> Self {
        ReplicateConfig {
            api_token: None,
            base_url: DEFAULT_REPLICATE_URL.to_string(),
            model_version: None,
        }
    }
}

impl ReplicateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_token = env::var("REPLICATE_API_TOKEN").ok();
        let base_url =
            env::var("REPLICATE_URL").unwrap_or_else(|_| DEFAULT_REPLICATE_URL.to_string());
        let model_version = env::var("REPLICATE_MODEL_VERSION").ok();

        ReplicateConfig {
            api_token,
            base_url,
            model_version,
        }
    }

    pub fn with_credentials(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    pub fn with_model_version(mut self, model_version: impl Into<String>) -> Self {
        self.model_version = Some(model_version.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub port: Option<u16>,
    pub gateway: GatewayConfig,
    pub google: GoogleConfig,
    pub replicate: ReplicateConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());

        Config {
            port,
            gateway: GatewayConfig::from_env(),
            google: GoogleConfig::from_env(),
            replicate: ReplicateConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_gateway(mut self, config: GatewayConfig) -> Self {
        self.gateway = config;
        self
    }

    pub fn with_google(mut self, config: GoogleConfig) -> Self {
        self.google = config;
        self
    }

    pub fn with_replicate(mut self, config: ReplicateConfig) -> Self {
        self.replicate = config;
        self
    }
}
