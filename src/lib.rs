pub mod config;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod providers;
pub mod server;
pub mod styles;

pub use config::{Config, GatewayConfig, GoogleConfig, ReplicateConfig};
pub use error::{MusegenError, Result};
pub use gateway::PromptClient;
pub use orchestrator::Orchestrator;
pub use providers::{BytedanceProvider, GeminiProvider, ImageProvider, ReplicateProvider};
