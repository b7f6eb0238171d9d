//! Configuration model loaded from external sources.

use config::Config;
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Path to the JSON document holding the sales representatives.
    pub data_path: String,
    /// Page size used when the caller does not supply a valid one.
    #[validate(range(min = 1))]
    pub default_page_size: usize,
    /// Upper bound applied to caller-supplied page sizes.
    #[validate(range(min = 1))]
    pub max_page_size: usize,
    #[validate(nested)]
    pub ai: AiConfig,
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings of the generative chat provider used by the AI proxy.
pub struct AiConfig {
    /// API key sent to the provider. Chats cannot be started without it.
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    #[validate(url)]
    pub endpoint: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Source(#[from] config::ConfigError),

    #[error("invalid settings: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("default_page_size ({default}) must not exceed max_page_size ({max})")]
    PageSizeBounds { default: usize, max: usize },
}

impl ServerConfig {
    /// Loads settings from `config/default.yaml`, the optional
    /// `config/{app_env}.yaml` profile, and `APP_*` environment variables.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add `./config/default.yaml`
            .add_source(config::File::with_name("config/default"))
            // Add environment-specific overrides
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            // Add settings from the environment (e.g. `APP_AI__API_KEY`)
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let server_config = settings.try_deserialize::<ServerConfig>()?;
        server_config.check()?;
        Ok(server_config)
    }

    /// Runs field validation plus the cross-field page size check.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::PageSizeBounds {
                default: self.default_page_size,
                max: self.max_page_size,
            });
        }
        Ok(())
    }
}
