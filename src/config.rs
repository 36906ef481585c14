use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for reaching the completion endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct ChefConfig {
    /// Full URL of the chat-completions endpoint (falls back to OPENAI_API_URL)
    #[serde(default)]
    pub api_url: Option<String>,
    /// API key for authentication (falls back to OPENAI_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ChefConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            model: default_model(),
        }
    }
}

/// Endpoint used when neither config nor environment name one.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

impl ChefConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with FRIDGE_CHEF__ prefix
/// 2. fridge_chef.toml file in current directory
/// 3. Default values
///
/// Environment variable format: FRIDGE_CHEF__API_KEY
pub fn load_config() -> Result<ChefConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("fridge_chef").required(false))
        .add_source(
            Environment::with_prefix("FRIDGE_CHEF")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
