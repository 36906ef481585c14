use crate::config::{ChefConfig, DEFAULT_API_URL};
use crate::error::GenerationError;
use crate::prompt::CHEF_SYSTEM_PROMPT;
use crate::providers::{CompletionProvider, MAX_TOKENS, TEMPERATURE};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde_json::{json, Value};

/// Client for OpenAI-compatible chat-completions endpoints.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(config: &ChefConfig) -> Result<Self, GenerationError> {
        // Config first, then fall back to environment variables
        Self::from_parts(
            config,
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("OPENAI_API_URL").ok(),
        )
    }

    fn from_parts(
        config: &ChefConfig,
        env_key: Option<String>,
        env_url: Option<String>,
    ) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .or(env_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenerationError::MissingApiKey)?;

        let endpoint = config
            .api_url
            .clone()
            .or(env_url)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(OpenAIProvider {
            client: Client::new(),
            api_key,
            endpoint,
            model: config.model.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_endpoint(api_key: String, endpoint: String, model: String) -> Self {
        OpenAIProvider {
            client: Client::new(),
            api_key,
            endpoint,
            model,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(
            "Requesting completion from {} with model {}",
            self.endpoint, self.model
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json")
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": CHEF_SYSTEM_PROMPT},
                    {"role": "user", "content": prompt}
                ],
                "temperature": TEMPERATURE,
                "max_tokens": MAX_TOKENS
            }))
            .send()
            .await?;

        // Check for HTTP errors
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Completion endpoint error ({}): {}", status, error_text);
            return Err(GenerationError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let response_body: Value = serde_json::from_str(&body)
            .map_err(|e| GenerationError::Format(format!("response is not JSON: {e}")))?;
        debug!("Completion response: {:?}", response_body);

        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                GenerationError::Format("missing choices[0].message.content".to_string())
            })?
            .trim()
            .to_string();

        Ok(content)
    }
}
