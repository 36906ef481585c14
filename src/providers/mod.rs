mod open_ai;

pub use open_ai::OpenAIProvider;

use async_trait::async_trait;

use crate::error::GenerationError;

/// Sampling temperature for every completion request.
pub const TEMPERATURE: f64 = 0.7;

/// Upper bound on generated tokens per completion.
pub const MAX_TOKENS: u32 = 1000;

/// A text-completion backend the recipe pipeline can call.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Send one prompt and return the model's raw reply text.
    ///
    /// Makes exactly one outbound request. Non-success statuses map to
    /// [`GenerationError::Http`], a missing reply to [`GenerationError::Format`].
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}
