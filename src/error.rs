use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The completion endpoint answered with a non-success status
    #[error("Completion endpoint returned status {status}")]
    Http { status: u16 },

    /// The completion endpoint answered 2xx but without the expected payload
    #[error("Unexpected completion response: {0}")]
    Format(String),

    /// The request never got a response (DNS, connection, TLS)
    #[error("Failed to reach completion endpoint: {0}")]
    Request(#[from] reqwest::Error),

    /// No API key in configuration or environment
    #[error("No API key found in config or OPENAI_API_KEY")]
    MissingApiKey,

    /// The user has nothing in the fridge to cook with
    #[error("The fridge is empty, add items before generating a recipe")]
    EmptyFridge,

    /// A generation for the same session is still running
    #[error("A recipe is already being generated for this session")]
    AlreadyInFlight,

    /// The caller-supplied timeout elapsed
    #[error("Recipe generation timed out after {0:?}")]
    Timeout(Duration),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl GenerationError {
    /// HTTP status of a rejected completion request, if that is what failed
    pub fn status(&self) -> Option<u16> {
        match self {
            GenerationError::Http { status } => Some(*status),
            _ => None,
        }
    }
}
