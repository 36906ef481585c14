//! UniFFI bindings for fridge-chef
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{FridgeItem, GenerationError, Recipe, RecipeGenerator, RecipeGeneratorBuilder};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
        }
    }
}

/// FFI-compatible fridge item
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiFridgeItem {
    pub name: String,
    pub quantity: String,
}

impl From<FfiFridgeItem> for FridgeItem {
    fn from(item: FfiFridgeItem) -> Self {
        FridgeItem::new(item.name, item.quantity)
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiGenerationError {
    /// Completion endpoint returned a non-success status
    HttpError { status: u16 },
    /// Completion endpoint returned an unexpected payload
    FormatError { message: String },
    /// Completion endpoint could not be reached
    NetworkError { message: String },
    /// Invalid input provided (empty fridge, no ingredients)
    InvalidInput { message: String },
    /// Another generation is still running
    Busy { message: String },
    /// The configured timeout elapsed
    Timeout { message: String },
    /// Configuration error (missing API key, bad config file)
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiGenerationError::HttpError { status } => {
                write!(f, "Completion endpoint returned status {}", status)
            }
            FfiGenerationError::FormatError { message } => write!(f, "Format error: {}", message),
            FfiGenerationError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            FfiGenerationError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiGenerationError::Busy { message } => write!(f, "Busy: {}", message),
            FfiGenerationError::Timeout { message } => write!(f, "Timeout: {}", message),
            FfiGenerationError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiGenerationError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiGenerationError {}

impl From<GenerationError> for FfiGenerationError {
    fn from(err: GenerationError) -> Self {
        let message = err.to_string();
        match err {
            GenerationError::Http { status } => FfiGenerationError::HttpError { status },
            GenerationError::Format(_) => FfiGenerationError::FormatError { message },
            GenerationError::Request(_) => FfiGenerationError::NetworkError { message },
            GenerationError::EmptyFridge | GenerationError::BuilderError(_) => {
                FfiGenerationError::InvalidInput { message }
            }
            GenerationError::AlreadyInFlight => FfiGenerationError::Busy { message },
            GenerationError::Timeout(_) => FfiGenerationError::Timeout { message },
            GenerationError::MissingApiKey | GenerationError::ConfigError(_) => {
                FfiGenerationError::ConfigError { message }
            }
        }
    }
}

/// Configuration for generating recipes
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiGenerateConfig {
    /// Optional API key (uses config file or environment if not specified)
    pub api_key: Option<String>,
    /// Optional model name (uses configured default if not specified)
    pub model: Option<String>,
    /// Optional chat-completions URL (uses configured default if not specified)
    pub endpoint: Option<String>,
    /// Optional timeout in seconds (no timeout if not specified)
    pub timeout_seconds: Option<u64>,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiGenerationError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiGenerationError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn apply_config(
    mut builder: RecipeGeneratorBuilder,
    config: Option<FfiGenerateConfig>,
) -> RecipeGeneratorBuilder {
    let config = config.unwrap_or_default();

    if let Some(api_key) = config.api_key {
        builder = builder.api_key(api_key);
    }

    if let Some(model) = config.model {
        builder = builder.model(model);
    }

    if let Some(endpoint) = config.endpoint {
        builder = builder.endpoint(endpoint);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    builder
}

/// Generate a recipe from ingredient text
///
/// # Arguments
/// * `ingredients` - Available ingredients as text
/// * `query` - Free-text wish, empty for none
/// * `allergies` - Allergies the recipe must respect
/// * `diet_preferences` - Diet rules the recipe must respect
/// * `config` - Optional endpoint configuration
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn generate_recipe(
    ingredients: String,
    query: String,
    allergies: Vec<String>,
    diet_preferences: Vec<String>,
    config: Option<FfiGenerateConfig>,
) -> Result<FfiRecipe, FfiGenerationError> {
    let builder = RecipeGenerator::builder()
        .ingredients(ingredients)
        .query(query)
        .allergies(allergies)
        .diet_preferences(diet_preferences);

    run(apply_config(builder, config))
}

/// Generate a recipe from the user's fridge items
///
/// Fails with `InvalidInput` when `items` is empty, without calling the endpoint.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn generate_recipe_from_fridge(
    items: Vec<FfiFridgeItem>,
    query: String,
    allergies: Vec<String>,
    diet_preferences: Vec<String>,
    config: Option<FfiGenerateConfig>,
) -> Result<FfiRecipe, FfiGenerationError> {
    let builder = RecipeGenerator::builder()
        .fridge_items(items.into_iter().map(FridgeItem::from).collect())
        .query(query)
        .allergies(allergies)
        .diet_preferences(diet_preferences);

    run(apply_config(builder, config))
}

fn run(builder: RecipeGeneratorBuilder) -> Result<FfiRecipe, FfiGenerationError> {
    let rt = create_runtime()?;
    let recipe = rt.block_on(builder.build())?;
    Ok(recipe.into())
}

/// Parse a raw model reply into a recipe
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recipe_text(text: String) -> FfiRecipe {
    crate::parser::parse(&text).into()
}

/// Build the prompt that would be sent for these inputs
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn build_recipe_prompt(
    ingredients: String,
    query: String,
    allergies: Vec<String>,
    diet_preferences: Vec<String>,
) -> String {
    crate::prompt::build_prompt(&ingredients, &query, &allergies, &diet_preferences)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check if an API key is available from config or environment
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_provider_available() -> bool {
    crate::config::load_config()
        .ok()
        .and_then(|config| config.api_key)
        .or_else(|| std::env::var("OPENAI_API_KEY").ok())
        .is_some_and(|key| !key.trim().is_empty())
}
