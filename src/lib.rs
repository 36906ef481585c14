pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod prompt;
pub mod providers;
pub mod uniffi_bindings;

// Re-export commonly used types
pub use builder::{IngredientSource, RecipeGenerator, RecipeGeneratorBuilder};
pub use config::ChefConfig;
pub use error::GenerationError;
pub use model::{
    flatten_fridge_items, FridgeItem, GenerationRequest, Recipe, SavedRecipe, UserProfile,
    DEFAULT_TITLE,
};
pub use parser::parse;
pub use pipeline::{RecipePipeline, RecipeSession};
pub use prompt::build_prompt;
pub use providers::{CompletionProvider, OpenAIProvider};

/// Generate a recipe with settings from `fridge_chef.toml` and the environment.
///
/// # Arguments
/// * `ingredients` - Available ingredients, e.g. `"tavuk (500 g), soğan (2 adet)"`
/// * `query` - Free-text wish, empty for none
/// * `allergies` - Allergies the recipe must respect
/// * `diet_preferences` - Diet rules the recipe must respect
///
/// # Errors
/// Configuration problems, a missing API key, or any completion failure.
pub async fn generate_recipe(
    ingredients: &str,
    query: &str,
    allergies: &[String],
    diet_preferences: &[String],
) -> Result<Recipe, GenerationError> {
    let config = config::load_config()?;
    let pipeline = RecipePipeline::from_config(&config)?;
    pipeline
        .generate(ingredients, query, allergies, diet_preferences)
        .await
}
