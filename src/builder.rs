use std::time::Duration;

use crate::{
    config::load_config, flatten_fridge_items, FridgeItem, GenerationError, Recipe,
    RecipePipeline,
};

/// Where the ingredients for a generation come from
#[derive(Debug, Clone)]
pub enum IngredientSource {
    /// Ingredients already flattened to text
    Text(String),
    /// Fridge items, flattened as `name (quantity)` pairs
    Fridge(Vec<FridgeItem>),
}

/// Builder for configuring and executing a recipe generation
#[derive(Debug, Default)]
pub struct RecipeGeneratorBuilder {
    source: Option<IngredientSource>,
    query: String,
    allergies: Vec<String>,
    diet_preferences: Vec<String>,
    api_key: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeGeneratorBuilder {
    /// Set the ingredients as free text
    ///
    /// # Example
    /// ```
    /// use fridge_chef::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .ingredients("tavuk (500 g), pirinç (2 su bardağı)");
    /// ```
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.source = Some(IngredientSource::Text(ingredients.into()));
        self
    }

    /// Set the ingredients from fridge items
    ///
    /// # Example
    /// ```
    /// use fridge_chef::{FridgeItem, RecipeGenerator};
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .fridge_items(vec![FridgeItem::new("yumurta", "6 adet")]);
    /// ```
    pub fn fridge_items(mut self, items: Vec<FridgeItem>) -> Self {
        self.source = Some(IngredientSource::Fridge(items));
        self
    }

    /// Add a free-text request such as "hafif bir akşam yemeği"
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn allergies(mut self, allergies: Vec<String>) -> Self {
        self.allergies = allergies;
        self
    }

    pub fn diet_preferences(mut self, diet_preferences: Vec<String>) -> Self {
        self.diet_preferences = diet_preferences;
        self
    }

    /// Set the API key for the completion endpoint
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name sent to the completion endpoint
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the full chat-completions URL (for proxies or compatible servers)
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Give up waiting for the completion after `duration`
    ///
    /// # Example
    /// ```
    /// use fridge_chef::RecipeGenerator;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .ingredients("süt (1 L)")
    ///     .timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build and execute the generation
    ///
    /// # Errors
    /// Returns `GenerationError` if:
    /// - No ingredients were specified, or the ingredient text is blank
    /// - An empty fridge item list was given
    /// - No API key is configured
    /// - The completion endpoint fails or times out
    ///
    /// # Example
    /// ```no_run
    /// # use fridge_chef::RecipeGenerator;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipe = RecipeGenerator::builder()
    ///     .ingredients("domates (4 adet), biber (2 adet), yumurta (3 adet)")
    ///     .query("kahvaltılık")
    ///     .build()
    ///     .await?;
    /// println!("{}", recipe.title);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Recipe, GenerationError> {
        let ingredients = match self.source {
            None => {
                return Err(GenerationError::BuilderError(
                    "No ingredients specified. Use .ingredients() or .fridge_items()".to_string(),
                ))
            }
            Some(IngredientSource::Fridge(items)) if items.is_empty() => {
                return Err(GenerationError::EmptyFridge)
            }
            Some(IngredientSource::Fridge(items)) => flatten_fridge_items(&items),
            Some(IngredientSource::Text(text)) if text.trim().is_empty() => {
                return Err(GenerationError::BuilderError(
                    "Ingredient text cannot be empty".to_string(),
                ))
            }
            Some(IngredientSource::Text(text)) => text,
        };

        let mut config = load_config()?;
        if let Some(api_key) = self.api_key {
            config.api_key = Some(api_key);
        }
        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(endpoint) = self.endpoint {
            config.api_url = Some(endpoint);
        }

        let pipeline = RecipePipeline::from_config(&config)?;
        let generation = pipeline.generate(
            &ingredients,
            &self.query,
            &self.allergies,
            &self.diet_preferences,
        );

        match self.timeout {
            Some(duration) => tokio::time::timeout(duration, generation)
                .await
                .map_err(|_| GenerationError::Timeout(duration))?,
            None => generation.await,
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeGenerator;

impl RecipeGenerator {
    /// Creates a new builder for generating recipes
    ///
    /// # Example
    /// ```
    /// use fridge_chef::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder();
    /// ```
    pub fn builder() -> RecipeGeneratorBuilder {
        RecipeGeneratorBuilder::default()
    }
}
