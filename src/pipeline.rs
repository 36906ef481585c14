use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};

use crate::config::ChefConfig;
use crate::error::GenerationError;
use crate::model::{FridgeItem, GenerationRequest, Recipe, SavedRecipe, UserProfile};
use crate::parser;
use crate::prompt::build_prompt;
use crate::providers::{CompletionProvider, OpenAIProvider};

/// Prompt → completion → parse, once per call.
///
/// Holds no mutable state. Concurrent calls are not deduplicated here; use a
/// [`RecipeSession`] when overlapping calls must be rejected.
pub struct RecipePipeline {
    provider: Box<dyn CompletionProvider>,
}

impl RecipePipeline {
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        RecipePipeline { provider }
    }

    /// Pipeline backed by the OpenAI-compatible endpoint named in `config`.
    pub fn from_config(config: &ChefConfig) -> Result<Self, GenerationError> {
        Ok(Self::new(Box::new(OpenAIProvider::new(config)?)))
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Generate a recipe from flattened ingredients, an optional free-text
    /// query, and the user's allergies and diet preferences.
    ///
    /// Provider errors are returned unchanged; parsing never fails.
    pub async fn generate(
        &self,
        ingredients: &str,
        query: &str,
        allergies: &[String],
        diet_preferences: &[String],
    ) -> Result<Recipe, GenerationError> {
        let prompt = build_prompt(ingredients, query, allergies, diet_preferences);
        let raw_text = self.provider.complete(&prompt).await?;
        let recipe = parser::parse(&raw_text);

        info!(
            "Generated recipe '{}' using {}",
            recipe.title,
            self.provider.provider_name()
        );

        Ok(recipe)
    }

    pub async fn generate_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<Recipe, GenerationError> {
        self.generate(
            &request.ingredients,
            request.query.as_deref().unwrap_or_default(),
            &request.allergies,
            &request.diet_preferences,
        )
        .await
    }
}

/// One user's handle on the pipeline.
///
/// Carries the user id explicitly and allows a single generation at a time.
pub struct RecipeSession {
    user_id: String,
    pipeline: RecipePipeline,
    in_flight: AtomicBool,
}

/// Clears the session's in-flight flag when dropped.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl RecipeSession {
    pub fn new(user_id: impl Into<String>, pipeline: RecipePipeline) -> Self {
        RecipeSession {
            user_id: user_id.into(),
            pipeline,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Whether a generation is currently running for this session.
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Generate a recipe from the user's fridge and profile, ready to store.
    ///
    /// # Errors
    /// - [`GenerationError::EmptyFridge`] when `items` is empty
    /// - [`GenerationError::AlreadyInFlight`] when another call is running
    /// - any provider error from the pipeline
    pub async fn generate_for_fridge(
        &self,
        items: &[FridgeItem],
        query: &str,
        profile: &UserProfile,
    ) -> Result<SavedRecipe, GenerationError> {
        if items.is_empty() {
            return Err(GenerationError::EmptyFridge);
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!(
                "Rejected overlapping recipe generation for user {}",
                self.user_id
            );
            return Err(GenerationError::AlreadyInFlight);
        };

        let request = GenerationRequest::from_fridge(items, query, profile);
        let recipe = self.pipeline.generate_request(&request).await?;

        Ok(SavedRecipe::new(self.user_id.clone(), recipe))
    }
}
