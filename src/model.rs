use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title used when the reply carries no usable `Başlık:` field.
pub const DEFAULT_TITLE: &str = "Önerilen Tarif";

/// A recipe extracted from a completion reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Short dish name, asked to stay under 20 characters but not enforced
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe {
            title: DEFAULT_TITLE.to_string(),
            ingredients: Vec::new(),
            instructions: String::new(),
        }
    }
}

impl Recipe {
    /// Render the recipe as plain text for terminals and logs.
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.title);
        output.push_str("\n\n");

        for ingredient in &self.ingredients {
            output.push_str("- ");
            output.push_str(ingredient);
            output.push('\n');
        }

        if !self.ingredients.is_empty() {
            output.push('\n');
        }

        output.push_str(&self.instructions);
        output
    }
}

/// An item in the user's fridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FridgeItem {
    pub name: String,
    pub quantity: String,
}

impl FridgeItem {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        FridgeItem {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

/// Flatten fridge items into the ingredients text sent to the model,
/// e.g. `"tavuk (500 g), pirinç (1 su bardağı)"`.
pub fn flatten_fridge_items(items: &[FridgeItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} ({})", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Dietary profile of the user as stored alongside their account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Allergy ids picked from the common list (e.g. "peanuts")
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Free-text, comma separated allergies not in the common list
    #[serde(default)]
    pub other_allergies: String,
    #[serde(default)]
    pub diet_preferences: Vec<String>,
}

impl UserProfile {
    /// Listed allergies followed by the non-empty pieces of `other_allergies`.
    pub fn all_allergies(&self) -> Vec<String> {
        let mut all = self.allergies.clone();
        all.extend(
            self.other_allergies
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from),
        );
        all
    }
}

/// Inputs of a single generation call. Built fresh per call, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub ingredients: String,
    pub query: Option<String>,
    pub allergies: Vec<String>,
    pub diet_preferences: Vec<String>,
}

impl GenerationRequest {
    pub fn new(ingredients: impl Into<String>) -> Self {
        GenerationRequest {
            ingredients: ingredients.into(),
            ..Default::default()
        }
    }

    /// Request for the given fridge contents and profile.
    pub fn from_fridge(items: &[FridgeItem], query: &str, profile: &UserProfile) -> Self {
        GenerationRequest {
            ingredients: flatten_fridge_items(items),
            query: Some(query.to_string()).filter(|q| !q.trim().is_empty()),
            allergies: profile.all_allergies(),
            diet_preferences: profile.diet_preferences.clone(),
        }
    }
}

/// A generated recipe as persisted in the user's recipe collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
}

impl SavedRecipe {
    pub fn new(user_id: impl Into<String>, recipe: Recipe) -> Self {
        SavedRecipe {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            created_at: Utc::now(),
        }
    }

    pub fn recipe(&self) -> Recipe {
        Recipe {
            title: self.title.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }
}
