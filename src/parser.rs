//! Turns the model's free-text reply into a [`Recipe`].
//!
//! The reply follows `Başlık: ..., Malzemeler: ..., Tarif: ...` only as well
//! as the model felt like following it, so every field is extracted on its
//! own and falls back independently. Parsing never fails.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::model::{Recipe, DEFAULT_TITLE};

fn title_regex() -> Option<&'static Regex> {
    static TITLE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    TITLE_REGEX
        .get_or_init(|| Regex::new(r"(?i)Başl[ıiİ]k:[ \t]*([^,\n]+)").ok())
        .as_ref()
}

fn ingredients_regex() -> Option<&'static Regex> {
    static INGREDIENTS_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    INGREDIENTS_REGEX
        .get_or_init(|| Regex::new(r"(?is)Malzemeler:[ \t]*(.+?)(?:Tarif:|\z)").ok())
        .as_ref()
}

fn instructions_regex() -> Option<&'static Regex> {
    static INSTRUCTIONS_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    INSTRUCTIONS_REGEX
        .get_or_init(|| Regex::new(r"(?is)Tarif:[ \t]*(.+)\z").ok())
        .as_ref()
}

fn header_regex() -> Option<&'static Regex> {
    static HEADER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    HEADER_REGEX
        .get_or_init(|| Regex::new(r"(?is)Başl[ıiİ]k:[ \t]*.+\nMalzemeler:[ \t]*.+\n").ok())
        .as_ref()
}

fn ingredient_separator_regex() -> Option<&'static Regex> {
    static SEPARATOR_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    SEPARATOR_REGEX
        .get_or_init(|| Regex::new(r"[\n,]+").ok())
        .as_ref()
}

/// Parse a completion reply into a recipe.
pub fn parse(raw_text: &str) -> Recipe {
    let recipe = Recipe {
        title: extract_title(raw_text).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        ingredients: extract_ingredients(raw_text),
        instructions: extract_instructions(raw_text),
    };

    debug!(
        "Parsed recipe '{}' with {} ingredients",
        recipe.title,
        recipe.ingredients.len()
    );

    recipe
}

/// Text after `Başlık:` up to the next comma, newline or end of text.
pub fn extract_title(raw_text: &str) -> Option<String> {
    let captures = title_regex()?.captures(raw_text)?;
    let title = captures.get(1)?.as_str().trim();

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Items listed between `Malzemeler:` and `Tarif:` (or the end of text),
/// split on commas and newlines. Empty when the marker is missing.
pub fn extract_ingredients(raw_text: &str) -> Vec<String> {
    let Some(span) = ingredients_regex()
        .and_then(|re| re.captures(raw_text))
        .and_then(|captures| captures.get(1))
    else {
        return Vec::new();
    };

    split_ingredients(span.as_str())
}

fn split_ingredients(span: &str) -> Vec<String> {
    let pieces: Vec<&str> = match ingredient_separator_regex() {
        Some(re) => re.split(span).collect(),
        None => span.split(['\n', ',']).collect(),
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Everything after `Tarif:`. Without that marker, the reply minus a
/// leading `Başlık: ...\nMalzemeler: ...\n` block, or the whole reply.
pub fn extract_instructions(raw_text: &str) -> String {
    if let Some(instructions) = instructions_regex()
        .and_then(|re| re.captures(raw_text))
        .and_then(|captures| captures.get(1))
    {
        return instructions.as_str().trim().to_string();
    }

    debug!("No 'Tarif:' marker in reply, falling back to header stripping");

    match header_regex() {
        Some(re) => re.replace(raw_text, "").trim().to_string(),
        None => raw_text.trim().to_string(),
    }
}
