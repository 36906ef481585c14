/// System-role message sent ahead of every prompt.
pub const CHEF_SYSTEM_PROMPT: &str = "Sen bir profesyonel şefsin ve kullanıcıya verilen malzemelerle lezzetli tarifler sunuyorsun.";

/// Fixed instructions appended to every prompt.
///
/// Makes allergies and diet preferences mandatory, caps the title at 20
/// characters and asks for the `Başlık:` / `Malzemeler:` / `Tarif:` reply
/// format that [`crate::parser`] reads back.
///
/// The text is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const RECIPE_FORMAT_INSTRUCTIONS: &str = include_str!("prompt.txt");

/// Build the user prompt for a generation request.
///
/// Clause order is fixed: ingredients, query, allergies, diet preferences,
/// format instructions. Empty query, allergy and diet inputs are left out.
pub fn build_prompt(
    ingredients: &str,
    query: &str,
    allergies: &[String],
    diet_preferences: &[String],
) -> String {
    let mut prompt = format!("Buzdolabımda şu malzemeler var: {ingredients}. ");

    if !query.trim().is_empty() {
        prompt.push_str(&format!("{query}. "));
    }

    if !allergies.is_empty() {
        prompt.push_str(&format!("Alerjilerim: {}. ", allergies.join(", ")));
    }

    if !diet_preferences.is_empty() {
        prompt.push_str(&format!(
            "Diyet tercihlerim: {}. ",
            diet_preferences.join(", ")
        ));
    }

    prompt.push_str(RECIPE_FORMAT_INSTRUCTIONS.trim_end());
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_instructions_are_embedded() {
        assert!(!RECIPE_FORMAT_INSTRUCTIONS.is_empty());
        assert!(RECIPE_FORMAT_INSTRUCTIONS.contains("20 karakter"));
        assert!(RECIPE_FORMAT_INSTRUCTIONS.contains("kesinlikle uymalısın"));
    }

    #[test]
    fn test_labels_appear_in_order() {
        let prompt = build_prompt("tavuk (1 kg)", "", &[], &[]);

        let title = prompt.find("Başlık:").unwrap();
        let ingredients = prompt.find("Malzemeler:").unwrap();
        let instructions = prompt.find("Tarif:").unwrap();
        assert!(title < ingredients);
        assert!(ingredients < instructions);
    }

    #[test]
    fn test_ingredients_come_first() {
        let prompt = build_prompt("domates (3 adet)", "çorba olsun", &[], &[]);
        assert!(prompt.starts_with("Buzdolabımda şu malzemeler var: domates (3 adet). "));
    }

    #[test]
    fn test_minimal_prompt() {
        let prompt = build_prompt("süt (1 L)", "", &[], &[]);
        assert_eq!(
            prompt,
            format!(
                "Buzdolabımda şu malzemeler var: süt (1 L). {}",
                RECIPE_FORMAT_INSTRUCTIONS.trim_end()
            )
        );
    }

    #[test]
    fn test_optional_clauses_omitted_when_empty() {
        let prompt = build_prompt("süt (1 L)", "", &[], &[]);
        assert!(!prompt.contains("Alerjilerim:"));
        assert!(!prompt.contains("Diyet tercihlerim:"));
    }

    #[test]
    fn test_blank_query_is_skipped() {
        let prompt = build_prompt("süt (1 L)", "   ", &[], &[]);
        assert!(!prompt.contains("   . "));
    }

    #[test]
    fn test_full_prompt_clause_order() {
        let prompt = build_prompt(
            "tavuk (1 kg), pirinç (2 su bardağı)",
            "hızlı bir akşam yemeği",
            &strings(&["peanuts", "fish"]),
            &strings(&["glutenFree", "lowCarb"]),
        );

        let expected_head = "Buzdolabımda şu malzemeler var: tavuk (1 kg), pirinç (2 su bardağı). \
                             hızlı bir akşam yemeği. \
                             Alerjilerim: peanuts, fish. \
                             Diyet tercihlerim: glutenFree, lowCarb. ";
        assert!(prompt.starts_with(expected_head));
        assert!(prompt.ends_with(RECIPE_FORMAT_INSTRUCTIONS.trim_end()));
    }

    #[test]
    fn test_single_allergy_without_diet() {
        let prompt = build_prompt("elma (2 adet)", "", &strings(&["dairy"]), &[]);
        assert!(prompt.contains("Alerjilerim: dairy. "));
        assert!(!prompt.contains("Diyet tercihlerim:"));
    }

    #[test]
    fn test_diet_without_allergy() {
        let prompt = build_prompt("elma (2 adet)", "", &[], &strings(&["vegan", "keto"]));
        assert!(prompt.contains("Diyet tercihlerim: vegan, keto. "));
        assert!(!prompt.contains("Alerjilerim:"));
    }
}
