//! Ingredient extraction from free-text meal descriptions.
//!
//! Best-effort keyword spotting, not a natural-language parser. The extractor
//! is a suggestion generator for shopping lists: it can over-extract (a word
//! that happens to substring-match a keyword) and under-extract (multi-word
//! ingredient names). Callers treat the output as candidates, not as
//! authoritative data entry.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::aggregation::MealIngredient;
use crate::categorization::{self, categorize_ingredient};

/// Words that never survive extraction: conjunctions, cooking methods, and
/// generic menu filler.
const STOP_WORDS: &[&str] = &[
    "and",
    "with",
    "the",
    "over",
    "into",
    "from",
    "then",
    "some",
    "your",
    "side",
    "sides",
    "served",
    "serving",
    "style",
    "fresh",
    "mixed",
    "topped",
    "homemade",
    "leftover",
    "leftovers",
    "grilled",
    "baked",
    "fried",
    "roasted",
    "smoked",
    "boiled",
    "cooked",
    "steamed",
    "toasted",
    "sauteed",
];

/// Pantry items assumed already packed; suggesting them is noise.
const COMMON_STAPLES: &[&str] = &["salt", "pepper", "oil", "butter", "water", "ice"];

/// Word immediately following a cooking-method qualifier.
static COOKING_METHOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:grilled|baked|fried|roasted|smoked|boiled|steamed|toasted|saut[eé]ed)\s+([a-z]+)")
        .unwrap()
});

/// The two words joined by a conjunction.
static CONJUNCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([a-z]+)\s+(?:and|with|&)\s+([a-z]+)").unwrap());

/// Catch-all: any standalone word of at least 4 letters.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-z]{4,}\b").unwrap());

/// Extract candidate ingredients from a free-text meal description.
///
/// Applies the extraction patterns in a fixed order, collecting each word at
/// most once, then keeps the candidates that pass [`is_likely_ingredient`].
/// Every surviving word becomes a [`MealIngredient`] with quantity 1
/// "serving", categorized by keyword and tagged with `meal_source` as its
/// provenance.
///
/// Empty or whitespace-only text yields an empty list.
pub fn parse_meal_text(meal_text: &str, meal_source: &str) -> Vec<MealIngredient> {
    let text = meal_text.trim().to_lowercase();
    if text.is_empty() {
        return Vec::new();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates: Vec<&str> = Vec::new();
    let mut collect = |word| {
        if seen.insert(word) {
            candidates.push(word);
        }
    };

    for caps in COOKING_METHOD_RE.captures_iter(&text) {
        collect(caps.get(1).map_or("", |m| m.as_str()));
    }
    for caps in CONJUNCTION_RE.captures_iter(&text) {
        collect(caps.get(1).map_or("", |m| m.as_str()));
        collect(caps.get(2).map_or("", |m| m.as_str()));
    }
    for found in WORD_RE.find_iter(&text) {
        collect(found.as_str());
    }

    let ingredients: Vec<MealIngredient> = candidates
        .into_iter()
        .filter(|word| is_likely_ingredient(word))
        .map(|word| MealIngredient {
            item: display_name(word),
            quantity: 1.0,
            unit: "serving".to_string(),
            category: categorize_ingredient(word),
            source: meal_source.to_string(),
            optional: false,
        })
        .collect();

    debug!(
        source = meal_source,
        count = ingredients.len(),
        "extracted ingredient candidates"
    );

    ingredients
}

/// Filter deciding whether an extracted word is worth suggesting.
///
/// Rejects stop words, words shorter than 4 characters, and common staples,
/// then requires a partial match (substring in either direction) against the
/// keyword table.
pub fn is_likely_ingredient(word: &str) -> bool {
    let word = word.trim().to_lowercase();

    if STOP_WORDS.contains(&word.as_str()) {
        return false;
    }
    if word.chars().count() < 4 {
        return false;
    }
    if COMMON_STAPLES.contains(&word.as_str()) {
        return false;
    }

    categorization::matches_any_keyword(&word)
}

/// Uppercase the first letter for display; extraction works on lowercased
/// text.
fn display_name(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorization::IngredientCategory;

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_meal_text("", "dinner").is_empty());
        assert!(parse_meal_text("   ", "dinner").is_empty());
    }

    #[test]
    fn test_parse_filters_staples_and_stop_words() {
        let ingredients = parse_meal_text("grilled chicken with salt and rice", "dinner");
        let names: Vec<&str> = ingredients.iter().map(|i| i.item.as_str()).collect();

        assert!(names.contains(&"Chicken"), "chicken missing from {names:?}");
        assert!(names.contains(&"Rice"), "rice missing from {names:?}");
        assert!(!names.contains(&"Salt"), "salt is a staple: {names:?}");
        assert!(!names.contains(&"Grilled"));
        assert!(!names.contains(&"With"));
    }

    #[test]
    fn test_parse_categorizes_candidates() {
        let ingredients = parse_meal_text("grilled chicken with salt and rice", "dinner");

        let chicken = ingredients.iter().find(|i| i.item == "Chicken").unwrap();
        assert_eq!(chicken.category, IngredientCategory::Protein);
        assert_eq!(chicken.quantity, 1.0);
        assert_eq!(chicken.unit, "serving");
        assert_eq!(chicken.source, "dinner");

        let rice = ingredients.iter().find(|i| i.item == "Rice").unwrap();
        assert_eq!(rice.category, IngredientCategory::Grains);
    }

    #[test]
    fn test_parse_dedupes_across_patterns() {
        // "chicken" is hit by the cooking-method pattern, the conjunction
        // pattern, and the catch-all; it must appear once.
        let ingredients = parse_meal_text("grilled chicken and chicken soup", "lunch");
        let chicken_count = ingredients.iter().filter(|i| i.item == "Chicken").count();
        assert_eq!(chicken_count, 1);
    }

    #[test]
    fn test_parse_ignores_non_food_words() {
        let ingredients = parse_meal_text("campfire stories under bright stars", "evening");
        assert!(
            ingredients.is_empty(),
            "unexpected ingredients: {ingredients:?}"
        );
    }

    #[test]
    fn test_is_likely_ingredient_rules() {
        assert!(is_likely_ingredient("chicken"));
        assert!(is_likely_ingredient("tortilla"));
        // Shorter than 4 characters.
        assert!(!is_likely_ingredient("egg"));
        // Staples already on hand.
        assert!(!is_likely_ingredient("salt"));
        assert!(!is_likely_ingredient("butter"));
        // Stop words.
        assert!(!is_likely_ingredient("grilled"));
        assert!(!is_likely_ingredient("with"));
        // No keyword match.
        assert!(!is_likely_ingredient("flashlight"));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = parse_meal_text("pancakes with syrup and bacon", "breakfast");
        let b = parse_meal_text("pancakes with syrup and bacon", "breakfast");
        assert_eq!(a, b);
    }
}
