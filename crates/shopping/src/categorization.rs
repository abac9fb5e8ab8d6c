use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Grocery category for shopping-list classification.
///
/// Declaration order is the canonical display order. `Ord` derives from it,
/// so grouped output iterates categories in this order without a separate
/// order table.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Protein,
    Produce,
    Dairy,
    Grains,
    Canned,
    Condiments,
    Spices,
    /// Catch-all for anything no keyword recognizes.
    #[default]
    Snacks,
    Beverages,
}

impl IngredientCategory {
    /// Section label used in export output.
    pub fn label(&self) -> &'static str {
        match self {
            IngredientCategory::Protein => "Protein",
            IngredientCategory::Produce => "Produce",
            IngredientCategory::Dairy => "Dairy",
            IngredientCategory::Grains => "Grains & Bread",
            IngredientCategory::Canned => "Canned Goods",
            IngredientCategory::Condiments => "Condiments",
            IngredientCategory::Spices => "Spices & Seasoning",
            IngredientCategory::Snacks => "Snacks",
            IngredientCategory::Beverages => "Beverages",
        }
    }
}

/// Keyword table mapping ingredient keywords to categories.
///
/// Matching walks the table top to bottom and the first hit wins, so
/// compound names that would otherwise collide with a shorter keyword
/// ("peanut butter" vs "butter") sit at the head of the table.
const KEYWORD_TABLE: &[(&str, IngredientCategory)] = &[
    // Compound names that must win over a shorter keyword below.
    ("peanut butter", IngredientCategory::Condiments),
    ("bell pepper", IngredientCategory::Produce),
    ("chili powder", IngredientCategory::Spices),
    ("garlic powder", IngredientCategory::Spices),
    ("onion powder", IngredientCategory::Spices),
    ("hot chocolate", IngredientCategory::Beverages),
    // Protein
    ("chicken", IngredientCategory::Protein),
    ("beef", IngredientCategory::Protein),
    ("steak", IngredientCategory::Protein),
    ("pork", IngredientCategory::Protein),
    ("bacon", IngredientCategory::Protein),
    ("sausage", IngredientCategory::Protein),
    ("brat", IngredientCategory::Protein),
    ("hot dog", IngredientCategory::Protein),
    ("hotdog", IngredientCategory::Protein),
    ("burger", IngredientCategory::Protein),
    ("turkey", IngredientCategory::Protein),
    ("ham", IngredientCategory::Protein),
    ("salmon", IngredientCategory::Protein),
    ("trout", IngredientCategory::Protein),
    ("fish", IngredientCategory::Protein),
    ("shrimp", IngredientCategory::Protein),
    ("egg", IngredientCategory::Protein),
    ("tofu", IngredientCategory::Protein),
    ("kebab", IngredientCategory::Protein),
    // Produce
    ("tomato", IngredientCategory::Produce),
    ("onion", IngredientCategory::Produce),
    ("potato", IngredientCategory::Produce),
    ("carrot", IngredientCategory::Produce),
    ("lettuce", IngredientCategory::Produce),
    ("cucumber", IngredientCategory::Produce),
    ("avocado", IngredientCategory::Produce),
    ("mushroom", IngredientCategory::Produce),
    ("zucchini", IngredientCategory::Produce),
    ("squash", IngredientCategory::Produce),
    ("corn", IngredientCategory::Produce),
    ("broccoli", IngredientCategory::Produce),
    ("spinach", IngredientCategory::Produce),
    ("cabbage", IngredientCategory::Produce),
    ("celery", IngredientCategory::Produce),
    ("garlic", IngredientCategory::Produce),
    ("apple", IngredientCategory::Produce),
    ("banana", IngredientCategory::Produce),
    ("orange", IngredientCategory::Produce),
    ("berries", IngredientCategory::Produce),
    ("berry", IngredientCategory::Produce),
    ("grape", IngredientCategory::Produce),
    ("melon", IngredientCategory::Produce),
    ("peach", IngredientCategory::Produce),
    ("pear", IngredientCategory::Produce),
    ("lemon", IngredientCategory::Produce),
    ("lime", IngredientCategory::Produce),
    ("fruit", IngredientCategory::Produce),
    ("veggie", IngredientCategory::Produce),
    ("vegetable", IngredientCategory::Produce),
    // Dairy
    ("milk", IngredientCategory::Dairy),
    ("cheese", IngredientCategory::Dairy),
    ("cheddar", IngredientCategory::Dairy),
    ("mozzarella", IngredientCategory::Dairy),
    ("parmesan", IngredientCategory::Dairy),
    ("yogurt", IngredientCategory::Dairy),
    ("cream", IngredientCategory::Dairy),
    ("butter", IngredientCategory::Dairy),
    // Grains
    ("rice", IngredientCategory::Grains),
    ("pasta", IngredientCategory::Grains),
    ("spaghetti", IngredientCategory::Grains),
    ("macaroni", IngredientCategory::Grains),
    ("noodle", IngredientCategory::Grains),
    ("bread", IngredientCategory::Grains),
    ("tortilla", IngredientCategory::Grains),
    ("bagel", IngredientCategory::Grains),
    ("bun", IngredientCategory::Grains),
    ("oat", IngredientCategory::Grains),
    ("cereal", IngredientCategory::Grains),
    ("pancake", IngredientCategory::Grains),
    ("flour", IngredientCategory::Grains),
    ("quinoa", IngredientCategory::Grains),
    // Canned
    ("canned", IngredientCategory::Canned),
    ("beans", IngredientCategory::Canned),
    ("soup", IngredientCategory::Canned),
    ("chili", IngredientCategory::Canned),
    ("broth", IngredientCategory::Canned),
    ("stew", IngredientCategory::Canned),
    // Condiments
    ("ketchup", IngredientCategory::Condiments),
    ("mustard", IngredientCategory::Condiments),
    ("mayo", IngredientCategory::Condiments),
    ("relish", IngredientCategory::Condiments),
    ("salsa", IngredientCategory::Condiments),
    ("sauce", IngredientCategory::Condiments),
    ("syrup", IngredientCategory::Condiments),
    ("honey", IngredientCategory::Condiments),
    ("jam", IngredientCategory::Condiments),
    ("jelly", IngredientCategory::Condiments),
    ("dressing", IngredientCategory::Condiments),
    ("vinegar", IngredientCategory::Condiments),
    ("oil", IngredientCategory::Condiments),
    // Spices
    ("salt", IngredientCategory::Spices),
    ("pepper", IngredientCategory::Spices),
    ("spice", IngredientCategory::Spices),
    ("seasoning", IngredientCategory::Spices),
    ("cumin", IngredientCategory::Spices),
    ("paprika", IngredientCategory::Spices),
    ("oregano", IngredientCategory::Spices),
    ("basil", IngredientCategory::Spices),
    ("cinnamon", IngredientCategory::Spices),
    ("herb", IngredientCategory::Spices),
    // Snacks
    ("chip", IngredientCategory::Snacks),
    ("cracker", IngredientCategory::Snacks),
    ("granola", IngredientCategory::Snacks),
    ("trail mix", IngredientCategory::Snacks),
    ("nut", IngredientCategory::Snacks),
    ("cookie", IngredientCategory::Snacks),
    ("candy", IngredientCategory::Snacks),
    ("marshmallow", IngredientCategory::Snacks),
    ("graham", IngredientCategory::Snacks),
    ("chocolate", IngredientCategory::Snacks),
    ("popcorn", IngredientCategory::Snacks),
    ("pretzel", IngredientCategory::Snacks),
    ("jerky", IngredientCategory::Snacks),
    ("smore", IngredientCategory::Snacks),
    // Beverages
    ("coffee", IngredientCategory::Beverages),
    ("tea", IngredientCategory::Beverages),
    ("juice", IngredientCategory::Beverages),
    ("soda", IngredientCategory::Beverages),
    ("cola", IngredientCategory::Beverages),
    ("beer", IngredientCategory::Beverages),
    ("wine", IngredientCategory::Beverages),
    ("cocoa", IngredientCategory::Beverages),
    ("lemonade", IngredientCategory::Beverages),
    ("drink", IngredientCategory::Beverages),
    ("water", IngredientCategory::Beverages),
];

/// Categorize an ingredient by name.
///
/// Walks the keyword table in order and returns the category of the first
/// keyword that is a substring of the name, or that the name is a substring
/// of. Falls back to `Snacks` when nothing matches. Matching is
/// case-insensitive and the function never fails.
///
/// The bidirectional substring check is loose: a short keyword can match
/// inside an unrelated longer word. Table order keeps the common collisions
/// ("steak" vs "tea") resolved in favor of the earlier entry.
pub fn categorize_ingredient(item: &str) -> IngredientCategory {
    let lower = item.trim().to_lowercase();
    if lower.is_empty() {
        return IngredientCategory::default();
    }

    for (keyword, category) in KEYWORD_TABLE {
        if lower.contains(keyword) || keyword.contains(lower.as_str()) {
            return *category;
        }
    }

    IngredientCategory::default()
}

/// True when the word partially matches any entry in the keyword table.
/// Used by the extractor to discard words that look nothing like food.
pub(crate) fn matches_any_keyword(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    KEYWORD_TABLE
        .iter()
        .any(|(keyword, _)| word.contains(keyword) || keyword.contains(word))
}
