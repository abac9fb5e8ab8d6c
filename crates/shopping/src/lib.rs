pub mod aggregation;
pub mod categorization;
pub mod export;
pub mod parser;
pub mod staples;

// Re-export commonly used types
pub use aggregation::{group_by_category, merge_ingredients, MealIngredient, ShoppingListItem};
pub use categorization::{categorize_ingredient, IngredientCategory};
pub use export::format_for_export;
pub use parser::{is_likely_ingredient, parse_meal_text};
pub use staples::suggested_staples;
