pub mod export;
pub mod generate;
pub mod plan;

// Re-export commonly used types
pub use export::format_meal_plan;
pub use generate::{collect_meal_ingredients, generate_shopping_list};
pub use plan::{DayPlan, MealEntry, MealPlan, Trip};
