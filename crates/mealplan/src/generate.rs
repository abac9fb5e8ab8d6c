//! Meal plan to shopping list orchestration.

use campkit_shopping::{merge_ingredients, parse_meal_text, MealIngredient, ShoppingListItem};
use tracing::info;

use crate::plan::MealPlan;

/// Extract one ingredient list per filled meal slot.
///
/// Slot names ("Day 2 dinner") become the provenance source of every
/// ingredient extracted from that slot's text.
pub fn collect_meal_ingredients(plan: &MealPlan) -> Vec<Vec<MealIngredient>> {
    plan.days
        .iter()
        .flat_map(|day| {
            day.slots().map(move |(slot, entry)| {
                let source = format!("Day {} {}", day.day, slot);
                parse_meal_text(entry.text(), &source)
            })
        })
        .collect()
}

/// Generate the merged shopping list for a whole meal plan.
pub fn generate_shopping_list(plan: &MealPlan) -> Vec<ShoppingListItem> {
    let per_meal = collect_meal_ingredients(plan);
    let items = merge_ingredients(&per_meal);

    info!(
        trip = %plan.trip.name,
        meals = per_meal.len(),
        items = items.len(),
        "generated shopping list"
    );

    items
}
