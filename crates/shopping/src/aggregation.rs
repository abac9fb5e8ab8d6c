//! Merge engine for per-meal ingredient lists.
//!
//! Combines the ingredient lists of every meal on a trip into a single
//! shopping list, summing quantities for ingredients that share a merge key
//! and keeping a provenance trail of what contributed to each line.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::categorization::IngredientCategory;

/// A single ingredient belonging to one meal.
///
/// Request-scoped value object: produced per parse call (or supplied directly
/// by a caller with structured meal data), never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealIngredient {
    /// Display name ("Chicken").
    pub item: String,
    pub quantity: f32,
    pub unit: String,
    pub category: IngredientCategory,
    /// Name of the meal this ingredient came from ("Day 2 dinner").
    pub source: String,
    #[serde(default)]
    pub optional: bool,
}

/// One line of a generated shopping list.
///
/// `checked` always starts false; flipping it belongs to whoever renders the
/// list. `source` is a comma-joined provenance trail and may carry repeated
/// or verbose entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingListItem {
    /// Unique within one generation call, no meaning beyond it.
    pub id: String,
    pub item: String,
    pub quantity: f32,
    pub unit: String,
    pub category: IngredientCategory,
    pub checked: bool,
    pub source: String,
    #[serde(default)]
    pub optional: bool,
}

/// Merge per-meal ingredient lists into one shopping list.
///
/// Two ingredients merge iff their lowercased name and their category both
/// match. Merging sums quantities and appends the contributing ingredient's
/// display name to the provenance trail; the first occurrence fixes the
/// display name and unit. Ids are assigned sequentially per call
/// (`item-1`, `item-2`, ...), and output keeps first-occurrence order.
/// Ordering for display is `group_by_category`'s job, not this function's.
pub fn merge_ingredients(ingredient_lists: &[Vec<MealIngredient>]) -> Vec<ShoppingListItem> {
    let mut merged: Vec<ShoppingListItem> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();
    let mut next_id = 1u32;

    for list in ingredient_lists {
        for ingredient in list {
            let key = format!("{}-{}", ingredient.item.to_lowercase(), ingredient.category);

            match index_by_key.get(&key) {
                Some(&at) => {
                    let existing = &mut merged[at];
                    existing.quantity += ingredient.quantity;
                    existing.source.push_str(", ");
                    existing.source.push_str(&ingredient.item);
                    // A line stays optional only while every contributor is.
                    existing.optional = existing.optional && ingredient.optional;
                }
                None => {
                    index_by_key.insert(key, merged.len());
                    merged.push(ShoppingListItem {
                        id: format!("item-{next_id}"),
                        item: ingredient.item.clone(),
                        quantity: ingredient.quantity,
                        unit: ingredient.unit.clone(),
                        category: ingredient.category,
                        checked: false,
                        source: ingredient.source.clone(),
                        optional: ingredient.optional,
                    });
                    next_id += 1;
                }
            }
        }
    }

    merged
}

/// Group shopping-list items by category for display.
///
/// Categories appear in canonical order (the `IngredientCategory` declaration
/// order backs the map's `Ord`), categories with no items are absent, and
/// each category's items are sorted alphabetically, case-insensitively.
pub fn group_by_category(
    items: &[ShoppingListItem],
) -> BTreeMap<IngredientCategory, Vec<ShoppingListItem>> {
    let mut grouped = BTreeMap::new();

    for category in IngredientCategory::VARIANTS {
        let mut in_category: Vec<ShoppingListItem> = items
            .iter()
            .filter(|item| item.category == *category)
            .cloned()
            .collect();
        if in_category.is_empty() {
            continue;
        }
        in_category.sort_by_key(|item| item.item.to_lowercase());
        grouped.insert(*category, in_category);
    }

    grouped
}
