//! Suggested staples scaled by trip length and party size.

use crate::aggregation::ShoppingListItem;
use crate::categorization::IngredientCategory;

/// Build the fixed staple suggestions for a trip.
///
/// Consumable staples scale with the trip: paper towels at one roll per
/// three days, ice at one bag per two person-days, drinking water at one
/// gallon per person per day. Everything else is a flat quantity of one.
/// Pure function of its two inputs; ids live in their own `staple-` series
/// so a caller can append these to a generated list without collisions.
pub fn suggested_staples(days: u32, people: u32) -> Vec<ShoppingListItem> {
    let paper_towels = days.div_ceil(3);
    let ice = (days * people).div_ceil(2);
    let water = days * people;

    let staples = [
        ("Salt & Pepper", 1, "set", IngredientCategory::Spices),
        ("Cooking Oil", 1, "bottle", IngredientCategory::Condiments),
        ("Paper Towels", paper_towels, "roll", IngredientCategory::Snacks),
        ("Aluminum Foil", 1, "roll", IngredientCategory::Snacks),
        ("Ice", ice, "bag", IngredientCategory::Beverages),
        ("Drinking Water", water, "gallon", IngredientCategory::Beverages),
    ];

    staples
        .into_iter()
        .enumerate()
        .map(|(at, (item, quantity, unit, category))| ShoppingListItem {
            id: format!("staple-{}", at + 1),
            item: item.to_string(),
            quantity: quantity as f32,
            unit: unit.to_string(),
            category,
            checked: false,
            source: "suggested staples".to_string(),
            optional: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staple_scaling_formulas() {
        let staples = suggested_staples(6, 4);

        let by_name = |name: &str| staples.iter().find(|s| s.item == name).unwrap();
        assert_eq!(by_name("Ice").quantity, 12.0);
        assert_eq!(by_name("Drinking Water").quantity, 24.0);
        assert_eq!(by_name("Paper Towels").quantity, 2.0);
    }

    #[test]
    fn test_flat_staples_stay_at_one() {
        let staples = suggested_staples(10, 8);

        let by_name = |name: &str| staples.iter().find(|s| s.item == name).unwrap();
        assert_eq!(by_name("Salt & Pepper").quantity, 1.0);
        assert_eq!(by_name("Cooking Oil").quantity, 1.0);
        assert_eq!(by_name("Aluminum Foil").quantity, 1.0);
    }

    #[test]
    fn test_scaling_rounds_up() {
        let staples = suggested_staples(1, 1);

        let by_name = |name: &str| staples.iter().find(|s| s.item == name).unwrap();
        // 1/3 of a roll and 1/2 a bag both round up to a whole unit.
        assert_eq!(by_name("Paper Towels").quantity, 1.0);
        assert_eq!(by_name("Ice").quantity, 1.0);
        assert_eq!(by_name("Drinking Water").quantity, 1.0);
    }

    #[test]
    fn test_staples_are_deterministic_and_unchecked() {
        let a = suggested_staples(3, 2);
        let b = suggested_staples(3, 2);

        assert_eq!(a, b);
        assert!(a.iter().all(|s| !s.checked));
        let ids: Vec<&str> = a.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "staple-1", "staple-2", "staple-3", "staple-4", "staple-5", "staple-6"
            ]
        );
    }
}
