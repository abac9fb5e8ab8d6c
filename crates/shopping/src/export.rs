//! Plain-text export of a shopping list.
//!
//! The format is the share/clipboard shape the mobile UI sends out; it is
//! byte-deterministic for a fixed input so exports can be diffed and tested.

use crate::aggregation::{group_by_category, ShoppingListItem};

const EXPORT_TITLE: &str = "🛒 SHOPPING LIST";

/// Render a shopping list as shareable plain text.
///
/// With `grouped` set, items appear under canonical-order category sections
/// (label plus divider); otherwise a flat list in input order. Each line is a
/// checkbox glyph, the item name, and a `(quantity unit)` suffix only when
/// the quantity is above one.
pub fn format_for_export(items: &[ShoppingListItem], grouped: bool) -> String {
    let mut out = String::new();
    out.push_str(EXPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(EXPORT_TITLE.chars().count()));
    out.push('\n');

    if grouped {
        for (category, in_category) in group_by_category(items) {
            let label = category.label();
            out.push('\n');
            out.push_str(label);
            out.push('\n');
            out.push_str(&"-".repeat(label.chars().count()));
            out.push('\n');
            for item in &in_category {
                push_item_line(&mut out, item);
            }
        }
    } else {
        out.push('\n');
        for item in items {
            push_item_line(&mut out, item);
        }
    }

    out
}

fn push_item_line(out: &mut String, item: &ShoppingListItem) {
    out.push_str(if item.checked { "✅" } else { "☐" });
    out.push(' ');
    out.push_str(&item.item);
    if item.quantity > 1.0 {
        out.push_str(&format!(
            " ({} {})",
            format_quantity(item.quantity),
            item.unit
        ));
    }
    out.push('\n');
}

/// Whole quantities print without a trailing ".0".
fn format_quantity(quantity: f32) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorization::IngredientCategory;

    fn item(name: &str, quantity: f32, category: IngredientCategory) -> ShoppingListItem {
        ShoppingListItem {
            id: format!("item-{name}"),
            item: name.to_string(),
            quantity,
            unit: "serving".to_string(),
            category,
            checked: false,
            source: name.to_string(),
            optional: false,
        }
    }

    #[test]
    fn test_grouped_export_has_title_and_sections() {
        let items = vec![
            item("Chicken", 2.0, IngredientCategory::Protein),
            item("Rice", 1.0, IngredientCategory::Grains),
        ];

        let text = format_for_export(&items, true);

        assert!(text.starts_with("🛒 SHOPPING LIST\n===============\n"));
        assert!(text.contains("\nProtein\n-------\n"));
        assert!(text.contains("\nGrains & Bread\n--------------\n"));
        // Protein is earlier in canonical order.
        assert!(text.find("Protein").unwrap() < text.find("Grains & Bread").unwrap());
    }

    #[test]
    fn test_quantity_suffix_only_above_one() {
        let items = vec![
            item("Chicken", 2.0, IngredientCategory::Protein),
            item("Rice", 1.0, IngredientCategory::Grains),
        ];

        let text = format_for_export(&items, false);

        assert!(text.contains("☐ Chicken (2 serving)\n"));
        assert!(text.contains("☐ Rice\n"));
        assert!(!text.contains("Rice (1"));
    }

    #[test]
    fn test_checked_items_use_checkmark_glyph() {
        let mut checked = item("Salsa", 1.0, IngredientCategory::Condiments);
        checked.checked = true;
        let items = vec![checked, item("Beans", 1.0, IngredientCategory::Canned)];

        let text = format_for_export(&items, false);

        assert!(text.contains("✅ Salsa\n"));
        assert!(text.contains("☐ Beans\n"));
    }

    #[test]
    fn test_flat_export_keeps_input_order() {
        let items = vec![
            item("Soda", 1.0, IngredientCategory::Beverages),
            item("Apples", 1.0, IngredientCategory::Produce),
        ];

        let text = format_for_export(&items, false);

        assert!(text.find("Soda").unwrap() < text.find("Apples").unwrap());
        assert!(!text.contains("Beverages\n"), "flat mode has no headers");
    }

    #[test]
    fn test_export_is_deterministic() {
        let items = vec![
            item("Chicken", 3.0, IngredientCategory::Protein),
            item("Marshmallows", 1.0, IngredientCategory::Snacks),
        ];

        assert_eq!(
            format_for_export(&items, true),
            format_for_export(&items, true)
        );
        assert_eq!(
            format_for_export(&items, false),
            format_for_export(&items, false)
        );
    }

    #[test]
    fn test_fractional_quantity_prints_as_is() {
        let items = vec![item("Trail Mix", 1.5, IngredientCategory::Snacks)];

        let text = format_for_export(&items, false);

        assert!(text.contains("☐ Trail Mix (1.5 serving)\n"));
    }
}
