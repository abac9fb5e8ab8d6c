//! Plain-text export of a day-by-day meal plan.

use crate::plan::MealPlan;

/// Render a meal plan as shareable plain text.
///
/// A title banner with trip name, dates, and party size, then one block per
/// day listing its filled slots. Entries with a linked recipe append it in
/// parentheses. Deterministic for a fixed plan.
pub fn format_meal_plan(plan: &MealPlan) -> String {
    let title = format!("🏕️ MEAL PLAN: {}", plan.trip.name);
    let mut out = String::new();
    out.push_str(&title);
    out.push('\n');
    out.push_str(&format!(
        "{} to {} · {} people\n",
        plan.trip.start_date, plan.trip.end_date, plan.trip.party_size
    ));
    out.push_str(&"=".repeat(title.chars().count()));
    out.push('\n');

    for day in &plan.days {
        let heading = format!("Day {}", day.day);
        out.push('\n');
        out.push_str(&heading);
        out.push('\n');
        out.push_str(&"-".repeat(heading.chars().count()));
        out.push('\n');

        for (slot, entry) in day.slots() {
            out.push_str(&capitalize(slot));
            out.push_str(": ");
            out.push_str(entry.text());
            if let Some(recipe) = entry.recipe() {
                out.push_str(&format!(" (recipe: {recipe})"));
            }
            out.push('\n');
        }
    }

    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{DayPlan, MealEntry, Trip};
    use chrono::NaiveDate;

    fn sample_plan() -> MealPlan {
        MealPlan {
            trip: Trip {
                name: "Pine Ridge".to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 8, 2).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 8, 4).unwrap(),
                party_size: 5,
            },
            days: vec![DayPlan {
                day: 1,
                breakfast: Some(MealEntry::Text("oatmeal with berries".to_string())),
                lunch: None,
                dinner: Some(MealEntry::Detailed {
                    text: "chicken tacos".to_string(),
                    recipe: Some("Camp Tacos".to_string()),
                }),
                snacks: None,
            }],
        }
    }

    #[test]
    fn test_export_has_banner_and_day_blocks() {
        let text = format_meal_plan(&sample_plan());

        assert!(text.starts_with("🏕️ MEAL PLAN: Pine Ridge\n"));
        assert!(text.contains("2024-08-02 to 2024-08-04 · 5 people\n"));
        assert!(text.contains("\nDay 1\n-----\n"));
    }

    #[test]
    fn test_export_lists_filled_slots_with_recipe() {
        let text = format_meal_plan(&sample_plan());

        assert!(text.contains("Breakfast: oatmeal with berries\n"));
        assert!(text.contains("Dinner: chicken tacos (recipe: Camp Tacos)\n"));
        assert!(!text.contains("Lunch:"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let plan = sample_plan();
        assert_eq!(format_meal_plan(&plan), format_meal_plan(&plan));
    }
}
