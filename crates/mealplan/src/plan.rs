//! Trip and meal-plan value objects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trip metadata a meal plan hangs off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub party_size: u32,
}

impl Trip {
    /// Trip length in days, counting both the start and end day.
    /// A trip whose end precedes its start still counts as one day.
    pub fn duration_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        days.max(1) as u32
    }
}

/// A meal slot entry.
///
/// Older persisted plans store a meal as a plain string; current plans store
/// a record with the description plus an optional linked recipe name. Both
/// shapes deserialize into this enum, discriminated by JSON type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MealEntry {
    Text(String),
    Detailed {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        recipe: Option<String>,
    },
}

impl MealEntry {
    /// The free-text meal description, whichever shape carries it.
    pub fn text(&self) -> &str {
        match self {
            MealEntry::Text(text) => text,
            MealEntry::Detailed { text, .. } => text,
        }
    }

    /// Linked recipe name, when the entry has one.
    pub fn recipe(&self) -> Option<&str> {
        match self {
            MealEntry::Text(_) => None,
            MealEntry::Detailed { recipe, .. } => recipe.as_deref(),
        }
    }
}

/// One day of planned meals. Unfilled slots stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<MealEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<MealEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<MealEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snacks: Option<MealEntry>,
}

impl DayPlan {
    /// Filled meal slots in fixed slot order.
    pub fn slots(&self) -> impl Iterator<Item = (&'static str, &MealEntry)> {
        [
            ("breakfast", self.breakfast.as_ref()),
            ("lunch", self.lunch.as_ref()),
            ("dinner", self.dinner.as_ref()),
            ("snacks", self.snacks.as_ref()),
        ]
        .into_iter()
        .filter_map(|(slot, entry)| entry.map(|entry| (slot, entry)))
    }
}

/// A trip's full meal plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    pub trip: Trip,
    pub days: Vec<DayPlan>,
}
