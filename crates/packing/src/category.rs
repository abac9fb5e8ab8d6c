use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

/// Canonical packing category.
///
/// The lowercase variant name is the canonical key persisted on packing
/// items; keys are immutable once assigned because stored records reference
/// them. Declaration order is the canonical sort order. Labels and icons are
/// derived lookups, never the primary field.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    IntoStaticStr,
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
pub enum PackingCategory {
    Shelter,
    Sleep,
    Kitchen,
    Water,
    Clothing,
    Safety,
    Tools,
    Personal,
    Recreation,
    /// Designated fallback for uncategorized items.
    #[default]
    Misc,
}

impl PackingCategory {
    /// Canonical key string ("safety").
    pub fn key(&self) -> &'static str {
        self.into()
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            PackingCategory::Shelter => "Shelter & Tent",
            PackingCategory::Sleep => "Sleeping",
            PackingCategory::Kitchen => "Kitchen & Cooking",
            PackingCategory::Water => "Water & Hydration",
            PackingCategory::Clothing => "Clothing",
            PackingCategory::Safety => "Safety & First Aid",
            PackingCategory::Tools => "Tools & Gear",
            PackingCategory::Personal => "Personal Items",
            PackingCategory::Recreation => "Fun & Games",
            PackingCategory::Misc => "Miscellaneous",
        }
    }

    /// Icon identifier consumed by the rendering layer.
    pub fn icon(&self) -> &'static str {
        match self {
            PackingCategory::Shelter => "tent",
            PackingCategory::Sleep => "bed",
            PackingCategory::Kitchen => "utensils",
            PackingCategory::Water => "droplet",
            PackingCategory::Clothing => "shirt",
            PackingCategory::Safety => "first-aid",
            PackingCategory::Tools => "wrench",
            PackingCategory::Personal => "user",
            PackingCategory::Recreation => "gamepad",
            PackingCategory::Misc => "box",
        }
    }

    /// Position in the canonical sort order.
    pub fn order(&self) -> usize {
        *self as usize
    }
}

/// Historical label variants mapped to their canonical category.
///
/// Persisted packing items predate the canonical key set and carry years of
/// naming drift: underscores vs spaces vs ampersands, singular/plural, and
/// renamed categories. Entries are lowercase; lookups lowercase and trim
/// first.
pub(crate) const LEGACY_LABELS: &[(&str, PackingCategory)] = &[
    ("tent", PackingCategory::Shelter),
    ("tents", PackingCategory::Shelter),
    ("shelter_and_tent", PackingCategory::Shelter),
    ("shelter and tent", PackingCategory::Shelter),
    ("sleeping", PackingCategory::Sleep),
    ("sleep_gear", PackingCategory::Sleep),
    ("sleep gear", PackingCategory::Sleep),
    ("bedding", PackingCategory::Sleep),
    ("cooking", PackingCategory::Kitchen),
    ("cook", PackingCategory::Kitchen),
    ("kitchen_and_cooking", PackingCategory::Kitchen),
    ("cookware", PackingCategory::Kitchen),
    ("hydration", PackingCategory::Water),
    ("water_and_hydration", PackingCategory::Water),
    ("clothes", PackingCategory::Clothing),
    ("apparel", PackingCategory::Clothing),
    ("first aid", PackingCategory::Safety),
    ("first_aid", PackingCategory::Safety),
    ("firstaid", PackingCategory::Safety),
    ("safety_and_first_aid", PackingCategory::Safety),
    ("safety and first aid", PackingCategory::Safety),
    ("medical", PackingCategory::Safety),
    ("gear", PackingCategory::Tools),
    ("tools_and_gear", PackingCategory::Tools),
    ("tools and gear", PackingCategory::Tools),
    ("equipment", PackingCategory::Tools),
    ("toiletries", PackingCategory::Personal),
    ("hygiene", PackingCategory::Personal),
    ("personal_items", PackingCategory::Personal),
    ("personal items", PackingCategory::Personal),
    ("fun", PackingCategory::Recreation),
    ("games", PackingCategory::Recreation),
    ("fun_and_games", PackingCategory::Recreation),
    ("entertainment", PackingCategory::Recreation),
    ("activities", PackingCategory::Recreation),
    ("other", PackingCategory::Misc),
    ("uncategorized", PackingCategory::Misc),
    ("misc_items", PackingCategory::Misc),
];
