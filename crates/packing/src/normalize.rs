//! Normalization of free-text packing-category labels.
//!
//! Category strings on persisted packing items come from years of evolving
//! records, so every function here is total: bad input degrades to a
//! documented fallback with a logged warning, never an error. Rendering
//! paths must not crash on a category string, whatever it contains.

use std::str::FromStr;

use strum::VariantArray;
use tracing::warn;

use crate::category::{PackingCategory, LEGACY_LABELS};

/// Map an arbitrary category string to its canonical category.
///
/// Input is trimmed and lowercased, then resolved in fixed order: the legacy
/// label table first, then the canonical key set (so already-normalized data
/// is idempotent), then a case-insensitive match on display labels. Anything
/// unresolved falls back to [`PackingCategory::Misc`] with a warning.
/// Missing, empty, and whitespace-only input take the fallback silently.
pub fn normalize_category_key(input: Option<&str>) -> PackingCategory {
    let Some(raw) = input else {
        return PackingCategory::default();
    };

    let needle = raw.trim().to_lowercase();
    if needle.is_empty() {
        return PackingCategory::default();
    }

    if let Some((_, category)) = LEGACY_LABELS.iter().find(|(label, _)| *label == needle) {
        return *category;
    }

    if let Ok(category) = PackingCategory::from_str(&needle) {
        return category;
    }

    if let Some(category) = PackingCategory::VARIANTS
        .iter()
        .find(|category| category.label().to_lowercase() == needle)
    {
        return *category;
    }

    warn!(category = raw, "unrecognized packing category, using misc");
    PackingCategory::default()
}

/// Membership test against the canonical key set.
pub fn is_valid_category_key(key: &str) -> bool {
    PackingCategory::from_str(key).is_ok()
}

/// Display label for a raw key; unknown keys echo back unchanged.
pub fn label_for_key(key: &str) -> String {
    PackingCategory::from_str(key)
        .map(|category| category.label().to_string())
        .unwrap_or_else(|_| key.to_string())
}

/// Icon identifier for a raw key; unknown keys take the misc icon.
pub fn icon_for_key(key: &str) -> &'static str {
    PackingCategory::from_str(key)
        .map(|category| category.icon())
        .unwrap_or_else(|_| PackingCategory::Misc.icon())
}

/// Sort order for a raw key; unknown keys sort last.
pub fn order_for_key(key: &str) -> usize {
    PackingCategory::from_str(key)
        .map(|category| category.order())
        .unwrap_or(usize::MAX)
}
