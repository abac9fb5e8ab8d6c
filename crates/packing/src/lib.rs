pub mod category;
pub mod normalize;

// Re-export commonly used types
pub use category::PackingCategory;
pub use normalize::{
    icon_for_key, is_valid_category_key, label_for_key, normalize_category_key, order_for_key,
};
