//! Plant catalog content
//!
//! The browse screen shows two static collections: a horizontal carousel
//! of themed cards and a checkable list of individual plants. Both are
//! fixed content shipped with the app; nothing here is persisted.

use serde::{Deserialize, Serialize};

// =============================================================================
// Items
// =============================================================================

/// A themed card in the "Browse themes" carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardItem {
    /// Display title
    pub title: String,
    /// Bundled image asset name
    pub asset: String,
}

impl CardItem {
    fn new(title: &str, asset: &str) -> Self {
        Self {
            title: title.to_string(),
            asset: asset.to_string(),
        }
    }
}

/// A plant row in the "Design your home garden" list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    /// Plant name
    pub caption: String,
    /// Secondary line under the caption
    pub description: String,
    /// Bundled image asset name
    pub asset: String,
    /// Whether the row's checkbox starts checked
    pub checked: bool,
}

impl ImageItem {
    fn new(caption: &str, asset: &str, checked: bool) -> Self {
        Self {
            caption: caption.to_string(),
            description: "This is a description".to_string(),
            asset: asset.to_string(),
            checked,
        }
    }
}

// =============================================================================
// Content
// =============================================================================

/// The themed cards shown in the carousel
pub fn browse_themes() -> Vec<CardItem> {
    vec![
        CardItem::new("Desert chic", "desert_chic"),
        CardItem::new("Tiny terrariums", "tiny_terrariums"),
        CardItem::new("Jungle vibes", "jungle_vibes"),
        CardItem::new("Easy care", "easy_care"),
        CardItem::new("Statements", "statements"),
    ]
}

/// The plants shown in the garden list
pub fn garden_items() -> Vec<ImageItem> {
    vec![
        ImageItem::new("Monstera", "monstera", true),
        ImageItem::new("Aglaonema", "aglaonema", false),
        ImageItem::new("Peace Lilly", "peace_lilly", false),
        ImageItem::new("Fiddle Leaf", "fiddle_leaf", false),
        ImageItem::new("Snake plant", "snake_plant", false),
        ImageItem::new("Pothos", "pothos", false),
    ]
}

/// Filter garden items by a case-insensitive name query
///
/// An empty query returns the full list, matching the search field's
/// resting state.
pub fn search_garden_items(query: &str) -> Vec<ImageItem> {
    let query = query.trim().to_lowercase();
    garden_items()
        .into_iter()
        .filter(|item| query.is_empty() || item.caption.to_lowercase().contains(&query))
        .collect()
}
