//! Design tokens for Bloom
//!
//! Spacing, sizing, elevation, and corner-radius primitives shared by the
//! screens and components. Values are density-independent pixels.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale based on an 8px grid
pub mod spacing {
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 16px - Medium (default screen gutter)
    pub const SPACE_MD: f32 = 16.0;
    /// 24px - Large
    pub const SPACE_LG: f32 = 24.0;
    /// 32px - Extra large
    pub const SPACE_XL: f32 = 32.0;
    /// 40px - 2x large
    pub const SPACE_2XL: f32 = 40.0;
    /// 48px - 3x large
    pub const SPACE_3XL: f32 = 48.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "2xl" => Some(SPACE_2XL),
            "3xl" => Some(SPACE_3XL),
            _ => None,
        }
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Bottom navigation bar height
    pub const BOTTOM_BAR_HEIGHT: f32 = 56.0;
    /// Filled button height
    pub const BUTTON_HEIGHT: f32 = 48.0;
    /// Text button height
    pub const TEXT_BUTTON_HEIGHT: f32 = 56.0;
    /// Text input height
    pub const INPUT_HEIGHT: f32 = 56.0;

    /// Browse card dimensions
    pub mod card {
        /// Card width
        pub const WIDTH: f32 = 136.0;
        /// Card image height
        pub const IMAGE_HEIGHT: f32 = 96.0;
        /// Card label strip height
        pub const LABEL_HEIGHT: f32 = 40.0;
    }

    /// Garden list row dimensions
    pub mod list {
        /// Row height, equal to the square thumbnail edge
        pub const ITEM_HEIGHT: f32 = 64.0;
    }

    /// Icon sizes
    pub mod icon {
        /// Search field icon (18px)
        pub const SEARCH: f32 = 18.0;
        /// Standard icon (24px)
        pub const LG: f32 = 24.0;
    }

    /// Checkbox edge length
    pub const CHECKBOX: f32 = 24.0;
}

// =============================================================================
// Elevation Tokens
// =============================================================================

/// Elevation values for shadow rendering
pub mod elevation {
    /// Browse card elevation
    pub const CARD: f32 = 1.0;
    /// Height of the gradient shadow above the bottom bar
    pub const BOTTOM_BAR_SHADOW: f32 = 16.0;
}

// =============================================================================
// Corner Radius Tokens
// =============================================================================

/// Corner radii for the two shape sizes the screens use
pub mod radius {
    /// Small shape (cards, inputs, checkboxes)
    pub const SMALL: f32 = 4.0;
    /// Medium shape (fully rounded buttons at 48px height)
    pub const MEDIUM: f32 = 24.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_lookup() {
        assert_eq!(spacing::get("md"), Some(16.0));
        assert_eq!(spacing::get("2xl"), Some(40.0));
        assert_eq!(spacing::get("huge"), None);
    }

    #[test]
    fn test_spacing_is_monotonic() {
        let scale = [
            spacing::SPACE_XS,
            spacing::SPACE_SM,
            spacing::SPACE_MD,
            spacing::SPACE_LG,
            spacing::SPACE_XL,
            spacing::SPACE_2XL,
            spacing::SPACE_3XL,
        ];
        assert!(scale.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_component_dimensions() {
        assert_eq!(sizing::BOTTOM_BAR_HEIGHT, 56.0);
        assert_eq!(sizing::BUTTON_HEIGHT, 48.0);
        assert_eq!(sizing::card::WIDTH, 136.0);
        assert_eq!(sizing::card::IMAGE_HEIGHT + sizing::card::LABEL_HEIGHT, 136.0);
        assert_eq!(sizing::list::ITEM_HEIGHT, 64.0);
    }

    #[test]
    fn test_button_radius_matches_height() {
        // Medium shape renders 48px buttons as full pills.
        assert_eq!(radius::MEDIUM * 2.0, sizing::BUTTON_HEIGHT);
    }
}
