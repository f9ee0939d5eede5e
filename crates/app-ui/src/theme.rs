//! Design system and theme provider for Bloom
//!
//! Two themes are supported, mirroring the Material light/dark pairing of
//! the design:
//! - Light: pink primary surfaces on a white background
//! - Dark: deep green primary surfaces on a near-black background
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.is_dark());
//! let bg = &theme.colors.background;
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Brand Palette
// =============================================================================

/// Bloom brand colors
pub mod palette {
    /// Light pink (light theme primary)
    pub const PINK_100: &str = "#FFF1F1";
    /// Deep pink-brown (light theme secondary)
    pub const PINK_900: &str = "#3F2C2C";
    /// Pure white
    pub const WHITE: &str = "#FFFFFF";
    /// White at 85% opacity (light theme surface)
    pub const WHITE_850: &str = "#FFFFFFD9";
    /// White at 15% opacity (dark theme surface)
    pub const WHITE_150: &str = "#FFFFFF26";
    /// Near-black gray (dark theme background)
    pub const GRAY: &str = "#232323";
    /// Deep green (dark theme primary)
    pub const GREEN_900: &str = "#2D3B2D";
    /// Soft green (dark theme secondary)
    pub const GREEN_300: &str = "#B8C9B8";
    /// Light gray (borders, dividers)
    pub const LIGHT_GRAY: &str = "#9E9E9E";
    /// Unselected bottom-bar item tint
    pub const BOTTOM_BAR_UNSELECTED: &str = "#7B7776";
    /// Dark gray (dark theme cards)
    pub const DARK_GRAY: &str = "#393939";
    /// Checkbox fill in the dark theme
    pub const DARK_CHECKBOX: &str = "#B8C9BA";
    /// Checkbox fill in the light theme
    pub const LIGHT_CHECKBOX: &str = "#3E2D2C";
    /// Checkmark color in the light theme
    pub const LIGHT_CHECK_FOREGROUND: &str = "#FFFFFF";
    /// Checkmark color in the dark theme
    pub const DARK_CHECK_FOREGROUND: &str = "#222222";
    /// Drop shadow under the bottom bar, light theme
    pub const LIGHT_SHADOW: &str = "#CCCCCC";
    /// Drop shadow under the bottom bar, dark theme
    pub const DARK_SHADOW: &str = "#111111";
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Material color slots used by the screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialColors {
    /// Primary surface color (bottom bar, welcome background)
    pub primary: Color,
    /// Secondary/action color (buttons)
    pub secondary: Color,
    /// Screen background
    pub background: Color,
    /// Elevated surface color
    pub surface: Color,
    /// Content color on primary surfaces
    pub on_primary: Color,
    /// Content color on secondary surfaces
    pub on_secondary: Color,
    /// Content color on the background
    pub on_background: Color,
    /// Content color on surfaces
    pub on_surface: Color,
}

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Material color slots
    pub colors: MaterialColors,
}

impl Theme {
    /// Check if this is the dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }

    /// Background color for browse cards
    pub fn card_background(&self) -> &str {
        if self.is_dark() {
            palette::DARK_GRAY
        } else {
            palette::WHITE
        }
    }

    /// Fill color for checked checkboxes
    pub fn checkbox_background(&self) -> &str {
        if self.is_dark() {
            palette::DARK_CHECKBOX
        } else {
            palette::LIGHT_CHECKBOX
        }
    }

    /// Checkmark color
    pub fn checkbox_foreground(&self) -> &str {
        if self.is_dark() {
            palette::DARK_CHECK_FOREGROUND
        } else {
            palette::LIGHT_CHECK_FOREGROUND
        }
    }

    /// Gradient shadow color above the bottom bar
    pub fn shadow_color(&self) -> &str {
        if self.is_dark() {
            palette::DARK_SHADOW
        } else {
            palette::LIGHT_SHADOW
        }
    }

    /// Tint for unselected bottom-bar items
    pub fn bottom_bar_unselected(&self) -> &str {
        palette::BOTTOM_BAR_UNSELECTED
    }
}

// =============================================================================
// Theme Construction
// =============================================================================

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: MaterialColors {
            primary: palette::PINK_100.to_string(),
            secondary: palette::PINK_900.to_string(),
            background: palette::WHITE.to_string(),
            surface: palette::WHITE_850.to_string(),
            on_primary: palette::GRAY.to_string(),
            on_secondary: palette::WHITE.to_string(),
            on_background: palette::GRAY.to_string(),
            on_surface: palette::GRAY.to_string(),
        },
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: MaterialColors {
            primary: palette::GREEN_900.to_string(),
            secondary: palette::GREEN_300.to_string(),
            background: palette::GRAY.to_string(),
            surface: palette::WHITE_150.to_string(),
            on_primary: palette::WHITE.to_string(),
            on_secondary: palette::GRAY.to_string(),
            on_background: palette::WHITE.to_string(),
            on_surface: palette::WHITE_850.to_string(),
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

// =============================================================================
// Theme State
// =============================================================================

/// Theme provider state, created once by the host shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Current theme name
    pub theme_name: ThemeName,
    /// Current theme (regenerated on deserialization)
    #[serde(skip, default = "light_theme")]
    pub theme: Theme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeName::Light)
    }
}

impl ThemeState {
    /// Create a new theme state with the given theme
    pub fn new(theme_name: ThemeName) -> Self {
        Self {
            theme_name,
            theme: get_theme(theme_name),
        }
    }

    /// Create a theme state from the system dark-mode flag
    pub fn from_dark_mode(dark: bool) -> Self {
        Self::new(if dark { ThemeName::Dark } else { ThemeName::Light })
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme_name: ThemeName) {
        self.theme_name = theme_name;
        self.theme = get_theme(theme_name);
    }

    /// Get the current theme
    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#232323"), Some((35, 35, 35)));
        assert_eq!(parse_hex_color("#FFF1F1"), Some((255, 241, 241)));
        assert_eq!(parse_hex_color("2D3B2D"), Some((45, 59, 45)));
        assert_eq!(parse_hex_color("#FF"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 241, 241), "#FFF1F1");
        assert_eq!(rgb_to_hex(35, 35, 35), "#232323");
    }

    #[test]
    fn test_theme_name_round_trip() {
        assert_eq!("light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert_eq!("DARK".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert!("dim".parse::<ThemeName>().is_err());
        assert_eq!(ThemeName::Dark.to_string(), "Dark");
    }

    #[test]
    fn test_light_theme_colors() {
        let theme = light_theme();
        assert!(!theme.is_dark());
        assert_eq!(theme.colors.primary, palette::PINK_100);
        assert_eq!(theme.colors.secondary, palette::PINK_900);
        assert_eq!(theme.colors.background, palette::WHITE);
        assert_eq!(theme.card_background(), palette::WHITE);
        assert_eq!(theme.checkbox_background(), palette::LIGHT_CHECKBOX);
        assert_eq!(theme.checkbox_foreground(), palette::LIGHT_CHECK_FOREGROUND);
        assert_eq!(theme.shadow_color(), palette::LIGHT_SHADOW);
    }

    #[test]
    fn test_dark_theme_colors() {
        let theme = dark_theme();
        assert!(theme.is_dark());
        assert_eq!(theme.colors.primary, palette::GREEN_900);
        assert_eq!(theme.colors.secondary, palette::GREEN_300);
        assert_eq!(theme.colors.background, palette::GRAY);
        assert_eq!(theme.card_background(), palette::DARK_GRAY);
        assert_eq!(theme.checkbox_background(), palette::DARK_CHECKBOX);
        assert_eq!(theme.checkbox_foreground(), palette::DARK_CHECK_FOREGROUND);
        assert_eq!(theme.shadow_color(), palette::DARK_SHADOW);
    }

    #[test]
    fn test_theme_state() {
        let mut state = ThemeState::from_dark_mode(true);
        assert_eq!(state.theme_name, ThemeName::Dark);
        assert!(state.current_theme().is_dark());

        state.set_theme(ThemeName::Light);
        assert!(!state.current_theme().is_dark());
    }

    #[test]
    fn test_all_colors_are_valid_hex() {
        for theme in [light_theme(), dark_theme()] {
            for color in [
                &theme.colors.primary,
                &theme.colors.secondary,
                &theme.colors.background,
                &theme.colors.surface,
                &theme.colors.on_primary,
                &theme.colors.on_secondary,
                &theme.colors.on_background,
                &theme.colors.on_surface,
            ] {
                assert!(
                    parse_hex_color(color).is_some(),
                    "Invalid color {} in {:?} theme",
                    color,
                    theme.name
                );
            }
        }
    }

    #[test]
    fn test_theme_name_serialization() {
        let json = serde_json::to_string(&ThemeName::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
