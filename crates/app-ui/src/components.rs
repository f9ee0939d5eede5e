//! UI component library for Bloom
//!
//! Components are serializable view-model structs consumed by the
//! rendering shell. They carry content and navigation actions, never
//! callbacks: a button's action is the [`Route`] the host shell should
//! dispatch through the router when it is activated.

use crate::navigation::{NavOptions, Route, Screen};
use crate::theme::{Color, Theme};
use serde::{Deserialize, Serialize};

// =============================================================================
// Icons
// =============================================================================

/// Icon names used by the screens
pub mod icons {
    /// Home tab icon
    pub const HOME: &str = "home";
    /// Favorites tab icon
    pub const FAVORITES: &str = "favorite_border";
    /// Profile tab icon
    pub const PROFILE: &str = "account_circle";
    /// Cart tab icon
    pub const CART: &str = "shopping_cart";
    /// Search field icon
    pub const SEARCH: &str = "search";
    /// Garden list filter icon
    pub const FILTER_LIST: &str = "filter_list";
}

// =============================================================================
// Buttons
// =============================================================================

/// Visual variant of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled button on the secondary color
    #[default]
    Filled,
    /// Borderless text button
    Text,
}

/// Interactive button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Button label
    pub label: String,
    /// Visual variant
    pub variant: ButtonVariant,
    /// Route dispatched on activation; `None` renders an inert button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Route>,
}

impl Button {
    /// Create a filled button
    pub fn filled(label: &str) -> Self {
        Self {
            label: label.to_string(),
            variant: ButtonVariant::Filled,
            action: None,
        }
    }

    /// Create a text button
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            variant: ButtonVariant::Text,
            action: None,
        }
    }

    /// Attach a navigation action
    pub fn with_action(mut self, route: Route) -> Self {
        self.action = Some(route);
        self
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// Single-line text input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInput {
    /// Placeholder shown while the value is empty
    pub placeholder: String,
    /// Current value
    pub value: String,
    /// Mask the value (password entry)
    pub masked: bool,
}

impl TextInput {
    /// Create an input with a placeholder
    pub fn new(placeholder: &str) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            value: String::new(),
            masked: false,
        }
    }

    /// Mask the input value
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }
}

/// Search field with a leading icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchField {
    /// Placeholder text
    pub placeholder: String,
    /// Current query
    pub query: String,
    /// Leading icon name
    pub icon: String,
}

impl Default for SearchField {
    fn default() -> Self {
        Self {
            placeholder: "Search".to_string(),
            query: String::new(),
            icon: icons::SEARCH.to_string(),
        }
    }
}

// =============================================================================
// Catalog Components
// =============================================================================

/// Card tile in the browse carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTile {
    /// Card title
    pub title: String,
    /// Image asset name
    pub asset: String,
}

/// Checkbox with theme-derived color slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkbox {
    /// Checked state
    pub checked: bool,
    /// Fill color while checked
    pub background: Color,
    /// Checkmark color
    pub foreground: Color,
}

impl Checkbox {
    /// Create a checkbox colored for the given theme
    pub fn themed(checked: bool, theme: &Theme) -> Self {
        Self {
            checked,
            background: theme.checkbox_background().to_string(),
            foreground: theme.checkbox_foreground().to_string(),
        }
    }

    /// Flip the checked state
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// Row in the checkable garden list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageListRow {
    /// Plant name
    pub caption: String,
    /// Secondary line
    pub description: String,
    /// Thumbnail asset name
    pub asset: String,
    /// Row checkbox
    pub checkbox: Checkbox,
}

// =============================================================================
// Bottom Navigation Bar
// =============================================================================

/// One entry in the bottom navigation bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomNavItem {
    /// The screen this entry navigates to
    pub screen: Screen,
    /// Icon name
    pub icon: String,
    /// Display label
    pub label: String,
    /// Whether this entry is the selected one
    pub selected: bool,
}

/// The bottom navigation bar
///
/// Selection is a pure function of the current route: the entry whose
/// route equals it is selected, and none is when the current route lies
/// outside the bottom-nav set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomNavigationBar {
    /// Bar entries in order
    pub items: Vec<BottomNavItem>,
}

impl BottomNavigationBar {
    /// Build the bar for the given current route
    pub fn for_route(current: Route) -> Self {
        let items = Screen::all()
            .into_iter()
            .map(|screen| BottomNavItem {
                screen,
                icon: screen.icon().to_string(),
                label: screen.label().to_string(),
                selected: screen.route() == current,
            })
            .collect();
        Self { items }
    }

    /// The selected entry, if any
    pub fn selected_screen(&self) -> Option<Screen> {
        self.items.iter().find(|i| i.selected).map(|i| i.screen)
    }

    /// Navigation options every bar tap uses
    pub fn nav_options() -> NavOptions {
        NavOptions::bottom_nav()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{dark_theme, light_theme, palette};

    #[test]
    fn test_button_builders() {
        let login = Button::text("Log in").with_action(Route::Login);
        assert_eq!(login.variant, ButtonVariant::Text);
        assert_eq!(login.action, Some(Route::Login));

        let inert = Button::filled("Create account");
        assert_eq!(inert.action, None);
    }

    #[test]
    fn test_masked_input() {
        let password = TextInput::new("Password (8+ characters)").masked();
        assert!(password.masked);
        assert!(password.value.is_empty());
    }

    #[test]
    fn test_checkbox_theming() {
        let light = Checkbox::themed(true, &light_theme());
        assert_eq!(light.background, palette::LIGHT_CHECKBOX);

        let mut dark = Checkbox::themed(false, &dark_theme());
        assert_eq!(dark.foreground, palette::DARK_CHECK_FOREGROUND);
        dark.toggle();
        assert!(dark.checked);
    }

    #[test]
    fn test_bottom_bar_selection() {
        let bar = BottomNavigationBar::for_route(Route::Home);
        assert_eq!(bar.items.len(), 4);
        assert_eq!(bar.selected_screen(), Some(Screen::Home));
        assert_eq!(bar.items.iter().filter(|i| i.selected).count(), 1);
    }

    #[test]
    fn test_bottom_bar_no_selection_off_tab_routes() {
        for route in [Route::Welcome, Route::Login] {
            let bar = BottomNavigationBar::for_route(route);
            assert_eq!(bar.selected_screen(), None);
            assert!(bar.items.iter().all(|i| !i.selected));
        }
    }

    #[test]
    fn test_bottom_bar_tap_options() {
        let options = BottomNavigationBar::nav_options();
        assert!(options.single_top);
        assert!(options.pop_up_to_root);
    }

    #[test]
    fn test_bar_serialization() {
        let bar = BottomNavigationBar::for_route(Route::Cart);
        let json = serde_json::to_string(&bar).unwrap();
        let parsed: BottomNavigationBar = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.selected_screen(), Some(Screen::Cart));
    }
}
