//! Application screens for Bloom
//!
//! Pure view-model builders: each function assembles the component tree
//! for one screen. The favorites, profile, and cart tabs reuse the home
//! screen content; only the bottom-bar selection differs.

use crate::components::{
    icons, BottomNavigationBar, Button, CardTile, Checkbox, ImageListRow, SearchField, TextInput,
};
use crate::navigation::Route;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

// =============================================================================
// Welcome
// =============================================================================

/// The welcome/onboarding screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WelcomeScreen {
    /// Background illustration asset
    pub background_asset: String,
    /// Foreground illustration asset
    pub illustration_asset: String,
    /// Logo asset
    pub logo_asset: String,
    /// Subtitle under the logo
    pub subtitle: String,
    /// Create account button (inert in this demo)
    pub create_account: Button,
    /// Log in text button
    pub log_in: Button,
}

/// Build the welcome screen
pub fn welcome_screen() -> WelcomeScreen {
    WelcomeScreen {
        background_asset: "welcome_bg".to_string(),
        illustration_asset: "welcome_illos".to_string(),
        logo_asset: "logo".to_string(),
        subtitle: "Beautiful home garden solutions".to_string(),
        create_account: Button::filled("Create account"),
        log_in: Button::text("Log in").with_action(Route::Login),
    }
}

// =============================================================================
// Login
// =============================================================================

/// The email login screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginScreen {
    /// Screen heading
    pub heading: String,
    /// Email input
    pub email: TextInput,
    /// Password input
    pub password: TextInput,
    /// Terms-of-use fine print
    pub terms: String,
    /// Submit button
    pub submit: Button,
}

/// Build the login screen
pub fn login_screen() -> LoginScreen {
    LoginScreen {
        heading: "Log in with email".to_string(),
        email: TextInput::new("Email Address"),
        password: TextInput::new("Password (8+ characters)").masked(),
        terms: "By clicking below, you agree to our Terms of Use and consent to our Privacy Policy."
            .to_string(),
        submit: Button::filled("Log in").with_action(Route::Home),
    }
}

// =============================================================================
// Home / Browse
// =============================================================================

/// The home/browse screen, shared by all four bottom-bar tabs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeScreen {
    /// Search field above the carousel
    pub search: SearchField,
    /// Carousel section heading
    pub browse_title: String,
    /// Carousel cards
    pub cards: Vec<CardTile>,
    /// Garden list section heading
    pub garden_title: String,
    /// Filter icon next to the garden heading
    pub filter_icon: String,
    /// Checkable garden list rows
    pub items: Vec<ImageListRow>,
    /// Bottom navigation bar with selection for the current route
    pub bottom_bar: BottomNavigationBar,
}

/// Build the home screen for one of the bottom-bar routes
pub fn home_screen(current: Route, theme: &Theme) -> HomeScreen {
    let cards = app_core::browse_themes()
        .into_iter()
        .map(|card| CardTile {
            title: card.title,
            asset: card.asset,
        })
        .collect();

    let items = app_core::garden_items()
        .into_iter()
        .map(|item| ImageListRow {
            checkbox: Checkbox::themed(item.checked, theme),
            caption: item.caption,
            description: item.description,
            asset: item.asset,
        })
        .collect();

    HomeScreen {
        search: SearchField::default(),
        browse_title: "Browse themes".to_string(),
        cards,
        garden_title: "Design your home garden".to_string(),
        filter_icon: icons::FILTER_LIST.to_string(),
        items,
        bottom_bar: BottomNavigationBar::for_route(current),
    }
}

// =============================================================================
// Route Lookup
// =============================================================================

/// A fully built screen view model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum ScreenView {
    /// Welcome screen
    Welcome(WelcomeScreen),
    /// Login screen
    Login(LoginScreen),
    /// Home/browse screen (any bottom-bar tab)
    Home(HomeScreen),
}

/// Build the screen for a route
pub fn screen_for(route: Route, theme: &Theme) -> ScreenView {
    match route {
        Route::Welcome => ScreenView::Welcome(welcome_screen()),
        Route::Login => ScreenView::Login(login_screen()),
        Route::Home | Route::Favorites | Route::Profile | Route::Cart => {
            ScreenView::Home(home_screen(route, theme))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Screen;
    use crate::theme::{dark_theme, light_theme};

    #[test]
    fn test_welcome_screen_actions() {
        let screen = welcome_screen();
        assert_eq!(screen.log_in.action, Some(Route::Login));
        // Create account is a dead end in the demo.
        assert_eq!(screen.create_account.action, None);
        assert_eq!(screen.subtitle, "Beautiful home garden solutions");
    }

    #[test]
    fn test_login_screen_submit_goes_home() {
        let screen = login_screen();
        assert_eq!(screen.submit.action, Some(Route::Home));
        assert!(screen.password.masked);
        assert!(!screen.email.masked);
    }

    #[test]
    fn test_home_screen_content() {
        let screen = home_screen(Route::Home, &light_theme());
        assert_eq!(screen.cards.len(), 5);
        assert_eq!(screen.items.len(), 6);
        assert_eq!(screen.browse_title, "Browse themes");
        assert_eq!(screen.bottom_bar.selected_screen(), Some(Screen::Home));
        // Monstera starts checked.
        assert!(screen.items[0].checkbox.checked);
    }

    #[test]
    fn test_tabs_share_home_content() {
        let theme = dark_theme();
        for route in [Route::Favorites, Route::Profile, Route::Cart] {
            match screen_for(route, &theme) {
                ScreenView::Home(screen) => {
                    assert_eq!(screen.bottom_bar.selected_screen(), Screen::for_route(route));
                    assert_eq!(screen.cards.len(), 5);
                }
                other => panic!("expected home content for {route}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_screen_for_auth_routes() {
        let theme = light_theme();
        assert!(matches!(screen_for(Route::Welcome, &theme), ScreenView::Welcome(_)));
        assert!(matches!(screen_for(Route::Login, &theme), ScreenView::Login(_)));
    }
}
