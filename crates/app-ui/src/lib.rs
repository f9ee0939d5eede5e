//! User interface layer for Bloom
//!
//! This crate provides the screen view models, navigation framework,
//! theming, and design system primitives for the Bloom garden shop demo.
//!
//! # Modules
//!
//! - [`navigation`] - Routes, screen registry, back-stack router, chrome
//!   directives
//! - [`theme`] - Light/dark themes and the Bloom color palette
//! - [`tokens`] - Design tokens (spacing, sizing, elevation, radii)
//! - [`typography`] - Text styles
//! - [`components`] - UI component view models
//! - [`screens`] - Screen builders
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{NavOptions, Route, Router};
//!
//! let router = Router::new();
//! router.navigate(Route::Login)?;
//! router.navigate_with(Route::Home, NavOptions::bottom_nav())?;
//! assert_eq!(router.current_route(), Route::Home);
//! # Ok::<(), app_ui::navigation::NavigationError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use navigation::{
    chrome_directive, ChromeDirective, NavOptions, NavigationError, NavigationStack, Route,
    Router, Screen, StackEntry, SubscriptionId,
};

pub use theme::{dark_theme, get_theme, light_theme, Theme, ThemeName, ThemeState};

pub use components::{BottomNavigationBar, Button, ButtonVariant, Checkbox, SearchField, TextInput};

pub use screens::{home_screen, login_screen, screen_for, welcome_screen, ScreenView};
