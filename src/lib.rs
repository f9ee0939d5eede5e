//! Bloom host shell
//!
//! Wires the pieces of the garden shop demo together: one [`Router`]
//! started at the welcome screen, one [`ThemeState`] fixed from the
//! system dark-mode flag, and one [`WindowChrome`] that consumes the
//! chrome directive the navigation layer computes on every transition.
//!
//! # Example
//!
//! ```rust
//! use bloom::App;
//! use app_ui::navigation::Route;
//!
//! let app = App::new(true);
//! app.navigate(Route::Login)?;
//! app.submit_login("jess@example.com", "hunter2hunter2")?;
//! assert_eq!(app.current_route(), Route::Home);
//! assert!(app.status_bar_hidden()); // browse screens hide it in dark mode
//! # Ok::<(), bloom::AppError>(())
//! ```

use app_core::{LoginError, LoginForm};
use app_platform::WindowChrome;
use app_ui::navigation::{chrome_directive, NavigationError, Route, Router, Screen};
use app_ui::screens::{screen_for, ScreenView};
use app_ui::theme::{Theme, ThemeState};
use app_ui::BottomNavigationBar;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

pub use app_ui::navigation::NavOptions;

/// Errors surfaced by the host shell
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AppError {
    /// Navigation rejected
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// Login form invalid
    #[error(transparent)]
    Login(#[from] LoginError),
}

/// The application shell
///
/// Created once per session. Owns the router, theme, and window chrome;
/// the chrome subscription is installed at construction and lives as
/// long as the shell.
pub struct App {
    router: Rc<Router>,
    theme: ThemeState,
    chrome: Rc<RefCell<WindowChrome>>,
}

impl App {
    /// Create the shell with the given system dark-mode flag
    pub fn new(dark_theme: bool) -> Self {
        let router = Rc::new(Router::new());
        let theme = ThemeState::from_dark_mode(dark_theme);
        let chrome = Rc::new(RefCell::new(WindowChrome::new()));

        let hook = chrome.clone();
        router.subscribe(move |route| {
            let directive = chrome_directive(route, dark_theme);
            hook.borrow_mut().apply(directive.hide_status_bar);
        });

        // The subscription only fires on transitions; cover the start
        // destination here.
        let directive = chrome_directive(router.current_route(), dark_theme);
        chrome.borrow_mut().apply(directive.hide_status_bar);

        Self {
            router,
            theme,
            chrome,
        }
    }

    /// The router, for components that need to observe transitions
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The active theme
    pub fn theme(&self) -> &Theme {
        self.theme.current_theme()
    }

    /// Current route
    pub fn current_route(&self) -> Route {
        self.router.current_route()
    }

    /// View model for the current route
    pub fn current_screen(&self) -> ScreenView {
        screen_for(self.current_route(), self.theme())
    }

    /// Navigate to a route with plain push semantics
    pub fn navigate(&self, route: Route) -> Result<(), AppError> {
        self.router.navigate(route)?;
        Ok(())
    }

    /// Navigate to a route given by its string identifier
    pub fn navigate_by_id(&self, id: &str) -> Result<(), AppError> {
        self.router.navigate_by_id(id)?;
        Ok(())
    }

    /// Handle a bottom-bar tap: single-top, popped up to the root
    pub fn select_tab(&self, screen: Screen) -> Result<(), AppError> {
        self.router
            .navigate_with(screen.route(), BottomNavigationBar::nav_options())?;
        Ok(())
    }

    /// Validate the login form and, when valid, continue to home
    ///
    /// The home entry clears the back-stack so back from home leaves the
    /// sign-in flow rather than returning to it.
    pub fn submit_login(&self, email: &str, password: &str) -> Result<(), AppError> {
        LoginForm::new(email, password).validate()?;
        self.router
            .navigate_with(Route::Home, NavOptions::new().pop_up_to_root())?;
        Ok(())
    }

    /// Pop the back-stack; no-op at the start destination
    pub fn back(&self) -> bool {
        self.router.back()
    }

    /// Whether the status bar is currently hidden
    pub fn status_bar_hidden(&self) -> bool {
        self.chrome.borrow().status_bar_hidden()
    }

    /// Forward a window focus change to the chrome layer
    pub fn on_window_focus(&self, has_focus: bool) {
        let reassert = self.chrome.borrow().on_focus_changed(has_focus);
        if let Some(hide) = reassert {
            debug!(hide, "re-asserting system bar visibility on focus");
            self.chrome.borrow_mut().apply(hide);
        }
    }
}
