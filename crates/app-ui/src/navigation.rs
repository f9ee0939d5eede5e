//! Navigation system for Bloom
//!
//! This module provides the screen routing layer:
//! - Route definitions with stable string identifiers
//! - The bottom-navigation screen registry
//! - Back-stack management with single-top and pop-up-to-root semantics
//! - A router with synchronous, registration-ordered subscriber
//!   notification
//! - The status-bar chrome directive emitted on each transition

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

// =============================================================================
// Errors
// =============================================================================

/// Navigation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The given route identifier is not part of the route set
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// A navigation operation was issued from inside a subscriber callback
    #[error("Navigation re-entered during subscriber notification")]
    Reentrant,
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

// =============================================================================
// Route Definitions
// =============================================================================

/// All navigable screens in the application
///
/// The set is closed: every route a screen can be addressed by is a
/// variant here, and the string identifiers are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Welcome/onboarding screen (start destination)
    #[default]
    Welcome,
    /// Email login screen
    Login,
    /// Home/browse screen
    Home,
    /// Favorites tab
    Favorites,
    /// Profile tab
    Profile,
    /// Shopping cart tab
    Cart,
}

impl Route {
    /// Get the stable string identifier for this route
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Welcome => "welcome",
            Route::Login => "login",
            Route::Home => "home",
            Route::Favorites => "favorites",
            Route::Profile => "profile",
            Route::Cart => "cart",
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Welcome => "Welcome",
            Route::Login => "Log in",
            Route::Home => "Home",
            Route::Favorites => "Favorites",
            Route::Profile => "Profile",
            Route::Cart => "Cart",
        }
    }

    /// All routes in declaration order
    pub fn all() -> [Route; 6] {
        [
            Route::Welcome,
            Route::Login,
            Route::Home,
            Route::Favorites,
            Route::Profile,
            Route::Cart,
        ]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "welcome" => Ok(Route::Welcome),
            "login" => Ok(Route::Login),
            "home" => Ok(Route::Home),
            "favorites" => Ok(Route::Favorites),
            "profile" => Ok(Route::Profile),
            "cart" => Ok(Route::Cart),
            _ => Err(NavigationError::InvalidRoute(s.to_string())),
        }
    }
}

// =============================================================================
// Screen Registry
// =============================================================================

/// Bottom-navigation-eligible screens, in bar order
///
/// Welcome and Login are routable but never appear in the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Home tab
    Home,
    /// Favorites tab
    Favorites,
    /// Profile tab
    Profile,
    /// Cart tab
    Cart,
}

impl Screen {
    /// Get the route for this screen
    pub fn route(&self) -> Route {
        match self {
            Screen::Home => Route::Home,
            Screen::Favorites => Route::Favorites,
            Screen::Profile => Route::Profile,
            Screen::Cart => Route::Cart,
        }
    }

    /// Get the display label for this screen
    pub fn label(&self) -> &'static str {
        self.route().title()
    }

    /// Get the icon name for this screen
    pub fn icon(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Favorites => "favorite_border",
            Screen::Profile => "account_circle",
            Screen::Cart => "shopping_cart",
        }
    }

    /// All bottom-navigation screens in bar order
    pub fn all() -> [Screen; 4] {
        [Screen::Home, Screen::Favorites, Screen::Profile, Screen::Cart]
    }

    /// Find the screen whose route matches the given route
    ///
    /// Returns `None` for routes outside the bottom bar (welcome, login),
    /// which means no bar entry is selected.
    pub fn for_route(route: Route) -> Option<Screen> {
        Screen::all().into_iter().find(|s| s.route() == route)
    }
}

// =============================================================================
// Navigation Options
// =============================================================================

/// Options applied to a single `navigate` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavOptions {
    /// Skip the push when the top of the stack already equals the target
    pub single_top: bool,
    /// Clear the back-stack to the start destination before pushing
    pub pop_up_to_root: bool,
}

impl NavOptions {
    /// No options; plain push semantics
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable single-top semantics
    pub fn single_top(mut self) -> Self {
        self.single_top = true;
        self
    }

    /// Enable pop-up-to-root semantics
    pub fn pop_up_to_root(mut self) -> Self {
        self.pop_up_to_root = true;
        self
    }

    /// The option set used by bottom-bar taps: pop up to the start
    /// destination and launch single-top
    pub fn bottom_nav() -> Self {
        Self::new().single_top().pop_up_to_root()
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Back-stack of visited routes
///
/// The stack is never empty: the bottom entry is always the start
/// destination and `pop` refuses to remove it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top; top is the current route)
    entries: Vec<StackEntry>,
    /// Start destination for this stack
    start: Route,
}

impl NavigationStack {
    /// Create a new stack rooted at the given start destination
    pub fn new(start: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(start)],
            start,
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false at the start
    /// destination)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Clear back to the start destination
    pub fn pop_to_start(&mut self) {
        self.entries.truncate(1);
    }

    /// Get the current (top) route
    pub fn current(&self) -> Route {
        // Invariant: the stack always holds the start destination.
        self.entries.last().expect("stack is never empty").route
    }

    /// The start destination
    pub fn start(&self) -> Route {
        self.start
    }

    /// Check if back navigation is possible
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

// =============================================================================
// Router
// =============================================================================

/// Handle returned by [`Router::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

/// Callback invoked with the new current route after every transition
type RouteListener = Box<dyn FnMut(Route)>;

struct Subscriber {
    id: SubscriptionId,
    listener: RouteListener,
}

/// Screen router
///
/// Owns the back-stack and the subscriber list. The router is a
/// single-threaded object; operations take `&self` so the one instance
/// the host shell constructs can be shared by reference across screens.
///
/// Subscribers are notified synchronously, in registration order, after
/// the state mutation and before the navigation call returns. Calling
/// `navigate` or `back` from inside a subscriber callback is rejected
/// with [`NavigationError::Reentrant`]; listeners registered during a
/// notification take effect from the next transition.
pub struct Router {
    stack: RefCell<NavigationStack>,
    subscribers: RefCell<Vec<Subscriber>>,
    next_subscription: Cell<u64>,
    notifying: Cell<bool>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router starting at the welcome screen
    pub fn new() -> Self {
        Self::with_start(Route::Welcome)
    }

    /// Create a router with an explicit start destination
    pub fn with_start(start: Route) -> Self {
        Self {
            stack: RefCell::new(NavigationStack::new(start)),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            notifying: Cell::new(false),
        }
    }

    /// Get the current route
    pub fn current_route(&self) -> Route {
        self.stack.borrow().current()
    }

    /// Check if back navigation is possible
    pub fn can_go_back(&self) -> bool {
        self.stack.borrow().can_go_back()
    }

    /// Get the back-stack depth (including the current route)
    pub fn depth(&self) -> usize {
        self.stack.borrow().depth()
    }

    /// Navigate to a route with plain push semantics
    pub fn navigate(&self, route: Route) -> Result<()> {
        self.navigate_with(route, NavOptions::new())
    }

    /// Navigate to a route with the given options
    ///
    /// Subscribers are notified even when `single_top` suppresses the
    /// push, matching a bottom bar where re-tapping the active tab
    /// re-runs the screen.
    pub fn navigate_with(&self, route: Route, options: NavOptions) -> Result<()> {
        if self.notifying.get() {
            warn!(to = %route, "navigate rejected: re-entered during notification");
            return Err(NavigationError::Reentrant);
        }

        {
            let mut stack = self.stack.borrow_mut();
            let from = stack.current();
            if options.pop_up_to_root {
                stack.pop_to_start();
            }
            if !(options.single_top && stack.current() == route) {
                stack.push(route);
            }
            debug!(from = %from, to = %route, depth = stack.depth(), "navigate");
        }

        self.notify(route);
        Ok(())
    }

    /// Navigate to a route given by its string identifier
    ///
    /// Unknown identifiers fail with [`NavigationError::InvalidRoute`]
    /// and leave the router in its previous state.
    pub fn navigate_by_id(&self, id: &str) -> Result<()> {
        let route = id.parse::<Route>().map_err(|err| {
            warn!(id, "navigate rejected: unknown route identifier");
            err
        })?;
        self.navigate(route)
    }

    /// Pop the back-stack
    ///
    /// Returns `true` and notifies subscribers when a route was popped.
    /// At the start destination this is a no-op returning `false`; it is
    /// never an error.
    pub fn back(&self) -> bool {
        if self.notifying.get() {
            warn!("back ignored: re-entered during notification");
            return false;
        }

        let popped = self.stack.borrow_mut().pop();
        if popped {
            let current = self.current_route();
            debug!(to = %current, "back");
            self.notify(current);
        }
        popped
    }

    /// Register a listener invoked on every successful navigate/back
    pub fn subscribe(&self, listener: impl FnMut(Route) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            listener: Box::new(listener),
        });
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    fn notify(&self, route: Route) {
        self.notifying.set(true);
        // Take the list so a listener may subscribe without aliasing the
        // active borrow; additions are merged in afterwards.
        let mut subscribers = self.subscribers.take();
        for subscriber in subscribers.iter_mut() {
            (subscriber.listener)(route);
        }
        subscribers.append(&mut self.subscribers.take());
        self.subscribers.replace(subscribers);
        self.notifying.set(false);
    }
}

// =============================================================================
// Chrome Directive
// =============================================================================

/// Instruction to the host shell about system UI visibility
///
/// Not part of navigation state; recomputed on every transition and
/// consumed by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeDirective {
    /// Whether the system status bar should be hidden
    pub hide_status_bar: bool,
}

/// Compute the chrome directive for a route
///
/// The browse screens run edge-to-edge under the dark theme; welcome and
/// login always keep the status bar.
pub fn chrome_directive(route: Route, dark_theme: bool) -> ChromeDirective {
    let hide_status_bar = match route {
        Route::Welcome | Route::Login => false,
        Route::Home | Route::Favorites | Route::Profile | Route::Cart => dark_theme,
    };
    ChromeDirective { hide_status_bar }
}

// =============================================================================
// Tests
// =============================================================================
