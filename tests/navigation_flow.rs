//! Navigation Flow Integration Tests
//!
//! End-to-end tests driving the full shell: onboarding, login, bottom-bar
//! tab hopping, back-stack behavior, and the window chrome that follows
//! each transition.

use app_ui::navigation::{NavOptions, NavigationError, Route, Router, Screen};
use app_ui::screens::ScreenView;
use bloom::{App, AppError};
use std::cell::RefCell;
use std::rc::Rc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// First-run happy path: welcome, login, home
#[test]
fn test_onboarding_to_home() {
    init_tracing();
    let app = App::new(false);

    assert_eq!(app.current_route(), Route::Welcome);
    assert!(!app.back(), "back at the start destination is a no-op");

    app.navigate(Route::Login).unwrap();
    assert!(matches!(app.current_screen(), ScreenView::Login(_)));

    app.submit_login("alice@example.com", "gardenia12").unwrap();
    assert_eq!(app.current_route(), Route::Home);

    // Login cleared the stack, so back lands on welcome.
    assert!(app.back());
    assert_eq!(app.current_route(), Route::Welcome);
    assert!(!app.back());
}

/// Rejected credentials leave the navigation state untouched
#[test]
fn test_failed_login_stays_put() {
    init_tracing();
    let app = App::new(false);
    app.navigate(Route::Login).unwrap();

    assert!(app.submit_login("", "gardenia12").is_err());
    assert!(app.submit_login("alice@example.com", "short").is_err());
    assert_eq!(app.current_route(), Route::Login);
    assert!(app.back());
    assert_eq!(app.current_route(), Route::Welcome);
}

/// Bottom-bar taps never grow the back-stack
#[test]
fn test_tab_hopping_keeps_shallow_stack() {
    init_tracing();
    let app = App::new(false);
    app.navigate(Route::Login).unwrap();
    app.submit_login("alice@example.com", "gardenia12").unwrap();

    for screen in [
        Screen::Favorites,
        Screen::Profile,
        Screen::Cart,
        Screen::Home,
        Screen::Cart,
    ] {
        app.select_tab(screen).unwrap();
        assert_eq!(app.current_route(), screen.route());
        assert_eq!(app.router().depth(), 2, "tab entry sits over the root only");
    }

    // Re-tapping the current tab keeps the stack shallow.
    app.select_tab(Screen::Cart).unwrap();
    assert_eq!(app.router().depth(), 2);

    assert!(app.back());
    assert_eq!(app.current_route(), Route::Welcome);
}

/// Every tab shows the shared browse content with its own selection
#[test]
fn test_tabs_render_home_content() {
    init_tracing();
    let app = App::new(false);
    app.navigate_by_id("home").unwrap();

    for screen in Screen::all() {
        app.select_tab(screen).unwrap();
        match app.current_screen() {
            ScreenView::Home(home) => {
                assert_eq!(home.bottom_bar.selected_screen(), Some(screen));
                assert_eq!(home.cards.len(), 5);
                assert_eq!(home.items.len(), 6);
            }
            other => panic!("expected home content on {:?}, got {other:?}", screen),
        }
    }
}

/// Chrome directives: dark theme hides the status bar on browse screens
#[test]
fn test_chrome_follows_route_and_theme() {
    init_tracing();

    let dark = App::new(true);
    assert!(!dark.status_bar_hidden(), "welcome always shows the bar");
    dark.navigate(Route::Login).unwrap();
    assert!(!dark.status_bar_hidden());
    dark.navigate(Route::Home).unwrap();
    assert!(dark.status_bar_hidden());
    dark.back();
    assert!(!dark.status_bar_hidden(), "back restores the login chrome");

    let light = App::new(false);
    light.navigate(Route::Home).unwrap();
    assert!(!light.status_bar_hidden());
}

/// Focus loss and regain re-asserts the stored directive
#[test]
fn test_window_focus_reapplies_chrome() {
    init_tracing();
    let app = App::new(true);
    app.navigate(Route::Home).unwrap();

    app.on_window_focus(false);
    app.on_window_focus(true);
    assert!(app.status_bar_hidden());
}

/// Unknown route identifiers are rejected without a transition
#[test]
fn test_invalid_route_id() {
    init_tracing();
    let app = App::new(false);

    let err = app.navigate_by_id("checkout").unwrap_err();
    assert_eq!(
        err,
        AppError::Navigation(NavigationError::InvalidRoute("checkout".to_string()))
    );
    assert_eq!(app.current_route(), Route::Welcome);
}

/// Subscribers observe every transition in registration order
#[test]
fn test_router_subscription_ordering() {
    init_tracing();
    let router = Rc::new(Router::new());
    let seen: Rc<RefCell<Vec<(u8, Route)>>> = Rc::new(RefCell::new(Vec::new()));

    for tag in [1u8, 2] {
        let seen = seen.clone();
        router.subscribe(move |route| seen.borrow_mut().push((tag, route)));
    }

    router.navigate(Route::Login).unwrap();
    router
        .navigate_with(Route::Home, NavOptions::bottom_nav())
        .unwrap();
    router.back();

    assert_eq!(
        *seen.borrow(),
        vec![
            (1, Route::Login),
            (2, Route::Login),
            (1, Route::Home),
            (2, Route::Home),
            (1, Route::Welcome),
            (2, Route::Welcome),
        ]
    );
}
