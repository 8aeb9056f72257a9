//! # Actions
//!
//! Everything that can happen at the app level becomes an `Action`.
//! User clicks a watchlist card? That's `Action::Navigate(Route::Detail { .. })`.
//! User presses Esc on the detail screen? That's `Action::Back`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what to do next. No terminal I/O here.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```
//!
//! Row-level taps (favorite, expand) never become actions: they are
//! presentation state owned by the screen that shows the row.

use log::{info, warn};

use crate::core::route::Route;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Push a route onto the back stack.
    Navigate(Route),
    /// Navigate to a route given as a string (`detailScreen/tt0499549`).
    NavigateTo(String),
    /// Pop the back stack.
    Back,
    /// Bottom-bar Home destination.
    Home,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The current route changed; the adapter rebuilds the screen for it.
    ScreenChanged,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(route) => navigate(app, route),
        Action::NavigateTo(raw) => match raw.parse::<Route>() {
            Ok(route) => navigate(app, route),
            Err(e) => {
                warn!("Navigation rejected: {}", e);
                app.status_message = e.to_string();
                Effect::None
            }
        },
        Action::Back => {
            if app.navigator.back() {
                app.status_message.clear();
                Effect::ScreenChanged
            } else {
                Effect::None
            }
        }
        Action::Home => {
            if app.navigator.home() {
                app.status_message.clear();
                Effect::ScreenChanged
            } else {
                Effect::None
            }
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

fn navigate(app: &mut App, route: Route) -> Effect {
    if let Route::Detail { movie_id } = &route {
        // An unknown movie still navigates; the detail screen renders an empty body.
        if app.movie(movie_id.as_deref()).is_none() {
            warn!("No movie for route {}", route);
        }
    }
    info!("Navigating to {}", route);
    if app.navigator.navigate(route) {
        app.status_message.clear();
        Effect::ScreenChanged
    } else {
        Effect::None
    }
}
