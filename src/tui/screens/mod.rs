//! # Screens
//!
//! One screen per route. A `Screen` is built from the current route each time
//! the route changes, which is what resets every row's favorite and expanded
//! flags when the user navigates away and comes back.

pub mod detail;
pub mod watchlist;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::Destination;
use crate::tui::event::TuiEvent;

pub use detail::{DetailScreen, DetailState};
pub use watchlist::{WatchlistEvent, WatchlistScreen, WatchlistState};

pub const WATCHLIST_TITLE: &str = "Watchlist";

/// What a screen asks the event loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    OpenMovie(String),
}

pub enum Screen {
    Watchlist(WatchlistState),
    Detail(DetailState),
}

impl Screen {
    pub fn for_route(app: &App) -> Self {
        match app.current_route() {
            Route::Watchlist => Screen::Watchlist(WatchlistState::new(app.watchlist(), app.animations)),
            Route::Detail { movie_id } => {
                let movie = app.movie(movie_id.as_deref()).cloned();
                Screen::Detail(DetailState::new(movie, app.animations))
            }
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Screen::Watchlist(_) => WATCHLIST_TITLE,
            Screen::Detail(state) => state.title(),
        }
    }

    /// Key hints for the bottom bar. Row actions are named by the current
    /// label of the row they apply to.
    pub fn hints(&self) -> String {
        match self {
            Screen::Watchlist(state) => match state.selected_row() {
                Some(row) => format!(
                    "↑↓ select  ⏎ open  f {}  ␣ {}  q quit",
                    row.state.favorite_label(),
                    row.state.expand_label()
                ),
                None => "q quit".to_string(),
            },
            Screen::Detail(state) if state.movie.is_some() => format!(
                "←→ gallery  f {}  ␣ {}  esc back  q quit",
                state.row.favorite_label(),
                state.row.expand_label()
            ),
            Screen::Detail(_) => "esc back  q quit".to_string(),
        }
    }

    /// Bottom-bar destination to highlight.
    pub fn active_destination(&self) -> Option<Destination> {
        match self {
            Screen::Watchlist(_) => Some(Destination::Home),
            Screen::Detail(_) => None,
        }
    }

    /// Advance row animations. Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        match self {
            Screen::Watchlist(state) => state.tick(),
            Screen::Detail(state) => state.tick(),
        }
    }

    pub fn is_animating(&self) -> bool {
        match self {
            Screen::Watchlist(state) => state.is_animating(),
            Screen::Detail(state) => state.is_animating(),
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        match self {
            Screen::Watchlist(state) => state.handle_event(event).map(|e| match e {
                WatchlistEvent::Open(id) => ScreenEvent::OpenMovie(id),
            }),
            Screen::Detail(state) => {
                state.handle_event(event);
                None
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            Screen::Watchlist(state) => WatchlistScreen::new(state).render(frame, area),
            Screen::Detail(state) => DetailScreen::new(state).render(frame, area),
        }
    }
}
