//! # Application State
//!
//! Core business state for Watchlist. This module contains domain logic only -
//! no TUI-specific types. Presentation state (row flags, scroll offsets)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn MovieCatalog>  // injected movie data
//! ├── navigator: Navigator            // route back stack
//! ├── status_message: String          // bottom bar text
//! └── animations: bool                // animate the details panel
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::action::{self, Action};
use crate::core::catalog::{self, MovieCatalog};
use crate::core::config::ResolvedConfig;
use crate::core::movie::Movie;
use crate::core::navigation::Navigator;
use crate::core::route::Route;

pub struct App {
    pub catalog: Arc<dyn MovieCatalog>,
    pub navigator: Navigator,
    pub status_message: String,
    pub animations: bool,
}

impl App {
    pub fn new(catalog: Arc<dyn MovieCatalog>, start_route: Route) -> Self {
        Self {
            catalog,
            navigator: Navigator::new(start_route),
            status_message: String::new(),
            animations: true,
        }
    }

    /// App rooted at the watchlist, with the configured start route opened
    /// on top of it the same way a user navigation would.
    pub fn from_config(catalog: Arc<dyn MovieCatalog>, config: &ResolvedConfig) -> Self {
        let mut app = Self {
            animations: config.animations,
            ..Self::new(catalog, Route::Watchlist)
        };
        if let Some(route) = &config.start_route {
            action::update(&mut app, Action::NavigateTo(route.clone()));
        }
        app
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    /// Movie for an optional id; `None` when absent or unknown.
    pub fn movie(&self, movie_id: Option<&str>) -> Option<&Movie> {
        movie_id.and_then(|id| self.catalog.movie_from_id(id))
    }

    pub fn watchlist(&self) -> Vec<Movie> {
        catalog::watchlist(self.catalog.as_ref())
    }
}
