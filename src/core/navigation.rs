//! # Navigation
//!
//! A back stack of routes. The root entry is held apart from the entries
//! pushed above it, so there is always a current screen.

use log::debug;

use crate::core::route::Route;

#[derive(Debug, Clone)]
pub struct Navigator {
    root: Route,
    /// Routes pushed on top of `root`, most recent last
    above: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            root: start,
            above: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        self.above.last().unwrap_or(&self.root)
    }

    pub fn depth(&self) -> usize {
        self.above.len() + 1
    }

    pub fn can_go_back(&self) -> bool {
        !self.above.is_empty()
    }

    /// Push a route. Navigating to the current route is a no-op.
    /// Returns whether the current route changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if *self.current() == route {
            return false;
        }
        debug!("navigate: {} -> {}", self.current(), route);
        self.above.push(route);
        true
    }

    /// Pop one entry. Returns false at the root.
    pub fn back(&mut self) -> bool {
        let Some(popped) = self.above.pop() else {
            return false;
        };
        debug!("back: popped {}, now at {}", popped, self.current());
        true
    }

    /// Pop back to the most recent watchlist entry, or reset the stack to a
    /// watchlist root if there is none. Returns whether the current route changed.
    pub fn home(&mut self) -> bool {
        if *self.current() == Route::Watchlist {
            return false;
        }
        match self.above.iter().rposition(|r| *r == Route::Watchlist) {
            Some(pos) => self.above.truncate(pos + 1),
            None => {
                self.root = Route::Watchlist;
                self.above.clear();
            }
        }
        debug!("home: stack depth {}", self.depth());
        true
    }
}
