//! # Core Application Logic
//!
//! This module contains Watchlist's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (movie data) │
//!                    │  • Route + Navigator    │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`movie`]: The `Movie` record
//! - [`catalog`]: The `MovieCatalog` trait and the built-in catalog
//! - [`route`]: Route strings (`watchlistScreen`, `detailScreen/{id}`)
//! - [`navigation`]: The back stack of routes
//! - [`state`]: The `App` struct, all core state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod movie;
pub mod navigation;
pub mod route;
pub mod state;
