//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::StaticCatalog;
use crate::core::movie::Movie;
use crate::core::route::Route;
use crate::core::state::App;

/// A movie with predictable field values derived from its id.
pub fn sample_movie(id: &str) -> Movie {
    Movie {
        id: id.to_string(),
        title: format!("Movie {id}"),
        year: 2000,
        genre: "Drama".to_string(),
        director: format!("Director {id}"),
        actors: "Actor One, Actor Two".to_string(),
        plot: format!("Plot of {id}."),
        rating: 7.5,
        images: vec![
            format!("images/{id}/poster.jpg"),
            format!("images/{id}/still-1.jpg"),
            format!("images/{id}/still-2.jpg"),
        ],
    }
}

/// A catalog of `len` movies with ids `tt0`, `tt1`, ...
pub fn sample_catalog(len: usize) -> StaticCatalog {
    let movies = (0..len).map(|i| sample_movie(&format!("tt{i}"))).collect();
    StaticCatalog::new(movies).unwrap()
}

/// Creates a test App over a 5-movie fake catalog, starting on the watchlist.
pub fn test_app() -> App {
    App::new(Arc::new(sample_catalog(5)), Route::Watchlist)
}

/// Concatenated cell symbols of a rendered buffer.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
