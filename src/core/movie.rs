//! # Movie
//!
//! A single catalog entry. Movies are immutable once the catalog is built;
//! screens clone what they display and never write anything back.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: u16,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub rating: f32,
    /// Image references in display order. The first one is the hero image.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Movie {
    /// The hero image shown on the movie's row, if it has any images.
    pub fn hero_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
