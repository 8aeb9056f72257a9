//! # TUI Components
//!
//! Reusable pieces the two screens are composed from.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TopBar`: title and optional back button
//! - `BottomBar`: destination shortcuts, status and key hints
//! - `MovieDetails`: the expandable director/year/genre/actors/rating/plot panel
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! The state struct lives in the screen; the wrapper is rebuilt every frame
//! with borrowed state:
//! - `MovieRow` over `RowState`: one movie card with favorite and expand icons
//! - `ImageGallery` over `GalleryState`: horizontal strip of images
//!
//! ## One Row, Two Screens
//!
//! The watchlist and the detail screen draw the same `MovieRow`. The only
//! difference is the `selected` prop and what the screen does with a click
//! on the card body (the watchlist opens the movie; the detail screen
//! ignores it).
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── top_bar.rs        (Title + back button)
//! ├── bottom_bar.rs     (Destinations + hints)
//! ├── movie_row.rs      (Movie card, RowState, RowLayout)
//! ├── movie_details.rs  (Expandable panel)
//! └── image_gallery.rs  (Horizontal image strip)
//! ```

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub mod bottom_bar;
pub mod image_gallery;
pub mod movie_details;
pub mod movie_row;
pub mod top_bar;

pub use bottom_bar::{BottomBar, Destination};
pub use image_gallery::{GalleryState, ImageGallery};
pub use movie_details::MovieDetails;
pub use movie_row::{MovieRow, RowHit, RowState};
pub use top_bar::TopBar;

/// Truncate `s` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
