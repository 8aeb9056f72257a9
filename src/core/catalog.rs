//! # Movie Catalog
//!
//! The data provider behind both screens. Screens never reach for a global
//! movie list; they get an `Arc<dyn MovieCatalog>` through `App`, which lets
//! tests swap in a catalog of their own.
//!
//! Two sources are supported:
//! - the built-in catalog compiled into the binary
//! - a JSON file holding an array of movies (`--catalog`, `general.catalog_file`)

use log::{debug, info};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::movie::Movie;

/// How many movies the watchlist shows, taken from the front of the catalog.
pub const WATCHLIST_LEN: usize = 2;

/// Read-only access to an ordered movie list.
pub trait MovieCatalog: Send + Sync {
    /// Full catalog in stable order.
    fn movies(&self) -> &[Movie];

    /// Linear scan by id.
    fn movie_from_id(&self, id: &str) -> Option<&Movie> {
        self.movies().iter().find(|movie| movie.id == id)
    }
}

/// The movies shown on the watchlist: the first `WATCHLIST_LEN` catalog
/// entries, or fewer when the catalog is shorter.
pub fn watchlist(catalog: &dyn MovieCatalog) -> Vec<Movie> {
    catalog.movies().iter().take(WATCHLIST_LEN).cloned().collect()
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate movie id in catalog: {id}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// In-memory catalog
// ============================================================================

pub struct StaticCatalog {
    movies: Vec<Movie>,
}

impl StaticCatalog {
    /// Build a catalog, rejecting duplicate ids so lookups stay unambiguous.
    pub fn new(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for movie in &movies {
            if !seen.insert(movie.id.as_str()) {
                return Err(CatalogError::DuplicateId(movie.id.clone()));
            }
        }
        Ok(Self { movies })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            movies: builtin_movies(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let movies: Vec<Movie> = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::new(movies)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            "Loaded {} movies from {}",
            catalog.movies.len(),
            path.display()
        );
        debug!(
            "Catalog ids: {:?}",
            catalog.movies.iter().map(|m| m.id.as_str()).collect::<Vec<_>>()
        );
        Ok(catalog)
    }
}

impl MovieCatalog for StaticCatalog {
    fn movies(&self) -> &[Movie] {
        &self.movies
    }
}

#[allow(clippy::too_many_arguments)]
fn movie(
    id: &str,
    title: &str,
    year: u16,
    genre: &str,
    director: &str,
    actors: &str,
    plot: &str,
    rating: f32,
    images: &[&str],
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        year,
        genre: genre.to_string(),
        director: director.to_string(),
        actors: actors.to_string(),
        plot: plot.to_string(),
        rating,
        images: images.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_movies() -> Vec<Movie> {
    vec![
        movie(
            "tt0499549",
            "Avatar",
            2009,
            "Action, Adventure, Fantasy",
            "James Cameron",
            "Sam Worthington, Zoe Saldana, Sigourney Weaver, Stephen Lang",
            "A paraplegic marine dispatched to the moon Pandora on a unique mission \
             becomes torn between following his orders and protecting the world he \
             feels is his home.",
            7.9,
            &[
                "images/tt0499549/poster.jpg",
                "images/tt0499549/still-1.jpg",
                "images/tt0499549/still-2.jpg",
                "images/tt0499549/still-3.jpg",
            ],
        ),
        movie(
            "tt0416449",
            "300",
            2006,
            "Action, Drama, Fantasy",
            "Zack Snyder",
            "Gerard Butler, Lena Headey, Dominic West, David Wenham",
            "King Leonidas of Sparta and a force of 300 men fight the Persians at \
             Thermopylae in 480 B.C.",
            7.7,
            &[
                "images/tt0416449/poster.jpg",
                "images/tt0416449/still-1.jpg",
                "images/tt0416449/still-2.jpg",
            ],
        ),
        movie(
            "tt0848228",
            "The Avengers",
            2012,
            "Action, Sci-Fi, Thriller",
            "Joss Whedon",
            "Robert Downey Jr., Chris Evans, Mark Ruffalo, Chris Hemsworth",
            "Earth's mightiest heroes must come together and learn to fight as a team \
             if they are to stop the mischievous Loki and his alien army from \
             enslaving humanity.",
            8.1,
            &[
                "images/tt0848228/poster.jpg",
                "images/tt0848228/still-1.jpg",
                "images/tt0848228/still-2.jpg",
            ],
        ),
        movie(
            "tt0993846",
            "The Wolf of Wall Street",
            2013,
            "Biography, Comedy, Crime",
            "Martin Scorsese",
            "Leonardo DiCaprio, Jonah Hill, Margot Robbie, Matthew McConaughey",
            "Based on the true story of Jordan Belfort, from his rise to a wealthy \
             stock-broker living the high life to his fall involving crime, corruption \
             and the federal government.",
            8.2,
            &[
                "images/tt0993846/poster.jpg",
                "images/tt0993846/still-1.jpg",
            ],
        ),
        movie(
            "tt0816692",
            "Interstellar",
            2014,
            "Adventure, Drama, Sci-Fi",
            "Christopher Nolan",
            "Ellen Burstyn, Matthew McConaughey, Mackenzie Foy, John Lithgow",
            "A team of explorers travel through a wormhole in space in an attempt to \
             ensure humanity's survival.",
            8.6,
            &[
                "images/tt0816692/poster.jpg",
                "images/tt0816692/still-1.jpg",
                "images/tt0816692/still-2.jpg",
            ],
        ),
    ]
}
