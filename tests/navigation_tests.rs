use std::sync::Arc;

use watchlist::core::action::{Action, Effect, update};
use watchlist::core::catalog::{MovieCatalog, StaticCatalog, WATCHLIST_LEN, watchlist};
use watchlist::core::movie::Movie;
use watchlist::core::route::Route;
use watchlist::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

/// Catalog backed by a plain Vec, independent of `StaticCatalog`.
struct VecCatalog(Vec<Movie>);

impl MovieCatalog for VecCatalog {
    fn movies(&self) -> &[Movie] {
        &self.0
    }
}

fn movie(id: &str, title: &str) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        year: 1999,
        genre: "Sci-Fi".to_string(),
        director: "Someone".to_string(),
        actors: "A, B".to_string(),
        plot: "Things happen.".to_string(),
        rating: 8.0,
        images: vec![format!("images/{id}/poster.jpg")],
    }
}

fn app_with(movies: Vec<Movie>) -> App {
    App::new(Arc::new(VecCatalog(movies)), Route::Watchlist)
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_builtin_watchlist_is_first_two_movies() {
    let catalog = StaticCatalog::builtin();
    let shown = watchlist(&catalog);

    assert_eq!(shown.len(), WATCHLIST_LEN);
    assert_eq!(shown[0].title, "Avatar");
    assert_eq!(shown[1].title, "300");
    for m in &shown {
        assert_eq!(catalog.movie_from_id(&m.id), Some(m));
    }
}

#[test]
fn test_custom_catalog_through_app() {
    let app = app_with(vec![
        movie("a", "Alpha"),
        movie("b", "Beta"),
        movie("c", "Gamma"),
    ]);
    let titles: Vec<String> = app.watchlist().into_iter().map(|m| m.title).collect();
    assert_eq!(titles, vec!["Alpha", "Beta"]);
    assert_eq!(app.movie(Some("c")).map(|m| m.title.as_str()), Some("Gamma"));
    assert!(app.movie(None).is_none());
}

#[test]
fn test_json_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.json");
    let json = serde_json::to_string(&vec![movie("x1", "First"), movie("x2", "Second")]).unwrap();
    std::fs::write(&path, json).unwrap();

    let catalog = StaticCatalog::load(&path).unwrap();
    assert_eq!(catalog.movies().len(), 2);
    assert_eq!(catalog.movie_from_id("x2").map(|m| m.title.as_str()), Some("Second"));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_open_detail_and_come_back() {
    let mut app = app_with(vec![movie("a", "Alpha"), movie("b", "Beta")]);

    let effect = update(&mut app, Action::NavigateTo("detailScreen/b".to_string()));
    assert_eq!(effect, Effect::ScreenChanged);
    assert_eq!(app.current_route(), &Route::detail("b"));
    assert!(app.navigator.can_go_back());

    assert_eq!(update(&mut app, Action::Back), Effect::ScreenChanged);
    assert_eq!(app.current_route(), &Route::Watchlist);
    assert!(!app.navigator.can_go_back());
}

#[test]
fn test_home_from_deep_stack() {
    let mut app = app_with(vec![movie("a", "Alpha"), movie("b", "Beta")]);
    update(&mut app, Action::Navigate(Route::detail("a")));
    update(&mut app, Action::Navigate(Route::detail("b")));
    assert_eq!(app.navigator.depth(), 3);

    assert_eq!(update(&mut app, Action::Home), Effect::ScreenChanged);
    assert_eq!(app.current_route(), &Route::Watchlist);
    assert_eq!(app.navigator.depth(), 1);
    assert_eq!(update(&mut app, Action::Home), Effect::None);
}

#[test]
fn test_bad_route_sets_status_and_stays() {
    let mut app = app_with(vec![movie("a", "Alpha")]);
    let effect = update(&mut app, Action::NavigateTo("settingsScreen".to_string()));

    assert_eq!(effect, Effect::None);
    assert_eq!(app.current_route(), &Route::Watchlist);
    assert!(app.status_message.contains("settingsScreen"));

    // The next successful navigation clears it
    update(&mut app, Action::Navigate(Route::detail("a")));
    assert!(app.status_message.is_empty());
}

#[test]
fn test_route_strings_round_trip_ids_with_slashes() {
    let route = Route::detail("studio/42");
    let text = route.to_string();
    assert_eq!(text, "detailScreen/studio%2F42");
    assert_eq!(text.parse::<Route>(), Ok(route));
}

#[test]
fn test_quit() {
    let mut app = app_with(Vec::new());
    assert!(app.watchlist().is_empty());
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}
