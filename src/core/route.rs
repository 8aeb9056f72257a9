//! # Routes
//!
//! Screens are addressed by route strings:
//!
//! ```text
//! watchlistScreen           → Watchlist
//! detailScreen/{movieId}    → Detail (movie_id = Some(..))
//! detailScreen              → Detail (movie_id = None)
//! ```
//!
//! The movie id travels as a single path segment, so `%` and `/` inside an
//! id are percent-encoded when formatting and decoded when parsing.

use std::fmt;
use std::str::FromStr;

pub const WATCHLIST_ROUTE: &str = "watchlistScreen";
pub const DETAIL_ROUTE: &str = "detailScreen";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Watchlist,
    Detail { movie_id: Option<String> },
}

impl Route {
    pub fn detail(movie_id: impl Into<String>) -> Self {
        Route::Detail {
            movie_id: Some(movie_id.into()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Watchlist => f.write_str(WATCHLIST_ROUTE),
            Route::Detail { movie_id: None } => f.write_str(DETAIL_ROUTE),
            Route::Detail {
                movie_id: Some(id),
            } => write!(f, "{DETAIL_ROUTE}/{}", encode_segment(id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Unknown(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Unknown(route) => write!(f, "unknown route: {route:?}"),
        }
    }
}

impl std::error::Error for RouteError {}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, tail) = match s.split_once('/') {
            Some((head, tail)) => (head, Some(tail)),
            None => (s, None),
        };

        match (head, tail) {
            (WATCHLIST_ROUTE, None) => Ok(Route::Watchlist),
            (DETAIL_ROUTE, None) => Ok(Route::Detail { movie_id: None }),
            (DETAIL_ROUTE, Some(segment)) if segment.contains('/') => {
                Err(RouteError::Unknown(s.to_string()))
            }
            (DETAIL_ROUTE, Some(segment)) => {
                let id = decode_segment(segment).ok_or_else(|| RouteError::Unknown(s.to_string()))?;
                Ok(Route::Detail {
                    movie_id: if id.is_empty() { None } else { Some(id) },
                })
            }
            _ => Err(RouteError::Unknown(s.to_string())),
        }
    }
}

fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            _ => out.push(c),
        }
    }
    out
}

/// Inverse of `encode_segment`. Returns `None` on a malformed escape.
fn decode_segment(segment: &str) -> Option<String> {
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let escape = rest.get(pos + 1..pos + 3)?;
        match escape.to_ascii_uppercase().as_str() {
            "25" => out.push('%'),
            "2F" => out.push('/'),
            _ => return None,
        }
        rest = &rest[pos + 3..];
    }
    out.push_str(rest);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_watchlist() {
        assert_eq!("watchlistScreen".parse::<Route>(), Ok(Route::Watchlist));
    }

    #[test]
    fn test_parse_detail_with_id() {
        assert_eq!(
            "detailScreen/tt0499549".parse::<Route>(),
            Ok(Route::detail("tt0499549"))
        );
    }

    #[test]
    fn test_parse_detail_without_id() {
        let expected = Route::Detail { movie_id: None };
        assert_eq!("detailScreen".parse::<Route>(), Ok(expected.clone()));
        assert_eq!("detailScreen/".parse::<Route>(), Ok(expected));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "homeScreen".parse::<Route>(),
            Err(RouteError::Unknown(_))
        ));
        assert!("watchlistScreen/extra".parse::<Route>().is_err());
        assert!("detailScreen/a/b".parse::<Route>().is_err());
        assert!("".parse::<Route>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Route::Watchlist.to_string(), "watchlistScreen");
        assert_eq!(Route::detail("tt1").to_string(), "detailScreen/tt1");
        assert_eq!(Route::Detail { movie_id: None }.to_string(), "detailScreen");
    }

    #[test]
    fn test_ids_with_reserved_characters_round_trip() {
        for id in ["a/b", "100%", "%2F", "plain"] {
            let route = Route::detail(id);
            let text = route.to_string();
            assert_eq!(text.matches('/').count(), 1, "{text}");
            assert_eq!(text.parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_malformed_escape_rejected() {
        assert!("detailScreen/%zz".parse::<Route>().is_err());
        assert!("detailScreen/abc%2".parse::<Route>().is_err());
    }
}
