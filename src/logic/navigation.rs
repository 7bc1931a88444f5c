//! Navigation logic
//!
//! Selection movement with wrapping, and the route paths the views are keyed by.
//! Routes carry the country's common name, percent-encoded in the path so names
//! like "Côte d'Ivoire" or "Bosnia and Herzegovina" survive the round trip.

/// Path prefix of the detail route
pub const COUNTRY_ROUTE_PREFIX: &str = "/country/";

/// Calculate the next selection index with wrapping
///
/// # Examples
/// ```
/// use wheretui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use wheretui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) => i.min(list_len) - 1,
    })
}

/// Keep a selection inside a list that may have shrunk (e.g. after typing a search)
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}

/// A view the application can show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// Detail view, keyed by the country's common name
    Country { name: String },
}

impl Route {
    pub fn country(name: impl Into<String>) -> Self {
        Route::Country { name: name.into() }
    }

    /// URL-style path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Country { name } => country_path(name),
        }
    }

    /// Parse a path back into a route. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        if path.is_empty() || path == "/" {
            return Some(Route::Home);
        }

        let encoded = path.strip_prefix(COUNTRY_ROUTE_PREFIX)?;
        if encoded.is_empty() || encoded.contains('/') {
            return None;
        }

        let name = urlencoding::decode(encoded).ok()?;
        Some(Route::Country {
            name: name.into_owned(),
        })
    }
}

/// Build the detail path for a country's common name
///
/// # Examples
/// ```
/// use wheretui::logic::navigation::country_path;
///
/// assert_eq!(country_path("Ghana"), "/country/Ghana");
/// assert_eq!(country_path("Côte d'Ivoire"), "/country/C%C3%B4te%20d%27Ivoire");
/// ```
pub fn country_path(name: &str) -> String {
    format!("{}{}", COUNTRY_ROUTE_PREFIX, urlencoding::encode(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(5), 0), None);
    }

    #[test]
    fn test_selection_wrapping() {
        assert_eq!(next_selection(Some(4), 5), Some(0));
        assert_eq!(prev_selection(Some(0), 5), Some(4));
        assert_eq!(next_selection(Some(0), 1), Some(0));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_selection_out_of_bounds() {
        // Stale index after the list shrank
        assert_eq!(next_selection(Some(10), 3), Some(0));
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(Some(7), 3), Some(2));
        assert_eq!(clamp_selection(Some(1), 3), Some(1));
        assert_eq!(clamp_selection(None, 3), Some(0));
        assert_eq!(clamp_selection(Some(1), 0), None);
    }

    #[test]
    fn test_home_route() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
    }

    #[test]
    fn test_country_route_round_trip() {
        for name in ["Ghana", "Côte d'Ivoire", "Bosnia and Herzegovina", "São Tomé and Príncipe", "Guinea-Bissau"] {
            let path = Route::country(name).path();
            assert!(!path[COUNTRY_ROUTE_PREFIX.len()..].contains(' '));
            assert_eq!(Route::parse(&path), Some(Route::country(name)));
        }
    }

    #[test]
    fn test_name_with_slash_is_encoded() {
        let path = country_path("A/B");
        assert_eq!(path, "/country/A%2FB");
        assert_eq!(Route::parse(&path), Some(Route::country("A/B")));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::parse("/countries"), None);
        assert_eq!(Route::parse("/country/"), None);
        assert_eq!(Route::parse("/country/a/b"), None);
    }
}
