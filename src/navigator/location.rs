use serde::Serialize;

use crate::router::ParamVec;

/// A committed navigation: everything the shell needs to render one location.
///
/// Locations are immutable snapshots. The navigator swaps a fresh `Arc` of the
/// latest one on every commit, so readers never see a half-updated location.
///
/// Serializes to the address-bar fields only; captured parameters are reachable
/// through [`get_param`](RouteLocation::get_param) and
/// [`get_query`](RouteLocation::get_query) instead.
#[derive(Debug, Clone, Serialize)]
pub struct RouteLocation {
    /// Application path without the query string (e.g., `/students/17`)
    pub path: String,
    /// Path plus query string; this is what the history stack records
    pub full_path: String,
    /// Name of the matched route, `None` only for the start location
    pub name: Option<String>,
    /// Path parameters captured by the matcher
    #[serde(skip_serializing)]
    pub params: ParamVec,
    /// Query parameters parsed from the target
    #[serde(skip_serializing)]
    pub query: ParamVec,
    /// The href this location projects to under the active history mode
    pub href: String,
    /// Component name of the resolved view, `None` only for the start location
    pub view: Option<String>,
}

impl RouteLocation {
    /// The sentinel location a navigator holds before any navigation commits.
    pub(crate) fn start() -> Self {
        Self {
            path: "/".to_string(),
            full_path: "/".to_string(),
            name: None,
            params: ParamVec::default(),
            query: ParamVec::default(),
            href: "/".to_string(),
            view: None,
        }
    }

    /// Whether this is still the start sentinel (no navigation has committed).
    #[must_use]
    pub fn is_start(&self) -> bool {
        self.name.is_none() && self.view.is_none()
    }

    /// Get a path parameter by name, last occurrence winning.
    #[inline]
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a query parameter by name, last occurrence winning.
    #[inline]
    #[must_use]
    pub fn get_query(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }
}
