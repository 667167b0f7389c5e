//! Router core - hot path for navigation matching.
//!
//! The following clippy lints are denied to keep the match path free of
//! avoidable allocations:
//!
//! - `clippy::inefficient_to_string` - Catches unnecessary allocations
//! - `clippy::format_push_string` - Prevents format! string building
//! - `clippy::unnecessary_to_owned` - Blocks redundant owned conversions

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::trie::Trie;
use crate::route::{Route, RouteError, RouteTable};

/// Maximum number of path/query parameters before heap allocation.
/// Most route tables have ≤4 params per path (e.g., `/students/{id}/courses/{course}`),
/// so the common case stays on the stack.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the match path.
///
/// Param names use `Arc<str>` instead of `String` because:
/// - Names come from the static route tree (known at table-construction time)
/// - `Arc::clone()` is O(1) atomic increment vs O(n) string copy
/// - Values remain `String` as they're per-navigation data from the path
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Result of successfully matching a path against the route table.
///
/// Contains the matched route and the parameters captured from the path. Uses
/// `SmallVec` instead of `HashMap` for parameters to avoid heap allocation in
/// the common case (≤8 params).
///
/// Matching sees the application path only; query strings are split off and
/// parsed by the navigator, which carries them on the committed
/// [`RouteLocation`](crate::navigator::RouteLocation).
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route (Arc to avoid expensive clones)
    pub route: Arc<Route>,
    /// Path parameters extracted from the path (e.g., `{id}` → `("id", "123")`)
    pub path_params: ParamVec,
    /// Name of the matched route
    pub name: String,
}

impl RouteMatch {
    /// Get a path parameter by name
    ///
    /// Uses "last write wins" semantics: if duplicate parameter names exist
    /// at different path depths, returns the last occurrence.
    ///
    /// # Arguments
    /// * `name` - The parameter name (e.g., "id")
    ///
    /// # Returns
    /// The parameter value if found, None otherwise
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert path_params to HashMap for callers that want keyed access.
    /// Note: This allocates - use get_path_param() in hot paths instead
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Router that resolves paths and names against an immutable route table.
///
/// Built once from a validated [`RouteTable`]; never mutated afterwards. Forward
/// matching walks a segment tree, so lookup cost is O(k) in the number of path
/// segments rather than O(n) in the number of routes. Reverse routing goes
/// through a name index built at the same time.
///
/// # Performance
///
/// - Route matching: O(k) where k is path length (not O(n) where n is number of routes)
/// - Memory efficient: shared path prefixes are stored only once
/// - Minimal allocations: parameters ride in a stack-allocated [`ParamVec`]
#[derive(Clone)]
pub struct Router {
    /// Segment tree for O(k) path lookup
    trie: Trie,
    /// The validated table, in declaration order
    table: Arc<RouteTable>,
    /// Name index for reverse routing (name → entry position)
    by_name: HashMap<String, usize>,
}

impl Router {
    /// Create a router from a validated route table.
    ///
    /// Builds the segment tree and the name index. The table has already
    /// enforced path and name uniqueness, so indexing cannot fail.
    ///
    /// # Arguments
    ///
    /// * `table` - Validated route table, in declaration order
    ///
    /// # Returns
    ///
    /// A new `Router` ready to resolve navigations
    #[must_use]
    pub fn new(table: RouteTable) -> Self {
        let mut trie = Trie::new();
        let mut by_name = HashMap::with_capacity(table.len());

        for (position, entry) in table.entries().iter().enumerate() {
            trie.insert(&entry.pattern, Arc::clone(&entry.route));
            by_name.insert(entry.route.name.clone(), position);
        }

        // RT3: Route table indexed
        let routes_summary: Vec<String> = table
            .iter()
            .take(10)
            .map(|route| format!("{} -> {}", route.path, route.view_label()))
            .collect();
        info!(
            route_count = table.len(),
            routes_summary = ?routes_summary,
            matching_algorithm = "segment_tree",
            "Route table indexed"
        );

        Self {
            trie,
            table: Arc::new(table),
            by_name,
        }
    }

    /// Match a concrete path against the table.
    ///
    /// `path` is the application path only; query strings are split off by the
    /// navigator before matching. Segments are percent-decoded before
    /// comparison, so `/students/J%C3%BCrgen` reaches `/students/{name}` with
    /// the decoded value.
    ///
    /// # Arguments
    ///
    /// * `path` - Candidate path (e.g., `/students/123`)
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - If a route matches, with captured parameters
    /// * `None` - If no route matches (an unmatched navigation)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// if let Some(m) = router.match_path("/students/123") {
    ///     println!("Route: {}", m.name);
    ///     println!("Student ID: {:?}", m.get_path_param("id"));
    /// }
    /// ```
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        // RT4: Route match attempt
        debug!(
            path = %path,
            algorithm = "segment_tree",
            "Route match attempt"
        );

        let match_start = std::time::Instant::now();
        let result = self.trie.find(path);
        let match_duration = match_start.elapsed();

        if let Some((route, params)) = result {
            // RT5: Route matched
            let name = route.name.clone();

            if match_duration > std::time::Duration::from_millis(1) {
                warn!(
                    path = %path,
                    name = %name,
                    route_pattern = %route.path,
                    path_params = ?params,
                    duration_us = match_duration.as_micros(),
                    algorithm = "segment_tree",
                    "Slow route matching detected"
                );
            } else {
                debug!(
                    path = %path,
                    name = %name,
                    route_pattern = %route.path,
                    path_params = ?params,
                    duration_us = match_duration.as_micros(),
                    algorithm = "segment_tree",
                    "Route matched"
                );
            }

            return Some(RouteMatch {
                route,
                path_params: params,
                name,
            });
        }

        // RT6: No route found
        warn!(
            path = %path,
            duration_us = match_duration.as_micros(),
            algorithm = "segment_tree",
            "No route matched"
        );

        None
    }

    /// Look up a route by its unique name.
    #[must_use]
    pub fn route_by_name(&self, name: &str) -> Option<&Arc<Route>> {
        let position = *self.by_name.get(name)?;
        self.table.entries().get(position).map(|entry| &entry.route)
    }

    /// Build a concrete path for a named route (reverse routing).
    ///
    /// Parameter values are percent-encoded into their segments; when the same
    /// key is supplied more than once the last value wins.
    ///
    /// # Arguments
    ///
    /// * `name` - Registered route name
    /// * `params` - Parameter values for the route's pattern, `&[]` for static routes
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownName`] when no route has the given name and
    /// [`RouteError::MissingParam`] when the pattern declares a parameter the
    /// caller did not supply.
    pub fn path_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let position = *self
            .by_name
            .get(name)
            .ok_or_else(|| RouteError::UnknownName {
                name: name.to_string(),
            })?;
        self.table.entries()[position].pattern.interpolate(params)
    }

    /// All declared path patterns, in declaration order.
    ///
    /// Useful for startup summaries and for pre-registering paths in
    /// observability layers.
    ///
    /// # Returns
    ///
    /// A vector of path patterns (e.g., `["/students", "/students/{id}"]`)
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.table.iter().map(|route| route.path.clone()).collect()
    }

    /// The table this router was built from.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Print all registered routes to stdout
    ///
    /// Useful for debugging and verifying that the table loaded correctly.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.table.len());
        for route in self.table.iter() {
            println!(
                "[route] {} -> {} (name={}, deferred={})",
                route.path,
                route.view_label(),
                route.name,
                route.view.is_lazy()
            );
        }
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.table.len())
            .finish()
    }
}
