use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::pattern::PathPattern;
use super::RouteError;
use crate::view::{View, ViewLoadError, ViewRef};

/// One declarative route: a path pattern, a unique name, and the view it renders.
///
/// Routes are plain data. The application declares them in a literal list and hands
/// the list to [`RouteTable::new`]; nothing about a route changes after that.
#[derive(Debug, Clone)]
pub struct Route {
    /// Path pattern as declared (e.g. `/students` or `/students/{id}`)
    pub path: String,
    /// Unique name, the key for reverse routing and named navigation
    pub name: String,
    /// The view this route renders, eager or deferred
    pub view: ViewRef,
}

impl Route {
    /// Create a route from its parts.
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: ViewRef) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    /// Create a route whose view is constructed immediately.
    pub fn eager<V: View + 'static>(
        path: impl Into<String>,
        name: impl Into<String>,
        view: V,
    ) -> Self {
        Self::new(path, name, ViewRef::eager(view))
    }

    /// Create a route whose view is loaded on first navigation.
    ///
    /// The route name doubles as the chunk label, mirroring the named-chunk
    /// convention of code-split bundles.
    pub fn lazy<F>(path: impl Into<String>, name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn View>, ViewLoadError> + Send + Sync + 'static,
    {
        let name = name.into();
        let view = ViewRef::lazy(name.clone(), loader);
        Self {
            path: path.into(),
            name,
            view,
        }
    }

    /// Identification label of the bound view (component name, or chunk label for
    /// a deferred view that has not resolved yet).
    #[must_use]
    pub fn view_label(&self) -> &str {
        self.view.label()
    }
}

/// A route bundled with its compiled pattern. Internal to the table and matcher.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRoute {
    pub route: Arc<Route>,
    pub pattern: PathPattern,
}

/// The validated, immutable route table.
///
/// Built once from a literal list of [`Route`]s. Construction compiles every
/// pattern and enforces the table invariants:
///
/// - no two routes may match the same set of concrete paths (structural
///   uniqueness; parameter names do not differentiate)
/// - no two routes may share a name
///
/// Declaration order is preserved and is the tiebreak for matching, so a table
/// built from the same list always behaves identically.
pub struct RouteTable {
    entries: Vec<CompiledRoute>,
}

impl RouteTable {
    /// Validate and compile a list of routes into a table.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in declaration order:
    /// [`RouteError::RelativePath`] or [`RouteError::InvalidPattern`] for a path
    /// that fails to compile, [`RouteError::DuplicatePath`] for a structural
    /// collision, [`RouteError::DuplicateName`] for a name collision.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut entries = Vec::with_capacity(routes.len());
        let mut seen_shapes: HashMap<String, String> = HashMap::new();
        let mut seen_names: HashMap<String, String> = HashMap::new();

        for route in routes {
            let pattern = PathPattern::compile(&route.path)?;

            if let Some(existing) = seen_shapes.get(pattern.structural_key()) {
                return Err(RouteError::DuplicatePath {
                    path: route.path.clone(),
                    existing: existing.clone(),
                });
            }
            if let Some(existing) = seen_names.get(&route.name) {
                return Err(RouteError::DuplicateName {
                    name: route.name.clone(),
                    existing: existing.clone(),
                });
            }

            seen_shapes.insert(pattern.structural_key().to_string(), route.path.clone());
            seen_names.insert(route.name.clone(), route.path.clone());

            // RT1: Route registered
            debug!(
                path = %route.path,
                name = %route.name,
                view = %route.view_label(),
                deferred = route.view.is_lazy(),
                "Route registered"
            );
            entries.push(CompiledRoute {
                route: Arc::new(route),
                pattern,
            });
        }

        // RT2: Route table validated
        info!(route_count = entries.len(), "Route table validated");
        Ok(Self { entries })
    }

    /// Number of routes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Route>> {
        self.entries.iter().map(|entry| &entry.route)
    }

    pub(crate) fn entries(&self) -> &[CompiledRoute] {
        &self.entries
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let paths: Vec<&str> = self
            .entries
            .iter()
            .map(|entry| entry.route.path.as_str())
            .collect();
        f.debug_struct("RouteTable")
            .field("len", &self.entries.len())
            .field("paths", &paths)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubView(&'static str);

    impl View for StubView {
        fn name(&self) -> &str {
            self.0
        }
        fn render(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn test_table_preserves_declaration_order() {
        let table = RouteTable::new(vec![
            Route::eager("/", "home", StubView("HomeView")),
            Route::eager("/about", "about", StubView("AboutView")),
            Route::eager("/test", "Test", StubView("TestView")),
        ])
        .unwrap();

        let paths: Vec<&str> = table.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/about", "/test"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::new(vec![
            Route::eager("/about", "about", StubView("AboutView")),
            Route::eager("/about", "about-again", StubView("OtherView")),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            RouteError::DuplicatePath { path, existing }
                if path == "/about" && existing == "/about"
        ));
    }

    #[test]
    fn test_structurally_equal_params_rejected() {
        let err = RouteTable::new(vec![
            Route::eager("/users/{id}", "user", StubView("UserView")),
            Route::eager("/users/{slug}", "user-by-slug", StubView("UserView")),
        ])
        .unwrap_err();

        assert!(matches!(err, RouteError::DuplicatePath { .. }));
    }

    #[test]
    fn test_differently_constrained_params_coexist() {
        let table = RouteTable::new(vec![
            Route::eager("/users/{id:[0-9]+}", "user-by-id", StubView("UserView")),
            Route::eager("/users/{slug:[a-z-]+}", "user-by-slug", StubView("UserView")),
        ]);
        assert!(table.is_ok());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::new(vec![
            Route::eager("/", "home", StubView("HomeView")),
            Route::eager("/welcome", "home", StubView("WelcomeView")),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            RouteError::DuplicateName { name, existing }
                if name == "home" && existing == "/"
        ));
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = RouteTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
    }
}
