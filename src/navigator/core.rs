use arc_swap::ArcSwap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tracing::{debug, info, warn};
use url::form_urlencoded;

use super::{NavigationError, RouteLocation};
use crate::history::{HistoryMode, HistoryStack};
use crate::route::{Route, RouteError, RouteTable};
use crate::router::{ParamVec, Router};

/// Options for assembling a navigator: the history strategy plus the route list.
///
/// The route list is consumed by [`create_router`]; declaration order is the
/// tiebreak wherever matching is otherwise ambiguous, so the list should read
/// top-down in the order the application wants routes considered.
#[derive(Debug)]
pub struct RouterOptions {
    /// History strategy hrefs are projected with
    pub history: HistoryMode,
    /// Declarative route list, in declaration order
    pub routes: Vec<Route>,
}

impl RouterOptions {
    /// Bundle a history strategy with a route list.
    #[must_use]
    pub fn new(history: HistoryMode, routes: Vec<Route>) -> Self {
        Self { history, routes }
    }
}

/// Assemble a [`Navigator`] from options.
///
/// This is the single entry point applications use: it validates and compiles
/// the route table, indexes it for forward and reverse lookups, and seats the
/// navigator at the start location. The table is immutable from here on.
///
/// # Errors
///
/// Returns a [`RouteError`] when the route list fails validation (a path that
/// does not compile, a structural path collision, or a name collision). The
/// navigator is only handed out for a table with none of these problems.
///
/// # Example
///
/// ```rust,ignore
/// let navigator = create_router(RouterOptions::new(
///     HistoryMode::web(base_from_env()),
///     routes,
/// ))?;
/// navigator.push("/about")?;
/// ```
pub fn create_router(options: RouterOptions) -> Result<Navigator, RouteError> {
    let RouterOptions { history, routes } = options;
    let table = RouteTable::new(routes)?;
    let router = Router::new(table);

    // NV1: Navigator ready
    info!(
        route_count = router.table().len(),
        history = %history,
        "Navigator ready"
    );
    Ok(Navigator::from_parts(router, history))
}

enum CommitMode {
    Push,
    Replace,
}

/// The application-facing navigation handle.
///
/// Owns the indexed router, the active [`HistoryMode`], the session history
/// stack, and the current location. Navigations are serialized through a mutex
/// around the stack; reads of the current location go through an [`ArcSwap`]
/// and never block.
///
/// All methods take `&self`, so a `Navigator` is typically wrapped in an `Arc`
/// and shared across threads.
pub struct Navigator {
    router: Arc<Router>,
    mode: HistoryMode,
    stack: Mutex<HistoryStack>,
    current: ArcSwap<RouteLocation>,
}

impl Navigator {
    fn from_parts(router: Router, mode: HistoryMode) -> Self {
        Self {
            router: Arc::new(router),
            mode,
            stack: Mutex::new(HistoryStack::new("/")),
            current: ArcSwap::from_pointee(RouteLocation::start()),
        }
    }

    /// The location of the last committed navigation.
    ///
    /// Before the first commit this is the start sentinel
    /// ([`RouteLocation::is_start`] returns `true`). Lock-free; the returned
    /// snapshot stays valid even while later navigations commit.
    #[must_use]
    pub fn current(&self) -> Arc<RouteLocation> {
        self.current.load_full()
    }

    /// The history mode this navigator projects hrefs with.
    #[must_use]
    pub fn mode(&self) -> &HistoryMode {
        &self.mode
    }

    /// The indexed router behind this navigator.
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Navigate to a target path, pushing a new history entry.
    ///
    /// The target is an application path with an optional query string (e.g.,
    /// `/students/17?tab=grades`); fragments are dropped. Matching resolves the
    /// route, the route's view is resolved (loading it on first visit for a
    /// deferred route), and the committed location becomes [`current`].
    ///
    /// # Errors
    ///
    /// [`NavigationError::NotFound`] when no route matches, or
    /// [`NavigationError::ViewLoad`] when a deferred view fails to load. Either
    /// way the current location and the history stack are untouched, and a
    /// failed deferred load is retried on the next attempt.
    ///
    /// [`current`]: Navigator::current
    pub fn push(&self, target: &str) -> Result<Arc<RouteLocation>, NavigationError> {
        // NV2: Navigation attempt
        debug!(target = %target, op = "push", "Navigation attempt");
        let nav_start = Instant::now();

        let location = self
            .resolve_target(target)
            .map_err(|err| self.reject("push", target, err))?;
        let location = self.commit(location, &CommitMode::Push);

        // NV3: Navigation committed
        info!(
            op = "push",
            path = %location.path,
            name = ?location.name,
            view = ?location.view,
            duration_us = nav_start.elapsed().as_micros() as u64,
            "Navigation committed"
        );
        Ok(location)
    }

    /// Navigate to a target path, replacing the current history entry.
    ///
    /// Identical to [`push`](Navigator::push) except that the current stack
    /// entry is overwritten instead of a new one being appended, so the forward
    /// branch (if any) survives.
    ///
    /// # Errors
    ///
    /// Same as [`push`](Navigator::push).
    pub fn replace(&self, target: &str) -> Result<Arc<RouteLocation>, NavigationError> {
        debug!(target = %target, op = "replace", "Navigation attempt");
        let nav_start = Instant::now();

        let location = self
            .resolve_target(target)
            .map_err(|err| self.reject("replace", target, err))?;
        let location = self.commit(location, &CommitMode::Replace);

        info!(
            op = "replace",
            path = %location.path,
            name = ?location.name,
            view = ?location.view,
            duration_us = nav_start.elapsed().as_micros() as u64,
            "Navigation committed"
        );
        Ok(location)
    }

    /// Navigate to a route by name, pushing a new history entry.
    ///
    /// Reverse routing builds the concrete path from the named route's pattern
    /// and the supplied parameters, then the navigation proceeds exactly like
    /// [`push`](Navigator::push).
    ///
    /// # Errors
    ///
    /// [`NavigationError::UnknownName`] when no route has the name,
    /// [`NavigationError::MissingParam`] when a required parameter value is
    /// absent, plus everything [`push`](Navigator::push) can return.
    pub fn push_named(
        &self,
        name: &str,
        params: &[(&str, &str)],
    ) -> Result<Arc<RouteLocation>, NavigationError> {
        // NV4: Named navigation resolves to a path first, then pushes like any
        // other navigation
        debug!(name = %name, params = ?params, op = "push_named", "Named navigation attempt");

        let path = match self.router.path_for(name, params) {
            Ok(path) => path,
            Err(RouteError::MissingParam { param, .. }) => {
                return Err(self.reject(
                    "push_named",
                    name,
                    NavigationError::MissingParam {
                        name: name.to_string(),
                        param,
                    },
                ))
            }
            // Anything else out of reverse routing means the name itself was bad.
            Err(_) => {
                return Err(self.reject(
                    "push_named",
                    name,
                    NavigationError::UnknownName {
                        name: name.to_string(),
                    },
                ))
            }
        };
        self.push(&path)
    }

    /// Step one entry back in the session history.
    ///
    /// Returns the location the navigator lands on, or `None` when there is no
    /// earlier entry (the cursor does not move in that case).
    pub fn back(&self) -> Option<Arc<RouteLocation>> {
        self.go(-1)
    }

    /// Step one entry forward in the session history.
    ///
    /// Returns the location the navigator lands on, or `None` when there is no
    /// forward entry left.
    pub fn forward(&self) -> Option<Arc<RouteLocation>> {
        self.go(1)
    }

    /// Move the history cursor by `delta` entries and re-enter that location.
    ///
    /// `go(0)` re-resolves the current entry. An out-of-range delta returns
    /// `None` and moves nothing, same as a browser ignoring an impossible
    /// `history.go`.
    pub fn go(&self, delta: isize) -> Option<Arc<RouteLocation>> {
        let mut stack = self.lock_stack();
        let Some(target) = stack.peek(delta).map(str::to_string) else {
            let position = stack.position();
            let entries = stack.len();
            drop(stack);
            // NV7: Out-of-range traversal is ignored; cursor unchanged
            debug!(delta, position, entries, "History traversal out of range");
            return None;
        };

        match self.resolve_target(&target) {
            Ok(location) => {
                let location = Arc::new(location);
                stack.go(delta);
                self.current.store(Arc::clone(&location));
                drop(stack);
                // NV6: History traversal
                debug!(delta, path = %location.path, "History traversal");
                Some(location)
            }
            Err(err) => {
                // Stack entries resolved when they were committed; if
                // re-resolution fails anyway, the cursor has not moved yet and
                // the traversal is simply abandoned.
                drop(stack);
                warn!(delta, error = %err, "History traversal rejected");
                None
            }
        }
    }

    /// Snapshot of the history stack entries, oldest first.
    #[must_use]
    pub fn history_snapshot(&self) -> Vec<String> {
        self.lock_stack().entries().to_vec()
    }

    /// Print all registered routes to stdout.
    pub fn dump_routes(&self) {
        self.router.dump_routes();
    }

    /// Resolve a target into a location without touching navigator state.
    ///
    /// Deferred views are resolved here, so a successful return means the
    /// location is fully renderable before anything commits.
    fn resolve_target(&self, target: &str) -> Result<RouteLocation, NavigationError> {
        let (raw_path, query_str) = split_target(target);
        let path = normalize_path(raw_path);

        let Some(route_match) = self.router.match_path(&path) else {
            return Err(NavigationError::NotFound { path });
        };
        let query = parse_query(query_str);

        let view = route_match
            .route
            .view
            .resolve()
            .map_err(|source| NavigationError::ViewLoad {
                path: path.clone(),
                source,
            })?;

        let full_path = if query_str.is_empty() {
            path.clone()
        } else {
            format!("{path}?{query_str}")
        };

        Ok(RouteLocation {
            href: self.mode.href(&full_path),
            path,
            full_path,
            name: Some(route_match.name),
            params: route_match.path_params,
            query,
            view: Some(view.name().to_string()),
        })
    }

    fn commit(&self, location: RouteLocation, mode: &CommitMode) -> Arc<RouteLocation> {
        let location = Arc::new(location);
        // The stack lock is held across the store so concurrent commits keep the
        // stack and the current location in the same order.
        let mut stack = self.lock_stack();
        match mode {
            CommitMode::Push => stack.push(location.full_path.clone()),
            CommitMode::Replace => stack.replace(location.full_path.clone()),
        }
        self.current.store(Arc::clone(&location));
        drop(stack);
        location
    }

    fn reject(&self, op: &'static str, target: &str, err: NavigationError) -> NavigationError {
        // NV5: Navigation rejected; current location and history are untouched
        warn!(op, target = %target, error = %err, "Navigation rejected");
        err
    }

    fn lock_stack(&self) -> MutexGuard<'_, HistoryStack> {
        match self.stack.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("routes", &self.router.table().len())
            .field("history", &self.mode.kind())
            .finish()
    }
}

/// Split a navigation target into path and query, dropping any fragment.
fn split_target(target: &str) -> (&str, &str) {
    let without_fragment = match target.split_once('#') {
        Some((head, _)) => head,
        None => target,
    };
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    }
}

/// Coerce a target path into absolute form.
fn normalize_path(raw: &str) -> String {
    if raw.is_empty() {
        "/".to_string()
    } else if raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("/{raw}")
    }
}

/// Parse a query string into a [`ParamVec`], preserving duplicate keys in order.
fn parse_query(query: &str) -> ParamVec {
    if query.is_empty() {
        return ParamVec::default();
    }
    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (Arc::from(key.as_ref()), value.into_owned()))
        .collect()
}
