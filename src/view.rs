//! # View Module
//!
//! Views are the renderable units bound to routes. The router never looks inside a
//! view; it only needs a stable component name for logs and assertions and a way to
//! obtain the view when a navigation commits.
//!
//! ## Eager vs. Deferred
//!
//! A [`ViewRef`] is either:
//!
//! - **Eager**: the view exists from table-construction time onward. This is the
//!   default for application pages.
//! - **Lazy**: the route carries a loader instead of a view. The loader runs on the
//!   first navigation that matches the route (the "visit the bundle" moment) and its
//!   result is memoized in a one-shot cell. Later navigations reuse the cached view
//!   without re-invoking the loader.
//!
//! ## Failure Semantics
//!
//! A loader failure does not poison the cell: the error propagates to the caller as a
//! rejected navigation and the next navigation to the same route invokes the loader
//! again. Only a successful resolution is cached.

use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// A renderable UI unit bound to a route.
///
/// Implementations stay trivial on purpose: the navigation layer treats views as
/// opaque and only relies on [`View::name`] for identification.
pub trait View: Send + Sync {
    /// Stable component name (e.g. `"HomeView"`), used in logs, dumps, and tests.
    fn name(&self) -> &str;

    /// Render the view to markup.
    fn render(&self) -> String;
}

/// Loader closure for a deferred view.
///
/// Invoked at most once per successful resolution; may be retried after a failure.
pub type ViewLoader = Box<dyn Fn() -> Result<Arc<dyn View>, ViewLoadError> + Send + Sync>;

/// Failure to resolve a deferred view.
///
/// Carries the chunk label of the deferred bundle and a human-readable reason. The
/// navigator wraps this into a rejected navigation; nothing is retried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLoadError {
    /// Label of the deferred chunk that failed to load (e.g. `"about"`)
    pub chunk: String,
    /// Human-readable failure reason
    pub message: String,
}

impl ViewLoadError {
    /// Create a new load error for the given chunk label.
    pub fn new(chunk: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            chunk: chunk.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ViewLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to load deferred view chunk '{}': {}",
            self.chunk, self.message
        )
    }
}

impl std::error::Error for ViewLoadError {}

/// A deferred view: a one-shot memoized factory.
///
/// Wraps a loader closure and a [`OnceCell`]. The first successful [`resolve`]
/// caches the view; subsequent resolutions return the cached reference without
/// re-invoking the loader. A failed load leaves the cell empty so the next
/// navigation retries.
///
/// [`resolve`]: LazyView::resolve
pub struct LazyView {
    /// Chunk label for logs and dumps (mirrors the bundle name of the original
    /// code-splitting pattern)
    chunk: String,
    cell: OnceCell<Arc<dyn View>>,
    loader: ViewLoader,
}

impl LazyView {
    /// Create a deferred view with the given chunk label and loader.
    pub fn new<F>(chunk: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn View>, ViewLoadError> + Send + Sync + 'static,
    {
        Self {
            chunk: chunk.into(),
            cell: OnceCell::new(),
            loader: Box::new(loader),
        }
    }

    /// Chunk label this deferred view loads.
    #[must_use]
    pub fn chunk(&self) -> &str {
        &self.chunk
    }

    /// Whether the loader has already resolved successfully.
    #[must_use]
    pub fn resolved(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the cached view without triggering a load.
    #[must_use]
    pub fn peek(&self) -> Option<Arc<dyn View>> {
        self.cell.get().map(Arc::clone)
    }

    /// Resolve the view, invoking the loader on first use.
    ///
    /// Concurrent callers race on the cell: one runs the loader, the rest block and
    /// receive the cached result. A successful resolution is permanent for the
    /// process lifetime; an error is returned to the caller and the cell stays
    /// empty.
    pub fn resolve(&self) -> Result<Arc<dyn View>, ViewLoadError> {
        // Fast path: already resolved, skip the load logging entirely.
        if let Some(view) = self.cell.get() {
            return Ok(Arc::clone(view));
        }

        // LV1: Deferred view load start
        debug!(chunk = %self.chunk, "Deferred view load start");
        let load_start = Instant::now();

        match self.cell.get_or_try_init(|| (self.loader)()) {
            Ok(view) => {
                // LV2: Deferred view resolved
                info!(
                    chunk = %self.chunk,
                    view = %view.name(),
                    duration_us = load_start.elapsed().as_micros() as u64,
                    "Deferred view resolved"
                );
                Ok(Arc::clone(view))
            }
            Err(err) => {
                // LV3: Deferred view load failed; cell stays empty so the next
                // navigation retries the loader
                error!(
                    chunk = %self.chunk,
                    error = %err,
                    duration_us = load_start.elapsed().as_micros() as u64,
                    "Deferred view load failed"
                );
                Err(err)
            }
        }
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("chunk", &self.chunk)
            .field("resolved", &self.resolved())
            .finish()
    }
}

/// Reference to a view: either resolved at table-construction time or deferred to
/// the first matching navigation.
#[derive(Clone)]
pub enum ViewRef {
    /// Resolved at table-construction time
    Eager(Arc<dyn View>),
    /// Resolved on first matching navigation, then memoized
    Lazy(Arc<LazyView>),
}

impl ViewRef {
    /// Wrap a view value as an eager reference.
    pub fn eager<V: View + 'static>(view: V) -> Self {
        ViewRef::Eager(Arc::new(view))
    }

    /// Wrap an already-shared view as an eager reference.
    #[must_use]
    pub fn shared(view: Arc<dyn View>) -> Self {
        ViewRef::Eager(view)
    }

    /// Create a deferred reference with the given chunk label and loader.
    pub fn lazy<F>(chunk: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn View>, ViewLoadError> + Send + Sync + 'static,
    {
        ViewRef::Lazy(Arc::new(LazyView::new(chunk, loader)))
    }

    /// Resolve the referenced view, triggering a deferred load if necessary.
    pub fn resolve(&self) -> Result<Arc<dyn View>, ViewLoadError> {
        match self {
            ViewRef::Eager(view) => Ok(Arc::clone(view)),
            ViewRef::Lazy(lazy) => lazy.resolve(),
        }
    }

    /// Return the view if it is already resolved, without triggering a load.
    #[must_use]
    pub fn peek(&self) -> Option<Arc<dyn View>> {
        match self {
            ViewRef::Eager(view) => Some(Arc::clone(view)),
            ViewRef::Lazy(lazy) => lazy.peek(),
        }
    }

    /// Whether this reference defers resolution to first navigation.
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        matches!(self, ViewRef::Lazy(_))
    }

    /// Identification label: the view's component name for eager references, the
    /// chunk label for deferred ones.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            ViewRef::Eager(view) => view.name(),
            ViewRef::Lazy(lazy) => lazy.chunk(),
        }
    }
}

impl fmt::Debug for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewRef::Eager(view) => f.debug_tuple("Eager").field(&view.name()).finish(),
            ViewRef::Lazy(lazy) => f
                .debug_struct("Lazy")
                .field("chunk", &lazy.chunk())
                .field("resolved", &lazy.resolved())
                .finish(),
        }
    }
}
