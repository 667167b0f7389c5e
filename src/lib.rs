//! # Wayfinder
//!
//! **Declarative route tables and navigation for Rust single-page shells.**
//!
//! Wayfinder turns a literal list of `(path, name, view)` declarations into a
//! validated, immutable route table and hands back a [`Navigator`]: the single
//! handle an application shell uses to move between views, read the current
//! location, and walk its session history. The table is built once at startup;
//! everything afterwards is lock-free reads and short critical sections.
//!
//! ## Architecture
//!
//! - [`route`] - route declarations, pattern compilation, table validation
//! - [`view`] - the [`View`] trait, eager and deferred view references
//! - [`router`] - segment-tree matching and reverse routing over the table
//! - [`history`] - history strategies (web, hash, memory) and the entry stack
//! - [`navigator`] - the application-facing handle assembled by [`create_router`]
//!
//! ## Navigation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App as Application
//!     participant Nav as Navigator
//!     participant R as Router
//!     participant V as ViewRef
//!
//!     App->>Nav: push("/about?tab=team")
//!     Nav->>R: match_path("/about")
//!     alt no route matches
//!         R-->>Nav: None
//!         Nav-->>App: Err(NotFound) - location unchanged
//!     else route matched
//!         R-->>Nav: RouteMatch
//!         Nav->>V: resolve()
//!         alt deferred load fails
//!             V-->>Nav: Err(ViewLoadError)
//!             Nav-->>App: Err(ViewLoad) - retried next time
//!         else view ready
//!             V-->>Nav: Arc<dyn View>
//!             Nav->>Nav: commit (stack push + location swap)
//!             Nav-->>App: Arc<RouteLocation>
//!         end
//!     end
//! ```
//!
//! ## Key Patterns
//!
//! - **Build once, navigate forever**: all validation (pattern compilation,
//!   structural path uniqueness, name uniqueness) happens in [`create_router`];
//!   a navigator that exists is always backed by a coherent table.
//! - **Literals beat parameters**: `/students/enrolled` wins over
//!   `/students/{id}` at every tree depth, regardless of declaration order, and
//!   declaration order settles any remaining ties. Matching is deterministic.
//! - **Deferred views are one-shot**: a lazy route's loader runs on the first
//!   navigation that commits to it and the result is memoized; a failed load is
//!   surfaced as a rejected navigation and retried on the next attempt.
//! - **Rejections change nothing**: an unmatched path, an unknown name, or a
//!   failed view load leaves the current location and the history stack exactly
//!   as they were.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wayfinder::{create_router, HistoryMode, Route, RouterOptions, View};
//!
//! struct HomeView;
//! impl View for HomeView {
//!     fn name(&self) -> &str {
//!         "HomeView"
//!     }
//!     fn render(&self) -> String {
//!         "<main>home</main>".to_string()
//!     }
//! }
//!
//! struct AboutView;
//! impl View for AboutView {
//!     fn name(&self) -> &str {
//!         "AboutView"
//!     }
//!     fn render(&self) -> String {
//!         "<main>about</main>".to_string()
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let routes = vec![
//!         Route::eager("/", "home", HomeView),
//!         Route::lazy("/about", "about", || {
//!             Ok(Arc::new(AboutView) as Arc<dyn View>)
//!         }),
//!     ];
//!
//!     let navigator = create_router(RouterOptions::new(HistoryMode::memory(), routes))?;
//!
//!     let location = navigator.push("/about")?;
//!     assert_eq!(location.view.as_deref(), Some("AboutView"));
//!     assert_eq!(location.href, "/about");
//!
//!     let home = navigator.back().expect("one entry behind");
//!     assert_eq!(home.path, "/");
//!     Ok(())
//! }
//! ```
//!
//! ## Runtime Considerations
//!
//! Wayfinder is runtime-agnostic: no async, no background tasks. Deferred view
//! loaders run inline on the navigating thread, so loaders should stay cheap or
//! do their own scheduling. [`Navigator`] is `Send + Sync`; wrap it in an `Arc`
//! and share it. Reads of the current location never block, and concurrent
//! first navigations to the same deferred route resolve its loader once.

pub mod history;
pub mod navigator;
pub mod route;
pub mod router;
pub mod view;

pub use history::{base_from_env, HistoryMode};
pub use navigator::{create_router, NavigationError, Navigator, RouteLocation, RouterOptions};
pub use route::{Route, RouteError, RouteTable};
pub use router::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
pub use view::{LazyView, View, ViewLoadError, ViewRef};
