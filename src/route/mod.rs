//! # Route Module
//!
//! Declarative route definitions and the validated, immutable table built from them.
//!
//! A [`Route`] is a plain triple of path pattern, unique name, and [`ViewRef`]. The
//! application lists its routes once, hands them to [`RouteTable::new`], and never
//! mutates them afterwards. Construction is where all validation happens: patterns
//! are compiled, structural collisions and name collisions are rejected, and the
//! resulting table preserves declaration order for deterministic matching.
//!
//! [`ViewRef`]: crate::view::ViewRef

mod error;
mod pattern;
mod types;

pub use error::RouteError;
pub use pattern::{PathPattern, Segment};
pub use types::{Route, RouteTable};

pub(crate) use types::CompiledRoute;
