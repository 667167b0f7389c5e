//! # Router Module
//!
//! Path matching and route resolution over a validated
//! [`RouteTable`](crate::route::RouteTable).
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Indexing the route table for fast lookups by path and by name
//! - Matching concrete paths to registered routes
//! - Extracting path parameters from matched routes
//! - Reverse routing: building a concrete path from a route name and parameters
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Indexing**: When the router is created, the compiled patterns of the table
//!    are inserted into a segment tree and a name index is built. This happens once;
//!    the router is immutable afterwards.
//!
//! 2. **Matching**: Each candidate path is split into percent-decoded segments and
//!    walked through the tree. Literal segments are tried before parameter segments
//!    at every depth, so `/students/enrolled` wins over `/students/{id}` no matter
//!    how the table orders them.
//!
//! ## Example
//!
//! ```rust,ignore
//! use wayfinder::route::{Route, RouteTable};
//! use wayfinder::router::Router;
//!
//! let table = RouteTable::new(routes)?;
//! let router = Router::new(table);
//!
//! if let Some(m) = router.match_path("/students/123") {
//!     println!("Route: {}", m.name);
//!     println!("Path params: {:?}", m.path_params);
//! }
//! ```
//!
//! ## Performance
//!
//! Matching cost is proportional to path length, not table size:
//! - Sub-microsecond matching for typical application paths
//! - Minimal allocations while matching
//! - O(k) complexity where k is the number of path segments

mod core;
mod trie;


pub use core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
