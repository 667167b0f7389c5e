//! # Navigator Module
//!
//! The application-facing handle over a route table.
//!
//! [`create_router`] is the assembly point: it takes a [`RouterOptions`] holding a
//! history strategy and the declarative route list, validates and indexes the
//! table, and returns a [`Navigator`] seated at the start location. Everything an
//! application does afterwards goes through that navigator:
//!
//! - [`Navigator::push`] / [`Navigator::replace`] commit path navigations
//! - [`Navigator::push_named`] navigates by route name (reverse routing)
//! - [`Navigator::back`], [`Navigator::forward`], [`Navigator::go`] traverse the
//!   session history
//! - [`Navigator::current`] reads the committed [`RouteLocation`] without locking
//!
//! A rejected navigation (unmatched path, unknown name, missing parameter, or a
//! deferred view that fails to load) returns a [`NavigationError`] and leaves both
//! the current location and the history stack exactly as they were.

mod core;
mod error;
mod location;

pub use self::core::{create_router, Navigator, RouterOptions};
pub use error::NavigationError;
pub use location::RouteLocation;
