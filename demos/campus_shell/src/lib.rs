//! # Campus Shell
//!
//! Demo application for `wayfinder`: the route table of a small campus
//! administration shell, one view per page, with the `/about` page loaded
//! lazily the way a code-split bundle would be.
//!
//! The only thing the shell exports is [`build_navigator`]; everything else
//! (views, route declarations) is wiring behind it.

pub mod routes;
pub mod views;

pub use routes::build_navigator;
