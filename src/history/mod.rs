//! # History Module
//!
//! Pluggable history strategies and the session-local entry stack behind
//! back/forward navigation.
//!
//! A [`HistoryMode`] decides how an application path is projected into a full
//! href: plain paths under a base prefix (`Web`), fragment-encoded paths
//! (`WebHash`), or no projection at all (`Memory`, for tests and headless use).
//! The base prefix comes from the deployment, usually via [`base_from_env`], so
//! the same route table works at `/` and under `/some/subpath` without edits.
//!
//! The [`HistoryStack`] is the linear back/forward record: pushing while
//! somewhere in the middle of the stack drops the forward branch, exactly like a
//! browser session history.

mod mode;
mod stack;

pub use mode::{base_from_env, normalize_base, HistoryMode, BASE_URL_ENV};
pub use stack::HistoryStack;
