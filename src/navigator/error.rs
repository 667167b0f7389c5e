use std::fmt;

use crate::view::ViewLoadError;

/// Errors raised by navigation attempts.
///
/// A failed navigation never changes the current location or the history stack;
/// the caller decides whether to retry, fall back, or surface the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No route matched the requested path
    NotFound {
        /// The path that matched nothing
        path: String,
    },
    /// Named navigation referenced a name the table does not contain
    UnknownName {
        /// The name nothing is registered under
        name: String,
    },
    /// Named navigation omitted a parameter the route's pattern requires
    MissingParam {
        /// Name of the route being navigated to
        name: String,
        /// The parameter no value was supplied for
        param: String,
    },
    /// The matched route's deferred view failed to load
    ViewLoad {
        /// Path of the navigation that triggered the load
        path: String,
        /// The underlying load failure
        source: ViewLoadError,
    },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::NotFound { path } => {
                write!(f, "no route matched path '{path}'")
            }
            NavigationError::UnknownName { name } => {
                write!(f, "no route is named '{name}'")
            }
            NavigationError::MissingParam { name, param } => write!(
                f,
                "navigation to '{name}' is missing a value for parameter '{param}'"
            ),
            NavigationError::ViewLoad { path, source } => {
                write!(f, "navigation to '{path}' failed: {source}")
            }
        }
    }
}

impl std::error::Error for NavigationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavigationError::ViewLoad { source, .. } => Some(source),
            _ => None,
        }
    }
}
