use std::fmt;

/// Errors raised while building a route table or reverse-routing against it.
///
/// All variants are construction-time or caller-input problems; nothing here is
/// transient. A table that constructs successfully stays valid for the process
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Two routes would match the same set of concrete paths
    DuplicatePath {
        /// Path of the route being registered
        path: String,
        /// Path of the earlier route it collides with
        existing: String,
    },
    /// Two routes declare the same name
    DuplicateName {
        /// The contested name
        name: String,
        /// Path of the earlier route that owns the name
        existing: String,
    },
    /// Route path does not start with `/`
    RelativePath {
        /// The offending path as declared
        path: String,
    },
    /// Route path could not be compiled into a pattern
    InvalidPattern {
        /// The offending path as declared
        path: String,
        /// What was wrong with it
        reason: String,
    },
    /// Reverse routing was asked to build a path without a required parameter
    MissingParam {
        /// Pattern being interpolated
        path: String,
        /// Name of the parameter no value was supplied for
        param: String,
    },
    /// Reverse routing was asked for a name the table does not contain
    UnknownName {
        /// The name nothing is registered under
        name: String,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::DuplicatePath { path, existing } => write!(
                f,
                "route path '{path}' collides with already-registered '{existing}'; every table entry must match a distinct set of paths"
            ),
            RouteError::DuplicateName { name, existing } => write!(
                f,
                "route name '{name}' is already taken by route '{existing}'; names are the reverse-routing key and must be unique"
            ),
            RouteError::RelativePath { path } => write!(
                f,
                "route path '{path}' must be absolute; prefix it with '/'"
            ),
            RouteError::InvalidPattern { path, reason } => {
                write!(f, "route path '{path}' is not a valid pattern: {reason}")
            }
            RouteError::MissingParam { path, param } => write!(
                f,
                "cannot build a concrete path for '{path}': no value supplied for parameter '{param}'"
            ),
            RouteError::UnknownName { name } => write!(
                f,
                "no route is named '{name}'; named navigation requires a registered route name"
            ),
        }
    }
}

impl std::error::Error for RouteError {}
