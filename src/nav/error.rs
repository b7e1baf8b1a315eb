//! Typed navigation failures.
//!
//! Registry and dispatcher operations either succeed or fail with one of
//! these variants; none of them leave the back-stack partially mutated.

use thiserror::Error;

/// Errors produced by the navigation layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    /// Requested route is not in the registry
    #[error("no destination matches route '{route}'")]
    NotFound { route: String },

    /// A registered route has no screen provider (configuration defect)
    #[error("no screen provider registered for route '{route}'")]
    MissingProvider { route: String },

    /// Two destinations were registered with the same route
    #[error("route '{route}' is already registered")]
    DuplicateRoute { route: String },

    /// Route template could not be parsed
    #[error("invalid route template '{route}': {reason}")]
    BadTemplate { route: String, reason: String },

    /// A required argument was not supplied when formatting a path
    #[error("route '{route}' is missing required argument '{name}'")]
    MissingArgument { route: String, name: String },

    /// External URI could not be mapped to a destination
    #[error("cannot handle deep link '{uri}': {reason}")]
    BadDeepLink { uri: String, reason: String },
}
