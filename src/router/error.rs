//! Router error types
//!
//! Configuration errors raised while building the route table, and the
//! terminal NotFound states of navigation.

use thiserror::Error;

/// Errors that can occur while registering or resolving routes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Two routes were registered with the same path
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    /// Two routes were registered with the same name
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    /// Route path failed validation
    #[error("Malformed route path {path:?}: {reason}")]
    MalformedPath { path: String, reason: &'static str },

    /// No route matches the requested path
    #[error("No route matches path: {0}")]
    NotFound(String),

    /// No route carries the requested name
    #[error("No route named: {0}")]
    NameNotFound(String),

    /// Location does not live under the history base
    #[error("Location {location:?} is outside base {base:?}")]
    OutsideBase { location: String, base: String },
}

impl RouteError {
    /// True for the terminal "nothing to render" states
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RouteError::NotFound(_) | RouteError::NameNotFound(_) | RouteError::OutsideBase { .. }
        )
    }
}

/// Result type alias for router operations
pub type RouteResult<T> = Result<T, RouteError>;
