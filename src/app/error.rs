//! Bootstrap error types
//!
//! Every bootstrap failure is fatal: the application never mounts.

use thiserror::Error;

use crate::config::ConfigError;
use crate::router::RouteError;

/// Errors that abort application startup
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Route table failed validation
    #[error("Route configuration error: {0}")]
    Route(#[from] RouteError),

    /// Configuration is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Host page has no element for the mount selector
    #[error("Mount target not found: {0}")]
    MountTargetMissing(String),

    /// Mount attempted before a required plugin was attached
    #[error("Cannot mount before the {0} is attached")]
    NotReady(&'static str),

    /// Same plugin attached twice
    #[error("Plugin already installed: {0}")]
    DuplicatePlugin(&'static str),
}

/// Result type alias for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;
