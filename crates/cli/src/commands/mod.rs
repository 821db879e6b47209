//! Command implementations for `mp-cli`.

pub mod admin;
pub mod register;

use marketplace_client::{ApiError, ConfigError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The requested record does not exist or the ID was unset.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// The API has no endpoint for this action on this resource.
    #[error("{resource} does not support {action}")]
    Unsupported {
        resource: &'static str,
        action: &'static str,
    },
}
