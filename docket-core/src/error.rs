//! Error types for the docket ecosystem.

use thiserror::Error;

/// Errors that can occur in docket operations.
///
/// The first two variants carry the distinction the rest of the client
/// relies on: `Connection` means the request never completed, `Api` means
/// the backend answered with `success = false`.
#[derive(Error, Debug)]
pub enum DocketError {
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Not logged in. Run `docket login` first")]
    NoSession,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for docket operations.
pub type DocketResult<T> = Result<T, DocketError>;
