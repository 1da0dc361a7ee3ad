//! Crate error type
//!
//! Only configuration, transport and I/O failures are errors. Per-task
//! problems (missing points, malformed values, missing completer) are
//! reported as [`TaskWarning`](crate::reports::TaskWarning)s instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Fatal report errors
#[derive(Debug, Error)]
pub enum Error {
    /// Missing credential or bad settings
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The task source rejected or failed a request
    #[error("request failed: {0}")]
    Api(#[from] ApiError),

    /// The task id file could not be read
    #[error("failed to read task id file {path}: {source}")]
    TaskIdFile {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Writing report output failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing delimited rows failed
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Serializing JSON output failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for report operations
pub type Result<T> = std::result::Result<T, Error>;
