use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the object-store sinks.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store rejected the write (permissions, quota, transient fault).
    #[error("unexpected HTTP status {status} storing {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The configured store endpoint cannot be parsed.
    #[error("invalid store endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Filesystem failure writing the object.
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
