//! Error types for artifact fetching.

use std::path::PathBuf;

/// Errors that can occur while materializing an artifact.
///
/// All variants are fatal to the requesting call: there are no retries,
/// and a failed fetch never leaves a partial file at the canonical path.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request could not be completed.
    #[error("failed to fetch {url}: {source}")]
    Http {
        /// The URL that was requested.
        url: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    Status {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// An I/O error occurred while writing into the local repository.
    #[error("artifact cache I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
