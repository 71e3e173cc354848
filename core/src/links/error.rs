//! Error types for reference link loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors while fetching or parsing the reference link file.
///
/// None of these reach the user: the loader logs them and falls back to an
/// empty index.
#[derive(Debug, Error)]
pub enum LinkSourceError {
    #[error("failed to read reference file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request for {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("reference file is empty")]
    Empty,

    #[error("reference file header is missing column '{column}'")]
    MissingColumn { column: &'static str },
}
