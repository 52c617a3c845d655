use std::path::PathBuf;
use thiserror::Error;

/// Errors a search can fail with.
///
/// Only the fail-fast conditions appear here — invalid root, malformed
/// query. Per-node I/O errors during traversal (permission denied, dangling
/// symlinks, race-deleted files) never surface as a `SearchError`; the
/// engine skips the node, logs it at `debug`, and keeps walking.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Root path missing, not a directory, or unreadable. Raised before
    /// any results are produced.
    #[error("invalid root: {}", path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// `use_regex` was set and `keyword` did not compile. Raised before
    /// traversal begins.
    #[error("invalid pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Both size bounds positive and inverted.
    #[error("invalid size range: min {min} > max {max}")]
    InvalidSizeRange { min: i64, max: i64 },

    /// A query arriving over the process boundary failed typed decoding.
    #[error("malformed request")]
    MalformedRequest(#[source] serde_json::Error),
}

impl SearchError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::InvalidRoot { path, .. } => Some(path),
            _ => None,
        }
    }
}
