//! # fsearch
//!
//! Embeddable filesystem search engine — metadata filters, regex keywords,
//! cooperative cancellation.
//!
//! fsearch walks a directory subtree, evaluates every node against a
//! [`SearchOptions`] query (keyword, extensions, parent-path substring, size
//! bounds), and delivers matching [`FileEntry`] rows. It owns the walk
//! engine, the query semantics, the error taxonomy, and the builder API. It
//! does **not** own any UI, IPC transport, or persisted index — those belong
//! to the host application.
//!
//! # Quick Start
//!
//! ```rust
//! use fsearch::SearchOptions;
//!
//! let dir = tempfile::tempdir()?;
//! std::fs::write(dir.path().join("report_q1.csv"), b"q1")?;
//! std::fs::write(dir.path().join("notes.txt"), b"notes")?;
//!
//! let results = fsearch::search(dir.path())
//!     .options(SearchOptions {
//!         keyword: "report".into(),
//!         ..Default::default()
//!     })
//!     .run()?;
//!
//! assert_eq!(results.entries.len(), 1);
//! assert_eq!(results.entries[0].ext, "csv");
//! assert!(!results.entries[0].is_dir);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Streaming and cancellation
//!
//! Results can stream to the caller as they are found, and a long search can
//! be stopped cleanly from another thread:
//!
//! ```rust
//! use fsearch::CancelToken;
//!
//! let dir = tempfile::tempdir()?;
//! std::fs::write(dir.path().join("a.txt"), b"a")?;
//!
//! let token = CancelToken::new();
//! let mut seen = Vec::new();
//!
//! let results = fsearch::search(dir.path())
//!     .cancel(token.clone())
//!     .run_with(|entry| seen.push(entry.path.clone()))?;
//!
//! assert_eq!(seen.len(), 1);
//! assert!(!results.cancelled);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Cancellation is a normal termination path, not an error: the search
//! returns `Ok` with [`Results::cancelled`] set and keeps everything
//! delivered before the signal.
//!
//! # Wire compatibility
//!
//! [`FileEntry`] and [`SearchOptions`] serialize with the exact field names
//! existing frontends expect (`id`, `path`, `name`, `size`, `mod_time`,
//! `is_dir`, `ext`; `keyword`, `use_regex`, `extensions`, `path_filter`,
//! `min_size`, `max_size`). Queries arriving as JSON decode through
//! [`SearchOptions::from_json`], which rejects type mismatches with
//! [`SearchError::MalformedRequest`] instead of coercing them.

#![forbid(unsafe_code)]

mod builder;
mod cancel;
mod engine;
mod entry;
mod error;
mod options;
mod query;
mod results;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use cancel::CancelToken;
pub use entry::FileEntry;
pub use error::SearchError;
pub use options::SearchOptions;
pub use results::{Results, ScanStats};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] rooted at `root`.
///
/// The root is validated when the search runs: it must exist, be readable,
/// and be a directory, otherwise the search fails fast with
/// [`SearchError::InvalidRoot`].
///
/// # Example
///
/// ```rust
/// let dir = tempfile::tempdir()?;
/// std::fs::write(dir.path().join("invoice.txt"), b"x")?;
/// std::fs::write(dir.path().join("report.txt"), b"x")?;
///
/// let results = fsearch::search(dir.path())
///     .keyword("invoice")
///     .run()?;
///
/// assert_eq!(results.entries.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn search(root: impl Into<std::path::PathBuf>) -> SearchBuilder {
    SearchBuilder::new(root)
}
