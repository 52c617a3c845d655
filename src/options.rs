use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// One query, as the frontend sends it.
///
/// Field names are the wire contract and mirror the backend the frontends
/// already speak to — do not rename them. A `SearchOptions` value is built
/// once per request and stays immutable for the duration of that search.
///
/// Semantics:
/// - `keyword` — matched against the entry's `name`; a case-insensitive
///   literal substring by default, a regular expression when `use_regex`.
///   Empty means no keyword filter.
/// - `extensions` — allowed extensions for files; empty means no filter.
///   Entries are normalized on compile (lowercased, leading dots stripped),
///   so `[".TXT"]` and `["txt"]` are equivalent. Directories are never
///   excluded by this filter.
/// - `path_filter` — substring the entry's parent path must contain.
/// - `min_size` / `max_size` — inclusive byte bounds. `max_size <= 0` means
///   unbounded above; a negative `min_size` is treated as 0. Directories
///   bypass size filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub keyword: String,
    pub use_regex: bool,
    pub extensions: Vec<String>,
    pub path_filter: String,
    pub min_size: i64,
    pub max_size: i64,
}

impl SearchOptions {
    /// Decode a query from JSON at the process boundary.
    ///
    /// Strongly typed — missing fields fall back to their defaults, but a
    /// field of the wrong type fails with [`SearchError::MalformedRequest`]
    /// rather than being coerced.
    ///
    /// ```rust
    /// use fsearch::SearchOptions;
    ///
    /// let opts = SearchOptions::from_json(
    ///     r#"{"keyword":"report","extensions":["csv"],"min_size":100}"#,
    /// ).unwrap();
    /// assert_eq!(opts.keyword, "report");
    /// assert_eq!(opts.max_size, 0);
    ///
    /// assert!(SearchOptions::from_json(r#"{"min_size":"big"}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        serde_json::from_str(json).map_err(SearchError::MalformedRequest)
    }

    /// Validate the size bounds. Both positive and inverted is a caller
    /// mistake — rejected up front instead of silently matching nothing.
    pub(crate) fn validate(&self) -> Result<(), SearchError> {
        if self.min_size > 0 && self.max_size > 0 && self.min_size > self.max_size {
            return Err(SearchError::InvalidSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }
}
