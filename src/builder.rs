use std::fs;
use std::path::PathBuf;

use crate::cancel::CancelToken;
use crate::engine::{run, EngineOptions, WalkConfig};
use crate::entry::FileEntry;
use crate::error::SearchError;
use crate::options::SearchOptions;
use crate::query::Query;
use crate::results::Results;

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a search.
///
/// Created via [`fsearch::search()`](crate::search). Configure with chained
/// builder methods, then call [`run()`](SearchBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let results = fsearch::search("/home/me/docs")
///     .options(opts)
///     .threads(8)
///     .limit(500)
///     .cancel(token.clone())
///     .run()?;
/// ```
pub struct SearchBuilder {
    root: PathBuf,
    options: SearchOptions,
    threads: usize,
    max_depth: Option<usize>,
    limit: Option<usize>,
    include_dirs: bool,
    cancel: CancelToken,
}

impl SearchBuilder {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: SearchOptions::default(),
            threads: num_cpus(),
            max_depth: None,
            limit: None,
            include_dirs: true,
            cancel: CancelToken::new(),
        }
    }

    // ── Query ─────────────────────────────────────────────────────────────

    /// Set the query. Defaults to [`SearchOptions::default()`], which
    /// matches every entry.
    pub fn options(mut self, opts: SearchOptions) -> Self {
        self.options = opts;
        self
    }

    /// Shorthand for a keyword-only query.
    ///
    /// Equivalent to `.options(SearchOptions { keyword, ..Default::default() })` —
    /// a case-insensitive literal substring match on entry names.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.options.keyword = keyword.into();
        self.options.use_regex = false;
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Stop after `n` matches.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Number of threads to use for parallel traversal.
    ///
    /// Defaults to the number of logical CPU cores. Values exceeding the
    /// available core count are accepted but won't improve performance.
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = n;
        self
    }

    /// Maximum traversal depth. `0` means the root only, `1` means one
    /// level of children, and so on. Unlimited by default.
    pub fn max_depth(mut self, d: usize) -> Self {
        self.max_depth = Some(d);
        self
    }

    /// Whether directories appear as result rows. Defaults to `true` —
    /// directories that pass the filters are returned with `is_dir` set and
    /// the caller decides what to do with them. Traversal descends into
    /// directories either way.
    pub fn include_dirs(mut self, yes: bool) -> Self {
        self.include_dirs = yes;
        self
    }

    /// Attach a cancellation token.
    ///
    /// Keep a clone and call [`CancelToken::cancel`] from any thread to stop
    /// the search early. Cancellation is not an error — the search returns
    /// `Ok` with [`Results::cancelled`] set and everything delivered so far.
    pub fn cancel(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search, collecting matches into [`Results::entries`].
    ///
    /// Blocks until traversal completes or the cancellation token fires.
    ///
    /// # Errors
    ///
    /// Fails fast, before any traversal I/O, on an invalid root
    /// ([`SearchError::InvalidRoot`]), a malformed regex
    /// ([`SearchError::InvalidPattern`]), or inverted size bounds
    /// ([`SearchError::InvalidSizeRange`]). Per-node I/O errors during the
    /// walk never fail the search; they are skipped and tallied in
    /// [`ScanStats::skipped`](crate::ScanStats::skipped).
    pub fn run(self) -> Result<Results, SearchError> {
        let mut collected = Vec::new();
        let mut results = self.run_with(|entry| collected.push(entry))?;
        results.entries = collected;
        Ok(results)
    }

    /// Execute the search, delivering each match to `sink` as it is found.
    ///
    /// The sink is invoked from the engine's aggregation point — calls are
    /// serialized, ids already stamped. [`Results::entries`] is left empty;
    /// use this instead of [`run()`](SearchBuilder::run) when results should
    /// stream to the caller (a UI, a channel) instead of accumulating.
    ///
    /// # Errors
    ///
    /// Same fail-fast conditions as [`run()`](SearchBuilder::run).
    pub fn run_with<F>(self, mut sink: F) -> Result<Results, SearchError>
    where
        F: FnMut(FileEntry) + Send,
    {
        let root = self.validate_root()?;
        let query = Query::compile(&self.options)?;

        let opts = EngineOptions {
            config: WalkConfig {
                threads: self.threads.max(1),
                max_depth: self.max_depth,
                limit: self.limit,
            },
            query,
            include_dirs: self.include_dirs,
            cancel: self.cancel,
        };

        Ok(run(&root, opts, &mut sink))
    }

    /// Fail-fast root check: must exist, be readable, and be a directory.
    fn validate_root(&self) -> Result<PathBuf, SearchError> {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(self.root.clone()),
            Ok(_) => Err(SearchError::InvalidRoot {
                path: self.root.clone(),
                source: None,
            }),
            Err(err) => Err(SearchError::InvalidRoot {
                path: self.root.clone(),
                source: Some(err),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Get the logical CPU count, with a safe fallback.
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
