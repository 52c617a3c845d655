use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use ignore::{DirEntry, WalkBuilder, WalkState};
use tracing::debug;

use crate::cancel::CancelToken;
use crate::entry::FileEntry;
use crate::query::Query;
use crate::results::{Results, ScanStats};

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Traversal parameters passed from the builder to the engine.
///
/// `pub(crate)` — not part of the public API. Callers configure these
/// via the builder methods (`.threads()`, `.max_depth()`, `.limit()`).
pub(crate) struct WalkConfig {
    pub threads: usize,
    pub max_depth: Option<usize>,
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub config: WalkConfig,
    pub query: Query,
    pub include_dirs: bool,
    pub cancel: CancelToken,
}

/// The aggregation point. Walker threads hand matched entries over one at a
/// time; ids are stamped here so they stay contiguous in delivery order and
/// scoped to this search.
struct Deliver<'a> {
    next_id: i64,
    sink: &'a mut (dyn FnMut(FileEntry) + Send),
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Execute a parallel search over `root`, feeding matches into `sink`.
///
/// This is the core engine — all parallelism lives here. Called by
/// `SearchBuilder::run_with()` after the fail-fast checks (root validation,
/// query compilation) have passed, so everything from here on degrades
/// gracefully: unreadable nodes are skipped, cancellation is a clean stop.
pub(crate) fn run(root: &Path, opts: EngineOptions, sink: &mut (dyn FnMut(FileEntry) + Send)) -> Results {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .follow_links(false)
        .same_file_system(false)
        .threads(opts.config.threads);

    if let Some(depth) = opts.config.max_depth {
        builder.max_depth(Some(depth));
    }

    let walker = builder.build_parallel();

    // Shared state across walker threads
    let matches = AtomicUsize::new(0);
    let files = AtomicUsize::new(0);
    let dirs = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);
    let deliver = Mutex::new(Deliver { next_id: 0, sink });

    let start = Instant::now();

    walker.run(|| {
        let query = &opts.query;
        let cancel = &opts.cancel;
        let include_dirs = opts.include_dirs;
        let limit = opts.config.limit;
        let matches = &matches;
        let files = &files;
        let dirs = &dirs;
        let skipped = &skipped;
        let deliver = &deliver;

        Box::new(move |res: Result<DirEntry, ignore::Error>| -> WalkState {
            // Checked between node visits — winds down all threads promptly.
            if cancel.is_cancelled() {
                return WalkState::Quit;
            }

            // Per-node traversal errors are skips, never fatal.
            let entry = match res {
                Ok(e) => e,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable node");
                    skipped.fetch_add(1, Ordering::Relaxed);
                    return WalkState::Continue;
                }
            };

            // The root itself is not a result row.
            if entry.depth() == 0 {
                return WalkState::Continue;
            }

            let meta = match entry.metadata() {
                Ok(m) => m,
                Err(err) => {
                    debug!(path = %entry.path().display(), error = %err, "skipping: metadata unavailable");
                    skipped.fetch_add(1, Ordering::Relaxed);
                    return WalkState::Continue;
                }
            };

            if meta.is_dir() {
                dirs.fetch_add(1, Ordering::Relaxed);
            } else {
                files.fetch_add(1, Ordering::Relaxed);
            }

            let mut candidate = FileEntry::from_metadata(entry.path(), &meta);

            // Directories are always traversed into; whether they appear as
            // result rows is the include_dirs knob.
            if candidate.is_dir && !include_dirs {
                return WalkState::Continue;
            }

            if !query.matches(&candidate) {
                return WalkState::Continue;
            }

            // Increment and enforce limit — two-guard approach handles
            // the race where multiple threads overshoot before WalkState::Quit
            // propagates across all threads.
            let mc = matches.fetch_add(1, Ordering::Relaxed) + 1;

            // Early guard: already over limit before delivering
            if let Some(lim) = limit {
                if mc > lim {
                    return WalkState::Quit;
                }
            }

            if let Ok(mut d) = deliver.lock() {
                d.next_id += 1;
                candidate.id = d.next_id;
                (d.sink)(candidate);
            }

            // At-limit guard: quit after delivering if we've hit exactly
            if let Some(lim) = limit {
                if mc >= lim {
                    return WalkState::Quit;
                }
            }

            WalkState::Continue
        })
    });

    let duration = start.elapsed();
    let cancelled = opts.cancel.is_cancelled();

    let stats = ScanStats {
        files: files.load(Ordering::Relaxed),
        dirs: dirs.load(Ordering::Relaxed),
        skipped: skipped.load(Ordering::Relaxed),
        duration,
    };

    debug!(
        root = %root.display(),
        files = stats.files,
        dirs = stats.dirs,
        skipped = stats.skipped,
        matches = matches.load(Ordering::Relaxed),
        cancelled,
        elapsed_ms = duration.as_millis() as u64,
        "search finished"
    );

    Results {
        entries: Vec::new(), // filled by the caller's sink
        stats,
        cancelled,
    }
}
