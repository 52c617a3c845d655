use std::time::Duration;

use crate::entry::FileEntry;

/// The output of a completed (or cancelled) search.
#[derive(Debug)]
pub struct Results {
    /// Matched entries, ids contiguous in delivery order. No ordering is
    /// guaranteed beyond that — the walk is parallel.
    pub entries: Vec<FileEntry>,

    /// Scan statistics.
    pub stats: ScanStats,

    /// Whether the search was cut short by its [`CancelToken`](crate::CancelToken).
    /// Entries delivered before the signal are kept.
    pub cancelled: bool,
}

/// Statistics for one traversal.
#[derive(Debug)]
pub struct ScanStats {
    /// Files encountered (matched or not).
    pub files: usize,

    /// Directories encountered.
    pub dirs: usize,

    /// Nodes skipped over per-node I/O errors (permission denied, dangling
    /// symlinks). Skips are never fatal; this is the only trace they leave.
    pub skipped: usize,

    /// Wall-clock time from search start to completion.
    pub duration: Duration,
}
