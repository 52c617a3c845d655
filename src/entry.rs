use std::fs::Metadata;
use std::path::Path;
use std::time::UNIX_EPOCH;

use serde::{Deserialize, Serialize};

/// One filesystem node observed during traversal.
///
/// The field names and types are the wire contract — frontends deserialize
/// these rows verbatim, so they must not change. `mod_time` is epoch
/// **seconds**.
///
/// `id` is assigned by the engine from a counter scoped to a single search
/// invocation. It is contiguous in delivery order and carries no meaning
/// across invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Unique within one search response; assigned at the aggregation point.
    pub id: i64,

    /// Full path to the entry.
    pub path: String,

    /// Base name component of `path`.
    pub name: String,

    /// Byte length; `0` for directories.
    pub size: i64,

    /// Last-modification time, epoch seconds. `0` if unavailable.
    pub mod_time: i64,

    /// Whether the entry is a directory.
    pub is_dir: bool,

    /// Lowercase extension without the leading dot; empty for directories
    /// and extensionless files.
    pub ext: String,
}

impl FileEntry {
    /// Build a candidate entry from a path and its metadata.
    ///
    /// `id` starts at 0 — the engine stamps the real one when the entry is
    /// delivered, so ids stay contiguous under parallel traversal.
    pub(crate) fn from_metadata(path: &Path, meta: &Metadata) -> Self {
        let is_dir = meta.is_dir();

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let ext = if is_dir {
            String::new()
        } else {
            path.extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default()
        };

        let mod_time = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        FileEntry {
            id: 0,
            path: path.to_string_lossy().into_owned(),
            name,
            size: if is_dir { 0 } else { meta.len() as i64 },
            mod_time,
            is_dir,
            ext,
        }
    }

    /// The parent portion of `path`, used by the path filter.
    pub(crate) fn parent_path(&self) -> &str {
        Path::new(&self.path)
            .parent()
            .and_then(|p| p.to_str())
            .unwrap_or("")
    }
}
