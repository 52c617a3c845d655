use std::collections::HashSet;

use regex::Regex;

use crate::entry::FileEntry;
use crate::error::SearchError;
use crate::options::SearchOptions;

/// How the keyword matches an entry's name.
enum Keyword {
    /// No keyword filter.
    Any,
    /// Case-insensitive literal substring, pre-lowercased.
    Literal(String),
    /// Compiled regular expression.
    Pattern(Regex),
}

/// A [`SearchOptions`] compiled for per-entry evaluation.
///
/// Compilation is the fail-fast step: a malformed regex or an inverted size
/// range errors here, before any traversal I/O happens.
pub(crate) struct Query {
    keyword: Keyword,
    extensions: HashSet<String>,
    path_filter: String,
    min_size: i64,
    max_size: Option<i64>,
}

impl Query {
    pub(crate) fn compile(opts: &SearchOptions) -> Result<Self, SearchError> {
        opts.validate()?;

        let keyword = if opts.keyword.is_empty() {
            Keyword::Any
        } else if opts.use_regex {
            let re = Regex::new(&opts.keyword).map_err(|source| SearchError::InvalidPattern {
                pattern: opts.keyword.clone(),
                source,
            })?;
            Keyword::Pattern(re)
        } else {
            Keyword::Literal(opts.keyword.to_lowercase())
        };

        // Frontends send extensions both bare ("txt") and dotted (".txt").
        let extensions = opts
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        Ok(Query {
            keyword,
            extensions,
            path_filter: opts.path_filter.clone(),
            min_size: opts.min_size.max(0),
            max_size: (opts.max_size > 0).then_some(opts.max_size),
        })
    }

    /// Evaluate all active filters, cheapest first, so the regex only runs
    /// on entries that survived the metadata checks.
    pub(crate) fn matches(&self, entry: &FileEntry) -> bool {
        // Extension and size filters apply to files only. Directories pass
        // through — whether they appear as result rows is the engine's
        // include_dirs knob, not a query concern.
        if !entry.is_dir {
            if !self.extensions.is_empty() && !self.extensions.contains(&entry.ext) {
                return false;
            }
            if entry.size < self.min_size {
                return false;
            }
            if let Some(max) = self.max_size {
                if entry.size > max {
                    return false;
                }
            }
        }

        if !self.path_filter.is_empty() && !entry.parent_path().contains(&self.path_filter) {
            return false;
        }

        match &self.keyword {
            Keyword::Any => true,
            Keyword::Literal(needle) => entry.name.to_lowercase().contains(needle),
            Keyword::Pattern(re) => re.is_match(&entry.name),
        }
    }
}
