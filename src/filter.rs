/*!
 * Regular-expression filtering of entry names
 */

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::types::DirectoryEntry;

/// Compiled name filter
#[derive(Debug, Clone)]
pub struct EntryFilter {
    regex: Regex,
}

impl EntryFilter {
    /// Compile `pattern`, failing on invalid syntax
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Whether the pattern matches anywhere in `name`
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Keep the entries whose names match, preserving order
    pub fn apply(&self, entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
        let before = entries.len();
        let kept: Vec<DirectoryEntry> = entries.into_iter().filter(|e| self.matches(&e.name)).collect();
        debug!(pattern = %self.regex, before, after = kept.len(), "filtered entries");
        kept
    }
}

/// Filter entries by `pattern`; an empty pattern keeps everything
pub fn filter_entries(entries: Vec<DirectoryEntry>, pattern: &str) -> Result<Vec<DirectoryEntry>> {
    if pattern.is_empty() {
        return Ok(entries);
    }
    Ok(EntryFilter::new(pattern)?.apply(entries))
}
