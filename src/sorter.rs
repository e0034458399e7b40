/*!
 * Entry ordering: directories first, then by name
 */

use std::cmp::Ordering;

use crate::types::DirectoryEntry;

/// Total order used for the listing
pub fn compare_entries(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name.as_bytes().cmp(b.name.as_bytes()))
}

/// Sort entries in place
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(compare_entries);
}
