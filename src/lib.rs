/*!
 * gut - a colorized, column-aligned ls replacement
 *
 * The listing is a single pass over one directory: entries are read,
 * sorted with directories first, optionally filtered by a regular
 * expression and rendered one line each.
 */

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod identity;
pub mod lister;
pub mod logging;
pub mod renderer;
pub mod sorter;
pub mod style;
pub mod types;


use std::io::Write;

// Re-export main components for easier access
pub use config::{Args, ColorChoice, Config};
pub use error::{GutError, Result};
pub use filter::{filter_entries, EntryFilter};
pub use format::{format_date, friendly_size, permission_string};
pub use identity::{IdentityResolver, SystemIdentity};
pub use lister::list_directory;
pub use renderer::Renderer;
pub use sorter::sort_entries;
pub use style::{Role, StyleTable};
pub use types::{DirectoryEntry, EntryKind, EntryMetadata, Permissions};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read, sort and filter the configured directory
///
/// Nothing is printed here, so path and pattern errors surface before any
/// output is produced.
pub fn collect_entries(config: &Config) -> Result<Vec<DirectoryEntry>> {
    let mut entries = list_directory(&config.target_dir)?;
    sort_entries(&mut entries);
    filter_entries(entries, &config.pattern)
}

/// Run the whole listing pipeline, writing to `out`
pub fn run<W: Write>(config: &Config, identity: &dyn IdentityResolver, out: &mut W) -> Result<()> {
    let entries = collect_entries(config)?;

    let renderer = Renderer::new(StyleTable::default(), config.color, identity);
    if config.header {
        renderer.render_header(out)?;
    }
    renderer.render(&entries, &config.target_dir, out)?;

    Ok(())
}
