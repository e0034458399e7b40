/*!
 * Column-aligned rendering of directory entries
 */

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::format::{format_system_time, friendly_size, pad_left, DIR_SIZE_WIDTH, SIZE_WIDTH};
use crate::identity::{owner_column, IdentityResolver};
use crate::style::{Role, StyleTable};
use crate::types::{Action, DirectoryEntry, EntryKind, Permissions};

/// Separator printed after every column
pub const SPACER: &str = "  ";

/// Arrow between a symlink and its target
const LINK_ARROW: &str = " → ";

/// Formats entries into listing lines
pub struct Renderer<'a> {
    styles: StyleTable,
    color: bool,
    identity: &'a dyn IdentityResolver,
}

impl<'a> Renderer<'a> {
    /// Create a new renderer
    pub fn new(styles: StyleTable, color: bool, identity: &'a dyn IdentityResolver) -> Self {
        Self {
            styles,
            color,
            identity,
        }
    }

    fn paint(&self, role: Role, text: &str) -> String {
        self.styles.paint(role, text, self.color)
    }

    /// Write one line per entry to `out`
    pub fn render<W: Write>(&self, entries: &[DirectoryEntry], dir: &Path, out: &mut W) -> io::Result<()> {
        for entry in entries {
            writeln!(out, "{}", self.render_entry(entry, dir))?;
        }
        out.flush()
    }

    /// Write the column titles
    pub fn render_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let titles = ["Permissions", "Size", "User Group", "Date Modified", "Name"];
        let line: Vec<String> = titles.iter().map(|t| self.paint(Role::Header, t)).collect();
        writeln!(out, "{}", line.join(SPACER))
    }

    /// Format a single entry; `dir` is the directory it was listed from
    pub fn render_entry(&self, entry: &DirectoryEntry, dir: &Path) -> String {
        let mut line = String::new();

        line.push_str(&self.type_column(entry.kind));
        line.push_str(&self.permission_column(entry.permissions));
        line.push_str(SPACER);

        line.push_str(&self.size_column(entry));
        line.push_str(SPACER);

        line.push_str(&self.paint(Role::Owner, &owner_column(entry.uid, entry.gid, self.identity)));
        line.push_str(SPACER);

        line.push_str(&self.paint(Role::Date, &format_system_time(entry.modified)));
        line.push_str(SPACER);

        line.push_str(&self.name_column(entry, dir));
        line
    }

    fn type_column(&self, kind: EntryKind) -> String {
        let role = match kind {
            EntryKind::Directory => Role::Directory,
            EntryKind::File => Role::PermNone,
            _ => Role::TypeOther,
        };
        self.paint(role, &kind.type_char().to_string())
    }

    fn permission_column(&self, permissions: Permissions) -> String {
        Permissions::BITS
            .iter()
            .map(|&(bit, action)| {
                if permissions.is_set(bit) {
                    let role = match action {
                        Action::Read => Role::PermRead,
                        Action::Write => Role::PermWrite,
                        Action::Execute => Role::PermExecute,
                    };
                    self.paint(role, &action.letter().to_string())
                } else {
                    self.paint(Role::PermNone, "-")
                }
            })
            .collect()
    }

    fn size_column(&self, entry: &DirectoryEntry) -> String {
        if entry.is_dir() {
            self.paint(Role::PermNone, &pad_left(DIR_SIZE_WIDTH, "-"))
        } else {
            self.paint(Role::Size, &pad_left(SIZE_WIDTH, &friendly_size(entry.size)))
        }
    }

    fn name_column(&self, entry: &DirectoryEntry, dir: &Path) -> String {
        match entry.kind {
            EntryKind::Directory => self.paint(Role::Directory, &entry.name),
            EntryKind::Symlink => match fs::canonicalize(dir.join(&entry.name)) {
                Ok(target) => format!(
                    "{}{}{}",
                    self.paint(Role::SymlinkName, &entry.name),
                    LINK_ARROW,
                    self.paint(Role::SymlinkTarget, &target.to_string_lossy())
                ),
                Err(e) => {
                    debug!(name = %entry.name, error = %e, "cannot resolve symlink");
                    format!("{}{}[unknown]", entry.name, LINK_ARROW)
                }
            },
            _ => entry.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    struct NoNames;

    impl IdentityResolver for NoNames {
        fn user_name(&self, _uid: u32) -> Option<String> {
            None
        }

        fn group_name(&self, _gid: u32) -> Option<String> {
            None
        }
    }

    fn entry(name: &str, kind: EntryKind, mode: u32, size: u64) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            kind,
            permissions: Permissions::from_mode(mode),
            size,
            modified: SystemTime::now(),
            uid: 1000,
            gid: 100,
        }
    }

    #[test]
    fn test_file_line_layout() {
        let renderer = Renderer::new(StyleTable::default(), false, &NoNames);
        let line = renderer.render_entry(&entry("a.log", EntryKind::File, 0o754, 2048), Path::new("/"));

        assert!(line.starts_with("-rwxr-xr--  "));
        assert_eq!(&line[12..19], "  2Ki  ");
        assert!(line.contains("  1000 100  "));
        assert!(line.ends_with("  a.log"));
    }

    #[test]
    fn test_directory_without_execute_bits() {
        let renderer = Renderer::new(StyleTable::default(), false, &NoNames);
        let line = renderer.render_entry(&entry("A", EntryKind::Directory, 0o444, 4096), Path::new("/"));
        assert!(line.starts_with("dr--r--r--     -  "));

        let line = renderer.render_entry(&entry("B", EntryKind::Directory, 0, 4096), Path::new("/"));
        assert_eq!(&line[..10], "d---------");
        assert_eq!(&line[10..16], "     -");
    }

    #[test]
    fn test_date_column_width() {
        let renderer = Renderer::new(StyleTable::plain(), false, &NoNames);
        let line = renderer.render_entry(&entry("f", EntryKind::File, 0o644, 1), Path::new("/"));
        // type+perm, size, owner, date, name
        let date_start = "-rw-r--r--  ".len() + "    1  ".len() + "1000 100  ".len();
        assert_eq!(line[date_start..].find("  f"), Some(12));
    }

    #[test]
    fn test_unrepresentable_mtime_still_renders() {
        let renderer = Renderer::new(StyleTable::plain(), false, &NoNames);
        let mut far_future = entry("future", EntryKind::File, 0o644, 1);
        far_future.modified = SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(100_000_000_000_000);

        let line = renderer.render_entry(&far_future, Path::new("/"));
        assert!(line.ends_with("1000 100             ?  future"), "{}", line);
    }

    #[test]
    fn test_dangling_symlink() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink("missing", temp_dir.path().join("broken")).unwrap();

        let renderer = Renderer::new(StyleTable::default(), true, &NoNames);
        let line = renderer.render_entry(&entry("broken", EntryKind::Symlink, 0o777, 7), temp_dir.path());
        assert!(line.ends_with("broken → [unknown]"));
    }

    #[test]
    fn test_resolved_symlink() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(temp_dir.path()).unwrap();
        fs::write(root.join("target.txt"), "x").unwrap();
        std::os::unix::fs::symlink("target.txt", root.join("link")).unwrap();

        let renderer = Renderer::new(StyleTable::default(), false, &NoNames);
        let line = renderer.render_entry(&entry("link", EntryKind::Symlink, 0o777, 10), &root);
        let expected = format!("link → {}", root.join("target.txt").display());
        assert!(line.ends_with(&expected), "{}", line);
        assert!(line.starts_with("lrwxrwxrwx"));
    }

    #[test]
    fn test_color_disabled_has_no_escapes() {
        let renderer = Renderer::new(StyleTable::default(), false, &NoNames);
        let mut out = Vec::new();
        renderer.render_header(&mut out).unwrap();
        renderer
            .render(&[entry("src", EntryKind::Directory, 0o755, 0)], Path::new("/"), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('\u{1b}'));
        assert!(text.starts_with("Permissions  Size  User Group  Date Modified  Name\n"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_color_enabled_styles_directory_name() {
        let renderer = Renderer::new(StyleTable::default(), true, &NoNames);
        let line = renderer.render_entry(&entry("src", EntryKind::Directory, 0o755, 0), Path::new("/"));
        let bold_name = StyleTable::default().paint(Role::Directory, "src", true);
        assert!(line.ends_with(&bold_name));
    }
}
