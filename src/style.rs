/*!
 * Color and style table for the listing
 */

use crossterm::style::{Color, ContentStyle, Stylize};

/// Logical role of a piece of output text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Directory type char and directory names
    Directory,
    /// Type char of symlinks, devices and the like
    TypeOther,
    PermRead,
    PermWrite,
    PermExecute,
    /// Unset permission bits, regular file type char, directory size
    PermNone,
    Size,
    Owner,
    Date,
    SymlinkName,
    SymlinkTarget,
    Header,
}

impl Role {
    const COUNT: usize = 12;

    fn index(self) -> usize {
        self as usize
    }
}

/// Role → style mapping handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct StyleTable {
    styles: [ContentStyle; Role::COUNT],
}

impl Default for StyleTable {
    fn default() -> Self {
        let plain = ContentStyle::new();
        let mut table = Self::plain();
        table.set(Role::Directory, plain.with(Color::DarkBlue).bold());
        table.set(Role::TypeOther, plain.with(Color::DarkCyan));
        table.set(Role::PermRead, plain.with(Color::DarkYellow));
        table.set(Role::PermWrite, plain.with(Color::DarkRed));
        table.set(Role::PermExecute, plain.with(Color::DarkGreen));
        table.set(Role::PermNone, plain.with(Color::DarkYellow));
        table.set(Role::Size, plain.with(Color::DarkGreen).bold());
        table.set(Role::Owner, plain.with(Color::DarkYellow).bold());
        table.set(Role::Date, plain.with(Color::DarkBlue));
        table.set(Role::SymlinkName, plain.with(Color::DarkCyan));
        table.set(Role::SymlinkTarget, plain.with(Color::DarkMagenta).bold());
        table.set(Role::Header, plain.with(Color::Grey).underlined());
        table
    }
}

impl StyleTable {
    /// A table where every role is unstyled
    pub fn plain() -> Self {
        Self {
            styles: [ContentStyle::new(); Role::COUNT],
        }
    }

    /// Override the style of one role
    pub fn set(&mut self, role: Role, style: ContentStyle) {
        self.styles[role.index()] = style;
    }

    /// Style for `role`
    pub fn get(&self, role: Role) -> ContentStyle {
        self.styles[role.index()]
    }

    /// Render `text` in the style of `role`, or verbatim when color is off
    pub fn paint(&self, role: Role, text: &str, enabled: bool) -> String {
        if enabled {
            self.get(role).apply(text).to_string()
        } else {
            text.to_string()
        }
    }
}
