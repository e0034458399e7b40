/*!
 * Core types and data structures for gut
 */

use std::fs;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::time::SystemTime;

/// Kind of device node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    /// Block device
    Block,
    /// Character device
    Char,
}

/// Kinds that are neither files, directories, links nor devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherKind {
    /// Named pipe
    Fifo,
    /// Unix domain socket
    Socket,
    /// Anything the platform reports that we don't know about
    Unknown,
}

/// Represents different types of filesystem entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory containing other entries
    Directory,
    /// Regular file
    File,
    /// Symbolic link to another entry
    Symlink,
    /// Block or character device
    Device(DeviceKind),
    /// Fifos, sockets and the rest
    Other(OtherKind),
}

impl EntryKind {
    /// Character shown in the first column of the listing
    pub fn type_char(self) -> char {
        match self {
            EntryKind::Directory => 'd',
            EntryKind::File => '-',
            EntryKind::Symlink => 'l',
            EntryKind::Device(DeviceKind::Block) => 'b',
            EntryKind::Device(DeviceKind::Char) => 'c',
            EntryKind::Other(OtherKind::Fifo) => 'p',
            EntryKind::Other(OtherKind::Socket) => 's',
            EntryKind::Other(OtherKind::Unknown) => '?',
        }
    }

    /// Classify a platform file type
    pub fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_block_device() {
            EntryKind::Device(DeviceKind::Block)
        } else if file_type.is_char_device() {
            EntryKind::Device(DeviceKind::Char)
        } else if file_type.is_fifo() {
            EntryKind::Other(OtherKind::Fifo)
        } else if file_type.is_socket() {
            EntryKind::Other(OtherKind::Socket)
        } else {
            EntryKind::Other(OtherKind::Unknown)
        }
    }
}

/// One of the three permission actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Write,
    Execute,
}

impl Action {
    /// Letter shown when the bit is set
    pub fn letter(self) -> char {
        match self {
            Action::Read => 'r',
            Action::Write => 'w',
            Action::Execute => 'x',
        }
    }
}

/// Owner/group/other permission bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions(u32);

impl Permissions {
    /// Display order: owner rwx, group rwx, other rwx
    pub const BITS: [(u32, Action); 9] = [
        (0o400, Action::Read),
        (0o200, Action::Write),
        (0o100, Action::Execute),
        (0o040, Action::Read),
        (0o020, Action::Write),
        (0o010, Action::Execute),
        (0o004, Action::Read),
        (0o002, Action::Write),
        (0o001, Action::Execute),
    ];

    /// Keep only the nine permission bits of a raw mode
    pub fn from_mode(mode: u32) -> Self {
        Self(mode & 0o777)
    }

    /// The nine permission bits
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether a single bit (one of [`Self::BITS`]) is set
    pub fn is_set(self, bit: u32) -> bool {
        self.0 & bit != 0
    }
}

/// Metadata capability the listing pipeline depends on
///
/// Keeps the core away from raw platform stat structures so that tests can
/// feed in entries that don't exist on disk.
pub trait EntryMetadata {
    fn kind(&self) -> EntryKind;
    fn permissions(&self) -> Permissions;
    fn size(&self) -> u64;
    fn modified(&self) -> SystemTime;
    fn uid(&self) -> u32;
    fn gid(&self) -> u32;
}

impl EntryMetadata for fs::Metadata {
    fn kind(&self) -> EntryKind {
        EntryKind::from_file_type(self.file_type())
    }

    fn permissions(&self) -> Permissions {
        Permissions::from_mode(self.mode())
    }

    fn size(&self) -> u64 {
        self.len()
    }

    fn modified(&self) -> SystemTime {
        // Platforms without mtime support are treated as the epoch
        fs::Metadata::modified(self).unwrap_or(SystemTime::UNIX_EPOCH)
    }

    fn uid(&self) -> u32 {
        MetadataExt::uid(self)
    }

    fn gid(&self) -> u32 {
        MetadataExt::gid(self)
    }
}

/// Snapshot of a single directory entry taken at listing time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Entry name (no path components)
    pub name: String,
    /// What kind of entry this is
    pub kind: EntryKind,
    /// Permission bits
    pub permissions: Permissions,
    /// Size in bytes
    pub size: u64,
    /// Last modification time
    pub modified: SystemTime,
    /// Owner user id
    pub uid: u32,
    /// Owner group id
    pub gid: u32,
}

impl DirectoryEntry {
    /// Build an entry from any metadata provider
    pub fn from_metadata(name: impl Into<String>, metadata: &impl EntryMetadata) -> Self {
        Self {
            name: name.into(),
            kind: metadata.kind(),
            permissions: metadata.permissions(),
            size: metadata.size(),
            modified: metadata.modified(),
            uid: metadata.uid(),
            gid: metadata.gid(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }
}
