// crates/dirent/src/entry.rs

use std::fmt;

/// File type as reported in the `d_type` byte of a `linux_dirent64` record.
///
/// Only the seven types a directory can actually hold are recognized; any
/// other tag, including `DT_UNKNOWN`, decodes to [`FileType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FileType {
    Fifo = 1,
    CharDevice = 2,
    Directory = 4,
    BlockDevice = 6,
    Regular = 8,
    Symlink = 10,
    Socket = 12,
    Unknown = 0,
}

pub const LABEL_WIDTH: usize = 10;

impl FileType {
    pub const ALL: [FileType; 8] = [
        FileType::Regular,
        FileType::Directory,
        FileType::Fifo,
        FileType::Socket,
        FileType::Symlink,
        FileType::BlockDevice,
        FileType::CharDevice,
        FileType::Unknown,
    ];

    pub const fn from_tag(tag: u8) -> Self {
        match tag {
            1 => FileType::Fifo,
            2 => FileType::CharDevice,
            4 => FileType::Directory,
            6 => FileType::BlockDevice,
            8 => FileType::Regular,
            10 => FileType::Symlink,
            12 => FileType::Socket,
            _ => FileType::Unknown,
        }
    }

    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, FileType::Unknown)
    }

    pub const fn label(self) -> &'static str {
        match self {
            FileType::Regular => "regular",
            FileType::Directory => "directory",
            FileType::Fifo => "FIFO",
            FileType::Socket => "socket",
            FileType::Symlink => "symlink",
            FileType::BlockDevice => "block dev",
            FileType::CharDevice => "char dev",
            FileType::Unknown => "???",
        }
    }

    /// Inverse of [`FileType::label`]. Trailing padding is ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim_end_matches(' ');
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl From<u8> for FileType {
    fn from(tag: u8) -> Self {
        FileType::from_tag(tag)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One directory entry decoded in place from a buffer fill.
///
/// The name borrows from the fill and is not guaranteed to be valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry<'a> {
    pub inode: u64,
    pub next_cookie: i64,
    pub record_len: u16,
    pub file_type: FileType,
    pub name: &'a [u8],
    /// Byte position of the record within its fill.
    pub offset: usize,
    /// Set when the header failed validation and the entry was emitted on a
    /// best-effort basis before resynchronizing.
    pub corrupt: bool,
}

impl DirEntry<'_> {
    pub fn to_owned_entry(&self) -> OwnedEntry {
        OwnedEntry {
            inode: self.inode,
            next_cookie: self.next_cookie,
            record_len: self.record_len,
            file_type: self.file_type,
            name: self.name.to_vec(),
            corrupt: self.corrupt,
        }
    }
}

/// Owned copy of a [`DirEntry`] that outlives its fill.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnedEntry {
    pub inode: u64,
    pub next_cookie: i64,
    pub record_len: u16,
    pub file_type: FileType,
    pub name: Vec<u8>,
    pub corrupt: bool,
}

impl From<DirEntry<'_>> for OwnedEntry {
    fn from(entry: DirEntry<'_>) -> Self {
        entry.to_owned_entry()
    }
}
