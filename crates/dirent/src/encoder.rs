// crates/dirent/src/encoder.rs

use crate::entry::FileType;
use crate::layout::{HEADER_LEN, aligned_record_len};

/// Builds fills laid out the way `getdents64` writes them.
///
/// Used to construct fixtures, including deliberately corrupted ones whose
/// declared length or type tag differs from what the layout implies.
#[derive(Debug, Default, Clone)]
pub struct Encoder {
    out: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a well-formed record. Returns the offset it was written at.
    pub fn push(&mut self, inode: u64, next_cookie: i64, file_type: FileType, name: &[u8]) -> usize {
        let len = aligned_record_len(name.len());
        self.push_raw(inode, next_cookie, file_type.tag(), name, len as u16)
    }

    pub fn push_with_len(
        &mut self,
        inode: u64,
        next_cookie: i64,
        file_type: FileType,
        name: &[u8],
        record_len: u16,
    ) -> usize {
        self.push_raw(inode, next_cookie, file_type.tag(), name, record_len)
    }

    /// Appends a record with an arbitrary type tag and declared length. The
    /// bytes occupied are always the aligned span for `name`.
    pub fn push_raw(
        &mut self,
        inode: u64,
        next_cookie: i64,
        type_tag: u8,
        name: &[u8],
        record_len: u16,
    ) -> usize {
        let at = self.out.len();
        let span = aligned_record_len(name.len());
        self.out.extend_from_slice(&inode.to_ne_bytes());
        self.out.extend_from_slice(&next_cookie.to_ne_bytes());
        self.out.extend_from_slice(&record_len.to_ne_bytes());
        self.out.push(type_tag);
        self.out.extend_from_slice(name);
        self.out.resize(at + span, 0);
        debug_assert!(span >= HEADER_LEN + name.len() + 1);
        at
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    pub fn finish(self) -> Vec<u8> {
        self.out
    }
}
