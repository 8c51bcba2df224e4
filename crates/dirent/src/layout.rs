// crates/dirent/src/layout.rs

// linux_dirent64 field offsets, native byte order.
pub const INODE_OFFSET: usize = 0;
pub const COOKIE_OFFSET: usize = 8;
pub const RECLEN_OFFSET: usize = 16;
pub const TYPE_OFFSET: usize = 18;
/// Bytes that must be present to read every fixed header field. The name
/// starts here.
pub const HEADER_LEN: usize = 19;
pub const RECORD_ALIGN: usize = 8;
pub const NAME_MAX: usize = 255;
/// Span of the largest possible record. A fill buffer smaller than this
/// can be rejected by the kernel.
pub const MAX_RECORD_LEN: usize = aligned_record_len(NAME_MAX);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Header {
    pub inode: u64,
    pub next_cookie: i64,
    pub record_len: u16,
    pub type_tag: u8,
}

/// Bounds-checked reads over one immutable fill.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fill<'a> {
    buf: &'a [u8],
}

impl<'a> Fill<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    fn array<const N: usize>(&self, at: usize) -> Option<[u8; N]> {
        let end = at.checked_add(N)?;
        self.buf.get(at..end)?.try_into().ok()
    }

    /// Reads the header at `at`, or `None` when it would cross the end of
    /// the fill.
    pub fn header(&self, at: usize) -> Option<Header> {
        if at.checked_add(HEADER_LEN)? > self.buf.len() {
            return None;
        }
        Some(Header {
            inode: u64::from_ne_bytes(self.array(at + INODE_OFFSET)?),
            next_cookie: i64::from_ne_bytes(self.array(at + COOKIE_OFFSET)?),
            record_len: u16::from_ne_bytes(self.array(at + RECLEN_OFFSET)?),
            type_tag: self.buf[at + TYPE_OFFSET],
        })
    }

    pub fn candidate(&self, at: usize) -> Option<(u16, u8)> {
        if at.checked_add(HEADER_LEN)? > self.buf.len() {
            return None;
        }
        let record_len = u16::from_ne_bytes(self.array(at + RECLEN_OFFSET)?);
        Some((record_len, self.buf[at + TYPE_OFFSET]))
    }

    /// NUL-terminated bytes in `start..end`, clamped to the fill. Without a
    /// terminator the name runs to the bound.
    pub fn name(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.buf.len());
        if start >= end {
            return &[];
        }
        let raw = &self.buf[start..end];
        match raw.iter().position(|&b| b == 0) {
            Some(nul) => &raw[..nul],
            None => raw,
        }
    }
}

/// Record length the kernel would use for a name of `name_len` bytes.
pub const fn aligned_record_len(name_len: usize) -> usize {
    let raw = HEADER_LEN + name_len + 1;
    raw.div_ceil(RECORD_ALIGN) * RECORD_ALIGN
}
