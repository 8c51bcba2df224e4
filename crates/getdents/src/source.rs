// crates/getdents/src/source.rs

use std::path::Path;

use dirent::layout::MAX_RECORD_LEN;

use crate::handle::DirHandle;
use crate::sys::getdents64;
use crate::{BufferSource, Error, Result};

pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// [`BufferSource`] backed by `getdents64(2)` on an open directory.
///
/// The buffer is owned by the source and reused for every fill; the slice
/// returned by [`BufferSource::fill`] is only valid until the next call.
#[derive(Debug)]
pub struct GetDents {
    handle: DirHandle,
    buf: Vec<u8>,
    fills: usize,
}

impl GetDents {
    pub fn new(handle: DirHandle) -> Self {
        Self::with_capacity(handle, DEFAULT_BUFFER_SIZE)
    }

    /// Capacities below the size of the largest possible record are
    /// raised to it.
    pub fn with_capacity(handle: DirHandle, capacity: usize) -> Self {
        let capacity = capacity.max(MAX_RECORD_LEN);
        Self {
            handle,
            buf: vec![0; capacity],
            fills: 0,
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        DirHandle::open(path).map(Self::new)
    }

    pub fn handle(&self) -> &DirHandle {
        &self.handle
    }

    /// Number of non-empty fills returned so far.
    pub fn fills(&self) -> usize {
        self.fills
    }
}

impl BufferSource for GetDents {
    fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn fill(&mut self) -> Result<&[u8]> {
        let n = getdents64(self.handle.file(), &mut self.buf)
            .map_err(|source| Error::Enumerate { source })?;
        let n = n.min(self.buf.len());
        if n > 0 {
            self.fills += 1;
        }
        tracing::debug!(target: "debug::fill", bytes = n, fill = self.fills, "getdents64");
        Ok(&self.buf[..n])
    }
}
