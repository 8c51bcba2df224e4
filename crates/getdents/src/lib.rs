// crates/getdents/src/lib.rs

//! Buffer sources feeding the directory entry decoder.
//!
//! [`GetDents`] issues `getdents64(2)` directly against an open directory,
//! bypassing `readdir(3)` and [`std::fs::read_dir`], so that directories
//! with damaged entries can still be listed. [`MemorySource`] replays
//! scripted fills for tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

mod handle;
mod memory;
mod source;
mod sys;

pub use handle::DirHandle;
pub use memory::MemorySource;
pub use source::{DEFAULT_BUFFER_SIZE, GetDents};

/// Fatal failures of a buffer source. Neither is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("getdents64 failed: {source}")]
    Enumerate {
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn io_error(&self) -> &io::Error {
        match self {
            Error::Open { source, .. } | Error::Enumerate { source } => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Supplies one buffer fill per call.
///
/// An empty slice marks the end of the directory. A non-empty slice holds
/// one or more complete records, which may themselves be corrupt.
pub trait BufferSource {
    /// Size of the buffer fills are read into.
    fn capacity(&self) -> usize;

    fn fill(&mut self) -> Result<&[u8]>;
}

impl<S: BufferSource + ?Sized> BufferSource for &mut S {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn fill(&mut self) -> Result<&[u8]> {
        (**self).fill()
    }
}
