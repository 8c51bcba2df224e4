// src/lib.rs

//! `rawdents` lists a directory by decoding raw `getdents64` buffers, so a
//! directory with damaged entries can still be listed.
//!
//! ```no_run
//! let entries = rawdents::list_directory("/var/lib/broken")?;
//! for e in &entries {
//!     println!("{} {} {}", e.inode, e.file_type, String::from_utf8_lossy(&e.name));
//! }
//! # Ok::<(), rawdents::SessionError>(())
//! ```

use std::path::Path;

pub use dirent::{DecodeStats, DirEntry, FileType, OwnedEntry};
pub use getdents::{BufferSource, GetDents};
pub use rawdents_cli::{Collect, ExitCode, RecordWriter, SessionError, Sink, Summary, enumerate};

/// Collects every entry of `path`, corrupt ones included, in kernel order.
pub fn list_directory(path: impl AsRef<Path>) -> Result<Vec<OwnedEntry>, SessionError> {
    let source = GetDents::open(path)?;
    let mut sink = Collect::default();
    enumerate(source, &mut sink)?;
    Ok(sink.into_entries())
}
