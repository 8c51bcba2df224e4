// crates/dirent/src/lib.rs

//! Decoding of raw `getdents64` buffers.
//!
//! A fill is decoded lazily into [`DirEntry`] values borrowing from the
//! buffer. Corrupted headers do not stop decoding: the entry is emitted
//! best-effort and the [`Decoder`] resynchronizes on the next plausible
//! record boundary.

mod decoder;
mod encoder;
mod entry;
pub mod layout;

pub use decoder::{DecodeStats, Decoder, State, decode};
pub use encoder::Encoder;
pub use entry::{DirEntry, FileType, LABEL_WIDTH, OwnedEntry};
