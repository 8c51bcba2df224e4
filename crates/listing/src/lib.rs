// crates/listing/src/lib.rs

//! The delimited text stream `rawdents` writes to stdout, and a parser for
//! reading it back.
//!
//! Each record is five fields: inode, type label padded to
//! [`dirent::LABEL_WIDTH`], record length, next cookie and the raw name.
//! Fields end with `\0\t` and records with `\0\n`. Decoded names never
//! contain NUL, so a NUL byte always marks a boundary regardless of what
//! bytes a name holds.

use thiserror::Error;

mod parser;
mod render;

pub use parser::{DUPLICATE_LIMIT, Event, Parser, Record};
pub use render::{FIELD_SEP, RECORD_SEP, render_record, write_record};

/// Number of fields in one record.
pub const FIELDS: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid separator type: {0} (0x{0:02X})")]
    InvalidSeparator(u8),
    #[error("record has {0} fields, expected 5")]
    FieldCount(usize),
    #[error("invalid {field} field: {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("name '{}' is duplicated (count: {count})", String::from_utf8_lossy(.name))]
    DuplicateLimit { name: Vec<u8>, count: usize },
    #[error("stream ended inside a record")]
    Truncated,
}
