// crates/listing/src/render.rs

use std::io::{self, Write};

use dirent::{DirEntry, LABEL_WIDTH};

/// Terminates every field but the last.
pub const FIELD_SEP: &[u8] = b"\0\t";
/// Terminates a record.
pub const RECORD_SEP: &[u8] = b"\0\n";

pub fn write_record<W: Write + ?Sized>(w: &mut W, entry: &DirEntry<'_>) -> io::Result<()> {
    write!(w, "{}", entry.inode)?;
    w.write_all(FIELD_SEP)?;
    write!(w, "{:<width$}", entry.file_type, width = LABEL_WIDTH)?;
    w.write_all(FIELD_SEP)?;
    write!(w, "{}", entry.record_len)?;
    w.write_all(FIELD_SEP)?;
    write!(w, "{}", entry.next_cookie)?;
    w.write_all(FIELD_SEP)?;
    w.write_all(entry.name)?;
    w.write_all(RECORD_SEP)
}

pub fn render_record(entry: &DirEntry<'_>) -> Vec<u8> {
    let mut out = Vec::with_capacity(48 + entry.name.len());
    // Writing into a Vec cannot fail.
    let _ = write_record(&mut out, entry);
    out
}
