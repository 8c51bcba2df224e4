// crates/cli/src/sink.rs

use std::io::{self, Write};

use dirent::{DirEntry, OwnedEntry};

/// Consumer of decoded entries, called in decode order.
pub trait Sink {
    fn emit(&mut self, entry: &DirEntry<'_>) -> io::Result<()>;

    /// Called once per fill, after its last entry.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<K: Sink + ?Sized> Sink for &mut K {
    fn emit(&mut self, entry: &DirEntry<'_>) -> io::Result<()> {
        (**self).emit(entry)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Writes each entry as a listing record.
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    out: W,
    records: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, records: 0 }
    }

    pub fn records(&self) -> usize {
        self.records
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for RecordWriter<W> {
    fn emit(&mut self, entry: &DirEntry<'_>) -> io::Result<()> {
        listing::write_record(&mut self.out, entry)?;
        self.records += 1;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        tracing::trace!(target: "debug::output", records = self.records, "flush");
        self.out.flush()
    }
}

/// Keeps owned copies of every entry.
#[derive(Debug, Default)]
pub struct Collect {
    pub entries: Vec<OwnedEntry>,
}

impl Collect {
    pub fn into_entries(self) -> Vec<OwnedEntry> {
        self.entries
    }
}

impl Sink for Collect {
    fn emit(&mut self, entry: &DirEntry<'_>) -> io::Result<()> {
        self.entries.push(entry.to_owned_entry());
        Ok(())
    }
}
