// crates/listing/src/parser.rs

use std::collections::{HashMap, VecDeque};
use std::io;
use std::mem;
use std::str::FromStr;

use dirent::FileType;

use crate::{Error, FIELDS};

/// A name seen more often than this aborts parsing. A damaged directory can
/// make the kernel hand out the same entries again and again.
pub const DUPLICATE_LIMIT: usize = 10;

/// One record read back from a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub inode: u64,
    pub file_type: FileType,
    pub record_len: u16,
    pub next_cookie: i64,
    pub name: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// First record carrying this name.
    Entry(Record),
    /// The name was already listed; `count` includes this sighting.
    Duplicate { record: Record, count: usize },
}

/// Incremental parser for the listing stream.
///
/// Bytes may arrive split at arbitrary points. Completed records are queued
/// and drained with [`Parser::next_event`].
#[derive(Debug)]
pub struct Parser {
    field: Vec<u8>,
    fields: Vec<Vec<u8>>,
    after_nul: bool,
    events: VecDeque<Event>,
    seen: HashMap<Vec<u8>, usize>,
    duplicate_limit: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::with_duplicate_limit(DUPLICATE_LIMIT)
    }

    pub fn with_duplicate_limit(duplicate_limit: usize) -> Self {
        Self {
            field: Vec::new(),
            fields: Vec::with_capacity(FIELDS),
            after_nul: false,
            events: VecDeque::new(),
            seen: HashMap::new(),
            duplicate_limit,
        }
    }

    pub fn feed(&mut self, mut input: &[u8]) -> Result<(), Error> {
        while !input.is_empty() {
            if self.after_nul {
                self.after_nul = false;
                let sep = input[0];
                input = &input[1..];
                match sep {
                    b'\t' => self.end_field()?,
                    b'\n' => {
                        self.end_field()?;
                        self.end_record()?;
                    }
                    other => {
                        tracing::error!(separator = other, "invalid separator in listing");
                        return Err(Error::InvalidSeparator(other));
                    }
                }
                continue;
            }
            match input.iter().position(|&b| b == 0) {
                Some(nul) => {
                    self.field.extend_from_slice(&input[..nul]);
                    input = &input[nul + 1..];
                    self.after_nul = true;
                }
                None => {
                    self.field.extend_from_slice(input);
                    break;
                }
            }
        }
        Ok(())
    }

    pub fn next_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Checks that the stream did not stop inside a record.
    pub fn finish(&self) -> Result<(), Error> {
        if self.after_nul || !self.field.is_empty() || !self.fields.is_empty() {
            return Err(Error::Truncated);
        }
        Ok(())
    }

    fn end_field(&mut self) -> Result<(), Error> {
        self.fields.push(mem::take(&mut self.field));
        if self.fields.len() > FIELDS {
            return Err(Error::FieldCount(self.fields.len()));
        }
        Ok(())
    }

    fn end_record(&mut self) -> Result<(), Error> {
        let fields = mem::take(&mut self.fields);
        if fields.len() != FIELDS {
            return Err(Error::FieldCount(fields.len()));
        }
        let mut it = fields.into_iter();
        let inode = parse_number(it.next(), "inode")?;
        let label = it.next().unwrap_or_default();
        let file_type = std::str::from_utf8(&label)
            .ok()
            .and_then(FileType::from_label)
            .ok_or_else(|| invalid("type", &label))?;
        let record_len = parse_number(it.next(), "record length")?;
        let next_cookie = parse_number(it.next(), "next cookie")?;
        let name = it.next().unwrap_or_default();

        let count = self.seen.entry(name.clone()).or_default();
        *count += 1;
        let count = *count;
        let record = Record {
            inode,
            file_type,
            record_len,
            next_cookie,
            name,
        };
        if count == 1 {
            self.events.push_back(Event::Entry(record));
        } else if count > self.duplicate_limit {
            return Err(Error::DuplicateLimit {
                name: record.name,
                count,
            });
        } else {
            tracing::warn!(
                name = %String::from_utf8_lossy(&record.name),
                count,
                "duplicated name in listing"
            );
            self.events.push_back(Event::Duplicate { record, count });
        }
        Ok(())
    }
}

fn invalid(field: &'static str, raw: &[u8]) -> Error {
    Error::InvalidField {
        field,
        value: String::from_utf8_lossy(raw).into_owned(),
    }
}

fn parse_number<T: FromStr>(raw: Option<Vec<u8>>, field: &'static str) -> Result<T, Error> {
    let raw = raw.unwrap_or_default();
    std::str::from_utf8(&raw)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| invalid(field, &raw))
}

impl io::Write for Parser {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.feed(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
