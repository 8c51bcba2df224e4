// crates/getdents/src/memory.rs

use std::collections::VecDeque;
use std::io;

use crate::source::DEFAULT_BUFFER_SIZE;
use crate::{BufferSource, Error, Result};

/// Replays a fixed sequence of fills, then reports end of directory or a
/// scripted failure.
#[derive(Debug)]
pub struct MemorySource {
    fills: VecDeque<Vec<u8>>,
    current: Vec<u8>,
    capacity: usize,
    failure: Option<io::ErrorKind>,
}

impl MemorySource {
    pub fn new<I>(fills: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            fills: fills.into_iter().collect(),
            current: Vec::new(),
            capacity: DEFAULT_BUFFER_SIZE,
            failure: None,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Fail with `kind` once the scripted fills are used up instead of
    /// reporting end of directory.
    pub fn fail_with(mut self, kind: io::ErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }
}

impl BufferSource for MemorySource {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn fill(&mut self) -> Result<&[u8]> {
        match self.fills.pop_front() {
            Some(next) => self.current = next,
            None => {
                if let Some(kind) = self.failure.take() {
                    return Err(Error::Enumerate {
                        source: io::Error::new(kind, "scripted enumeration failure"),
                    });
                }
                self.current.clear();
            }
        }
        Ok(&self.current)
    }
}
