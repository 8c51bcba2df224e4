// crates/dirent/src/decoder.rs

use crate::entry::{DirEntry, FileType};
use crate::layout::{Fill, HEADER_LEN};

/// Position of the decoder within one fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Decoding { offset: usize },
    Resyncing { scan: usize },
    FillExhausted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub entries: usize,
    pub corrupt: usize,
    pub resyncs: usize,
    pub skipped_bytes: usize,
}

impl DecodeStats {
    pub fn merge(&mut self, other: &DecodeStats) {
        self.entries += other.entries;
        self.corrupt += other.corrupt;
        self.resyncs += other.resyncs;
        self.skipped_bytes += other.skipped_bytes;
    }
}

/// Lazy decoder over a single `getdents64` fill.
///
/// Records are trusted while their declared length is non-zero and fits in
/// the rest of the fill. Otherwise the entry is still emitted, flagged
/// [`DirEntry::corrupt`], and the decoder scans forward byte by byte for
/// the first position whose length is within `capacity` and whose type tag
/// is one of the seven recognized types.
///
/// Every step strictly advances the read position and no byte at or past
/// the end of the fill is touched, so iteration always terminates. A
/// plausible-looking byte pattern inside a damaged name can be taken for a
/// record start; that is accepted behavior.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    fill: Fill<'a>,
    capacity: usize,
    state: State,
    stats: DecodeStats,
}

impl<'a> Decoder<'a> {
    /// `capacity` is the size of the buffer the fill was read into.
    pub fn new(buf: &'a [u8], capacity: usize) -> Self {
        Self {
            fill: Fill::new(buf),
            capacity: capacity.max(buf.len()),
            state: State::Decoding { offset: 0 },
            stats: DecodeStats::default(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    fn decode_at(&mut self, offset: usize) -> Option<DirEntry<'a>> {
        let len = self.fill.len();
        if offset >= len {
            self.state = State::FillExhausted;
            return None;
        }
        let Some(header) = self.fill.header(offset) else {
            tracing::debug!(
                target: "debug::decode",
                offset,
                remaining = len - offset,
                "truncated record header"
            );
            self.stats.corrupt += 1;
            // The resync below starts past the end and counts nothing.
            self.stats.skipped_bytes += len - offset;
            self.state = State::Resyncing {
                scan: offset + HEADER_LEN,
            };
            return None;
        };

        let record_len = usize::from(header.record_len);
        let name_start = offset + HEADER_LEN;
        let intact = record_len != 0 && record_len <= len - offset;
        let name = if intact {
            self.fill.name(name_start, offset + record_len)
        } else {
            self.fill.name(name_start, len)
        };

        if intact {
            self.state = State::Decoding {
                offset: offset + record_len,
            };
        } else {
            tracing::debug!(
                target: "debug::decode",
                offset,
                record_len,
                inode = header.inode,
                "corrupt record length"
            );
            self.stats.corrupt += 1;
            self.state = State::Resyncing {
                scan: name_start + name.len(),
            };
        }

        self.stats.entries += 1;
        Some(DirEntry {
            inode: header.inode,
            next_cookie: header.next_cookie,
            record_len: header.record_len,
            file_type: FileType::from_tag(header.type_tag),
            name,
            offset,
            corrupt: !intact,
        })
    }

    fn resync(&mut self, start: usize) {
        let len = self.fill.len();
        let mut scan = start;
        while scan < len {
            let Some((record_len, tag)) = self.fill.candidate(scan) else {
                break;
            };
            if usize::from(record_len) <= self.capacity && FileType::from_tag(tag).is_known() {
                self.stats.resyncs += 1;
                self.stats.skipped_bytes += scan - start;
                tracing::debug!(
                    target: "debug::decode",
                    from = start,
                    to = scan,
                    "resynchronized"
                );
                self.state = State::Decoding { offset: scan };
                return;
            }
            scan += 1;
        }
        self.stats.skipped_bytes += len.saturating_sub(start);
        tracing::debug!(
            target: "debug::decode",
            from = start,
            "no record boundary found before end of fill"
        );
        self.state = State::FillExhausted;
    }
}

impl<'a> Iterator for Decoder<'a> {
    type Item = DirEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::FillExhausted => return None,
                State::Decoding { offset } => {
                    if let Some(entry) = self.decode_at(offset) {
                        return Some(entry);
                    }
                }
                State::Resyncing { scan } => self.resync(scan),
            }
        }
    }
}

impl std::iter::FusedIterator for Decoder<'_> {}

/// Decodes `buf` as one fill read into a buffer of `capacity` bytes.
pub fn decode(buf: &[u8], capacity: usize) -> Decoder<'_> {
    Decoder::new(buf, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;

    const CAP: usize = 1024;

    #[test]
    fn empty_fill_yields_nothing() {
        let mut dec = decode(&[], CAP);
        assert!(dec.next().is_none());
        assert_eq!(dec.state(), State::FillExhausted);
        assert_eq!(*dec.stats(), DecodeStats::default());
    }

    #[test]
    fn decodes_single_regular_file() {
        let mut enc = Encoder::new();
        enc.push(42, 32, FileType::Regular, b"report.txt");
        let buf = enc.finish();
        assert_eq!(buf.len(), 32);

        let entries: Vec<_> = decode(&buf, CAP).collect();
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.inode, 42);
        assert_eq!(e.file_type, FileType::Regular);
        assert_eq!(e.record_len, 32);
        assert_eq!(e.next_cookie, 32);
        assert_eq!(e.name, b"report.txt");
        assert!(!e.corrupt);
    }

    #[test]
    fn zero_length_record_resumes_at_next_boundary() {
        let mut enc = Encoder::new();
        enc.push(1, 24, FileType::Directory, b".");
        enc.push_with_len(2, 48, FileType::Regular, b"broken", 0);
        enc.push(3, 80, FileType::Symlink, b"after");
        let buf = enc.finish();

        let mut dec = decode(&buf, CAP);
        let entries: Vec<_> = dec.by_ref().collect();
        let names: Vec<&[u8]> = entries.iter().map(|e| e.name).collect();
        let expected: [&[u8]; 3] = [b".", b"broken", b"after"];
        assert_eq!(names, expected);
        assert!(entries[1].corrupt);
        assert_eq!(entries[1].record_len, 0);
        assert_eq!(entries[2].inode, 3);
        assert!(!entries[2].corrupt);
        assert_eq!(dec.stats().corrupt, 1);
        assert_eq!(dec.stats().resyncs, 1);
        assert_eq!(dec.stats().skipped_bytes, 7);
    }

    #[test]
    fn oversized_length_is_treated_as_corrupt() {
        let mut enc = Encoder::new();
        enc.push_with_len(7, 0, FileType::Regular, b"huge", u16::MAX);
        enc.push(8, 0, FileType::Fifo, b"pipe");
        let buf = enc.finish();

        let entries: Vec<_> = decode(&buf, CAP).collect();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].corrupt);
        assert_eq!(entries[0].name, b"huge");
        assert_eq!(entries[1].file_type, FileType::Fifo);
        assert_eq!(entries[1].name, b"pipe");
    }

    #[test]
    fn length_past_end_of_fill_is_corrupt() {
        let mut enc = Encoder::new();
        enc.push_with_len(9, 0, FileType::Regular, b"tail", 512);
        let buf = enc.finish();

        let mut dec = decode(&buf, CAP);
        let entry = dec.next().unwrap();
        assert!(entry.corrupt);
        assert_eq!(entry.name, b"tail");
        assert!(dec.next().is_none());
        assert_eq!(dec.state(), State::FillExhausted);
    }

    #[test]
    fn truncated_header_ends_fill_without_output() {
        let mut enc = Encoder::new();
        enc.push(5, 0, FileType::Regular, b"ok");
        enc.push_bytes(&[0xAA; HEADER_LEN - 1]);
        let buf = enc.finish();

        let mut dec = decode(&buf, CAP);
        assert_eq!(dec.next().map(|e| e.inode), Some(5));
        assert!(dec.next().is_none());
        assert_eq!(dec.state(), State::FillExhausted);
        assert_eq!(dec.stats().corrupt, 1);
        assert_eq!(dec.stats().entries, 1);
        assert_eq!(dec.stats().resyncs, 0);
        assert_eq!(dec.stats().skipped_bytes, HEADER_LEN - 1);
    }

    #[test]
    fn unrecoverable_garbage_exhausts_fill() {
        let mut enc = Encoder::new();
        enc.push_with_len(1, 0, FileType::Regular, b"x", 0);
        // Type tag 0xff everywhere: no candidate can pass.
        enc.push_bytes(&[0xff; 64]);
        let buf = enc.finish();

        let mut dec = decode(&buf, CAP);
        assert_eq!(dec.by_ref().count(), 1);
        assert_eq!(dec.stats().resyncs, 0);
        assert_eq!(dec.stats().skipped_bytes, buf.len() - (HEADER_LEN + 1));
    }

    #[test]
    fn candidate_length_bounded_by_capacity_not_fill() {
        let mut enc = Encoder::new();
        enc.push_with_len(1, 0, FileType::Regular, b"a", 0);
        enc.push_with_len(2, 0, FileType::Regular, b"b", 200);
        let buf = enc.finish();
        assert!(buf.len() < 200);

        let small: Vec<_> = decode(&buf, buf.len()).map(|e| e.inode).collect();
        let large: Vec<_> = decode(&buf, CAP).map(|e| e.inode).collect();
        assert_eq!(large, [1, 2]);
        assert_eq!(small[0], 1);
        assert!(!small.contains(&2));
    }

    #[test]
    fn tiny_nonzero_length_still_advances() {
        let mut enc = Encoder::new();
        enc.push_with_len(1, 0, FileType::Regular, b"odd", 1);
        let buf = enc.finish();
        let entries: Vec<_> = decode(&buf, CAP).collect();
        assert!(!entries[0].corrupt);
        assert_eq!(entries[0].name, b"");
        assert!(entries.len() <= buf.len());
        assert!(entries.windows(2).all(|w| w[0].offset < w[1].offset));
    }
}
