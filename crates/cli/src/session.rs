// crates/cli/src/session.rs

use std::io;

use dirent::{DecodeStats, Decoder};
use getdents::{BufferSource, GetDents};
use logging::escape_bytes;
use thiserror::Error;

use crate::exit::ExitCode;
use crate::options::Cli;
use crate::sink::{RecordWriter, Sink};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Source(#[from] getdents::Error),
    #[error("failed to write listing: {0}")]
    Output(#[source] io::Error),
}

impl SessionError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SessionError::Source(getdents::Error::Open { .. }) => ExitCode::FileSelect,
            SessionError::Source(getdents::Error::Enumerate { .. }) => ExitCode::FileIo,
            SessionError::Output(_) => ExitCode::FileIo,
        }
    }
}

/// Totals for one listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub fills: usize,
    pub stats: DecodeStats,
}

/// Drains `source` into `sink`, one fill at a time, until the source reports
/// end of directory.
///
/// Damaged records are logged and passed on; only the source or the sink can
/// fail the listing. Whatever was emitted before a failure stays emitted.
pub fn enumerate<S, K>(mut source: S, sink: &mut K) -> Result<Summary, SessionError>
where
    S: BufferSource,
    K: Sink + ?Sized,
{
    let mut summary = Summary::default();
    loop {
        let capacity = source.capacity();
        let fill = source.fill()?;
        if fill.is_empty() {
            break;
        }
        summary.fills += 1;

        let mut decoder = Decoder::new(fill, capacity);
        for entry in decoder.by_ref() {
            if entry.corrupt {
                tracing::warn!(
                    offset = entry.offset,
                    reclen = entry.record_len,
                    name = %escape_bytes(entry.name),
                    "corrupt directory entry"
                );
            }
            sink.emit(&entry).map_err(SessionError::Output)?;
        }
        summary.stats.merge(decoder.stats());
        sink.flush().map_err(SessionError::Output)?;
    }
    tracing::info!(
        fills = summary.fills,
        entries = summary.stats.entries,
        corrupt = summary.stats.corrupt,
        resyncs = summary.stats.resyncs,
        "listing complete"
    );
    Ok(summary)
}

/// Lists `cli.dir` to stdout.
pub fn run(cli: &Cli) -> Result<Summary, SessionError> {
    let source = GetDents::open(&cli.dir)?;
    let stdout = io::stdout();
    let mut sink = RecordWriter::new(stdout.lock());
    enumerate(source, &mut sink)
}
