// crates/logging/src/sink.rs
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Destination of diagnostic output.
///
/// Diagnostics never share stdout with the listing itself.
#[derive(Clone, Debug, Default)]
pub enum LogWriter {
    #[default]
    Stderr,
    /// In-memory capture, mainly for tests.
    Buffer(Arc<Mutex<Vec<u8>>>),
}

impl LogWriter {
    pub fn buffer() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        (LogWriter::Buffer(Arc::clone(&buf)), buf)
    }
}

pub struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?;
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = Box<dyn Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            LogWriter::Stderr => Box::new(io::stderr()),
            LogWriter::Buffer(buf) => Box::new(BufferWriter(Arc::clone(buf))),
        }
    }
}
