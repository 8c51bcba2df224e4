// crates/logging/src/lib.rs

//! Diagnostic output for `rawdents`.
//!
//! Everything produced here goes to stderr (or a test buffer); stdout is
//! reserved for the listing. `RUST_LOG` selects what is shown, warnings
//! and errors by default.

mod config;
mod formatter;
mod sink;
mod subscriber;
mod util;

pub use config::{SubscriberConfig, SubscriberConfigBuilder};
pub use formatter::DiagFormatter;
pub use sink::LogWriter;
pub use subscriber::{DEFAULT_LEVEL, init, subscriber};
pub use util::escape_bytes;
