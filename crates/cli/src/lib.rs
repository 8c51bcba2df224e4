// crates/cli/src/lib.rs

//! Command line front end for `rawdents`.

pub mod exit;
pub mod options;
pub mod session;
pub mod sink;

pub use exit::{ExitCode, exit_code_from_error_kind, handle_clap_error};
pub use options::Cli;
pub use session::{SessionError, Summary, enumerate, run};
pub use sink::{Collect, RecordWriter, Sink};

pub const PROGRAM: &str = "rawdents";
