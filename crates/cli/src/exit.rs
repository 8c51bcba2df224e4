// crates/cli/src/exit.rs

use std::fmt;

use clap::error::ErrorKind;

use crate::PROGRAM;

/// Process exit status, numbered like rsync's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Ok = 0,
    SyntaxOrUsage = 1,
    /// The directory could not be opened.
    FileSelect = 3,
    /// Enumeration or writing the listing failed.
    FileIo = 11,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        i32::from(code as u8)
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(u8::from(code))
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self {
            ExitCode::Ok => "success",
            ExitCode::SyntaxOrUsage => "syntax or usage error",
            ExitCode::FileSelect => "errors selecting input/output files, dirs",
            ExitCode::FileIo => "error in file IO",
        };
        f.write_str(desc)
    }
}

pub fn exit_code_from_error_kind(kind: ErrorKind) -> ExitCode {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Ok,
        ErrorKind::Io | ErrorKind::Format => ExitCode::FileIo,
        _ => ExitCode::SyntaxOrUsage,
    }
}

/// Reports a clap failure and exits. Help and version go to stdout with
/// status 0; usage errors go to stderr.
pub fn handle_clap_error(e: clap::Error) -> ! {
    let code = exit_code_from_error_kind(e.kind());
    if code == ExitCode::Ok {
        let _ = e.print();
    } else {
        let msg = e.to_string();
        let msg = msg.strip_prefix("error: ").unwrap_or(&msg).trim_end();
        let mut lines = msg.lines();
        if let Some(first) = lines.next() {
            eprintln!("{PROGRAM}: {first}");
            for line in lines {
                eprintln!("{line}");
            }
        }
    }
    std::process::exit(i32::from(code))
}
