// crates/cli/src/options.rs

use std::path::PathBuf;

use clap::Parser;

/// List a directory straight from getdents64, decoding past damaged entries.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "rawdents", version, long_about = None)]
pub struct Cli {
    /// Directory to list
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}
