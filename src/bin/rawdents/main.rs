// src/bin/rawdents/main.rs

use clap::Parser;
use rawdents_cli::{Cli, ExitCode, PROGRAM, handle_clap_error, run};

fn main() -> std::process::ExitCode {
    let cli = Cli::try_parse().unwrap_or_else(|e| handle_clap_error(e));

    let cfg = logging::SubscriberConfig::builder().program(PROGRAM).build();
    if let Err(err) = logging::init(cfg) {
        eprintln!("{PROGRAM}: failed to initialise logging: {err}");
    }

    match run(&cli) {
        Ok(_) => ExitCode::Ok.into(),
        Err(e) => {
            tracing::debug!(error = ?e, "listing failed");
            eprintln!("{PROGRAM}: {e}");
            e.exit_code().into()
        }
    }
}
