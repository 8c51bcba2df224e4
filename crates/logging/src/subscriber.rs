// crates/logging/src/subscriber.rs

use crate::config::SubscriberConfig;
use crate::formatter::DiagFormatter;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or names nothing valid.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .from_env_lossy()
}

/// Build a [`tracing`] subscriber writing plain-text diagnostics to the
/// configured sink, filtered by `RUST_LOG`.
pub fn subscriber(cfg: SubscriberConfig) -> Box<dyn tracing::Subscriber + Send + Sync> {
    let SubscriberConfig { program, writer } = cfg;

    let fmt_layer = tracing_fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .event_format(DiagFormatter::new(program));

    Box::new(tracing_subscriber::registry().with(env_filter()).with(fmt_layer))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(cfg: SubscriberConfig) -> io::Result<()> {
    subscriber(cfg)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}
