// crates/logging/src/config.rs

use crate::sink::LogWriter;

#[derive(Clone, Debug, Default)]
pub struct SubscriberConfig {
    /// Prefix for every diagnostic line.
    pub program: Option<String>,
    pub writer: LogWriter,
}

#[derive(Default)]
pub struct SubscriberConfigBuilder {
    cfg: SubscriberConfig,
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }
}

impl SubscriberConfigBuilder {
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.cfg.program = Some(program.into());
        self
    }

    pub fn writer(mut self, writer: LogWriter) -> Self {
        self.cfg.writer = writer;
        self
    }

    pub fn build(self) -> SubscriberConfig {
        self.cfg
    }
}
