// crates/logging/src/formatter.rs
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

/// Plain-text diagnostics: `program: warning: message key=value ...`.
pub struct DiagFormatter {
    program: Option<String>,
}

impl DiagFormatter {
    pub fn new(program: Option<String>) -> Self {
        Self { program }
    }
}

#[derive(Default)]
struct MsgVisitor {
    msg: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for MsgVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.msg.push_str(value);
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.msg.push_str(&format!("{value:?}"));
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }
}

fn severity(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "error: ",
        Level::WARN => "warning: ",
        _ => "",
    }
}

impl<S, N> FormatEvent<S, N> for DiagFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MsgVisitor::default();
        event.record(&mut visitor);
        let meta = event.metadata();

        if let Some(program) = &self.program {
            write!(writer, "{program}: ")?;
        }
        writer.write_str(severity(meta.level()))?;
        if visitor.msg.is_empty() {
            writer.write_str(meta.target())?;
        } else {
            writer.write_str(&visitor.msg)?;
        }
        for (name, value) in &visitor.fields {
            write!(writer, " {name}={value}")?;
        }
        writer.write_char('\n')
    }
}
