// crates/logging/tests/formatter.rs
use logging::{LogWriter, SubscriberConfig, subscriber};

fn capture(program: Option<&str>, f: impl FnOnce()) -> String {
    let (writer, buf) = LogWriter::buffer();
    let mut builder = SubscriberConfig::builder().writer(writer);
    if let Some(program) = program {
        builder = builder.program(program);
    }
    let sub = subscriber(builder.build());
    tracing::subscriber::with_default(sub, f);
    let out = buf.lock().unwrap().clone();
    String::from_utf8(out).unwrap()
}

#[test]
fn warning_is_prefixed_with_program_and_severity() {
    let out = capture(Some("rawdents"), || {
        tracing::warn!(offset = 64, "corrupt entry");
    });
    assert_eq!(out, "rawdents: warning: corrupt entry offset=64\n");
}

#[test]
fn program_prefix_is_optional() {
    let out = capture(None, || {
        tracing::warn!(entries = 3, corrupt = 1, "listing had damage");
    });
    assert_eq!(out, "warning: listing had damage entries=3 corrupt=1\n");
}

#[test]
fn error_severity() {
    let out = capture(Some("rawdents"), || tracing::error!("getdents64 failed"));
    assert_eq!(out, "rawdents: error: getdents64 failed\n");
}
