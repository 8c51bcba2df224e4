// tests/common/mod.rs
#![allow(dead_code)]

use assert_cmd::Command;
use listing::{Event, Parser, Record};

pub fn rawdents_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rawdents").unwrap();
    cmd.env("LC_ALL", "C").env("LANG", "C").env_remove("RUST_LOG");
    cmd
}

/// Parses a complete listing, panicking on any format or duplicate error.
pub fn parse_listing(stdout: &[u8]) -> Vec<Record> {
    let mut parser = Parser::new();
    parser.feed(stdout).unwrap();
    parser.finish().unwrap();
    std::iter::from_fn(|| parser.next_event())
        .map(|event| match event {
            Event::Entry(record) => record,
            Event::Duplicate { record, count } => panic!(
                "{} listed {count} times",
                String::from_utf8_lossy(&record.name)
            ),
        })
        .collect()
}

pub fn record<'a>(records: &'a [Record], name: &str) -> &'a Record {
    records
        .iter()
        .find(|r| r.name == name.as_bytes())
        .unwrap_or_else(|| panic!("{name} not listed"))
}
