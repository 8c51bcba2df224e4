// fuzz/fuzz_targets/listing_parser.rs
#![no_main]
use libfuzzer_sys::fuzz_target;
use listing::Parser;

fuzz_target!(|data: &[u8]| {
    let mut parser = Parser::new();
    for chunk in data.chunks(7) {
        if parser.feed(chunk).is_err() {
            return;
        }
        while parser.next_event().is_some() {}
    }
    let _ = parser.finish();
});
