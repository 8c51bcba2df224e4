// fuzz/fuzz_targets/dirent_parser.rs
#![no_main]
use dirent::decode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&cap, fill)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap) * 8;
    let mut last = None;
    let mut out = Vec::new();
    for entry in decode(fill, capacity) {
        assert!(entry.offset < fill.len());
        assert!(last.is_none_or(|prev| entry.offset > prev));
        last = Some(entry.offset);
        listing::write_record(&mut out, &entry).unwrap();
    }
});
