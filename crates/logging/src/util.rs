// crates/logging/src/util.rs

/// Renders raw name bytes for a diagnostic line. Control characters and
/// bytes outside printable ASCII become `\#ooo` octal escapes.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if b < 0x20 || b > 0x7e || b == b'\\' {
            out.push_str(&format!("\\#{:03o}", b));
        } else {
            out.push(char::from(b));
        }
    }
    out
}
