//! Java string literal escaping.
//!
//! Every value interpolated into a generated literal goes through
//! [`escape_java`]. The output is pure ASCII: quotes, backslashes, and the
//! usual control characters get short escapes, everything else outside
//! printable ASCII becomes a `\uXXXX` escape per UTF-16 code unit.

/// Escape `value` for use between double quotes in Java source.
pub fn escape_java(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            ' '..='~' => out.push(ch),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04X}"));
                }
            }
        }
    }
    out
}

/// Quoted Java string literal for `value`.
pub fn java_string(value: &str) -> String {
    format!("\"{}\"", escape_java(value))
}
