//! Internal utilities.

use std::fmt::Write;

/// Encode bytes as lowercase hex.
pub(crate) fn encode_hex(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for byte in data {
        // Writing to a String cannot fail
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// Format bytes as a hex dump, 16 bytes per line with offsets.
///
/// ```text
/// 0000: 30 29 02 01 01 04 06 70 75 62 6c 69 63 a3 1c 02
/// ```
pub(crate) fn hex_dump(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3 + data.len() / 16 * 7);
    for (i, chunk) in data.chunks(16).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{:04x}:", i * 16);
        for byte in chunk {
            let _ = write!(out, " {:02x}", byte);
        }
    }
    out
}
