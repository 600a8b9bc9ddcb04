//! BER length encoding.
//!
//! Length encoding follows X.690 Section 8.1.3 (definite form only):
//! - Short form: Single byte, bit 8=0, value 0-127
//! - Long form: Initial byte (bit 8=1, bits 7-1=count), followed by length bytes

/// Encode a length value (returns bytes in reverse order for prepending).
///
/// Uses short form for lengths <= 127, long form otherwise.
pub fn encode_length(len: usize) -> ([u8; 5], usize) {
    let mut buf = [0u8; 5];

    if len <= 127 {
        buf[0] = len as u8;
        return (buf, 1);
    }

    // Long form: value octets least-significant first, then the count octet
    let mut count = 0;
    let mut remaining = len;
    while remaining > 0 && count < 4 {
        buf[count] = remaining as u8;
        remaining >>= 8;
        count += 1;
    }
    buf[count] = 0x80 | count as u8;
    (buf, count + 1)
}
