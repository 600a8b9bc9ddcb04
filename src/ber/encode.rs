//! BER encoding.
//!
//! Writes into a fixed-size scratch buffer from the tail backwards, so
//! content is always serialized before the length and tag that wrap it.

use super::length::encode_length;
use super::tag;
use crate::error::{Error, Result};
use crate::oid::Oid;
use bytes::Bytes;

/// Default scratch buffer size for one request message.
pub const DEFAULT_BUFFER_SIZE: usize = 2048;

/// Scratch buffer for BER encoding that fills from the end.
///
/// Pushing past the capacity is recorded rather than written, and reported
/// by [`finish()`](Self::finish) as [`Error::BufferTooSmall`]; the output is
/// never truncated.
pub struct EncodeBuf {
    buf: Vec<u8>,
    written: usize,
}

impl EncodeBuf {
    /// Create a new encode buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE)
    }

    /// Create a new encode buffer with specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity],
            written: 0,
        }
    }

    /// Push a single byte (prepends to front).
    pub fn push_byte(&mut self, byte: u8) {
        self.written += 1;
        if let Some(pos) = self.buf.len().checked_sub(self.written) {
            self.buf[pos] = byte;
        }
    }

    /// Push multiple bytes, keeping their order in the output.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().rev() {
            self.push_byte(byte);
        }
    }

    /// Push a BER length encoding.
    pub fn push_length(&mut self, len: usize) {
        let (bytes, count) = encode_length(len);
        // encode_length returns bytes in reverse order for prepending
        for byte in bytes.iter().take(count) {
            self.push_byte(*byte);
        }
    }

    /// Push a BER tag.
    pub fn push_tag(&mut self, tag: u8) {
        self.push_byte(tag);
    }

    /// Number of bytes encoded so far, including any that did not fit.
    pub fn len(&self) -> usize {
        self.written
    }

    /// Check if buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.written == 0
    }

    /// Size of the scratch buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Whether everything pushed so far fits in the buffer.
    pub fn fits(&self) -> bool {
        self.written <= self.buf.len()
    }

    /// Encode a constructed type (SEQUENCE, PDU, etc).
    ///
    /// Calls the closure to encode contents, then wraps with length and tag.
    pub fn push_constructed<F>(&mut self, tag: u8, f: F)
    where
        F: FnOnce(&mut Self),
    {
        let start_len = self.len();
        f(self);
        let content_len = self.len() - start_len;
        self.push_length(content_len);
        self.push_tag(tag);
    }

    /// Encode a SEQUENCE.
    pub fn push_sequence<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.push_constructed(tag::universal::SEQUENCE, f);
    }

    /// Encode an INTEGER.
    pub fn push_integer(&mut self, value: i32) {
        let (arr, len) = encode_integer_stack(value);
        // Valid bytes are at the end of the array
        self.push_bytes(&arr[4 - len..]);
        self.push_length(len);
        self.push_tag(tag::universal::INTEGER);
    }

    /// Encode a Counter64.
    pub fn push_counter64(&mut self, value: u64) {
        let (arr, len) = encode_unsigned64_stack(value);
        self.push_bytes(&arr[9 - len..]);
        self.push_length(len);
        self.push_tag(tag::application::COUNTER64);
    }

    /// Encode an unsigned 32-bit integer with a specific tag.
    pub fn push_unsigned32(&mut self, tag: u8, value: u32) {
        let (arr, len) = encode_unsigned32_stack(value);
        self.push_bytes(&arr[5 - len..]);
        self.push_length(len);
        self.push_tag(tag);
    }

    /// Encode an OCTET STRING.
    pub fn push_octet_string(&mut self, data: &[u8]) {
        self.push_bytes(data);
        self.push_length(data.len());
        self.push_tag(tag::universal::OCTET_STRING);
    }

    /// Encode an OBJECT IDENTIFIER.
    ///
    /// The OID must already satisfy [`Oid::validate()`].
    pub fn push_oid(&mut self, oid: &Oid) {
        let ber = oid.to_ber_smallvec();
        self.push_bytes(&ber);
        self.push_length(ber.len());
        self.push_tag(tag::universal::OBJECT_IDENTIFIER);
    }

    /// Encode an IP address.
    pub fn push_ip_address(&mut self, addr: [u8; 4]) {
        self.push_bytes(&addr);
        self.push_length(4);
        self.push_tag(tag::application::IP_ADDRESS);
    }

    /// Encode an Opaque-wrapped float or double.
    ///
    /// `inner_tag` is [`tag::opaque::FLOAT`] or [`tag::opaque::DOUBLE`].
    pub fn push_opaque_special(&mut self, inner_tag: u8, be_bytes: &[u8]) {
        self.push_constructed(tag::application::OPAQUE, |buf| {
            buf.push_bytes(be_bytes);
            buf.push_length(be_bytes.len());
            buf.push_bytes(&[tag::opaque::TAG1, inner_tag]);
        });
    }

    /// Finalize and return exactly the written region.
    ///
    /// Fails with [`Error::BufferTooSmall`] if the encoding outgrew the buffer.
    pub fn finish(self) -> Result<Bytes> {
        let capacity = self.buf.len();
        if !self.fits() {
            return Err(Error::BufferTooSmall {
                size: self.written,
                capacity,
            });
        }
        let start = capacity - self.written;
        Ok(Bytes::from(self.buf).slice(start..))
    }
}

impl Default for EncodeBuf {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a signed 32-bit integer in minimal BER form.
///
/// Returns a stack-allocated array and the number of valid bytes.
/// The valid bytes are at the END of the array.
#[inline]
fn encode_integer_stack(value: i32) -> ([u8; 4], usize) {
    let bytes = value.to_be_bytes();

    let mut start = 0;
    if value >= 0 {
        // Skip leading 0x00 bytes, keeping one if the next byte has its sign bit set
        while start < 3 && bytes[start] == 0 && bytes[start + 1] & 0x80 == 0 {
            start += 1;
        }
    } else {
        while start < 3 && bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0 {
            start += 1;
        }
    }

    (bytes, 4 - start)
}

/// Encode an unsigned 32-bit integer.
///
/// A leading 0x00 is added when the top bit is set, so the value stays positive.
#[inline]
fn encode_unsigned32_stack(value: u32) -> ([u8; 5], usize) {
    let mut result = [0u8; 5];
    result[1..].copy_from_slice(&value.to_be_bytes());

    let mut start = 1;
    while start < 4 && result[start] == 0 {
        start += 1;
    }
    if result[start] & 0x80 != 0 {
        start -= 1;
    }

    (result, 5 - start)
}

/// Encode an unsigned 64-bit integer.
#[inline]
fn encode_unsigned64_stack(value: u64) -> ([u8; 9], usize) {
    let mut result = [0u8; 9];
    result[1..].copy_from_slice(&value.to_be_bytes());

    let mut start = 1;
    while start < 8 && result[start] == 0 {
        start += 1;
    }
    if result[start] & 0x80 != 0 {
        start -= 1;
    }

    (result, 9 - start)
}
