//! Minimal BER reader used to check encoder output.
//!
//! Independent of the crate's own encoder: definite lengths only, panics on
//! anything malformed.

/// Cursor over BER-encoded bytes.
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.data.len()
    }

    fn byte(&mut self) -> u8 {
        let b = *self
            .data
            .get(self.pos)
            .unwrap_or_else(|| panic!("truncated at offset {}", self.pos));
        self.pos += 1;
        b
    }

    fn length(&mut self) -> usize {
        let first = self.byte();
        if first & 0x80 == 0 {
            return first as usize;
        }
        let count = (first & 0x7F) as usize;
        assert!(count > 0 && count <= 4, "bad length-of-length {}", count);
        let mut len = 0usize;
        for _ in 0..count {
            len = (len << 8) | self.byte() as usize;
        }
        // Definite form must be minimal
        assert!(len >= 0x80, "long-form length {} should be short form", len);
        len
    }

    /// Read one TLV, returning its tag and content.
    pub fn read_tlv(&mut self) -> (u8, &'a [u8]) {
        let tag = self.byte();
        let len = self.length();
        let end = self.pos + len;
        assert!(end <= self.data.len(), "length {} overruns input", len);
        let content = &self.data[self.pos..end];
        self.pos = end;
        (tag, content)
    }

    /// Read a TLV and check its tag.
    pub fn expect(&mut self, tag: u8) -> &'a [u8] {
        let (actual, content) = self.read_tlv();
        assert_eq!(actual, tag, "expected tag 0x{:02X}, got 0x{:02X}", tag, actual);
        content
    }

    /// Read a constructed TLV and return a reader over its content.
    pub fn enter(&mut self, tag: u8) -> Reader<'a> {
        Reader::new(self.expect(tag))
    }

    pub fn read_integer(&mut self) -> i64 {
        decode_signed(self.expect(0x02))
    }
}

/// Two's-complement decode, checking minimal form.
pub fn decode_signed(content: &[u8]) -> i64 {
    assert!(!content.is_empty() && content.len() <= 8, "bad integer length");
    if content.len() > 1 {
        let redundant = (content[0] == 0x00 && content[1] & 0x80 == 0)
            || (content[0] == 0xFF && content[1] & 0x80 != 0);
        assert!(!redundant, "non-minimal integer {:02X?}", content);
    }
    let mut value: i64 = if content[0] & 0x80 != 0 { -1 } else { 0 };
    for &b in content {
        value = (value << 8) | b as i64;
    }
    value
}

/// Unsigned decode for application types, allowing one leading zero.
pub fn decode_unsigned(content: &[u8]) -> u64 {
    assert!(!content.is_empty() && content.len() <= 9, "bad unsigned length");
    assert!(content[0] & 0x80 == 0, "unsigned value has sign bit set");
    content.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

/// Decode OID content octets into arcs.
pub fn decode_oid(content: &[u8]) -> Vec<u64> {
    let mut subids = Vec::new();
    let mut acc = 0u64;
    for &b in content {
        acc = (acc << 7) | (b & 0x7F) as u64;
        if b & 0x80 == 0 {
            subids.push(acc);
            acc = 0;
        }
    }
    assert_eq!(acc, 0, "OID ends inside a subidentifier");

    let Some((&first, rest)) = subids.split_first() else {
        return Vec::new();
    };
    let mut arcs = match first {
        0..40 => vec![0, first],
        40..80 => vec![1, first - 40],
        _ => vec![2, first - 80],
    };
    arcs.extend_from_slice(rest);
    arcs
}

/// A decoded one-or-more varbind request message.
#[derive(Debug)]
pub struct DecodedRequest {
    pub version: i64,
    pub community: Vec<u8>,
    pub pdu_tag: u8,
    pub request_id: i64,
    pub error_status: i64,
    pub error_index: i64,
    /// (OID arcs, value tag, value content)
    pub varbinds: Vec<(Vec<u64>, u8, Vec<u8>)>,
}

/// Decode a full community message, asserting no trailing bytes anywhere.
pub fn decode_request(packet: &[u8]) -> DecodedRequest {
    let mut top = Reader::new(packet);
    let mut msg = top.enter(0x30);
    assert!(top.is_empty(), "trailing bytes after message");

    let version = msg.read_integer();
    let community = msg.expect(0x04).to_vec();
    let (pdu_tag, pdu_content) = msg.read_tlv();
    assert!(msg.is_empty(), "trailing bytes after PDU");

    let mut pdu = Reader::new(pdu_content);
    let request_id = pdu.read_integer();
    let error_status = pdu.read_integer();
    let error_index = pdu.read_integer();
    let mut list = pdu.enter(0x30);
    assert!(pdu.is_empty(), "trailing bytes after varbind list");

    let mut varbinds = Vec::new();
    while !list.is_empty() {
        let mut vb = list.enter(0x30);
        let oid = decode_oid(vb.expect(0x06));
        let (tag, content) = vb.read_tlv();
        assert!(vb.is_empty(), "trailing bytes in varbind");
        varbinds.push((oid, tag, content.to_vec()));
    }

    DecodedRequest {
        version,
        community,
        pdu_tag,
        request_id,
        error_status,
        error_index,
        varbinds,
    }
}
