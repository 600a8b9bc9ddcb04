#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;

use snmp_packet::{Encoder, Error, Payload, ProtocolValue, SessionParams, ValueKind};

const KINDS: [ValueKind; 12] = [
    ValueKind::Integer,
    ValueKind::OctetString,
    ValueKind::ObjectIdentifier,
    ValueKind::IpAddress,
    ValueKind::Counter32,
    ValueKind::Gauge32,
    ValueKind::TimeTicks,
    ValueKind::Counter64,
    ValueKind::Uinteger32,
    ValueKind::OpaqueFloat,
    ValueKind::OpaqueDouble,
    ValueKind::Null,
];

// Layout: [kind, version, buffer size hi, buffer size lo, name len, name.., payload..]
fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    let kind = KINDS[data[0] as usize % KINDS.len()];
    let version = i32::from(data[1] % 5);
    let buffer_size = usize::from(u16::from_be_bytes([data[2], data[3]]));
    let rest = &data[5..];
    let name_len = usize::from(data[4]).min(rest.len());
    let (name, payload) = rest.split_at(name_len);

    let value = ProtocolValue::new(
        String::from_utf8_lossy(name),
        kind,
        Payload::Bytes(Bytes::copy_from_slice(payload)),
    );
    let session = SessionParams::from_raw("public", version);
    let encoder = Encoder::builder().buffer_size(buffer_size).build();

    match encoder.build(&value, &session, 1, false) {
        Ok(packet) => {
            assert!(packet.len() <= buffer_size);
            assert_eq!(packet[0], 0x30);
            // Same inputs, same bytes
            assert_eq!(encoder.build(&value, &session, 1, false).unwrap(), packet);
        }
        Err(Error::BufferTooSmall { size, capacity }) => assert!(size > capacity),
        Err(_) => {}
    }
});
