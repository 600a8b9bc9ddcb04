//! End-to-end request building tests.
//!
//! Packets are checked with the independent reader in `common`, plus a few
//! byte-exact expectations for the common cases.

mod common;

use std::net::Ipv4Addr;

use common::*;
use snmp_packet::ber::tag;
use snmp_packet::{
    Encoder, Error, Payload, PduType, ProtocolValue, SessionParams, ValueKind, Version,
    build_request, oid,
};

fn build(value: &ProtocolValue) -> Vec<u8> {
    build_request(value, &v2c_session(), REQUEST_ID, false)
        .unwrap()
        .to_vec()
}

/// Build with the default session and return the single varbind's value TLV.
fn value_tlv(value: &ProtocolValue) -> (u8, Vec<u8>) {
    let decoded = decode_request(&build(value));
    assert_eq!(decoded.varbinds.len(), 1);
    let (_, tag, content) = decoded.varbinds.into_iter().next().unwrap();
    (tag, content)
}

// =============================================================================
// Message structure
// =============================================================================

#[test]
fn test_set_integer_structure() {
    let value = ProtocolValue::integer(ENTERPRISE_NAME, 42);
    let packet = build(&value);
    let decoded = decode_request(&packet);

    assert_eq!(decoded.version, 1);
    assert_eq!(decoded.community, COMMUNITY.as_bytes());
    assert_eq!(decoded.pdu_tag, tag::pdu::SET_REQUEST);
    assert_eq!(decoded.request_id, 12345);
    assert_eq!(decoded.error_status, 0);
    assert_eq!(decoded.error_index, 0);

    let (arcs, value_tag, content) = &decoded.varbinds[0];
    let expected_arcs: Vec<u64> = enterprise_oid().arcs().iter().map(|&a| a as u64).collect();
    assert_eq!(arcs, &expected_arcs);
    assert_eq!(*value_tag, tag::universal::INTEGER);
    assert_eq!(content, &[0x2A]);
}

#[test]
fn test_set_octet_string_exact_bytes() {
    let value = ProtocolValue::octet_string(SYS_NAME, "router");
    let packet = build_request(&value, &SessionParams::v1("private"), 1, false).unwrap();

    #[rustfmt::skip]
    let expected: &[u8] = &[
        0x30, 0x2D,
        0x02, 0x01, 0x00,
        0x04, 0x07, b'p', b'r', b'i', b'v', b'a', b't', b'e',
        0xA3, 0x1F,
        0x02, 0x01, 0x01,
        0x02, 0x01, 0x00,
        0x02, 0x01, 0x00,
        0x30, 0x14,
        0x30, 0x12,
        0x06, 0x08, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x05, 0x00,
        0x04, 0x06, b'r', b'o', b'u', b't', b'e', b'r',
    ];
    assert_eq!(&packet[..], expected);
}

#[test]
fn test_output_is_exactly_the_message() {
    let value = ProtocolValue::integer(ENTERPRISE_NAME, 42);
    let packet = build(&value);

    // Outer length covers everything after the header
    assert_eq!(packet[0], 0x30);
    assert_eq!(packet[1] as usize, packet.len() - 2);
}

#[test]
fn test_idempotent() {
    let value = ProtocolValue::octet_string(SYS_NAME, "core-sw-01");
    let first = build(&value);
    for _ in 0..10 {
        assert_eq!(build(&value), first);
    }
}

#[test]
fn test_request_id_encoding() {
    let value = ProtocolValue::integer(SYS_NAME, 0);
    for request_id in [0u32, 1, 127, 128, 0x7FFF_FFFF, 0x8000_0000, u32::MAX] {
        let packet = build_request(&value, &v2c_session(), request_id, false).unwrap();
        assert_eq!(decode_request(&packet).request_id, request_id as i64);
    }
}

#[test]
fn test_binary_community() {
    let session = SessionParams::v2c(vec![0x00u8, 0xFF, 0x7F]);
    let value = ProtocolValue::integer(SYS_NAME, 1);
    let packet = build_request(&value, &session, 1, false).unwrap();
    assert_eq!(decode_request(&packet).community, vec![0x00, 0xFF, 0x7F]);
}

#[test]
fn test_long_value_uses_long_form_lengths() {
    let data = vec![b'a'; 300];
    let value = ProtocolValue::octet_string(SYS_NAME, data.clone());
    let packet = build(&value);

    // Outer SEQUENCE needs two length octets
    assert_eq!(&packet[..2], &[0x30, 0x82]);
    let (value_tag, content) = value_tlv(&value);
    assert_eq!(value_tag, tag::universal::OCTET_STRING);
    assert_eq!(content, data);
}

// =============================================================================
// Value types
// =============================================================================

#[test]
fn test_every_wire_type() {
    let cases: Vec<(ProtocolValue, u8, Vec<u8>)> = vec![
        (
            ProtocolValue::gauge32(SYS_NAME, 100),
            tag::application::GAUGE32,
            vec![0x64],
        ),
        (
            ProtocolValue::integer(SYS_NAME, -1),
            tag::universal::INTEGER,
            vec![0xFF],
        ),
        (
            ProtocolValue::integer(SYS_NAME, i32::MIN),
            tag::universal::INTEGER,
            vec![0x80, 0x00, 0x00, 0x00],
        ),
        (
            ProtocolValue::octet_string(SYS_NAME, &b"hi"[..]),
            tag::universal::OCTET_STRING,
            b"hi".to_vec(),
        ),
        (
            ProtocolValue::ip_address(SYS_NAME, Ipv4Addr::new(192, 168, 1, 1)),
            tag::application::IP_ADDRESS,
            vec![0xC0, 0xA8, 0x01, 0x01],
        ),
        (
            ProtocolValue::object_identifier(SYS_NAME, oid!(1, 3, 6, 1, 2, 1)),
            tag::universal::OBJECT_IDENTIFIER,
            vec![0x2B, 0x06, 0x01, 0x02, 0x01],
        ),
        (
            ProtocolValue::counter32(SYS_NAME, u32::MAX),
            tag::application::COUNTER32,
            vec![0x00, 0xFF, 0xFF, 0xFF, 0xFF],
        ),
        (
            ProtocolValue::counter64(SYS_NAME, u64::MAX),
            tag::application::COUNTER64,
            vec![0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        ),
        (
            ProtocolValue::opaque_float(SYS_NAME, 1.5),
            tag::application::OPAQUE,
            vec![0x9F, 0x78, 0x04, 0x3F, 0xC0, 0x00, 0x00],
        ),
        (
            ProtocolValue::opaque_double(SYS_NAME, 1.5),
            tag::application::OPAQUE,
            vec![0x9F, 0x79, 0x08, 0x3F, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        ),
        (
            ProtocolValue::timeticks(SYS_NAME, 0),
            tag::application::TIMETICKS,
            vec![0x00],
        ),
        (
            ProtocolValue::uinteger32(SYS_NAME, 3_000_000_000),
            tag::application::UINTEGER32,
            vec![0x00, 0xB2, 0xD0, 0x5E, 0x00],
        ),
    ];

    for (value, expected_tag, expected_content) in cases {
        let (value_tag, content) = value_tlv(&value);
        assert_eq!(value_tag, expected_tag, "{:?}", value.kind);
        assert_eq!(content, expected_content, "{:?}", value.kind);
    }
}

#[test]
fn test_octet_string_keeps_nul_bytes() {
    let data = vec![0x41u8, 0x00, 0x42, 0x00];
    let value = ProtocolValue::octet_string(SYS_NAME, data.clone());
    assert_eq!(value_tlv(&value).1, data);
}

#[test]
fn test_octet_string_from_number_uses_text_form() {
    let value = ProtocolValue::new(SYS_NAME, ValueKind::OctetString, 42);
    assert_eq!(value_tlv(&value), (tag::universal::OCTET_STRING, b"42".to_vec()));
}

#[test]
fn test_integer_from_text_payload() {
    let value = ProtocolValue::new(SYS_NAME, ValueKind::Integer, " -300 ");
    assert_eq!(value_tlv(&value), (tag::universal::INTEGER, vec![0xFE, 0xD4]));
}

// =============================================================================
// OIDs
// =============================================================================

#[test]
fn test_large_arc_continuation_bytes() {
    let value = ProtocolValue::integer("1.3.6.1.4.1.999999.1", 1);
    let decoded = decode_request(&build(&value));
    assert_eq!(decoded.varbinds[0].0, vec![1, 3, 6, 1, 4, 1, 999999, 1]);

    let packet = build(&value);
    let needle = [0xBD, 0x84, 0x3F];
    assert!(packet.windows(3).any(|w| w == needle));
}

#[test]
fn test_first_arc_two_with_large_second() {
    let value = ProtocolValue::integer("2.999.3", 1);
    let decoded = decode_request(&build(&value));
    assert_eq!(decoded.varbinds[0].0, vec![2, 999, 3]);
}

#[test]
fn test_lenient_name_drops_bad_arcs() {
    let clean = ProtocolValue::integer(SYS_NAME, 7);
    let messy = ProtocolValue::integer("1.3.6.1.2.1.1.x.5.0", 7);
    assert_eq!(build(&clean), build(&messy));
}

#[test]
fn test_empty_name_encodes_zero_oid() {
    let value = ProtocolValue::integer("", 1);
    let packet = build(&value);
    // varbind: SEQUENCE { OID 00, INTEGER 1 }
    assert!(packet.ends_with(&[0x30, 0x06, 0x06, 0x01, 0x00, 0x02, 0x01, 0x01]));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unsupported_version() {
    let value = ProtocolValue::integer(SYS_NAME, 1);
    for raw in [2, 4, -1] {
        let err = build_request(&value, &SessionParams::from_raw(COMMUNITY, raw), 1, false)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion { version } if version == raw));
    }
}

#[test]
fn test_unsupported_type() {
    let value = ProtocolValue::new(SYS_NAME, ValueKind::NoSuchObject, Payload::Int(0));
    let err = build_request(&value, &v2c_session(), 1, false).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedType {
            kind: ValueKind::NoSuchObject
        }
    ));
    assert_eq!(err.to_string(), "unsupported value type: NoSuchObject");
}

#[test]
fn test_oid_too_long() {
    let name = vec!["1"; 200].join(".");
    let value = ProtocolValue::integer(name, 1);
    let err = build_request(&value, &v2c_session(), 1, false).unwrap_err();
    assert!(matches!(err, Error::OidTooLong { count: 200, max: 128 }));
}

#[test]
fn test_oid_at_limit_is_accepted() {
    let name = format!("1.3{}", ".1".repeat(126));
    let value = ProtocolValue::integer(name, 1);
    let decoded = decode_request(&build(&value));
    assert_eq!(decoded.varbinds[0].0.len(), 128);
}

#[test]
fn test_buffer_too_small() {
    let encoder = Encoder::builder().buffer_size(32).build();
    let value = ProtocolValue::octet_string(SYS_NAME, vec![b'z'; 64]);
    let err = encoder.build(&value, &v2c_session(), 1, false).unwrap_err();
    match err {
        Error::BufferTooSmall { size, capacity } => {
            assert_eq!(capacity, 32);
            assert!(size > 64);
        }
        other => panic!("expected BufferTooSmall, got {:?}", other),
    }
}

#[test]
fn test_default_buffer_rejects_oversized_value() {
    let value = ProtocolValue::octet_string(SYS_NAME, vec![0u8; 4096]);
    let err = build_request(&value, &v2c_session(), 1, false).unwrap_err();
    assert!(matches!(err, Error::BufferTooSmall { capacity: 2048, .. }));
}

#[test]
fn test_v3_session_fails_to_encode() {
    let value = ProtocolValue::integer(SYS_NAME, 1);
    let session = SessionParams::new(COMMUNITY, Version::V3);
    let err = build_request(&value, &session, 1, false).unwrap_err();
    assert!(matches!(err, Error::EncodeFailed { .. }));
}

#[test]
fn test_bad_text_fails_to_encode() {
    let cases = [
        ProtocolValue::new(SYS_NAME, ValueKind::Integer, "4294967296"),
        ProtocolValue::new(SYS_NAME, ValueKind::Gauge32, -1),
        ProtocolValue::new(SYS_NAME, ValueKind::IpAddress, "10.0.0"),
        ProtocolValue::new(SYS_NAME, ValueKind::ObjectIdentifier, "1.3.x"),
        ProtocolValue::new(SYS_NAME, ValueKind::Integer, vec![0xFFu8, 0xFE]),
    ];
    for value in cases {
        let err = build_request(&value, &v2c_session(), 1, false).unwrap_err();
        assert!(matches!(err, Error::EncodeFailed { .. }), "{:?}", value);
    }
}

#[test]
fn test_invalid_second_arc_fails_to_encode() {
    let value = ProtocolValue::integer("1.40.1", 1);
    let err = build_request(&value, &v2c_session(), 1, false).unwrap_err();
    assert!(matches!(err, Error::EncodeFailed { .. }));
}

#[test]
fn test_out_of_range_arc_fails_to_encode() {
    // Must not collapse to 1.3.6.1.4.1.5
    let value = ProtocolValue::integer("1.3.6.1.4.1.4294967296.5", 1);
    let err = build_request(&value, &v2c_session(), 1, false).unwrap_err();
    assert_eq!(
        err.encode_message(),
        Some("bad variable OID: subidentifier overflow")
    );

    let value = ProtocolValue::integer("1.3.6.1.-4.1", 1);
    let err = build_request(&value, &v2c_session(), 1, false).unwrap_err();
    assert!(matches!(err, Error::EncodeFailed { .. }));

    let value = ProtocolValue::integer("1.3.6.1.4.1.4294967295.5", 1);
    assert!(build_request(&value, &v2c_session(), 1, false).is_ok());
}

// =============================================================================
// PDU type and verbose mode
// =============================================================================

#[test]
fn test_configured_pdu_type() {
    let encoder = Encoder::builder().pdu_type(PduType::GetRequest).build();
    let value = ProtocolValue::integer(SYS_NAME, 0);
    let packet = encoder.build(&value, &v1_session(), 1, false).unwrap();
    assert_eq!(decode_request(&packet).pdu_tag, tag::pdu::GET_REQUEST);
}

#[test]
fn test_v1_rejects_v2_only_pdu() {
    let encoder = Encoder::builder().pdu_type(PduType::InformRequest).build();
    let value = ProtocolValue::integer(SYS_NAME, 0);

    let err = encoder.build(&value, &v1_session(), 1, false).unwrap_err();
    assert_eq!(
        err.encode_message(),
        Some("InformRequest is not supported in SNMPv1")
    );

    let packet = encoder.build(&value, &v2c_session(), 1, false).unwrap();
    assert_eq!(decode_request(&packet).pdu_tag, tag::pdu::INFORM_REQUEST);
}

#[test]
fn test_verbose_does_not_change_output() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("snmp_packet=trace")
        .with_test_writer()
        .try_init();

    let value = ProtocolValue::octet_string(SYS_NAME, "router");
    let quiet = build_request(&value, &v2c_session(), 7, false).unwrap();
    let loud = build_request(&value, &v2c_session(), 7, true).unwrap();
    assert_eq!(quiet, loud);
    assert!(snmp_packet::diag::is_verbose());
}

#[test]
fn test_concurrent_builds() {
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            std::thread::spawn(move || {
                let value = ProtocolValue::counter32(SYS_NAME, i);
                build_request(&value, &v2c_session(), i, i % 2 == 0).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let decoded = decode_request(&handle.join().unwrap());
        assert_eq!(decoded.request_id, i as i64);
    }
}
