//! Typed SNMP wire values.
//!
//! [`Value::from_text()`] parses a classified text form according to its
//! [`WireType`]; [`Value::encode()`] writes the resulting BER TLV.

use std::net::Ipv4Addr;

use bytes::Bytes;

use crate::ber::{EncodeBuf, tag};
use crate::classify::{Classified, WireType};
use crate::error::Result;
use crate::error::internal::EncodeErrorKind;
use crate::oid::Oid;

/// SNMP value as it goes on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// INTEGER (signed 32-bit)
    Integer(i32),
    /// OCTET STRING
    OctetString(Bytes),
    /// OBJECT IDENTIFIER
    ObjectIdentifier(Oid),
    /// IpAddress (4 bytes)
    IpAddress([u8; 4]),
    /// Counter32
    Counter32(u32),
    /// Gauge32 / Unsigned32
    Gauge32(u32),
    /// TimeTicks (hundredths of seconds)
    TimeTicks(u32),
    /// Counter64
    Counter64(u64),
    /// UInteger32 (application tag 7)
    Uinteger32(u32),
    /// Float wrapped in an Opaque
    OpaqueFloat(f32),
    /// Double wrapped in an Opaque
    OpaqueDouble(f64),
}

impl Value {
    /// Parse a text form as the given wire type.
    ///
    /// Numeric types accept decimal text with surrounding whitespace.
    /// Octet strings take the bytes verbatim. Object identifiers must parse
    /// strictly and satisfy the X.690 arc rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_packet::classify::WireType;
    /// use snmp_packet::value::Value;
    ///
    /// let v = Value::from_text(WireType::Gauge32, b" 42 ").unwrap();
    /// assert_eq!(v, Value::Gauge32(42));
    ///
    /// assert!(Value::from_text(WireType::Integer, b"forty-two").is_err());
    /// ```
    pub fn from_text(wire_type: WireType, text: &[u8]) -> Result<Self> {
        match wire_type {
            WireType::OctetString => Ok(Value::OctetString(Bytes::copy_from_slice(text))),
            _ => {
                let s = std::str::from_utf8(text)
                    .map_err(|_| EncodeErrorKind::NonUtf8Text { wire_type }.into_error())?;
                Self::parse_str(wire_type, s)
            }
        }
    }

    fn parse_str(wire_type: WireType, s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let bad_value = || {
            EncodeErrorKind::BadValue {
                wire_type,
                text: s.into(),
            }
            .into_error()
        };

        let value = match wire_type {
            WireType::Integer => Value::Integer(trimmed.parse().map_err(|_| bad_value())?),
            WireType::Gauge32 => Value::Gauge32(trimmed.parse().map_err(|_| bad_value())?),
            WireType::Counter32 => Value::Counter32(trimmed.parse().map_err(|_| bad_value())?),
            WireType::TimeTicks => Value::TimeTicks(trimmed.parse().map_err(|_| bad_value())?),
            WireType::Uinteger32 => Value::Uinteger32(trimmed.parse().map_err(|_| bad_value())?),
            WireType::Counter64 => Value::Counter64(trimmed.parse().map_err(|_| bad_value())?),
            WireType::OctetString => Value::OctetString(Bytes::copy_from_slice(s.as_bytes())),
            WireType::IpAddress => {
                let addr: Ipv4Addr = trimmed.parse().map_err(|_| bad_value())?;
                Value::IpAddress(addr.octets())
            }
            WireType::ObjectIdentifier => {
                let oid = Oid::parse(trimmed).map_err(|_| bad_value())?;
                if oid.is_empty() || oid.validate().is_err() {
                    return Err(bad_value());
                }
                Value::ObjectIdentifier(oid)
            }
            WireType::OpaqueFloat => Value::OpaqueFloat(trimmed.parse().map_err(|_| bad_value())?),
            WireType::OpaqueDouble => {
                Value::OpaqueDouble(trimmed.parse().map_err(|_| bad_value())?)
            }
        };

        Ok(value)
    }

    /// Parse the output of [`classify()`](crate::classify::classify).
    pub fn from_classified(classified: &Classified) -> Result<Self> {
        Self::from_text(classified.wire_type, &classified.text)
    }

    /// Wire type of this value.
    pub fn wire_type(&self) -> WireType {
        match self {
            Value::Integer(_) => WireType::Integer,
            Value::OctetString(_) => WireType::OctetString,
            Value::ObjectIdentifier(_) => WireType::ObjectIdentifier,
            Value::IpAddress(_) => WireType::IpAddress,
            Value::Counter32(_) => WireType::Counter32,
            Value::Gauge32(_) => WireType::Gauge32,
            Value::TimeTicks(_) => WireType::TimeTicks,
            Value::Counter64(_) => WireType::Counter64,
            Value::Uinteger32(_) => WireType::Uinteger32,
            Value::OpaqueFloat(_) => WireType::OpaqueFloat,
            Value::OpaqueDouble(_) => WireType::OpaqueDouble,
        }
    }

    /// Encode to BER.
    pub fn encode(&self, buf: &mut EncodeBuf) {
        match self {
            Value::Integer(v) => buf.push_integer(*v),
            Value::OctetString(data) => buf.push_octet_string(data),
            Value::ObjectIdentifier(oid) => buf.push_oid(oid),
            Value::IpAddress(addr) => buf.push_ip_address(*addr),
            Value::Counter32(v) => buf.push_unsigned32(tag::application::COUNTER32, *v),
            Value::Gauge32(v) => buf.push_unsigned32(tag::application::GAUGE32, *v),
            Value::TimeTicks(v) => buf.push_unsigned32(tag::application::TIMETICKS, *v),
            Value::Uinteger32(v) => buf.push_unsigned32(tag::application::UINTEGER32, *v),
            Value::Counter64(v) => buf.push_counter64(*v),
            Value::OpaqueFloat(v) => buf.push_opaque_special(tag::opaque::FLOAT, &v.to_be_bytes()),
            Value::OpaqueDouble(v) => {
                buf.push_opaque_special(tag::opaque::DOUBLE, &v.to_be_bytes())
            }
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "INTEGER: {}", v),
            Value::OctetString(data) => match std::str::from_utf8(data) {
                Ok(s) => write!(f, "STRING: {:?}", s),
                Err(_) => write!(f, "Hex-STRING: {}", crate::util::encode_hex(data)),
            },
            Value::ObjectIdentifier(oid) => write!(f, "OID: {}", oid),
            Value::IpAddress(addr) => write!(f, "IpAddress: {}", Ipv4Addr::from(*addr)),
            Value::Counter32(v) => write!(f, "Counter32: {}", v),
            Value::Gauge32(v) => write!(f, "Gauge32: {}", v),
            Value::TimeTicks(v) => write!(f, "Timeticks: ({})", v),
            Value::Counter64(v) => write!(f, "Counter64: {}", v),
            Value::Uinteger32(v) => write!(f, "UInteger32: {}", v),
            Value::OpaqueFloat(v) => write!(f, "Opaque: Float: {}", v),
            Value::OpaqueDouble(v) => write!(f, "Opaque: Double: {}", v),
        }
    }
}
