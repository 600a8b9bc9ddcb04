//! Value classification.
//!
//! A [`ProtocolValue`] names a variable, its SNMP kind and an untyped
//! payload. [`classify()`] maps it to the single-character [`WireType`] and
//! the text form that the typed encoder in [`crate::value`] parses.

use std::fmt;
use std::net::Ipv4Addr;

use bytes::Bytes;

use crate::ber::tag;
use crate::error::{Error, Result};
use crate::oid::Oid;

/// SNMP value kinds, identified by their ASN.1 tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValueKind {
    /// BOOLEAN (universal 1).
    Boolean,
    /// INTEGER (universal 2).
    Integer,
    /// BIT STRING (universal 3).
    BitString,
    /// OCTET STRING (universal 4).
    OctetString,
    /// NULL (universal 5).
    Null,
    /// OBJECT IDENTIFIER (universal 6).
    ObjectIdentifier,
    /// ObjectDescriptor (universal 7).
    ObjectDescription,
    /// IpAddress (application 0).
    IpAddress,
    /// Counter32 (application 1).
    Counter32,
    /// Gauge32 (application 2).
    Gauge32,
    /// TimeTicks (application 3).
    TimeTicks,
    /// Opaque (application 4).
    Opaque,
    /// NsapAddress (application 5).
    NsapAddress,
    /// Counter64 (application 6).
    Counter64,
    /// UInteger32 (application 7).
    Uinteger32,
    /// Float wrapped in an Opaque.
    OpaqueFloat,
    /// Double wrapped in an Opaque.
    OpaqueDouble,
    /// noSuchObject exception.
    NoSuchObject,
    /// noSuchInstance exception.
    NoSuchInstance,
    /// endOfMibView exception.
    EndOfMibView,
}

impl ValueKind {
    /// ASN.1 tag of this kind.
    ///
    /// Opaque float and double report their inner tag number, since on the
    /// wire they are wrapped in an Opaque.
    pub const fn tag(self) -> u8 {
        match self {
            Self::Boolean => tag::universal::BOOLEAN,
            Self::Integer => tag::universal::INTEGER,
            Self::BitString => tag::universal::BIT_STRING,
            Self::OctetString => tag::universal::OCTET_STRING,
            Self::Null => tag::universal::NULL,
            Self::ObjectIdentifier => tag::universal::OBJECT_IDENTIFIER,
            Self::ObjectDescription => tag::universal::OBJECT_DESCRIPTION,
            Self::IpAddress => tag::application::IP_ADDRESS,
            Self::Counter32 => tag::application::COUNTER32,
            Self::Gauge32 => tag::application::GAUGE32,
            Self::TimeTicks => tag::application::TIMETICKS,
            Self::Opaque => tag::application::OPAQUE,
            Self::NsapAddress => tag::application::NSAP_ADDRESS,
            Self::Counter64 => tag::application::COUNTER64,
            Self::Uinteger32 => tag::application::UINTEGER32,
            Self::OpaqueFloat => tag::opaque::FLOAT,
            Self::OpaqueDouble => tag::opaque::DOUBLE,
            Self::NoSuchObject => tag::context::NO_SUCH_OBJECT,
            Self::NoSuchInstance => tag::context::NO_SUCH_INSTANCE,
            Self::EndOfMibView => tag::context::END_OF_MIB_VIEW,
        }
    }

    /// Wire type for this kind, if it can be sent in a request.
    pub const fn wire_type(self) -> Option<WireType> {
        match self {
            Self::Gauge32 => Some(WireType::Gauge32),
            Self::Integer => Some(WireType::Integer),
            Self::OctetString => Some(WireType::OctetString),
            Self::IpAddress => Some(WireType::IpAddress),
            Self::ObjectIdentifier => Some(WireType::ObjectIdentifier),
            Self::Counter32 => Some(WireType::Counter32),
            Self::Counter64 => Some(WireType::Counter64),
            Self::OpaqueFloat => Some(WireType::OpaqueFloat),
            Self::OpaqueDouble => Some(WireType::OpaqueDouble),
            Self::TimeTicks => Some(WireType::TimeTicks),
            Self::Uinteger32 => Some(WireType::Uinteger32),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug names match the SNMP type names
        fmt::Debug::fmt(self, f)
    }
}

/// Single-character wire-type discriminator.
///
/// These are the type letters net-snmp tools use for `snmpset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    /// `u`: Gauge32.
    Gauge32,
    /// `i`: INTEGER.
    Integer,
    /// `s`: OCTET STRING.
    OctetString,
    /// `a`: IpAddress.
    IpAddress,
    /// `o`: OBJECT IDENTIFIER.
    ObjectIdentifier,
    /// `c`: Counter32.
    Counter32,
    /// `C`: Counter64.
    Counter64,
    /// `F`: Opaque float.
    OpaqueFloat,
    /// `D`: Opaque double.
    OpaqueDouble,
    /// `t`: TimeTicks.
    TimeTicks,
    /// `3`: UInteger32.
    Uinteger32,
}

impl WireType {
    /// The type letter.
    pub const fn as_char(self) -> char {
        match self {
            Self::Gauge32 => 'u',
            Self::Integer => 'i',
            Self::OctetString => 's',
            Self::IpAddress => 'a',
            Self::ObjectIdentifier => 'o',
            Self::Counter32 => 'c',
            Self::Counter64 => 'C',
            Self::OpaqueFloat => 'F',
            Self::OpaqueDouble => 'D',
            Self::TimeTicks => 't',
            Self::Uinteger32 => '3',
        }
    }

    /// Look up a type letter.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'u' => Some(Self::Gauge32),
            'i' => Some(Self::Integer),
            's' => Some(Self::OctetString),
            'a' => Some(Self::IpAddress),
            'o' => Some(Self::ObjectIdentifier),
            'c' => Some(Self::Counter32),
            'C' => Some(Self::Counter64),
            'F' => Some(Self::OpaqueFloat),
            'D' => Some(Self::OpaqueDouble),
            't' => Some(Self::TimeTicks),
            '3' => Some(Self::Uinteger32),
            _ => None,
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Untyped payload of a [`ProtocolValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// Raw bytes; verbatim for octet strings.
    Bytes(Bytes),
    /// Text, parsed according to the kind.
    Text(String),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Int(v) => write!(f, "{}", v),
            Payload::Uint(v) => write!(f, "{}", v),
            Payload::Float(v) => write!(f, "{}", v),
            Payload::Bytes(b) => write!(f, "{:?}", b.as_ref()),
            Payload::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Payload {
    fn from(v: i32) -> Self {
        Payload::Int(v.into())
    }
}

impl From<i64> for Payload {
    fn from(v: i64) -> Self {
        Payload::Int(v)
    }
}

impl From<u32> for Payload {
    fn from(v: u32) -> Self {
        Payload::Uint(v.into())
    }
}

impl From<u64> for Payload {
    fn from(v: u64) -> Self {
        Payload::Uint(v)
    }
}

impl From<f32> for Payload {
    fn from(v: f32) -> Self {
        Payload::Float(v.into())
    }
}

impl From<f64> for Payload {
    fn from(v: f64) -> Self {
        Payload::Float(v)
    }
}

impl From<Bytes> for Payload {
    fn from(b: Bytes) -> Self {
        Payload::Bytes(b)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(b: Vec<u8>) -> Self {
        Payload::Bytes(Bytes::from(b))
    }
}

impl From<&[u8]> for Payload {
    fn from(b: &[u8]) -> Self {
        Payload::Bytes(Bytes::copy_from_slice(b))
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<Ipv4Addr> for Payload {
    fn from(addr: Ipv4Addr) -> Self {
        Payload::Text(addr.to_string())
    }
}

impl From<Oid> for Payload {
    fn from(oid: Oid) -> Self {
        Payload::Text(oid.to_string())
    }
}

/// A variable to send: dotted OID name, kind and payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolValue {
    /// Dotted-decimal OID of the variable.
    pub name: String,
    /// SNMP kind of the value.
    pub kind: ValueKind,
    /// Untyped payload.
    pub payload: Payload,
}

impl ProtocolValue {
    /// Create a value of any kind.
    pub fn new(name: impl Into<String>, kind: ValueKind, payload: impl Into<Payload>) -> Self {
        Self {
            name: name.into(),
            kind,
            payload: payload.into(),
        }
    }

    /// An INTEGER value.
    pub fn integer(name: impl Into<String>, v: i32) -> Self {
        Self::new(name, ValueKind::Integer, v)
    }

    /// An OCTET STRING value, sent byte for byte.
    pub fn octet_string(name: impl Into<String>, v: impl Into<Bytes>) -> Self {
        Self::new(name, ValueKind::OctetString, Payload::Bytes(v.into()))
    }

    /// A Gauge32 value.
    pub fn gauge32(name: impl Into<String>, v: u32) -> Self {
        Self::new(name, ValueKind::Gauge32, v)
    }

    /// A Counter32 value.
    pub fn counter32(name: impl Into<String>, v: u32) -> Self {
        Self::new(name, ValueKind::Counter32, v)
    }

    /// A Counter64 value.
    pub fn counter64(name: impl Into<String>, v: u64) -> Self {
        Self::new(name, ValueKind::Counter64, v)
    }

    /// A TimeTicks value, in hundredths of a second.
    pub fn timeticks(name: impl Into<String>, v: u32) -> Self {
        Self::new(name, ValueKind::TimeTicks, v)
    }

    /// A UInteger32 value.
    pub fn uinteger32(name: impl Into<String>, v: u32) -> Self {
        Self::new(name, ValueKind::Uinteger32, v)
    }

    /// An IpAddress value.
    pub fn ip_address(name: impl Into<String>, addr: Ipv4Addr) -> Self {
        Self::new(name, ValueKind::IpAddress, addr)
    }

    /// An OBJECT IDENTIFIER value.
    pub fn object_identifier(name: impl Into<String>, oid: Oid) -> Self {
        Self::new(name, ValueKind::ObjectIdentifier, oid)
    }

    /// A float wrapped in an Opaque.
    pub fn opaque_float(name: impl Into<String>, v: f32) -> Self {
        Self::new(name, ValueKind::OpaqueFloat, v)
    }

    /// A double wrapped in an Opaque.
    pub fn opaque_double(name: impl Into<String>, v: f64) -> Self {
        Self::new(name, ValueKind::OpaqueDouble, v)
    }

    /// Text form of the payload.
    ///
    /// Octet strings given as raw bytes are taken verbatim; every other
    /// combination uses the payload's [`Display`](fmt::Display) form.
    pub fn text_form(&self) -> Bytes {
        match (self.kind, &self.payload) {
            (ValueKind::OctetString, Payload::Bytes(b)) => b.clone(),
            (_, payload) => Bytes::from(payload.to_string()),
        }
    }
}

/// Output of [`classify()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub wire_type: WireType,
    pub text: Bytes,
}

impl Classified {
    /// Text form as UTF-8, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.text).ok()
    }
}

/// Map a value to its wire type and text form.
///
/// Fails with [`Error::UnsupportedType`] for kinds that have no wire type.
///
/// # Examples
///
/// ```
/// use snmp_packet::classify::{classify, ProtocolValue, WireType};
///
/// let value = ProtocolValue::octet_string("1.3.6.1.2.1.1.5.0", &b"hi"[..]);
/// let classified = classify(&value).unwrap();
/// assert_eq!(classified.wire_type, WireType::OctetString);
/// assert_eq!(classified.as_str(), Some("hi"));
/// ```
pub fn classify(value: &ProtocolValue) -> Result<Classified> {
    let wire_type = value
        .kind
        .wire_type()
        .ok_or(Error::UnsupportedType { kind: value.kind })?;

    Ok(Classified {
        wire_type,
        text: value.text_form(),
    })
}
