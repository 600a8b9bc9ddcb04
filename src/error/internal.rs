//! Internal error kinds for tracing and diagnostics.
//!
//! These types are not part of the public API. Each kind is logged via
//! tracing at the failure site and rendered into the message carried by
//! [`Error::EncodeFailed`](crate::Error::EncodeFailed).

use crate::classify::WireType;
use crate::error::OidErrorKind;
use crate::pdu::PduType;
use crate::version::Version;

/// Encode failure kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EncodeErrorKind {
    /// Text form does not parse as the wire type.
    BadValue { wire_type: WireType, text: Box<str> },
    /// Text form must be UTF-8 for every wire type except octet strings.
    NonUtf8Text { wire_type: WireType },
    /// Variable name OID violates X.690 arc rules.
    BadVariableOid(OidErrorKind),
    /// SNMPv3 needs USM security parameters, which are not modelled.
    NoCommunityForm(Version),
    /// PDU type cannot be sent with this version.
    PduNotAllowed { pdu_type: PduType, version: Version },
}

impl std::fmt::Display for EncodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadValue { wire_type, text } => {
                write!(f, "bad value for type '{}': {:?}", wire_type, text)
            }
            Self::NonUtf8Text { wire_type } => {
                write!(f, "value for type '{}' is not valid UTF-8", wire_type)
            }
            Self::BadVariableOid(kind) => write!(f, "bad variable OID: {}", kind),
            Self::NoCommunityForm(version) => {
                write!(f, "{} requires USM security parameters", version)
            }
            Self::PduNotAllowed { pdu_type, version } => {
                write!(f, "{} is not supported in {}", pdu_type, version)
            }
        }
    }
}

impl EncodeErrorKind {
    /// Log the failure and turn it into a public error.
    pub(crate) fn into_error(self) -> crate::Error {
        tracing::debug!(target: "snmp_packet::encode", { kind = %self }, "encode error");
        crate::Error::encode_failed(self.to_string())
    }
}
