//! Community-based SNMP message format (v1/v2c).
//!
//! V1 and V2c messages share the same structure:
//! `SEQUENCE { version INTEGER, community OCTET STRING, pdu PDU }`
//!
//! The only difference is the version number (0 for v1, 1 for v2c).

use bytes::Bytes;

use crate::ber::{DEFAULT_BUFFER_SIZE, EncodeBuf};
use crate::error::Result;
use crate::error::internal::EncodeErrorKind;
use crate::pdu::Pdu;
use crate::version::Version;

/// Community-based SNMP message (v1/v2c).
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityMessage {
    /// SNMP version
    pub version: Version,
    /// Community string for authentication
    pub community: Bytes,
    /// Protocol data unit
    pub pdu: Pdu,
}

impl CommunityMessage {
    /// Create a new community message.
    ///
    /// The version is checked at encode time; SNMPv3 has no community form.
    pub fn new(version: Version, community: impl Into<Bytes>, pdu: Pdu) -> Self {
        Self {
            version,
            community: community.into(),
            pdu,
        }
    }

    /// Create a V2c message.
    pub fn v2c(community: impl Into<Bytes>, pdu: Pdu) -> Self {
        Self::new(Version::V2c, community, pdu)
    }

    /// Create a V1 message.
    pub fn v1(community: impl Into<Bytes>, pdu: Pdu) -> Self {
        Self::new(Version::V1, community, pdu)
    }

    /// Encode to BER using the default scratch buffer size.
    pub fn encode(&self) -> Result<Bytes> {
        self.encode_with_capacity(DEFAULT_BUFFER_SIZE)
    }

    /// Encode to BER into a scratch buffer of `capacity` bytes.
    ///
    /// Fails with [`Error::BufferTooSmall`](crate::Error::BufferTooSmall) if
    /// the message does not fit, and with
    /// [`Error::EncodeFailed`](crate::Error::EncodeFailed) for SNMPv3 or a
    /// PDU type the version does not define. Nothing is returned on failure.
    pub fn encode_with_capacity(&self, capacity: usize) -> Result<Bytes> {
        if !self.version.is_community_based() {
            return Err(EncodeErrorKind::NoCommunityForm(self.version).into_error());
        }
        if !self.pdu.pdu_type.allowed_in(self.version) {
            return Err(EncodeErrorKind::PduNotAllowed {
                pdu_type: self.pdu.pdu_type,
                version: self.version,
            }
            .into_error());
        }

        let mut buf = EncodeBuf::with_capacity(capacity);

        buf.push_sequence(|buf| {
            self.pdu.encode(buf);
            buf.push_octet_string(&self.community);
            buf.push_integer(self.version.as_i32());
        });

        buf.finish()
    }
}
