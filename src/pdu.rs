//! SNMP request Protocol Data Units (PDUs).
//!
//! Only the request side is modelled; responses, reports and v1 traps are
//! never produced by this crate.

use crate::ber::{EncodeBuf, tag};
use crate::varbind::{VarBind, encode_varbind_list};
use crate::version::Version;

/// Request PDU type tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PduType {
    GetRequest = 0xA0,
    GetNextRequest = 0xA1,
    #[default]
    SetRequest = 0xA3,
    GetBulkRequest = 0xA5,
    InformRequest = 0xA6,
    TrapV2 = 0xA7,
}

impl PduType {
    /// Create from tag byte.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            tag::pdu::GET_REQUEST => Some(Self::GetRequest),
            tag::pdu::GET_NEXT_REQUEST => Some(Self::GetNextRequest),
            tag::pdu::SET_REQUEST => Some(Self::SetRequest),
            tag::pdu::GET_BULK_REQUEST => Some(Self::GetBulkRequest),
            tag::pdu::INFORM_REQUEST => Some(Self::InformRequest),
            tag::pdu::TRAP_V2 => Some(Self::TrapV2),
            _ => None,
        }
    }

    /// Get the tag byte.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Whether this PDU type exists in the given protocol version.
    ///
    /// SNMPv1 predates GetBulk, Inform and the v2 trap format.
    pub fn allowed_in(self, version: Version) -> bool {
        match version {
            Version::V1 => matches!(
                self,
                Self::GetRequest | Self::GetNextRequest | Self::SetRequest
            ),
            Version::V2c | Version::V3 => true,
        }
    }
}

impl std::fmt::Display for PduType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GetRequest => write!(f, "GetRequest"),
            Self::GetNextRequest => write!(f, "GetNextRequest"),
            Self::SetRequest => write!(f, "SetRequest"),
            Self::GetBulkRequest => write!(f, "GetBulkRequest"),
            Self::InformRequest => write!(f, "InformRequest"),
            Self::TrapV2 => write!(f, "TrapV2"),
        }
    }
}

/// Request PDU.
#[derive(Debug, Clone, PartialEq)]
pub struct Pdu {
    /// PDU type
    pub pdu_type: PduType,
    /// Request ID, echoed by the agent in its response
    pub request_id: u32,
    /// Error status (always 0 in requests)
    pub error_status: i32,
    /// Error index (always 0 in requests)
    pub error_index: i32,
    /// Variable bindings
    pub varbinds: Vec<VarBind>,
}

impl Pdu {
    /// Create a request PDU with zeroed error fields.
    pub fn new(pdu_type: PduType, request_id: u32, varbinds: Vec<VarBind>) -> Self {
        Self {
            pdu_type,
            request_id,
            error_status: 0,
            error_index: 0,
            varbinds,
        }
    }

    /// Create a new SET request PDU.
    pub fn set_request(request_id: u32, varbinds: Vec<VarBind>) -> Self {
        Self::new(PduType::SetRequest, request_id, varbinds)
    }

    /// Encode to BER.
    ///
    /// The request ID is written as a non-negative INTEGER, so ids with the
    /// top bit set take five content bytes.
    pub fn encode(&self, buf: &mut EncodeBuf) {
        buf.push_constructed(self.pdu_type.tag(), |buf| {
            encode_varbind_list(buf, &self.varbinds);
            buf.push_integer(self.error_index);
            buf.push_integer(self.error_status);
            buf.push_unsigned32(tag::universal::INTEGER, self.request_id);
        });
    }
}
