//! Encoder configuration.

use crate::ber::DEFAULT_BUFFER_SIZE;
use crate::oid::MAX_OID_LEN;
use crate::pdu::PduType;

/// Settings for [`Encoder`](crate::Encoder).
///
/// With the `serde` feature this can be embedded in a host's config file;
/// missing fields take their defaults.
///
/// ```
/// use snmp_packet::{EncoderConfig, PduType};
///
/// let config = EncoderConfig::default();
/// assert_eq!(config.buffer_size, 2048);
/// assert_eq!(config.max_oid_len, 128);
/// assert_eq!(config.pdu_type, PduType::SetRequest);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderConfig {
    /// Scratch buffer size in bytes. Messages that do not fit fail with
    /// [`Error::BufferTooSmall`](crate::Error::BufferTooSmall).
    pub buffer_size: usize,
    /// Maximum number of arcs in a variable name.
    pub max_oid_len: usize,
    /// PDU type written into every request.
    pub pdu_type: PduType,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            max_oid_len: MAX_OID_LEN,
            pdu_type: PduType::SetRequest,
        }
    }
}
