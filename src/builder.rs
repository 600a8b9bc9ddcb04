//! Request packet builder.
//!
//! Turns a single named protocol value plus session parameters into a
//! complete BER-encoded SNMP message.
//!
//! # Examples
//!
//! ```
//! use snmp_packet::{ProtocolValue, SessionParams, build_request};
//!
//! let value = ProtocolValue::integer("1.3.6.1.4.1.2680.1.2.7.3.2.0", 42);
//! let session = SessionParams::v2c("public");
//!
//! let packet = build_request(&value, &session, 12345, false).unwrap();
//! assert_eq!(packet[0], 0x30);
//! ```
//!
//! A custom configuration goes through [`Encoder::builder()`]:
//!
//! ```
//! use snmp_packet::{Encoder, PduType, ProtocolValue, SessionParams};
//!
//! let encoder = Encoder::builder()
//!     .buffer_size(512)
//!     .pdu_type(PduType::GetRequest)
//!     .build();
//!
//! let value = ProtocolValue::integer("1.3.6.1.2.1.1.3.0", 0);
//! let packet = encoder.build(&value, &SessionParams::v1("public"), 7, false).unwrap();
//! assert_eq!(packet[13], 0xA0);
//! ```

use bytes::Bytes;

use crate::classify::{ProtocolValue, classify};
use crate::config::EncoderConfig;
use crate::diag;
use crate::error::internal::EncodeErrorKind;
use crate::error::{Error, Result};
use crate::message::CommunityMessage;
use crate::oid::{Oid, parse_oid};
use crate::pdu::{Pdu, PduType};
use crate::session::SessionParams;
use crate::value::Value;
use crate::varbind::VarBind;

/// Build a request with the default configuration.
///
/// Equivalent to `Encoder::default().build(...)`.
pub fn build_request(
    value: &ProtocolValue,
    session: &SessionParams,
    request_id: u32,
    verbose: bool,
) -> Result<Bytes> {
    Encoder::default().build(value, session, request_id, verbose)
}

/// Request encoder.
///
/// Holds only immutable configuration, so one encoder can be shared across
/// threads. The only process-wide state touched is the verbose flag in
/// [`diag`].
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder from a configuration.
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Start building an encoder.
    pub fn builder() -> EncoderBuilder {
        EncoderBuilder::new()
    }

    /// The active configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode `value` as a one-varbind request.
    ///
    /// The value's name is parsed leniently (see [`parse_oid`]), so
    /// non-numeric arcs are dropped rather than rejected.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedVersion`] if the session version is not 0, 1 or 3
    /// - [`Error::UnsupportedType`] if the value kind has no wire type
    /// - [`Error::OidTooLong`] if the name has more than `max_oid_len` arcs
    /// - [`Error::BufferTooSmall`] if the message outgrows `buffer_size`
    /// - [`Error::EncodeFailed`] for anything else: out-of-range or invalid
    ///   arcs, unparseable text, SNMPv3, or a PDU type the version does not
    ///   define
    ///
    /// On error no bytes are produced.
    pub fn build(
        &self,
        value: &ProtocolValue,
        session: &SessionParams,
        request_id: u32,
        verbose: bool,
    ) -> Result<Bytes> {
        if verbose {
            diag::enable_verbose();
        }

        let version = session.version()?;
        let classified = classify(value)?;
        let oid = self.variable_name(&value.name)?;
        let wire_value = Value::from_classified(&classified)?;

        let pdu = Pdu::new(
            self.config.pdu_type,
            request_id,
            vec![VarBind::new(oid, wire_value)],
        );
        let message = CommunityMessage::new(version, session.community.clone(), pdu);
        let packet = message.encode_with_capacity(self.config.buffer_size)?;

        tracing::debug!(
            target: "snmp_packet::encode",
            {
                snmp.request_id = request_id,
                snmp.version = %version,
                snmp.pdu_type = %self.config.pdu_type,
                snmp.wire_type = %classified.wire_type,
                snmp.bytes = packet.len(),
            },
            "encoded request"
        );
        diag::dump_packet(request_id, &packet);

        Ok(packet)
    }

    fn variable_name(&self, name: &str) -> Result<Oid> {
        let oid = parse_oid(name).map_err(bad_variable_oid)?;
        oid.validate_length(self.config.max_oid_len)?;
        oid.validate().map_err(bad_variable_oid)?;
        Ok(oid)
    }
}

fn bad_variable_oid(err: Error) -> Error {
    match err {
        Error::InvalidOid { kind, .. } => EncodeErrorKind::BadVariableOid(kind).into_error(),
        other => other,
    }
}

/// Builder for [`Encoder`].
#[derive(Debug, Clone, Default)]
pub struct EncoderBuilder {
    config: EncoderConfig,
}

impl EncoderBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Set the scratch buffer size (default: 2048).
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.config.buffer_size = size;
        self
    }

    /// Set the maximum number of arcs in a variable name (default: 128).
    pub fn max_oid_len(mut self, max: usize) -> Self {
        self.config.max_oid_len = max;
        self
    }

    /// Set the PDU type (default: SetRequest).
    pub fn pdu_type(mut self, pdu_type: PduType) -> Self {
        self.config.pdu_type = pdu_type;
        self
    }

    /// Build the encoder.
    pub fn build(self) -> Encoder {
        Encoder::new(self.config)
    }
}
