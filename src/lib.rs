//! # snmp-packet
//!
//! BER encoder for SNMPv1/v2c request packets.
//!
//! Takes one named protocol value and a community session and produces the
//! complete wire message, ready to hand to a UDP socket. Nothing here does
//! I/O or decodes responses.
//!
//! ## Quick Start
//!
//! ```rust
//! use snmp_packet::{ProtocolValue, SessionParams, build_request};
//!
//! // SET 1.3.6.1.2.1.1.5.0 = "router"
//! let value = ProtocolValue::octet_string("1.3.6.1.2.1.1.5.0", "router");
//! let session = SessionParams::v2c("private");
//!
//! let packet = build_request(&value, &session, 0x1234, false)?;
//! assert_eq!(packet[0], 0x30);
//! # Ok::<(), snmp_packet::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. [`classify`](classify::classify) maps the value kind to a net-snmp
//!    style wire-type letter and a text form.
//! 2. [`parse_oid`](oid::parse_oid) turns the value's name into an OID.
//! 3. [`Value::from_text`] parses the text form back into a typed value.
//! 4. [`CommunityMessage`](message::CommunityMessage) serializes the message
//!    into a fixed-size scratch buffer.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`EncoderConfig`] and [`PduType`]
//! - `stderr-log`: [`diag::enable_verbose`] installs a stderr `tracing`
//!   subscriber

pub mod ber;
pub mod builder;
pub mod classify;
pub mod config;
pub mod diag;
pub mod error;
pub mod message;
pub mod oid;
pub mod pdu;
pub mod prelude;
pub mod session;
pub mod value;
pub mod varbind;
pub mod version;

pub(crate) mod util;

pub use builder::{Encoder, EncoderBuilder, build_request};
pub use classify::{Classified, Payload, ProtocolValue, ValueKind, WireType};
pub use config::EncoderConfig;
pub use error::{Error, OidErrorKind, Result};
pub use message::CommunityMessage;
pub use oid::{Oid, parse_oid};
pub use pdu::{Pdu, PduType};
pub use session::SessionParams;
pub use value::Value;
pub use varbind::VarBind;
pub use version::Version;
