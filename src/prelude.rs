//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use snmp_packet::prelude::*;
//!
//! let value = ProtocolValue::octet_string("1.3.6.1.2.1.1.5.0", "router");
//! let packet = build_request(&value, &SessionParams::v2c("public"), 1, false)?;
//! # Ok::<(), Error>(())
//! ```
//!
//! This imports:
//! - Request building: [`build_request`], [`Encoder`], [`SessionParams`]
//! - Input values: [`ProtocolValue`], [`ValueKind`], [`Payload`]
//! - Wire types: [`Oid`], [`Value`], [`VarBind`], [`Version`], [`PduType`]
//! - Error handling: [`Error`], [`Result`]
//! - The [`oid!`] macro for compile-time OID construction

pub use crate::builder::{Encoder, build_request};
pub use crate::classify::{Payload, ProtocolValue, ValueKind};
pub use crate::error::{Error, Result};
pub use crate::oid::Oid;
pub use crate::pdu::PduType;
pub use crate::session::SessionParams;
pub use crate::value::Value;
pub use crate::varbind::VarBind;
pub use crate::version::Version;

#[doc(no_inline)]
pub use crate::oid;
