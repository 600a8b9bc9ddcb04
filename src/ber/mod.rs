//! BER (Basic Encoding Rules) encoder for SNMP.
//!
//! This module provides the encoding half of X.690 as used in SNMP: tags,
//! definite-form lengths, and a tail-first scratch buffer.

mod encode;
mod length;
pub mod tag;

pub use encode::*;
pub use length::*;
