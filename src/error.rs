//! Error types for snmp-packet.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.

pub(crate) mod internal;

use crate::classify::ValueKind;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// OID validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OidErrorKind {
    /// Invalid arc value.
    InvalidArc,
    /// First arc must be 0, 1, or 2.
    InvalidFirstArc(u32),
    /// Second arc too large for first arc value.
    InvalidSecondArc { first: u32, second: u32 },
    /// Subidentifier overflow during encoding.
    SubidentifierOverflow,
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArc => write!(f, "invalid arc value"),
            Self::InvalidFirstArc(v) => write!(f, "first arc must be 0, 1, or 2, got {}", v),
            Self::InvalidSecondArc { first, second } => {
                write!(f, "second arc {} too large for first arc {}", second, first)
            }
            Self::SubidentifierOverflow => write!(f, "subidentifier overflow"),
        }
    }
}

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Session version number is not SNMPv1, v2c or v3.
    #[error("unsupported SNMP version number: {version}")]
    UnsupportedVersion { version: i32 },

    /// Value kind has no wire-type mapping.
    #[error("unsupported value type: {kind}")]
    UnsupportedType { kind: ValueKind },

    /// OID has more arcs than the configured bound.
    #[error("OID has {count} arcs, exceeds maximum {max}")]
    OidTooLong { count: usize, max: usize },

    /// Encoded message does not fit the scratch buffer.
    #[error("encoded message needs {size} bytes, buffer holds {capacity}")]
    BufferTooSmall { size: usize, capacity: usize },

    /// Encoding failed; carries the underlying diagnostic.
    #[error("encode failed: {message}")]
    EncodeFailed { message: Box<str> },

    /// Invalid OID format (strict parsing).
    #[error("invalid OID: {kind}")]
    InvalidOid {
        kind: OidErrorKind,
        input: Option<Box<str>>, // Only allocated when parsing string input
    },
}

impl Error {
    /// Create an invalid OID error from a kind (no input string).
    pub fn invalid_oid(kind: OidErrorKind) -> Self {
        Self::InvalidOid { kind, input: None }
    }

    /// Create an invalid OID error with the input string that failed.
    pub fn invalid_oid_with_input(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::InvalidOid {
            kind,
            input: Some(input.into()),
        }
    }

    /// Create an encode failure from a diagnostic message.
    pub fn encode_failed(message: impl Into<Box<str>>) -> Self {
        Self::EncodeFailed {
            message: message.into(),
        }
    }

    /// Diagnostic message of an [`Error::EncodeFailed`].
    pub fn encode_message(&self) -> Option<&str> {
        match self {
            Self::EncodeFailed { message } => Some(message),
            _ => None,
        }
    }
}
