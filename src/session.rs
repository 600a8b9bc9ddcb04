//! Session parameters for community-based requests.

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::version::Version;

/// Community string and protocol version for a request.
///
/// The version is kept as the raw wire number the caller supplied and only
/// resolved when a request is built, so an out-of-range number surfaces as
/// [`Error::UnsupportedVersion`] rather than being rejected up front.
///
/// # Examples
///
/// ```
/// use snmp_packet::{SessionParams, Version};
///
/// let session = SessionParams::v2c("public");
/// assert_eq!(session.version().unwrap(), Version::V2c);
///
/// let bogus = SessionParams::from_raw("public", 2);
/// assert!(bogus.version().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParams {
    /// Community string, sent verbatim.
    pub community: Bytes,
    /// Raw SNMP version number (0 = v1, 1 = v2c, 3 = v3).
    pub version: i32,
}

impl SessionParams {
    /// Create session parameters for a known version.
    pub fn new(community: impl Into<Bytes>, version: Version) -> Self {
        Self::from_raw(community, version.as_i32())
    }

    /// SNMPv1 session.
    pub fn v1(community: impl Into<Bytes>) -> Self {
        Self::new(community, Version::V1)
    }

    /// SNMPv2c session.
    pub fn v2c(community: impl Into<Bytes>) -> Self {
        Self::new(community, Version::V2c)
    }

    /// Session with an unchecked version number.
    pub fn from_raw(community: impl Into<Bytes>, version: i32) -> Self {
        Self {
            community: community.into(),
            version,
        }
    }

    /// Resolve the raw version number.
    pub fn version(&self) -> Result<Version> {
        Version::from_i32(self.version).ok_or_else(|| {
            tracing::debug!(target: "snmp_packet::encode", { snmp.version = self.version }, "unsupported version");
            Error::UnsupportedVersion {
                version: self.version,
            }
        })
    }
}
