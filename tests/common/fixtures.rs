//! Common test fixtures and constants.

use snmp_packet::{Oid, SessionParams, oid};

// =============================================================================
// Variable names
// =============================================================================

/// Enterprise OID used throughout the request tests.
pub const ENTERPRISE_NAME: &str = "1.3.6.1.4.1.2680.1.2.7.3.2.0";

pub fn enterprise_oid() -> Oid {
    oid!(1, 3, 6, 1, 4, 1, 2680, 1, 2, 7, 3, 2, 0)
}

pub const SYS_NAME: &str = "1.3.6.1.2.1.1.5.0";

pub fn sys_name() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)
}

// =============================================================================
// Sessions
// =============================================================================

pub const COMMUNITY: &str = "public";

pub fn v1_session() -> SessionParams {
    SessionParams::v1(COMMUNITY)
}

pub fn v2c_session() -> SessionParams {
    SessionParams::v2c(COMMUNITY)
}

/// Request ID used when the value does not matter.
pub const REQUEST_ID: u32 = 12345;
