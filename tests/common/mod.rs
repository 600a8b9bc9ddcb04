//! Shared test utilities for snmp-packet integration tests.

// Allow dead code and unused imports since not all test files use all utilities
#![allow(dead_code)]
#![allow(unused_imports)]

mod fixtures;
mod reader;

pub use fixtures::*;
pub use reader::*;
