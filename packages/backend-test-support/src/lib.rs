//! Backend test support utilities
//!
//! Shared between unit tests and integration test binaries: one-time
//! logging setup and assertions for the JSON error contract.

pub mod error_body;
pub mod logging;
