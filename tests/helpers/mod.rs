//! Test helpers module
//!
//! Shared infrastructure for integration tests.

pub mod api_mock;

pub use api_mock::AttendanceMockServer;
