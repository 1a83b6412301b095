//! Typed client for the remote attendance API
//!
//! Domain endpoints are split per file; all of them share the normalization
//! rules in `client`.

mod attendance;
mod client;
mod friends;
mod prayer;
mod stats;
mod students;
mod teachers;

pub use client::ApiClient;
