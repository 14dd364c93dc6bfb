//! gatrack gateway library entry.
//!
//! This crate wires configuration, the event tracker (outbound collector
//! client), and the inbound HTTP surface into a single service. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod tracker;
pub mod transport;
