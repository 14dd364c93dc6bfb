//! Collector wire formats.
//!
//! Only the Measurement Protocol v1 event hit is spoken today. Builders here
//! are pure: they validate inputs and produce form fields, leaving the actual
//! POST to the gateway's tracker.

pub mod measurement;

pub use measurement::{Hit, DEFAULT_COLLECT_URL};
