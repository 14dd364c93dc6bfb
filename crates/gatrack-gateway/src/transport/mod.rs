//! Transport layer (inbound HTTP).
//!
//! Turns inbound requests into a `RequestContext` and tracker calls, and maps
//! tracker outcomes to plain-text responses.

pub mod http;
