//! gatrack core: transport-agnostic event types, error surface, and the
//! Measurement Protocol payload builder.
//!
//! This crate defines the wire-level contract with the remote analytics
//! collector. It carries no HTTP client or runtime dependencies so the
//! payload rules can be checked without a network.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TrackError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod client_id;
pub mod context;
pub mod error;
pub mod event;
pub mod protocol;

/// Shared result type.
pub use error::{Result, TrackError};

pub use client_id::{ClientId, ClientIdSource, RandomClientIds};
pub use context::RequestContext;
pub use event::TrackingEvent;
