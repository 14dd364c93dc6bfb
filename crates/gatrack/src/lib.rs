//! Top-level facade crate for gatrack.
//!
//! Re-exports the core event types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use gatrack_core::*;
}

pub mod gateway {
    pub use gatrack_gateway::*;
}
