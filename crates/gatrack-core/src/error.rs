//! Shared error type across gatrack crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing or invalid process configuration.
    Config,
    /// Event rejected before any network call.
    Validation,
    /// Outbound call to the collector could not complete.
    Transport,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and plain-text responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Config => "CONFIG",
            ClientCode::Validation => "VALIDATION",
            ClientCode::Transport => "TRANSPORT",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TrackError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("analytics: {0}")]
    Config(String),
    #[error("analytics: {0}")]
    Validation(String),
    #[error("analytics: transport: {0}")]
    Transport(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl TrackError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TrackError::Config(_) => ClientCode::Config,
            TrackError::Validation(_) => ClientCode::Validation,
            TrackError::Transport(_) => ClientCode::Transport,
            TrackError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            TrackError::Internal(_) => ClientCode::Internal,
        }
    }
}
