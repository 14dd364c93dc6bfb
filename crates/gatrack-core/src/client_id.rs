//! Anonymous per-hit client identifiers.
//!
//! Every tracked event gets a fresh random id, so the collector sees each
//! hit as coming from a distinct anonymous user. Nothing is persisted and
//! uniqueness is probabilistic (UUID v4).

use std::fmt;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for ClientId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

/// Source of fresh client ids, one per call.
pub trait ClientIdSource: Send + Sync {
    fn next_id(&self) -> ClientId;
}

/// Production source backed by the OS random generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomClientIds;

impl ClientIdSource for RandomClientIds {
    fn next_id(&self) -> ClientId {
        ClientId::random()
    }
}
