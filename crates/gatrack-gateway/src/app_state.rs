//! Shared application state for the gatrack gateway.
//!
//! Holds the validated config and the event tracker. Both are read-only after
//! startup and passed to handlers explicitly through axum `State`.

use std::sync::Arc;

use gatrack_core::error::Result;

use crate::config::GatewayConfig;
use crate::tracker::EventTracker;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    tracker: EventTracker,
}

impl AppState {
    /// Build state with the HTTP collector described by `cfg.collector`.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;
        let tracker = EventTracker::from_config(&cfg.collector)?;
        Ok(Self::with_tracker(cfg, tracker))
    }

    pub fn with_tracker(cfg: GatewayConfig, tracker: EventTracker) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, tracker }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn tracker(&self) -> &EventTracker {
        &self.inner.tracker
    }
}
