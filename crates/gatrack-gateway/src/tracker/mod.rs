//! Event tracker: validate, build one Measurement Protocol hit, POST it once.
//!
//! - No retries, no queueing. A transport failure goes straight back to the caller.
//! - The collector's status/body are not interpreted; it answers 200 even for
//!   malformed hits.

pub mod collector;

use std::sync::Arc;

use gatrack_core::error::Result;
use gatrack_core::protocol::Hit;
use gatrack_core::{ClientIdSource, RandomClientIds, RequestContext, TrackingEvent};

use crate::config::CollectorSection;

pub use collector::{Collector, HttpCollector};

#[derive(Clone)]
pub struct EventTracker {
    tracking_id: Arc<str>,
    collector: Arc<dyn Collector>,
    ids: Arc<dyn ClientIdSource>,
}

impl EventTracker {
    pub fn new(tracking_id: impl Into<Arc<str>>, collector: Arc<dyn Collector>) -> Self {
        Self {
            tracking_id: tracking_id.into(),
            collector,
            ids: Arc::new(RandomClientIds),
        }
    }

    /// Build the production tracker (HTTP collector) from config.
    pub fn from_config(cfg: &CollectorSection) -> Result<Self> {
        let collector = HttpCollector::from_config(cfg)?;
        let tid = cfg.tracking_id.clone().unwrap_or_default();
        Ok(Self::new(tid, Arc::new(collector)))
    }

    /// Swap the client id source.
    pub fn with_client_ids(mut self, ids: Arc<dyn ClientIdSource>) -> Self {
        self.ids = ids;
        self
    }

    pub fn tracking_id(&self) -> &str {
        &self.tracking_id
    }

    /// Track one event. An empty `label` and a `None` value are left out of the hit.
    pub async fn track(
        &self,
        ctx: &RequestContext,
        category: &str,
        action: &str,
        label: &str,
        value: Option<u64>,
    ) -> Result<()> {
        let event = TrackingEvent::new(category, action)
            .with_label(label)
            .with_value(value);
        self.track_event(ctx, &event).await
    }

    pub async fn track_event(&self, ctx: &RequestContext, event: &TrackingEvent) -> Result<()> {
        let hit = Hit::new(&self.tracking_id, self.ids.next_id(), event, ctx)?;
        let body = hit.encode()?;

        self.collector.send(body).await?;

        tracing::info!(
            category = %event.category,
            action = %event.action,
            cid = %hit.client_id(),
            "event tracked"
        );
        Ok(())
    }
}
