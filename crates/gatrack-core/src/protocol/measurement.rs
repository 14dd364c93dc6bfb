//! Measurement Protocol v1 event hit.
//!
//! Field order is fixed so encoded bodies are stable for logs and tests:
//! `v, tid, cid, t, ec, ea, [el], [ev], ua, [uip]`.
//!
//! The collector answers 200 even for malformed hits, so everything that can
//! be checked locally is checked here before a request is built.

use crate::client_id::ClientId;
use crate::context::RequestContext;
use crate::error::{Result, TrackError};
use crate::event::TrackingEvent;

/// Public collection endpoint.
pub const DEFAULT_COLLECT_URL: &str = "https://www.google-analytics.com/collect";

pub const PROTOCOL_VERSION: &str = "1";
pub const HIT_TYPE_EVENT: &str = "event";

/// One validated event hit, ready to be form-encoded.
#[derive(Debug, Clone)]
pub struct Hit<'a> {
    tracking_id: &'a str,
    client_id: ClientId,
    event: &'a TrackingEvent,
    user_agent: &'a str,
    client_ip: Option<&'a str>,
}

impl<'a> Hit<'a> {
    /// Validate the collector id first, then the event.
    pub fn new(
        tracking_id: &'a str,
        client_id: ClientId,
        event: &'a TrackingEvent,
        ctx: &'a RequestContext,
    ) -> Result<Self> {
        if tracking_id.is_empty() {
            return Err(TrackError::Config(
                "GA_TRACKING_ID environment variable is missing".into(),
            ));
        }
        event.validate()?;

        Ok(Self {
            tracking_id,
            client_id,
            event,
            user_agent: &ctx.user_agent,
            client_ip: ctx.client_ip(),
        })
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Ordered `(name, value)` pairs. Optional fields are left out, never sent empty.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut f = vec![
            ("v", PROTOCOL_VERSION.to_string()),
            ("tid", self.tracking_id.to_string()),
            ("cid", self.client_id.to_string()),
            ("t", HIT_TYPE_EVENT.to_string()),
            ("ec", self.event.category.clone()),
            ("ea", self.event.action.clone()),
        ];

        if let Some(label) = self.event.label() {
            f.push(("el", label.to_string()));
        }
        if let Some(value) = self.event.value {
            f.push(("ev", value.to_string()));
        }

        f.push(("ua", self.user_agent.to_string()));

        if let Some(ip) = self.client_ip {
            f.push(("uip", ip.to_string()));
        }
        f
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> Result<String> {
        serde_urlencoded::to_string(self.fields())
            .map_err(|e| TrackError::Internal(format!("form encode failed: {e}")))
    }
}
