use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use gatrack_core::error::{Result, TrackError};

use crate::config::CollectorSection;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Delivery of one encoded hit. Implementations make exactly one attempt.
#[async_trait]
pub trait Collector: Send + Sync {
    async fn send(&self, body: String) -> Result<()>;
}

/// Remote collection endpoint over HTTP(S).
pub struct HttpCollector {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCollector {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gatrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TrackError::Config(format!("http client build failed: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn from_config(cfg: &CollectorSection) -> Result<Self> {
        Self::new(&cfg.endpoint, Duration::from_millis(cfg.timeout_ms))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn transport_error(e: reqwest::Error) -> TrackError {
    if e.is_timeout() {
        TrackError::Transport(format!("timed out: {e}"))
    } else if e.is_connect() {
        TrackError::Transport(format!("connect failed: {e}"))
    } else {
        TrackError::Transport(e.to_string())
    }
}

#[async_trait]
impl Collector for HttpCollector {
    async fn send(&self, body: String) -> Result<()> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        // Status is always 200; kept for debugging only.
        tracing::debug!(status = %resp.status(), endpoint = %self.endpoint, "collector responded");
        Ok(())
    }
}
