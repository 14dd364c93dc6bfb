use std::net::SocketAddr;

use serde::Deserialize;
use gatrack_core::error::{Result, TrackError};
use gatrack_core::protocol::DEFAULT_COLLECT_URL;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub collector: CollectorSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            collector: CollectorSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TrackError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.collector.validate()?;

        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.gateway.listen_addr()
    }

    /// Collector identifier; empty until set by file or environment.
    pub fn tracking_id(&self) -> &str {
        self.collector.tracking_id.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            TrackError::Config(format!(
                "gateway.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorSection {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Usually supplied through `GA_TRACKING_ID` instead.
    #[serde(default)]
    pub tracking_id: Option<String>,
}

impl Default for CollectorSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            tracking_id: None,
        }
    }
}

impl CollectorSection {
    pub fn validate(&self) -> Result<()> {
        if self.tracking_id.as_deref().unwrap_or_default().is_empty() {
            return Err(TrackError::Config(format!(
                "{} environment variable not set.",
                super::TRACKING_ID_ENV
            )));
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(TrackError::Config(
                "collector.endpoint must be an http(s) URL".into(),
            ));
        }
        if !(100..=60000).contains(&self.timeout_ms) {
            return Err(TrackError::Config(
                "collector.timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_endpoint() -> String {
    DEFAULT_COLLECT_URL.into()
}
fn default_timeout_ms() -> u64 {
    10000
}
