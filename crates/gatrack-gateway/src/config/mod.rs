//! Gateway config loader (strict YAML + environment overlay).
//!
//! Resolution order: defaults, then the optional file named by
//! `GATRACK_CONFIG`, then `GA_TRACKING_ID` / `PORT` from the environment.
//! A `.env` file in the working directory (or a parent) is loaded first.

pub mod schema;

use std::fs;

use gatrack_core::error::{Result, TrackError};

pub use schema::{CollectorSection, GatewayConfig, GatewaySection};

pub const TRACKING_ID_ENV: &str = "GA_TRACKING_ID";
pub const PORT_ENV: &str = "PORT";
pub const CONFIG_PATH_ENV: &str = "GATRACK_CONFIG";

/// Load `.env`, then resolve config from the process environment.
pub fn load() -> Result<GatewayConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::info!(reason = %e, "no .env loaded, using process environment"),
    }
    load_with(|key| std::env::var(key).ok())
}

/// Resolve config against an arbitrary variable lookup.
pub fn load_with<F>(env: F) -> Result<GatewayConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match env(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        Some(path) => parse_str(&read(&path)?)?,
        None => GatewayConfig::default(),
    };
    apply_env(&mut cfg, &env)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    load_from_str(&read(path)?)
}

/// Parse and validate a complete config document.
pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg = parse_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

fn read(path: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| TrackError::Config(format!("read config {path} failed: {e}")))
}

fn parse_str(s: &str) -> Result<GatewayConfig> {
    serde_yaml::from_str(s).map_err(|e| TrackError::Config(format!("invalid yaml: {e}")))
}

fn apply_env<F>(cfg: &mut GatewayConfig, env: &F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(tid) = env(TRACKING_ID_ENV).filter(|v| !v.is_empty()) {
        cfg.collector.tracking_id = Some(tid);
    }

    if let Some(port) = env(PORT_ENV).filter(|v| !v.is_empty()) {
        let port: u16 = port
            .parse()
            .map_err(|e| TrackError::Config(format!("{PORT_ENV} must be a port number: {e}")))?;
        let mut addr = cfg.listen_addr()?;
        addr.set_port(port);
        cfg.gateway.listen = addr.to_string();
    }
    Ok(())
}
