//! gatrack gateway
//!
//! - `/` tracks a fixed example event against the analytics collector
//! - Config: `.env` + `GA_TRACKING_ID` (required), `PORT`, optional `GATRACK_CONFIG` YAML
//! - Missing collector id fails startup before anything is bound

use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use gatrack_core::error::{Result, TrackError};
use gatrack_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.client_code().as_str(), "{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.listen_addr()?;

    let state = AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "gatrack-gateway starting");
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| TrackError::Internal(format!("bind {listen} failed: {e}")))?;

    router::serve(listener, app, shutdown_signal())
        .await
        .map_err(|e| TrackError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(err = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(err = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
