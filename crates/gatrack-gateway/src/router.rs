//! Axum router wiring and the serve loop.
//!
//! `/` tracks the example event, `/healthz` is liveness, everything else is 404.

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(transport::http::track_example))
        .route("/healthz", get(ops::healthz))
        .fallback(transport::http::not_found)
        .with_state(state)
}

/// Serve `app` until `shutdown` resolves. Peer addresses are exposed as `ConnectInfo`.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
}
