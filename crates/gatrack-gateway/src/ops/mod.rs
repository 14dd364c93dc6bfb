//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness (never calls the collector)

use axum::{http::StatusCode, response::IntoResponse};

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
