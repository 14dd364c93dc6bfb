//! Root route handler.
//!
//! Responsibilities:
//! - Copy `User-Agent` and the peer address into a `RequestContext`
//! - Track the example event and wait for the collector call to finish
//! - Answer in plain text: `Event tracked.` or `Event did not track: <err>`
//!
//! Failures are logged and answered, never fatal to the server.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use gatrack_core::error::{ClientCode, TrackError};
use gatrack_core::RequestContext;

use crate::app_state::AppState;

pub const EXAMPLE_CATEGORY: &str = "Example";
pub const EXAMPLE_ACTION: &str = "Test action";
pub const EXAMPLE_LABEL: &str = "label";

pub const TRACKED_BODY: &str = "Event tracked.";

pub async fn track_example(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
) -> Response {
    let ctx = request_context(&headers, peer.map(|ConnectInfo(addr)| addr));

    match state
        .tracker()
        .track(&ctx, EXAMPLE_CATEGORY, EXAMPLE_ACTION, EXAMPLE_LABEL, None)
        .await
    {
        Ok(()) => (StatusCode::OK, TRACKED_BODY).into_response(),
        Err(e) => {
            tracing::warn!(code = e.client_code().as_str(), err = %e, "event did not track");
            TrackFailure(e).into_response()
        }
    }
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 page not found")
}

fn request_context(headers: &HeaderMap, peer: Option<SocketAddr>) -> RequestContext {
    // Non-UTF-8 agents are passed on lossily rather than dropped.
    let user_agent = headers
        .get(USER_AGENT)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();

    RequestContext::new(user_agent, peer.map(|a| a.to_string()))
}

/// Plain-text failure response for a tracker error.
pub struct TrackFailure(pub TrackError);

impl TrackFailure {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::Validation => StatusCode::BAD_REQUEST,
            ClientCode::Transport => StatusCode::BAD_GATEWAY,
            ClientCode::Config | ClientCode::UnsupportedVersion | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TrackFailure {
    fn into_response(self) -> Response {
        (self.status(), format!("Event did not track: {}", self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn context_from_headers_and_peer() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("probe/2.1"));
        let peer: SocketAddr = "192.0.2.9:61000".parse().unwrap();

        let ctx = request_context(&headers, Some(peer));
        assert_eq!(ctx.user_agent, "probe/2.1");
        assert_eq!(ctx.client_ip(), Some("192.0.2.9"));

        let bare = request_context(&HeaderMap::new(), None);
        assert_eq!(bare.user_agent, "");
        assert_eq!(bare.client_ip(), None);
    }

    #[test]
    fn failure_status_by_kind() {
        let s = |e| TrackFailure(e).status();
        assert_eq!(s(TrackError::Validation("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(s(TrackError::Transport("x".into())), StatusCode::BAD_GATEWAY);
        assert_eq!(s(TrackError::Config("x".into())), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
