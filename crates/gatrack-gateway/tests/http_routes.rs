//! End-to-end: real router on loopback, collector mocked.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::SocketAddr;

use mockito::Matcher;
use tokio::net::TcpListener;

use gatrack_gateway::app_state::AppState;
use gatrack_gateway::config::GatewayConfig;
use gatrack_gateway::router;

fn cfg(endpoint: &str) -> GatewayConfig {
    let mut cfg = GatewayConfig::default();
    cfg.gateway.listen = "127.0.0.1:0".into();
    cfg.collector.endpoint = endpoint.into();
    cfg.collector.timeout_ms = 5000;
    cfg.collector.tracking_id = Some("UA-E2E-1".into());
    cfg
}

async fn spawn_gateway(cfg: GatewayConfig) -> SocketAddr {
    let state = AppState::new(cfg).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(router::serve(
        listener,
        router::build_router(state),
        std::future::pending(),
    ));
    addr
}

async fn get(addr: SocketAddr, path: &str) -> (u16, String) {
    let resp = reqwest::Client::new()
        .get(format!("http://{addr}{path}"))
        .header("user-agent", "e2e-agent/1.0")
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.text().await.unwrap())
}

#[test]
fn state_keeps_validated_config() {
    let state = AppState::new(cfg("http://collector.test/collect")).unwrap();
    assert_eq!(state.cfg().tracking_id(), "UA-E2E-1");
    assert_eq!(state.cfg().collector.endpoint, "http://collector.test/collect");
    assert_eq!(state.tracker().tracking_id(), "UA-E2E-1");
}

#[tokio::test]
async fn root_tracks_example_event() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/collect")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r"ec=Example&ea=Test\+action&el=label".into()),
            Matcher::UrlEncoded("v".into(), "1".into()),
            Matcher::UrlEncoded("tid".into(), "UA-E2E-1".into()),
            Matcher::UrlEncoded("t".into(), "event".into()),
            Matcher::UrlEncoded("ua".into(), "e2e-agent/1.0".into()),
            Matcher::UrlEncoded("uip".into(), "127.0.0.1".into()),
        ]))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let addr = spawn_gateway(cfg(&format!("{}/collect", server.url()))).await;
    let (status, body) = get(addr, "/").await;

    assert_eq!(status, 200);
    assert_eq!(body, "Event tracked.");
    mock.assert_async().await;
}

#[tokio::test]
async fn other_paths_are_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let addr = spawn_gateway(cfg(&format!("{}/collect", server.url()))).await;
    let (status, _) = get(addr, "/track").await;
    assert_eq!(status, 404);

    mock.assert_async().await;
}

#[tokio::test]
async fn healthz_does_not_track() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let addr = spawn_gateway(cfg(&format!("{}/collect", server.url()))).await;
    let (status, body) = get(addr, "/healthz").await;
    assert_eq!((status, body.as_str()), (200, "ok"));

    mock.assert_async().await;
}

#[tokio::test]
async fn transport_failure_is_reported_and_server_keeps_serving() {
    let addr = spawn_gateway(cfg("http://127.0.0.1:1/collect")).await;

    for _ in 0..2 {
        let (status, body) = get(addr, "/").await;
        assert_eq!(status, 502);
        assert!(body.starts_with("Event did not track: analytics: transport:"), "{body}");
    }

    let (status, _) = get(addr, "/healthz").await;
    assert_eq!(status, 200);
}
