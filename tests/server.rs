//! Serving over TCP: middleware stack, health endpoint and shutdown.

use std::time::Duration;

use axum::http::{header, StatusCode};
use tokio::net::TcpListener;

use panel_proxy::{HttpServer, Shutdown};

mod common;

use common::{
    request, send, start_fixed_upstream, start_mock_upstream, test_config, unreachable_url,
    PASSWORD,
};

#[tokio::test]
async fn responses_carry_request_id_and_no_store() {
    let server = HttpServer::new(test_config(&unreachable_url("/status"), &unreachable_url(""))).unwrap();

    let res = send(server.router(), request("GET", "/healthz", None)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["status"], "ok");
    assert_eq!(res.headers.get(header::CACHE_CONTROL).unwrap(), "no-store");
    let generated = res.headers.get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());

    let mut req = request("POST", "/api/start", None);
    req.headers_mut().insert("x-request-id", "client-chosen-id".parse().unwrap());
    let res = send(server.router(), req).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.headers.get("x-request-id").unwrap(), "client-chosen-id");
}

#[tokio::test]
async fn security_headers_can_be_disabled() {
    let mut config = test_config(&unreachable_url("/status"), &unreachable_url(""));
    config.security.enable_headers = false;
    let server = HttpServer::new(config).unwrap();

    let res = send(server.router(), request("GET", "/healthz", None)).await;
    assert!(res.headers.get(header::CACHE_CONTROL).is_none());
}

#[tokio::test]
async fn request_timeout_answers_408() {
    let status = start_mock_upstream(|_| async {
        tokio::time::sleep(Duration::from_secs(3)).await;
        (200, r#"{"online":true}"#.to_string())
    })
    .await;
    let mut config = test_config(&status.url("/status"), &unreachable_url(""));
    config.status.timeout_ms = 10_000;
    config.timeouts.request_secs = 1;
    let server = HttpServer::new(config).unwrap();

    let res = send(server.router(), request("GET", "/api/check-mc", None)).await;
    assert_eq!(res.status, StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = HttpServer::new(test_config(&unreachable_url("/status"), &unreachable_url(""))).unwrap();

    let res = send(server.router(), request("GET", "/api/stop", Some(PASSWORD))).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn serves_over_tcp_until_shutdown() {
    let status = start_fixed_upstream(200, r#"{"online":true,"players":{"online":1,"max":8}}"#).await;
    let vm = start_fixed_upstream(200, r#"{"status":"running"}"#).await;

    let server = HttpServer::new(test_config(&status.url("/status"), &vm.base_url())).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    let res = client
        .get(format!("http://{}/api/check-mc", addr))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["players"]["online"], 1);

    let res = client
        .get(format!("http://{}/api/status", addr))
        .header("x-app-auth", PASSWORD)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "running");

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server should stop after shutdown")
        .unwrap()
        .unwrap();
}
