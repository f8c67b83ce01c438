//! End-to-end tests driving the router in-process.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use gini_core::{Layer, PackageSpec};
use gini_registry::DeploymentRegistry;
use gini_server::{AppState, Content, Server, ServerConfig, Variant};

fn poem_server() -> Server {
    Server::new(ServerConfig::builder().variant(Variant::Poem).build())
}

async fn send(router: &Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn send_json(router: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(router, method, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_deploy_then_status() {
    let router = poem_server().router();

    let (status, body) = send_json(&router, Method::POST, "/api/deploy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    let deployed = body["deployed"].as_array().unwrap();
    assert_eq!(deployed.len(), 6);
    assert_eq!(deployed[0]["name"], "libpolycall");
    assert_eq!(deployed[5]["name"], "quantum-threat");

    let (status, body) = send_json(&router, Method::GET, "/api/status").await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 6);

    let libpolycall = records
        .iter()
        .find(|r| r["name"] == "libpolycall")
        .unwrap();
    assert_eq!(libpolycall["version"], "1.0.0");
    assert_eq!(libpolycall["layer"], "Infrastructure");
    assert_eq!(libpolycall["deployed"], true);
}

#[tokio::test]
async fn test_repeated_deploy_keeps_six_records() {
    let server = poem_server();
    let router = server.router();

    send(&router, Method::POST, "/api/deploy").await;
    send(&router, Method::POST, "/api/deploy").await;

    assert_eq!(server.state().deployments.len(), 6);
}

#[tokio::test]
async fn test_deploy_with_wrong_method_is_rejected() {
    let server = poem_server();
    let router = server.router();

    let (_, before) = send_json(&router, Method::GET, "/api/status").await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/deploy")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ALLOW], "POST");
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"]["code"], "method_not_allowed");

    let (_, after) = send_json(&router, Method::GET, "/api/status").await;
    assert_eq!(before, after);
    assert!(server.state().deployments.is_empty());
}

#[tokio::test]
async fn test_poem_is_served_in_order() {
    let router = poem_server().router();

    let (status, first) = send_json(&router, Method::GET, "/api/poem").await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send_json(&router, Method::GET, "/api/poem").await;
    assert_eq!(first, second);

    let stanzas = first.as_array().unwrap();
    assert_eq!(stanzas.len(), 20);
    assert_eq!(stanzas[0]["line"], 1);
    assert_eq!(stanzas[0]["text"], "The Zen of Python, by Tim Peters");
    assert_eq!(stanzas[19]["iaas_layer"], "Infrastructure");
}

#[tokio::test]
async fn test_single_stanza_lookup() {
    let router = poem_server().router();

    let (status, body) = send_json(&router, Method::GET, "/api/poem/11").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["package"], "node-zero.errors");

    let (status, body) = send_json(&router, Method::GET, "/api/poem/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "stanza_not_found");

    let (status, _) = send_json(&router, Method::GET, "/api/poem/eleven").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stanzas_by_layer() {
    let router = poem_server().router();

    let (status, body) = send_json(&router, Method::GET, "/api/layers/platform").await;
    assert_eq!(status, StatusCode::OK);
    let stanzas = body.as_array().unwrap();
    assert!(!stanzas.is_empty());
    assert!(stanzas.iter().all(|s| s["iaas_layer"] == "Platform"));

    let (status, body) = send_json(&router, Method::GET, "/api/layers/kernel").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_layer");
}

#[tokio::test]
async fn test_gossip_variant() {
    let server = Server::new(ServerConfig::builder().variant(Variant::Gossip).build());
    let router = server.router();

    let (status, body) = send_json(&router, Method::GET, "/api/gini").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["greeting"], "Gini? (What?)");
    assert_eq!(body["questions"].as_array().unwrap().len(), 6);
    assert_eq!(body["gossip"].as_array().unwrap().len(), 4);
    assert_eq!(body["languages"].as_array().unwrap().len(), 6);
    assert_eq!(body["quote"], "I ask 'What?' because I want to understand!");

    // Deployment endpoints belong to the poem variant only.
    let (status, _) = send_json(&router, Method::POST, "/api/deploy").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unmatched_paths_fall_through_to_shell() {
    let router = Server::new(ServerConfig::builder().variant(Variant::Gossip).build()).router();

    for uri in ["/", "/anything/else", "/api"] {
        let (status, body) = send(&router, Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("GINI - The Questioning Parrot"), "{uri}");
    }

    let (status, body) = send_json(&router, Method::GET, "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found_error");
}

#[tokio::test]
async fn test_poem_shell_page() {
    let router = poem_server().router();

    let (status, body) = send(&router, Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body)
        .unwrap()
        .contains("GINI: The Consciousness Mirror"));
}

#[tokio::test]
async fn test_health() {
    let router = poem_server().router();

    let (status, body) = send(&router, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_static_files_are_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("libpolycall.png"), b"not-really-a-png").unwrap();

    let router = Server::new(ServerConfig::builder().static_dir(dir.path()).build()).router();

    let (status, body) = send(&router, Method::GET, "/static/libpolycall.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"not-really-a-png");

    let (status, _) = send(&router, Method::GET, "/static/missing.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_injected_catalog_and_registry() {
    let registry = Arc::new(DeploymentRegistry::new());
    let content = Content {
        catalog: vec![PackageSpec::new("nlink", "0.9.0", Layer::Platform)].into(),
        ..Content::default()
    };
    let state = AppState::with_content(ServerConfig::default(), content, Arc::clone(&registry));
    let router = Server::with_state(state).router();

    let (status, body) = send_json(&router, Method::POST, "/api/deploy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deployed"].as_array().unwrap().len(), 1);

    let record = registry.get("nlink").unwrap();
    assert_eq!(record.version, "0.9.0");
    assert!(record.deployed);
}
