//! End-to-end tests over a real TCP listener.

use reqwest::StatusCode;
use serde_json::{json, Value};
use serverless_api::config::DeploymentConfig;
use serverless_api::ServiceConfig;

mod common;

async fn get(server: &common::TestServer, path: &str) -> (StatusCode, Value) {
    let res = common::client().get(server.url(path)).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn test_every_route_rejects_post() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = common::client();

    for path in ["/api", "/api/hello", "/api/status", "/api/time", "/api/users"] {
        let res = client.post(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", path);

        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({"error": "Method not allowed", "allowedMethods": ["GET"]}));
    }
}

#[tokio::test]
async fn test_hello() {
    let server = common::start_server(ServiceConfig::default()).await;

    let (status, body) = get(&server, "/api/hello?name=Zoe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello Zoe 👋! Vercel API is live.");
    assert_eq!(body["method"], "GET");
    assert_eq!(body["serverless"], true);
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_index_uses_configured_deployment() {
    let mut config = ServiceConfig::default();
    config.deployment = DeploymentConfig {
        host: Some("demo.vercel.app".into()),
        environment: "preview".into(),
        ..DeploymentConfig::default()
    };
    let server = common::start_server(config).await;

    let (status, body) = get(&server, "/api").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Vercel API Demo 🚀");
    assert_eq!(
        body["documentation"]["endpoints"][1]["example"],
        "https://demo.vercel.app/api/users?role=admin"
    );
    assert_eq!(body["deployment"]["environment"], "preview");
    assert_eq!(body["deployment"]["repository"], "Connected to GitHub");
}

#[tokio::test]
async fn test_status_reports_deployment() {
    let mut config = ServiceConfig::default();
    config.deployment.region = "fra1".into();
    let server = common::start_server(config).await;

    let (status, body) = get(&server, "/api/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Vercel API Demo");
    assert_eq!(body["region"], "fra1");
    assert_eq!(body["environment"], "development");
    assert!(body["uptime"].as_str().unwrap().ends_with(" seconds"));
    assert_eq!(body["endpoints"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_time() {
    let server = common::start_server(ServiceConfig::default()).await;

    let (status, body) = get(&server, "/api/time?timezone=UTC").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["localTime"], body["timestamp"]);
    let month = body["month"].as_u64().unwrap();
    assert!((1..=12).contains(&month));

    let (status, body) = get(&server, "/api/time?timezone=America/New_York").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timezone"], "America/New_York");
    assert_ne!(body["localTime"], body["timestamp"]);

    let (status, body) = get(&server, "/api/time?timezone=Not/AZone").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid timezone");
    assert!(body["message"].as_str().unwrap().contains("Not/AZone"));
}

#[tokio::test]
async fn test_users() {
    let server = common::start_server(ServiceConfig::default()).await;

    let (status, body) = get(&server, "/api/users?id=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "user": {"id": 2, "name": "Bob Singh", "email": "bob@example.com", "role": "user"}
        })
    );

    let (status, _) = get(&server, "/api/users?id=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, lower) = get(&server, "/api/users?role=admin").await;
    let (_, upper) = get(&server, "/api/users?role=ADMIN").await;
    assert_eq!(lower, upper);
    assert_eq!(lower["count"], 1);
    assert_eq!(lower["users"][0]["name"], "Alice Johnson");

    let (_, all) = get(&server, "/api/users").await;
    assert_eq!(all["count"], 4);
    let ids: Vec<u64> = all["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_request_id_propagated() {
    let server = common::start_server(ServiceConfig::default()).await;

    let res = common::client()
        .get(server.url("/api/hello"))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "trace-me");
}

#[tokio::test]
async fn test_repeated_query_keys() {
    let server = common::start_server(ServiceConfig::default()).await;

    let res = common::client()
        .post(server.url("/api/hello?name=a&name=b"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["allowedMethods"], json!(["GET"]));

    let (status, body) = get(&server, "/api/users?id=1&id=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], 1);
}
