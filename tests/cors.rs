mod common;

use common::{spawn_app, spawn_app_with_origins};
use reqwest::Method;
use status_check::{config::parse_origins, services::store::StatusStorage};

async fn preflight(address: &str, origin: &str) -> reqwest::Response {
    reqwest::Client::new()
        .request(Method::OPTIONS, format!("{address}/status"))
        .header("Origin", origin)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "Content-Type")
        .send()
        .await
        .expect("Failed to send preflight")
}

#[tokio::test]
async fn wildcard_preflight_echoes_origin() {
    let address = spawn_app(StatusStorage::unavailable()).await;

    let response = preflight(&address, "http://localhost:3000").await;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-methods"], "POST");
    assert!(
        headers["access-control-allow-headers"]
            .to_str()
            .unwrap()
            .eq_ignore_ascii_case("content-type")
    );
}

#[tokio::test]
async fn listed_origin_is_allowed() {
    let address = spawn_app_with_origins(
        StatusStorage::unavailable(),
        &["https://app.example.com", "http://localhost:3000"],
    )
    .await;

    let response = preflight(&address, "http://localhost:3000").await;

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn unlisted_origin_gets_no_allow_origin_header() {
    let address =
        spawn_app_with_origins(StatusStorage::unavailable(), &["https://app.example.com"]).await;

    let response = preflight(&address, "http://evil.example.com").await;

    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}

#[tokio::test]
async fn simple_request_carries_cors_headers() {
    let address = spawn_app(StatusStorage::unavailable()).await;

    let response = reqwest::Client::new()
        .get(format!("{address}/status"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to list status checks");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
}

#[test]
fn origin_list_is_split_and_trimmed() {
    assert_eq!(
        parse_origins("https://a.example.com, http://localhost:3000,,"),
        vec!["https://a.example.com", "http://localhost:3000"]
    );
    assert_eq!(parse_origins("*"), vec!["*"]);
    assert!(parse_origins("").is_empty());
}
