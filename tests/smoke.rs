mod common;

use common::{spawn_app_with_memory, spawn_app_with_origins};
use status_check::{
    services::store::StatusStorage,
    smoke::{CheckError, Smoke},
};

#[test_log::test(tokio::test)]
async fn every_check_passes_against_healthy_service() {
    let (address, _store) = spawn_app_with_memory().await;
    let smoke = Smoke::new(address, "http://localhost:3000");

    for (name, result) in smoke.run_all().await {
        assert!(result.is_ok(), "{name} failed: {result:?}");
    }
}

#[tokio::test]
async fn cors_check_passes_for_configured_origin() {
    let address =
        spawn_app_with_origins(StatusStorage::unavailable(), &["https://app.example.com"]).await;
    let smoke = Smoke::new(address, "https://app.example.com");

    assert!(smoke.check_cors().await.is_ok());
}

#[tokio::test]
async fn cors_check_fails_when_origin_is_not_reflected() {
    let address =
        spawn_app_with_origins(StatusStorage::unavailable(), &["https://app.example.com"]).await;
    let smoke = Smoke::new(address, "http://localhost:3000");

    assert!(matches!(
        smoke.check_cors().await,
        Err(CheckError::Unexpected(_))
    ));
}

#[tokio::test]
async fn persistence_check_fails_without_storage() {
    let address = common::spawn_app(StatusStorage::unavailable()).await;
    let smoke = Smoke::new(format!("{address}/"), "http://localhost:3000");

    assert!(smoke.check_root().await.is_ok());
    assert!(smoke.check_create().await.is_ok());
    assert!(smoke.check_persistence().await.is_err());
}
