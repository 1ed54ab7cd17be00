//! Shared test helpers for inventur-server integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use inventur_common::api::auth::AdminCredentials;
use inventur_server::{build_router, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "test-passwort";

/// Test app backed by a fresh database file; keep `_dir` alive for the test
pub struct TestApp {
    pub _dir: TempDir,
    pub pool: SqlitePool,
    pub router: Router,
}

pub async fn setup_app() -> TestApp {
    let dir = TempDir::new().expect("Should create temp dir");
    let pool = inventur_server::db::init_database(&dir.path().join("inventur.db"))
        .await
        .expect("Should initialize test database");

    let state = AppState::new(pool.clone(), AdminCredentials::new(ADMIN_USER, ADMIN_PASSWORD));

    TestApp {
        _dir: dir,
        pool,
        router: build_router(state),
    }
}

pub fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

/// Request carrying the correct admin credentials
pub fn admin_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth(ADMIN_USER, ADMIN_PASSWORD))
        .body(Body::empty())
        .unwrap()
}

/// Request without credentials
pub fn anonymous_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn body_bytes(body: Body) -> Vec<u8> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body")
        .to_vec()
}

pub async fn extract_json(body: Body) -> Value {
    serde_json::from_slice(&body_bytes(body).await).expect("Should parse JSON")
}

pub fn submission(name: &str, department: &str, asset_ids: &[&str]) -> Value {
    let assets: Vec<Value> = asset_ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "assetId": id,
                "building": "Rathaus - Marktplatz 2",
                "room": "101",
            })
        })
        .collect();

    serde_json::json!({
        "header": { "name": name, "department": department },
        "assets": assets,
    })
}
