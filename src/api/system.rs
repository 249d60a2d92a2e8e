//! System API (hello / health).

use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: String,
    total_test_cases: i64,
}

/// GET /hello
///
/// 疎通確認用の固定レスポンス。
pub async fn hello() -> impl IntoResponse {
    Json("Hello World")
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let total_test_cases = state.test_cases.count().await.unwrap_or(0);
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_test_cases,
    })
}
