//! テストケースCRUDエンドポイント

use crate::api::error::AppError;
use crate::common::error::{CommonError, TfError};
use crate::common::protocol::{NewTestCase, StoredTestCase};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use tracing::info;

/// POST /store-test-cases
///
/// 単一オブジェクトと配列の両方を受け付け、1要素につき1行を
/// 入力順で保存する。
pub async fn store_test_cases(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let cases: Vec<NewTestCase> = if payload.is_array() {
        serde_json::from_value(payload)
            .map_err(|e| TfError::Common(CommonError::Validation(format!("invalid test case: {}", e))))?
    } else {
        let case: NewTestCase = serde_json::from_value(payload)
            .map_err(|e| TfError::Common(CommonError::Validation(format!("invalid test case: {}", e))))?;
        vec![case]
    };

    let saved = state.test_cases.insert_many(&cases).await?;
    info!(saved = saved, "test cases stored");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Test cases saved successfully!" })),
    ))
}

/// GET /get-test-cases
pub async fn get_test_cases(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredTestCase>>, AppError> {
    let rows = state.test_cases.list().await?;
    Ok(Json(rows))
}
