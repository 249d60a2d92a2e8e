//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::common::error::TfError;
use axum::{response::IntoResponse, Json};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub TfError);

impl From<TfError> for AppError {
    fn from(err: TfError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Use external_message() to avoid exposing internal details (upstream
        // URLs, raw completion payloads, SQL text, etc.)
        // Full error details are logged separately for debugging
        tracing::error!(error = %self.0, "request failed");

        let status = self.0.status_code();
        let payload = self.0.to_error_response();

        (status, Json(payload)).into_response()
    }
}
