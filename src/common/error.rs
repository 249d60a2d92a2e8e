//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! # エラーレスポンス
//!
//! `TfError`は`error_type()`と`status_code()`メソッドを提供し、
//! `{"error": {...}}` 形式のエラーレスポンスを生成できます。

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// testforge error type
#[derive(Debug, Error)]
pub enum TfError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Timeout error
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Completion API returned a non-success status
    #[error("Completion API error: {0}")]
    UpstreamStatus(String),

    /// Completion API payload did not match the expected shape
    #[error("Unexpected completion payload: {0}")]
    UpstreamFormat(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TfError {
    /// Returns a safe error message for external clients.
    ///
    /// This method returns a generic error message that does not expose
    /// internal implementation details such as upstream URLs or raw
    /// completion payloads. Use this for HTTP responses to external clients.
    ///
    /// For debugging purposes, use the `Display` implementation
    /// (`to_string()`) which includes full error details - but only in
    /// server logs.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(CommonError::Config(_)) => "Server configuration error",
            Self::Common(_) => "Request error",
            Self::Database(_) => "Database error",
            Self::Http(_) => "Completion API unavailable",
            Self::Timeout(_) => "Completion API timeout",
            Self::UpstreamStatus(_) => "Completion API error",
            Self::UpstreamFormat(_) => "Completion response was not in the expected format",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// Returns the error type string used in JSON error bodies.
    ///
    /// # Error Types
    ///
    /// - `invalid_request_error`: Bad request parameters
    /// - `server_error`: Internal server errors
    /// - `service_unavailable`: Backend unavailable
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Common(CommonError::Config(_)) => "server_error",
            Self::Common(_) => "invalid_request_error",
            Self::Database(_) => "server_error",
            Self::Http(_) => "service_unavailable",
            Self::Timeout(_) => "server_error",
            Self::UpstreamStatus(_) => "service_unavailable",
            Self::UpstreamFormat(_) => "server_error",
            Self::Internal(_) => "server_error",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Common(CommonError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Common(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Http(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            Self::UpstreamFormat(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts this error to a JSON-serializable error response.
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                message: self.external_message().to_string(),
                error_type: self.error_type().to_string(),
                code: Some(self.status_code().as_u16().to_string()),
            },
        }
    }
}

/// エラーレスポンス
///
/// # Example
///
/// ```json
/// {
///   "error": {
///     "message": "Completion API unavailable",
///     "type": "service_unavailable",
///     "code": "502"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// The error details
    pub error: ErrorDetail,
}

/// エラー詳細
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    /// Human-readable error message
    pub message: String,
    /// Error type (e.g., "invalid_request_error", "server_error")
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error code (optional, typically HTTP status as string)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (testforge)
pub type TfResult<T> = Result<T, TfError>;
