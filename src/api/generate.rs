//! テスト成果物生成エンドポイント
//!
//! 各ルートは「クエリ取得 → モック判定 → プロンプト構築 → 補完API呼び出し
//! → 解析 → 返却」の定型処理。Gherkinルートのみ `testCases` 配列として
//! 解析し、それ以外は生成テキストをそのまま返す。

use crate::api::error::AppError;
use crate::common::error::{CommonError, TfError};
use crate::config;
use crate::generation::{client, mock, parser, prompt, PromptInput, TestArtifact};
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// `requirements` 入力ルートのクエリ
#[derive(Debug, Deserialize)]
pub struct RequirementsQuery {
    /// 要件テキスト
    requirements: Option<String>,
    /// リクエスト単位のモックフラグ
    mock: Option<String>,
}

/// `code` 入力ルートのクエリ
#[derive(Debug, Deserialize)]
pub struct CodeQuery {
    /// ソースコード
    code: Option<String>,
    /// リクエスト単位のモックフラグ
    mock: Option<String>,
}

/// GET /generate-test-cases
pub async fn generate_test_cases(
    State(state): State<AppState>,
    Query(query): Query<RequirementsQuery>,
) -> Result<Response, AppError> {
    let requirements = require_param(query.requirements, "requirements")?;
    if mock_requested(query.mock.as_deref()) {
        return Ok(Json(mock::mock_response(TestArtifact::GherkinCases)).into_response());
    }
    generate_artifact(
        &state,
        TestArtifact::GherkinCases,
        PromptInput::Requirements(&requirements),
    )
    .await
}

/// GET /generate-unit-tests
pub async fn generate_unit_tests(
    State(state): State<AppState>,
    Query(query): Query<RequirementsQuery>,
) -> Result<Response, AppError> {
    let requirements = require_param(query.requirements, "requirements")?;
    if mock_requested(query.mock.as_deref()) {
        return Ok(Json(mock::mock_response(TestArtifact::UnitTests)).into_response());
    }
    generate_artifact(
        &state,
        TestArtifact::UnitTests,
        PromptInput::Requirements(&requirements),
    )
    .await
}

/// GET /generate-integration-tests
pub async fn generate_integration_tests(
    State(state): State<AppState>,
    Query(query): Query<RequirementsQuery>,
) -> Result<Response, AppError> {
    let requirements = require_param(query.requirements, "requirements")?;
    if mock_requested(query.mock.as_deref()) {
        return Ok(Json(mock::mock_response(TestArtifact::IntegrationTests)).into_response());
    }
    generate_artifact(
        &state,
        TestArtifact::IntegrationTests,
        PromptInput::Requirements(&requirements),
    )
    .await
}

/// GET /generate-e2e-tests
pub async fn generate_e2e_tests(
    State(state): State<AppState>,
    Query(query): Query<RequirementsQuery>,
) -> Result<Response, AppError> {
    let requirements = require_param(query.requirements, "requirements")?;
    if mock_requested(query.mock.as_deref()) {
        return Ok(Json(mock::mock_response(TestArtifact::E2eTests)).into_response());
    }
    generate_artifact(
        &state,
        TestArtifact::E2eTests,
        PromptInput::Requirements(&requirements),
    )
    .await
}

/// GET /generate-test-cases-from-code
pub async fn generate_test_cases_from_code(
    State(state): State<AppState>,
    Query(query): Query<CodeQuery>,
) -> Result<Response, AppError> {
    let code = require_param(query.code, "code")?;
    if mock_requested(query.mock.as_deref()) {
        return Ok(Json(mock::mock_response(TestArtifact::GherkinCases)).into_response());
    }
    generate_artifact(&state, TestArtifact::GherkinCases, PromptInput::Code(&code)).await
}

/// GET /generate-unit-tests-from-code
pub async fn generate_unit_tests_from_code(
    State(state): State<AppState>,
    Query(query): Query<CodeQuery>,
) -> Result<Response, AppError> {
    let code = require_param(query.code, "code")?;
    if mock_requested(query.mock.as_deref()) {
        return Ok(Json(mock::mock_response(TestArtifact::UnitTests)).into_response());
    }
    generate_artifact(&state, TestArtifact::UnitTests, PromptInput::Code(&code)).await
}

/// GET /generate-integration-tests-from-code
pub async fn generate_integration_tests_from_code(
    State(state): State<AppState>,
    Query(query): Query<CodeQuery>,
) -> Result<Response, AppError> {
    let code = require_param(query.code, "code")?;
    if mock_requested(query.mock.as_deref()) {
        return Ok(Json(mock::mock_response(TestArtifact::IntegrationTests)).into_response());
    }
    generate_artifact(
        &state,
        TestArtifact::IntegrationTests,
        PromptInput::Code(&code),
    )
    .await
}

/// GET /generate-e2e-tests-from-code
pub async fn generate_e2e_tests_from_code(
    State(state): State<AppState>,
    Query(query): Query<CodeQuery>,
) -> Result<Response, AppError> {
    let code = require_param(query.code, "code")?;
    if mock_requested(query.mock.as_deref()) {
        return Ok(Json(mock::mock_response(TestArtifact::E2eTests)).into_response());
    }
    generate_artifact(&state, TestArtifact::E2eTests, PromptInput::Code(&code)).await
}

/// 必須クエリパラメータを取り出す（空文字は欠落扱い）
fn require_param(value: Option<String>, name: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::from(TfError::Common(CommonError::Validation(
            format!("query parameter '{}' is required", name),
        )))),
    }
}

/// モックモードの判定
///
/// リクエスト単位の `mock` クエリフラグ、または環境変数のモックフラグの
/// どちらかが有効ならモックレスポンスを返す。
fn mock_requested(flag: Option<&str>) -> bool {
    let query_flag = flag
        .map(|v| {
            matches!(
                v.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
        .unwrap_or(false);

    query_flag || config::is_mock_enabled()
}

/// 補完APIを呼び出して成果物レスポンスを組み立てる
async fn generate_artifact(
    state: &AppState,
    artifact: TestArtifact,
    input: PromptInput<'_>,
) -> Result<Response, AppError> {
    debug!(?artifact, input_len = input.text().len(), "building prompt");

    let prompt = prompt::build_prompt(artifact, &input);
    let text = client::generate(&state.http_client, &state.completion, &prompt).await?;

    if artifact.is_structured() {
        let cases = parser::parse_test_cases(&text)?;
        Ok(Json(cases).into_response())
    } else {
        Ok(Json(Value::String(text)).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn require_param_rejects_missing_and_blank() {
        assert!(require_param(None, "requirements").is_err());
        assert!(require_param(Some("   ".to_string()), "requirements").is_err());
        assert_eq!(
            require_param(Some("login".to_string()), "requirements").unwrap(),
            "login"
        );
    }

    #[test]
    #[serial]
    fn mock_requested_honors_query_flag() {
        std::env::remove_var("TESTFORGE_MOCK_TEST_DATA");
        std::env::remove_var("MOCK_TEST_DATA");

        assert!(mock_requested(Some("true")));
        assert!(mock_requested(Some("1")));
        assert!(!mock_requested(Some("false")));
        assert!(!mock_requested(None));
    }

    #[test]
    #[serial]
    fn mock_requested_honors_env_flag() {
        std::env::set_var("TESTFORGE_MOCK_TEST_DATA", "true");
        assert!(mock_requested(None));
        std::env::remove_var("TESTFORGE_MOCK_TEST_DATA");
    }
}
