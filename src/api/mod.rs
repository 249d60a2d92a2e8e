//! REST APIハンドラー
//!
//! ルーター組み立てと各エンドポイントのモジュール定義

/// 共通エラーレスポンス
pub mod error;

/// テスト成果物生成エンドポイント
pub mod generate;

/// システムエンドポイント（hello / health）
pub mod system;

/// テストケースCRUDエンドポイント
pub mod test_cases;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// アプリケーションのルーターを構築する
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/hello", get(system::hello))
        .route("/health", get(system::health))
        .route("/store-test-cases", post(test_cases::store_test_cases))
        .route("/get-test-cases", get(test_cases::get_test_cases))
        .route("/generate-test-cases", get(generate::generate_test_cases))
        .route("/generate-unit-tests", get(generate::generate_unit_tests))
        .route(
            "/generate-integration-tests",
            get(generate::generate_integration_tests),
        )
        .route("/generate-e2e-tests", get(generate::generate_e2e_tests))
        .route(
            "/generate-test-cases-from-code",
            get(generate::generate_test_cases_from_code),
        )
        .route(
            "/generate-unit-tests-from-code",
            get(generate::generate_unit_tests_from_code),
        )
        .route(
            "/generate-integration-tests-from-code",
            get(generate::generate_integration_tests_from_code),
        )
        .route(
            "/generate-e2e-tests-from-code",
            get(generate::generate_e2e_tests_from_code),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
