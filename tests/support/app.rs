use std::sync::Arc;
use std::time::Duration;

use testforge::db::migrations::initialize_database;
use testforge::db::test_cases::TestCaseStorage;
use testforge::generation::client::CompletionSettings;
use testforge::{api, AppState};

use super::http::{spawn_server, TestServer};

/// テスト用アプリを起動する
///
/// インメモリSQLiteと、引数で指定された補完APIベースURL
/// （通常はwiremockのURL）を使う。
#[allow(dead_code)]
pub async fn spawn_app(upstream_base_url: &str) -> TestServer {
    let db_pool = initialize_database("sqlite::memory:")
        .await
        .expect("Failed to initialize test database");

    let test_cases = Arc::new(TestCaseStorage::new(db_pool.clone()));

    let state = AppState {
        db_pool,
        test_cases,
        http_client: reqwest::Client::new(),
        completion: CompletionSettings {
            base_url: upstream_base_url.trim_end_matches('/').to_string(),
            model: "text-davinci-003".to_string(),
            max_tokens: 1500,
            temperature: 0.4,
            timeout: Duration::from_secs(5),
        },
    };

    spawn_server(api::create_app(state)).await
}

/// 補完APIを使わないテスト用アプリを起動する
///
/// 到達不能なベースURLを渡すため、生成ルートを呼ぶと接続エラーになる。
#[allow(dead_code)]
pub async fn spawn_app_without_upstream() -> TestServer {
    spawn_app("http://127.0.0.1:9").await
}
