//! testforge Server
//!
//! 要件・コードからテスト成果物（Gherkin/ユニット/結合/E2E）を生成する薄いHTTPサービス

#![warn(missing_docs)]

/// 共通型定義（エラー・ワイヤ型）
pub mod common;

/// REST APIハンドラー
pub mod api;

/// テスト成果物生成（プロンプト構築・補完API呼び出し・レスポンス解析）
pub mod generation;

/// データベースアクセス
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// axumサーバー起動・シャットダウン
pub mod server;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// データベース接続プール
    pub db_pool: sqlx::SqlitePool,
    /// テストケースストレージ
    pub test_cases: std::sync::Arc<db::test_cases::TestCaseStorage>,
    /// 共有HTTPクライアント（接続プーリング有効）
    pub http_client: reqwest::Client,
    /// 補完APIの接続設定
    pub completion: generation::client::CompletionSettings,
}
