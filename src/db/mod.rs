//! データベースアクセス層
//!
//! SQLiteベースのデータ永続化

/// テストケースストレージ
pub mod test_cases;

/// データベースマイグレーション
pub mod migrations;

#[cfg(test)]
pub(crate) mod test_utils {
    use sqlx::SqlitePool;

    /// テスト用のインメモリSQLiteプールを作成し、マイグレーションを実行する
    pub async fn test_db_pool() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        pool
    }
}
