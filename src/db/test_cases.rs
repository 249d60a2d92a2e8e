//! テストケースのストレージ層
//!
//! SQLiteベースでテストケースを永続化

use crate::common::{
    error::{TfError, TfResult},
    protocol::{NewTestCase, StoredTestCase},
};
use chrono::Utc;
use sqlx::SqlitePool;

/// テストケースストレージ（SQLite版）
#[derive(Clone)]
pub struct TestCaseStorage {
    pool: SqlitePool,
}

impl TestCaseStorage {
    /// 新しいストレージインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// テストケースを1件保存
    pub async fn insert(&self, case: &NewTestCase) -> TfResult<()> {
        let created_at = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO test_cases (
                test_case_id, description, expected_result, actual_result, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&case.id)
        .bind(&case.description)
        .bind(&case.expected_result)
        .bind(&case.actual_result)
        .bind(&case.status)
        .bind(&created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TfError::Database(format!("Failed to save test case: {}", e)))?;

        Ok(())
    }

    /// テストケースを複数保存（入力順を保持）
    pub async fn insert_many(&self, cases: &[NewTestCase]) -> TfResult<usize> {
        let mut saved = 0usize;
        for case in cases {
            self.insert(case).await?;
            saved += 1;
        }
        Ok(saved)
    }

    /// すべてのテストケースを読み込み（登録順）
    pub async fn list(&self) -> TfResult<Vec<StoredTestCase>> {
        let rows = sqlx::query_as::<_, TestCaseRow>(
            "SELECT test_case_id, description, expected_result, actual_result, status, created_at \
             FROM test_cases ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TfError::Database(format!("Failed to load test cases: {}", e)))?;

        Ok(rows.into_iter().map(StoredTestCase::from).collect())
    }

    /// 保存件数を取得
    pub async fn count(&self) -> TfResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM test_cases")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| TfError::Database(format!("Failed to count test cases: {}", e)))?;

        Ok(count)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TestCaseRow {
    test_case_id: String,
    description: String,
    expected_result: String,
    actual_result: Option<String>,
    status: Option<String>,
    created_at: String,
}

impl From<TestCaseRow> for StoredTestCase {
    fn from(row: TestCaseRow) -> Self {
        StoredTestCase {
            test_case_id: row.test_case_id,
            description: row.description,
            expected_result: row.expected_result,
            actual_result: row.actual_result,
            status: row.status,
            created_at: row.created_at,
        }
    }
}
