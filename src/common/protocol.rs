//! HTTPワイヤ型定義
//!
//! テストケースCRUDと補完APIのリクエスト/レスポンス型を定義します。

use serde::{Deserialize, Serialize};

/// テストケース登録ペイロード
///
/// フィールド名はクライアント側の既存フォーマット（`ID` / `Description` など
/// 大文字始まり）をそのまま受け付ける。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTestCase {
    /// 呼び出し側が採番するテストケースID（一意性は保証されない）
    #[serde(rename = "ID")]
    pub id: String,
    /// テスト内容（Given/Whenステップ）
    #[serde(rename = "Description")]
    pub description: String,
    /// 期待結果（Thenステップ）
    #[serde(rename = "Expected_Result")]
    pub expected_result: String,
    /// 実行結果（未実行ならnull）
    #[serde(rename = "Actual_Result", default)]
    pub actual_result: Option<String>,
    /// ステータス（未設定ならnull）
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

/// 保存済みテストケース
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredTestCase {
    /// 呼び出し側が採番したテストケースID
    pub test_case_id: String,
    /// テスト内容
    #[serde(rename = "Description")]
    pub description: String,
    /// 期待結果
    #[serde(rename = "Expected_Result")]
    pub expected_result: String,
    /// 実行結果
    #[serde(rename = "Actual_Result")]
    pub actual_result: Option<String>,
    /// ステータス
    #[serde(rename = "Status")]
    pub status: Option<String>,
    /// 登録時刻（RFC3339）
    pub created_at: String,
}

/// 補完APIリクエスト（POST /v1/completions）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// モデル名
    pub model: String,
    /// プロンプト
    pub prompt: String,
    /// 最大トークン数
    pub max_tokens: u32,
    /// 温度
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_test_case_accepts_capitalized_field_names() {
        let value = json!({
            "ID": "TC1",
            "Description": "Given I am on the login page",
            "Expected_Result": "Then I am logged in",
            "Actual_Result": null,
            "Status": null
        });

        let case: NewTestCase = serde_json::from_value(value).expect("deserialize");
        assert_eq!(case.id, "TC1");
        assert_eq!(case.description, "Given I am on the login page");
        assert!(case.actual_result.is_none());
        assert!(case.status.is_none());
    }

    #[test]
    fn new_test_case_optional_fields_default_to_none() {
        let value = json!({
            "ID": "TC2",
            "Description": "desc",
            "Expected_Result": "expected"
        });

        let case: NewTestCase = serde_json::from_value(value).expect("deserialize");
        assert!(case.actual_result.is_none());
        assert!(case.status.is_none());
    }

    #[test]
    fn stored_test_case_serializes_with_wire_casing() {
        let case = StoredTestCase {
            test_case_id: "TC1".to_string(),
            description: "desc".to_string(),
            expected_result: "expected".to_string(),
            actual_result: Some("actual".to_string()),
            status: Some("Passed".to_string()),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        };

        let json = serde_json::to_value(&case).expect("serialize");
        assert_eq!(json["test_case_id"], "TC1");
        assert_eq!(json["Description"], "desc");
        assert_eq!(json["Expected_Result"], "expected");
        assert_eq!(json["Actual_Result"], "actual");
        assert_eq!(json["Status"], "Passed");
    }
}
