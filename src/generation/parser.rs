//! 補完レスポンスの解析
//!
//! `choices[0].text` の取り出しと、Gherkinテストケースルートで使う
//! JSON復元（前後の散文を取り除く中括弧スライス）を提供する。

use crate::common::error::{TfError, TfResult};
use serde_json::Value;

/// 補完APIレスポンスから生成テキストを取り出す
///
/// `choices[0].text` が文字列でない場合は `UpstreamFormat` エラー。
pub fn extract_completion_text(body: &Value) -> TfResult<String> {
    body.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("text"))
        .and_then(|t| t.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            TfError::UpstreamFormat("completion response is missing choices[0].text".to_string())
        })
}

/// テキストから最初の `{` と最後の `}` に挟まれた部分を切り出す
///
/// 補完モデルはJSONの前後に散文を付けることがあるため、
/// パース前にオブジェクト部分だけを復元する。
pub fn slice_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// 生成テキストを `testCases` 配列として解析する
///
/// 解析に失敗した場合は `UpstreamFormat` エラー（＝500）を返す。
pub fn parse_test_cases(text: &str) -> TfResult<Value> {
    let sliced = slice_json_object(text).ok_or_else(|| {
        TfError::UpstreamFormat("completion text does not contain a JSON object".to_string())
    })?;

    let parsed: Value = serde_json::from_str(sliced)
        .map_err(|e| TfError::UpstreamFormat(format!("completion text is not valid JSON: {}", e)))?;

    let cases = parsed.get("testCases").cloned().ok_or_else(|| {
        TfError::UpstreamFormat("completion JSON is missing the testCases key".to_string())
    })?;

    if !cases.is_array() {
        return Err(TfError::UpstreamFormat(
            "testCases is not an array".to_string(),
        ));
    }

    Ok(cases)
}
