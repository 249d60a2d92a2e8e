//! テスト成果物生成
//!
//! プロンプト構築、補完API呼び出し、レスポンス解析、モックペイロード

/// 補完APIクライアント
pub mod client;

/// モックペイロード
pub mod mock;

/// 補完レスポンスの解析
pub mod parser;

/// プロンプトテンプレート
pub mod prompt;

/// 生成するテスト成果物の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestArtifact {
    /// Gherkin形式のテストケース（構造化JSONとして解析する）
    GherkinCases,
    /// jestユニットテスト
    UnitTests,
    /// jest結合テスト
    IntegrationTests,
    /// Cypress E2Eテスト
    E2eTests,
}

impl TestArtifact {
    /// 補完レスポンスをJSONとして解析する成果物かどうか
    ///
    /// Gherkinテストケースのみ `testCases` 配列として返し、
    /// それ以外は生成テキストをそのまま返す。
    pub fn is_structured(&self) -> bool {
        matches!(self, TestArtifact::GherkinCases)
    }
}

/// プロンプトの入力ソース
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptInput<'a> {
    /// 要件テキスト
    Requirements(&'a str),
    /// ソースコード
    Code(&'a str),
}

impl<'a> PromptInput<'a> {
    /// 入力テキスト本体
    pub fn text(&self) -> &'a str {
        match self {
            PromptInput::Requirements(text) => text,
            PromptInput::Code(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_gherkin_cases_are_structured() {
        assert!(TestArtifact::GherkinCases.is_structured());
        assert!(!TestArtifact::UnitTests.is_structured());
        assert!(!TestArtifact::IntegrationTests.is_structured());
        assert!(!TestArtifact::E2eTests.is_structured());
    }

    #[test]
    fn prompt_input_exposes_text() {
        assert_eq!(PromptInput::Requirements("req").text(), "req");
        assert_eq!(PromptInput::Code("fn main() {}").text(), "fn main() {}");
    }
}
