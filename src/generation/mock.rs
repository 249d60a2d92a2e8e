//! モックペイロード
//!
//! モックモード時に補完APIの代わりに返す固定レスポンス。
//! 内容はフロントエンド側のフィクスチャと揃えてあるため変更しないこと。

use super::TestArtifact;
use serde_json::{json, Value};

/// Gherkinテストケースのモック
pub fn mock_test_cases() -> Value {
    json!([
        {
            "ID": "TC1",
            "Description": "Test Case 1 Description",
            "Expected_Result": "Expected Result for Test Case 1",
            "Actual_Result": "",
            "Status": null
        }
    ])
}

/// jestユニットテストのモック
pub const MOCK_UNIT_TESTS: &str = r#"

    describe('View Listing Details', () => {
      const mockListing = {
        id: 1,
        photos: ['photo1.jpg', 'photo2.jpg'],
        description: 'This is a great listing',
        houseRules: 'No parties',
        reviews: [{ author: 'John', rating: 5 }, { author: 'Jane', rating: 4 }],
        pricing: {
          basePrice: 100,
          extraPersonFee: 10
        }
      };

      test('should return the correct listing photos', () => {
        expect(mockListing.photos).toEqual(['photo1.jpg', 'photo2.jpg']);
      });

    });
    "#;

/// jest結合テストのモック
pub const MOCK_INTEGRATION_TESTS: &str = r#"
    describe('TEST!!! View Listing Details', () => {
      const mockListing = {
        id: 1,
        photos: ['photo1.jpg', 'photo2.jpg'],
        description: 'This is a great listing',
        houseRules: 'No parties',
        reviews: [{ author: 'John', rating: 5 }, { author: 'Jane', rating: 4 }],
        pricing: {
          basePrice: 100,
          extraPersonFee: 10
        }
      };

      test('should return the correct listing photos', () => {
        expect(mockListing.photos).toEqual(['photo1.jpg', 'photo2.jpg']);
      });

    });
    "#;

/// Cypress E2Eテストのモック
pub const MOCK_E2E_TESTS: &str = r#"

    describe('TEST!!! View Listing Details', () => {
      const mockListing = {
        id: 1,
        photos: ['photo1.jpg', 'photo2.jpg'],
        description: 'This is a great listing',
        houseRules: 'No parties',
        reviews: [{ author: 'John', rating: 5 }, { author: 'Jane', rating: 4 }],
        pricing: {
          basePrice: 100,
          extraPersonFee: 10
        }
      };

      test('should return the correct listing photos', () => {
        expect(mockListing.photos).toEqual(['photo1.jpg', 'photo2.jpg']);
      });

    });
    "#;

/// 成果物の種類に対応するモックレスポンス
pub fn mock_response(artifact: TestArtifact) -> Value {
    match artifact {
        TestArtifact::GherkinCases => mock_test_cases(),
        TestArtifact::UnitTests => Value::String(MOCK_UNIT_TESTS.to_string()),
        TestArtifact::IntegrationTests => Value::String(MOCK_INTEGRATION_TESTS.to_string()),
        TestArtifact::E2eTests => Value::String(MOCK_E2E_TESTS.to_string()),
    }
}
