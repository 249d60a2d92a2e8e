//! プロンプトテンプレート
//!
//! 成果物の種類×入力ソースごとに補完APIへ送るプロンプトを組み立てる。
//! 文面は既存クライアントが依存しているため変更しないこと。

use super::{PromptInput, TestArtifact};

/// Gherkinテストケース生成の指示文（要件入力用）
const GHERKIN_FROM_REQUIREMENTS: &str = "Please provide all possible test cases associated with the following requirement in Gherkin syntax (Given, When, Then). In addition to happy path, include all negative cases, edge cases, and corner cases. Please include all the following information: Test Case ID, Description, and Expected Result. Provide the answer as a JSON object with a key 'testCases' that has a value of an array containing objects with keys for 'ID', 'Description', and 'Expected_Result'. ONLY include the Given, When steps in the Description and ONLY the Then step should be included in the Expected Result. Be sure to start with the word Then in the Expected Result. For example, Description: Given I am on the reset password page, Expected Result: When I enter my email address. Then I am sent a link to reset my password: ";

/// Gherkinテストケース生成の指示文（コード入力用）
///
/// コード入力では生成が脱線しやすいため、期待するJSONの実例を添える。
const GHERKIN_FROM_CODE: &str = r#"Please provide all possible test cases associated with the following code in Gherkin syntax (Given, When, Then). In addition to happy path, include all negative cases, edge cases, and corner cases. Please include all the following information: Test Case ID, Description, and Expected Result. Provide the answer as a JSON object with a key "testCases" that has a value of an array containing objects with keys for "ID", "Description", and "Expected_Result". ONLY include the Given, When steps in the Description and ONLY the Then step should be included in the Expected Result. Be sure to start with the word Then in the Expected Result. For example, Description: Given I am on the reset password page, Expected Result: When I enter my email address. Then I am sent a link to reset my password. Here is an example of a good json response {  "testCases": [    {      "ID": 1,      "Description": "Given a new instance of handleActualResultChange function",      "Expected_Result": "Then the local testCases variable is updated with the user-supplied value"    },    {      "ID": 2,      "Description": "Given an index that is out of the range of possible values for the testCases array",      "Expected_Result": "Then the local testCases variable is not updated"    }  ]}"#;

/// jestユニットテストの出力例
const JEST_EXAMPLE: &str = r#"describe('View Listing Details', () => {
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

});"#;

/// Cypress E2Eテストの出力例
const CYPRESS_EXAMPLE: &str = r#"describe('Listing Search', () => {
  beforeEach(() => {
    // Visit the homepage
    cy.visit('http://www.airbnb.com');
  });

  it('should allow a guest to search by location', () => {
    cy.get('[data-cy=location-input]').type('New York');
    cy.get('[data-cy=search-submit]').click();
    cy.get('[data-cy=listing]').should('be.visible');
  });

  it('should allow a guest to search by dates', () => {
    cy.get('[data-cy=checkin-date-input]').type('2023-07-01');
    cy.get('[data-cy=checkout-date-input]').type('2023-07-10');
    cy.get('[data-cy=search-submit]').click();
    cy.get('[data-cy=listing]').should('be.visible');
  });

  it('should allow a guest to search by number of guests', () => {
    cy.get('[data-cy=guests-input]').type('4');
    cy.get('[data-cy=search-submit]').click();
    cy.get('[data-cy=listing]').should('be.visible');
  });
});"#;

/// 成果物の種類と入力ソースからプロンプトを組み立てる
pub fn build_prompt(artifact: TestArtifact, input: &PromptInput<'_>) -> String {
    let subject = match input {
        PromptInput::Requirements(_) => "requirement",
        PromptInput::Code(_) => "code",
    };
    let text = input.text();

    match (artifact, input) {
        (TestArtifact::GherkinCases, PromptInput::Requirements(_)) => {
            format!("{GHERKIN_FROM_REQUIREMENTS}{text}")
        }
        (TestArtifact::GherkinCases, PromptInput::Code(_)) => {
            format!("{GHERKIN_FROM_CODE}{text}")
        }
        (TestArtifact::UnitTests, _) => format!(
            "Please provide the jest unit tests to test the following {subject}: {text}. \
             The response should be formatted like this example: \n\n{JEST_EXAMPLE}"
        ),
        (TestArtifact::IntegrationTests, _) => format!(
            "Please provide the jest integration (not unit!) tests to test the following {subject}: {text}"
        ),
        (TestArtifact::E2eTests, _) => format!(
            "Please provide the Cypress End to End tests to test the following {subject}: {text}. \
             Here is an example of what the response should look like: \n\n{CYPRESS_EXAMPLE}"
        ),
    }
}
