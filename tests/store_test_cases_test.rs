//! Integration Test: テストケースCRUD
//!
//! 単一オブジェクト/配列の保存、保存順の維持、保存済み行の取得を検証する。

use reqwest::Client;
use serde_json::{json, Value};

#[path = "support/mod.rs"]
mod support;

use support::app::spawn_app_without_upstream;

#[tokio::test]
async fn store_single_object_persists_exactly_one_row() {
    let server = spawn_app_without_upstream().await;
    let client = Client::new();

    let store_resp = client
        .post(format!("http://{}/store-test-cases", server.addr()))
        .json(&json!({
            "ID": "TC1",
            "Description": "Given I am on the reset password page",
            "Expected_Result": "Then I am sent a link to reset my password",
            "Actual_Result": null,
            "Status": null
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(store_resp.status().as_u16(), 201);
    let body: Value = store_resp.json().await.unwrap();
    assert_eq!(body["message"], "Test cases saved successfully!");

    let rows: Value = client
        .get(format!("http://{}/get-test-cases", server.addr()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let rows = rows.as_array().expect("rows should be an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["test_case_id"], "TC1");
    assert_eq!(
        rows[0]["Description"],
        "Given I am on the reset password page"
    );
    assert_eq!(
        rows[0]["Expected_Result"],
        "Then I am sent a link to reset my password"
    );
    assert_eq!(rows[0]["Actual_Result"], Value::Null);
    assert_eq!(rows[0]["Status"], Value::Null);
}

#[tokio::test]
async fn store_array_persists_one_row_per_element_in_order() {
    let server = spawn_app_without_upstream().await;
    let client = Client::new();

    let store_resp = client
        .post(format!("http://{}/store-test-cases", server.addr()))
        .json(&json!([
            {"ID": "TC1", "Description": "first", "Expected_Result": "Then first"},
            {"ID": "TC2", "Description": "second", "Expected_Result": "Then second"},
            {"ID": "TC3", "Description": "third", "Expected_Result": "Then third"}
        ]))
        .send()
        .await
        .unwrap();

    assert_eq!(store_resp.status().as_u16(), 201);

    let rows: Value = client
        .get(format!("http://{}/get-test-cases", server.addr()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let ids: Vec<&str> = rows
        .as_array()
        .expect("rows should be an array")
        .iter()
        .map(|r| r["test_case_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["TC1", "TC2", "TC3"]);
}

#[tokio::test]
async fn get_test_cases_returns_empty_array_when_nothing_stored() {
    let server = spawn_app_without_upstream().await;
    let client = Client::new();

    let rows: Value = client
        .get(format!("http://{}/get-test-cases", server.addr()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(rows, json!([]));
}

#[tokio::test]
async fn stored_fields_survive_round_trip() {
    let server = spawn_app_without_upstream().await;
    let client = Client::new();

    client
        .post(format!("http://{}/store-test-cases", server.addr()))
        .json(&json!({
            "ID": "TC7",
            "Description": "Given a failing login",
            "Expected_Result": "Then an error is shown",
            "Actual_Result": "Error was shown",
            "Status": "Passed"
        }))
        .send()
        .await
        .unwrap();

    let rows: Value = client
        .get(format!("http://{}/get-test-cases", server.addr()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(rows[0]["Actual_Result"], "Error was shown");
    assert_eq!(rows[0]["Status"], "Passed");
    assert!(rows[0]["created_at"].is_string());
}

#[tokio::test]
async fn store_rejects_payload_with_missing_fields() {
    let server = spawn_app_without_upstream().await;
    let client = Client::new();

    // Description欠落
    let resp = client
        .post(format!("http://{}/store-test-cases", server.addr()))
        .json(&json!({"ID": "TC1", "Expected_Result": "Then x"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "invalid_request_error");
}
