//! Tests for catalog editing through the HTTP API, persisted to a file.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

fn vitamin_d() -> serde_json::Value {
    json!({
        "name": "VitD",
        "amount": "1000 IU",
        "time": "morning",
        "days": ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        "cycle": {"type": "continuous"}
    })
}

/// ## Summary
/// Created items are written to the catalog file and show up in the plan.
#[test_log::test(tokio::test)]
async fn created_items_are_persisted_and_planned() {
    let catalog = TestCatalog::missing();
    let service = create_test_service(&catalog);

    let created = TestRequest::post("/api/supplements")
        .json_body(&vitamin_d())
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    let id = created["id"].as_str().expect("id is a string").to_string();

    let document = catalog.read_json().await;
    assert_eq!(document[0]["id"], id.as_str());
    assert_eq!(document[0]["cycle"]["type"], "continuous");

    TestRequest::get("/api/plan/week?week=2025-%5BW%5D13")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("- VitD (1000 IU)");
}

/// ## Summary
/// Editing keeps records that could not be read when the catalog was loaded.
#[test_log::test(tokio::test)]
async fn editing_preserves_unreadable_records() {
    let catalog = TestCatalog::with_document(r#"[{"legacy": true}]"#).await;
    let service = create_test_service(&catalog);

    let listed = TestRequest::get("/api/supplements")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(listed["supplements"].as_array().map(Vec::len), Some(0));
    assert_eq!(listed["skipped_records"][0]["index"], 0);

    TestRequest::post("/api/supplements")
        .json_body(&vitamin_d())
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    let document = catalog.read_json().await;
    assert_eq!(document.as_array().map(Vec::len), Some(2));
    assert_eq!(document[0]["legacy"], true);
    assert_eq!(document[1]["name"], "VitD");
}

/// ## Summary
/// Editing one record leaves the wording and key order of the others alone.
#[test_log::test(tokio::test)]
async fn editing_keeps_other_records_as_written() {
    let catalog = TestCatalog::with_document(
        r#"[{"id":"iron","name":"Iron","amount":"18 mg","time":"Abend","days":["mon","Thu"],"cycle":{"type":"continuous"},"active":true}]"#,
    )
    .await;
    let service = create_test_service(&catalog);

    TestRequest::post("/api/supplements")
        .json_body(&vitamin_d())
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    let document = tokio::fs::read_to_string(&catalog.path)
        .await
        .expect("catalog exists");
    let iron: serde_json::Value =
        serde_json::from_str(&document).expect("catalog is JSON");
    assert_eq!(iron[0]["time"], "Abend");
    assert_eq!(iron[0]["days"], json!(["Mon", "Thu"]));

    let keys: Vec<&str> = iron[0]
        .as_object()
        .expect("record is an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["id", "name", "amount", "time", "days", "cycle", "active"]);

    // Abend is still read as an evening slot
    TestRequest::get("/api/plan/week?week=2025-%5BW%5D13")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("| Iron | 18 mg | Evening | ✅ |  |  | ✅ |  |  |  |");
}

/// ## Summary
/// Replace keeps the id; delete removes the record from the file.
#[test_log::test(tokio::test)]
async fn replace_and_delete() {
    let catalog = TestCatalog::missing();
    let service = create_test_service(&catalog);

    let created = TestRequest::post("/api/supplements")
        .json_body(&vitamin_d())
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    let path = format!(
        "/api/supplements/{}",
        created["id"].as_str().expect("id is a string")
    );

    let mut edited = vitamin_d();
    edited["amount"] = json!("2000 IU");
    edited["cycle"] = json!({
        "type": "cyclic",
        "start_date": "2025-03-24",
        "on_weeks": "8",
        "off_weeks": "4",
        "repeat": true
    });
    let replaced = TestRequest::put(&path)
        .json_body(&edited)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(replaced["id"], created["id"]);
    assert_eq!(replaced["amount"], "2000 IU");

    TestRequest::delete(&path)
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(catalog.read_json().await, json!([]));

    TestRequest::get(&path)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// ## Summary
/// Invalid drafts are rejected and nothing is written.
#[test_log::test(tokio::test)]
async fn invalid_drafts_leave_the_file_alone() {
    let catalog = TestCatalog::missing();
    let service = create_test_service(&catalog);

    let mut zero_on = vitamin_d();
    zero_on["cycle"] = json!({"type": "cyclic", "start_date": "2025-03-24", "on_weeks": 0, "off_weeks": 2});

    TestRequest::post("/api/supplements")
        .json_body(&zero_on)
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("on_weeks");

    assert!(!catalog.path.exists());
}
