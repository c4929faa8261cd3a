//! Tests for the plan endpoints over a catalog file.

use salvo::http::StatusCode;

use super::helpers::*;

fn sample_catalog() -> Vec<SupplementDefinition> {
    vec![
        definition("VitD", TimeSlot::Morning, &DayTag::all(), Cycle::Continuous),
        definition("Magnesium", TimeSlot::Evening, &DayTag::all(), Cycle::Continuous),
        definition(
            "Ashwagandha",
            TimeSlot::Evening,
            &[DayTag::Mon, DayTag::Wed, DayTag::Fri],
            Cycle::cyclic("2025-03-24", 1, 1, true),
        ),
    ]
}

/// ## Summary
/// The healthcheck answers without touching the catalog.
#[test_log::test(tokio::test)]
async fn healthcheck_is_ok() {
    let catalog = TestCatalog::missing();
    let service = create_test_service(&catalog);

    TestRequest::get("/api/app/healthcheck")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("OK");
}

/// ## Summary
/// The weekly report renders markdown for the requested week.
#[test_log::test(tokio::test)]
async fn weekly_report_is_rendered() {
    let catalog = TestCatalog::with_definitions(&sample_catalog()).await;
    let service = create_test_service(&catalog);

    let response = TestRequest::get("/api/plan/week?week=2025-%5BW%5D13")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("# Supplement plan for week 13 (2025)")
        .assert_body_contains("### Morning\n- VitD (1)")
        .assert_body_contains("### Evening\n- Magnesium (1)")
        .assert_body_contains("| Ashwagandha | 1 | Evening | ✅ |  | ✅ |  | ✅ |  |  |");

    assert!(
        response
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/markdown"))
    );
}

/// ## Summary
/// In the cycle's off week the cyclic item drops out of the report.
#[test_log::test(tokio::test)]
async fn off_week_omits_cyclic_item() {
    let catalog = TestCatalog::with_definitions(&sample_catalog()).await;
    let service = create_test_service(&catalog);

    let response = TestRequest::get("/api/plan/week?week=2025-%5BW%5D14")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    assert!(!response.body_string().contains("Ashwagandha"));
}

/// ## Summary
/// Without a week the plan falls back and says so in the JSON selection.
#[test_log::test(tokio::test)]
async fn missing_week_falls_back() {
    let catalog = TestCatalog::with_definitions(&sample_catalog()).await;
    let service = create_test_service(&catalog);

    let body = TestRequest::get("/api/plan/week?format=json")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["selection"]["source"]["kind"], "next_week_fallback");
    assert!(body["selection"]["source"]["requested"].is_null());
}

/// ## Summary
/// Skipped catalog records and cycle issues are surfaced in the JSON plan.
#[test_log::test(tokio::test)]
async fn json_plan_reports_problems() {
    let catalog = TestCatalog::with_document(
        r#"[
            {"id":"vitd","name":"VitD","time":"morning","days":["Mon","Tue","Wed","Thu","Fri","Sat","Sun"],"cycle":{"type":"continuous"},"active":true},
            {"id":"broken","name":"Broken","time":"morning","days":["Mon"],"cycle":{"type":"cyclic","start_date":"2025-01-06","on_weeks":0,"off_weeks":0,"repeat":true},"active":true},
            "not a record"
        ]"#,
    )
    .await;
    let service = create_test_service(&catalog);

    let body = TestRequest::get("/api/plan/week?week=2025-%5BW%5D13&format=json")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["daily"][0]["name"], "VitD");
    assert_eq!(body["issues"][0]["definition_id"], "broken");
    assert_eq!(body["issues"][0]["issue"], "invalid_cycle_length");
    assert_eq!(body["skipped_records"][0]["index"], 2);
}

/// ## Summary
/// An unreadable catalog produces no plan.
#[test_log::test(tokio::test)]
async fn unreadable_catalog_fails_the_request() {
    let catalog = TestCatalog::with_document("this is not json").await;
    let service = create_test_service(&catalog);

    let body = TestRequest::get("/api/plan/week?week=2025-%5BW%5D13")
        .send(&service)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .json();
    assert!(body["error"].is_string());
}

/// ## Summary
/// Day detail follows cycle phase; the month overview covers the month.
#[test_log::test(tokio::test)]
async fn day_and_month_views() {
    let catalog = TestCatalog::with_definitions(&sample_catalog()).await;
    let service = create_test_service(&catalog);

    // Monday of an on week, then Monday of an off week
    let on = TestRequest::get("/api/plan/day/2025-03-24")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(on["active"].as_array().map(Vec::len), Some(3));

    let off = TestRequest::get("/api/plan/day/2025-03-31")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(off["active"].as_array().map(Vec::len), Some(2));

    let month = TestRequest::get("/api/plan/month/2025/3")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    let days = month["days"].as_array().expect("days is a list");
    assert_eq!(days.len(), 31);
    assert_eq!(days[23]["date"], "2025-03-24");
    assert_eq!(days[23]["active_count"], 3);

    TestRequest::get("/api/plan/month/2025/13")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
