//! Scheduling properties checked against catalogs loaded from disk.

use cadence_test::component::calendar::{IsoWeek, date_from_iso_week, weeks_between};
use cadence_test::component::config::ReportLabels;
use cadence_test::component::plan::{build_weekly_plan, build_weekly_plan_at, render_weekly_report};
use cadence_test::component::schedule::{ResolutionIssue, is_active_on, resolve_day};
use cadence_test::component::store::catalog::CatalogStore;
use chrono::{Datelike, Days, Local};

use super::helpers::*;

// ============================================================================
// Recurrence
// ============================================================================

/// ## Summary
/// A continuous, always-active, every-day item is due on every date.
#[test_log::test]
fn continuous_items_are_due_every_day() {
    let def = definition("VitD", TimeSlot::Morning, &DayTag::all(), Cycle::Continuous);
    for day in date(2024, 12, 1).iter_days().take(120) {
        assert!(is_active_on(&def, day).included, "{day}");
    }
}

/// ## Summary
/// A repeating cycle is periodic with period `(on + off) * 7` days.
#[test_log::test]
fn repeating_cycles_are_periodic() {
    let def = definition(
        "Ashwagandha",
        TimeSlot::Evening,
        &DayTag::all(),
        Cycle::cyclic("2025-01-08", 3, 2, true),
    );
    let period = Days::new(5 * 7);
    for day in date(2025, 1, 8).iter_days().take(200) {
        let later = day + period;
        assert_eq!(
            is_active_on(&def, day).included,
            is_active_on(&def, later).included,
            "{day} vs {later}"
        );
    }
}

/// ## Summary
/// A non-repeating cycle is never due once a full cycle has elapsed.
#[test_log::test]
fn non_repeating_cycles_end() {
    let start = date(2025, 1, 6);
    let def = definition(
        "Rhodiola",
        TimeSlot::Morning,
        &DayTag::all(),
        Cycle::cyclic("2025-01-06", 2, 1, false),
    );
    for day in start.iter_days().take(400) {
        if weeks_between(day, start) >= 3 {
            assert!(!is_active_on(&def, day).included, "{day}");
        }
    }
}

/// ## Summary
/// Nothing is due before the cycle starts.
#[test_log::test]
fn nothing_is_due_before_start() {
    let def = definition(
        "Rhodiola",
        TimeSlot::Morning,
        &DayTag::all(),
        Cycle::cyclic("2025-06-15", 1, 0, true),
    );
    for day in date(2025, 1, 1).iter_days().take_while(|d| *d < date(2025, 6, 15)) {
        assert!(!is_active_on(&def, day).included, "{day}");
    }
    assert!(is_active_on(&def, date(2025, 6, 15)).included);
}

// ============================================================================
// Loading and fault isolation
// ============================================================================

/// ## Summary
/// Broken records are excluded and reported without hiding valid ones.
#[test_log::test(tokio::test)]
async fn broken_records_do_not_block_the_rest() {
    let catalog = TestCatalog::with_document(
        r#"[
            {"id":"vitd","name":"VitD","amount":"1000 IU","time":"Morgen","days":["Mon","Tue","Wed","Thu","Fri","Sat","Sun"],"cycle":{"type":"continuous"},"active":true},
            {"id":"bad-start","name":"Bad start","time":"morning","days":["Mon"],"cycle":{"type":"cyclic","start_date":"someday","on_weeks":1,"off_weeks":1,"repeat":true},"active":true},
            {"id":"bad-length","name":"Bad length","time":"morning","days":["Mon"],"cycle":{"type":"cyclic","start_date":"2025-01-06","on_weeks":"abc","off_weeks":1,"repeat":true},"active":true},
            {"id":"no-time","name":"Not a definition"},
            42
        ]"#,
    )
    .await;

    let loaded = catalog.store().load().await.expect("catalog loads");
    assert_eq!(loaded.definitions.len(), 3);
    assert_eq!(
        loaded.issues.iter().map(|i| i.index).collect::<Vec<_>>(),
        vec![3, 4]
    );

    // 2025-03-24 is a Monday
    let resolution = resolve_day(&loaded.definitions, date(2025, 3, 24));
    let names: Vec<&str> = resolution.active.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["VitD"]);
    let issues: Vec<ResolutionIssue> = resolution.issues.iter().map(|i| i.issue).collect();
    assert_eq!(
        issues,
        vec![
            ResolutionIssue::InvalidStartDate,
            ResolutionIssue::InvalidCycleLength
        ]
    );
}

/// ## Summary
/// A catalog document that is not an array aborts the load.
#[test_log::test(tokio::test)]
async fn non_array_catalog_is_unreadable() {
    let catalog = TestCatalog::with_document(r#"{"supplements": []}"#).await;
    assert!(catalog.store().load().await.is_err());
}

// ============================================================================
// Weekly aggregation
// ============================================================================

/// ## Summary
/// Single continuous every-day Morning item in week 13 of 2025.
#[test_log::test(tokio::test)]
async fn weekly_report_end_to_end() {
    let catalog = TestCatalog::with_definitions(&[definition(
        "VitD",
        TimeSlot::Morning,
        &DayTag::all(),
        Cycle::Continuous,
    )])
    .await;
    let loaded = catalog.store().load().await.expect("catalog loads");

    let plan = build_weekly_plan(&loaded.definitions, Some("2025-[W]13")).expect("plan builds");
    let report = render_weekly_report(&plan, &ReportLabels::default());

    assert_eq!(plan.selection.week, IsoWeek::new(2025, 13));
    assert!(report.starts_with("# Supplement plan for week 13 (2025)"));
    assert!(report.contains("### Morning\n- VitD (1)"));
}

/// ## Summary
/// A garbage identifier resolves to the ISO week after the current one.
#[test_log::test]
fn garbage_identifier_uses_next_week() {
    let today = Local::now().date_naive();
    let plan = build_weekly_plan(&[], Some("garbage")).expect("plan builds");

    let next = today + Days::new(7);
    let expected = IsoWeek::containing(next);
    // Tolerate the clock crossing midnight on a Sunday between the two reads
    let after_midnight = IsoWeek::containing(next + Days::new(1));
    assert!(
        plan.selection.week == expected || plan.selection.week == after_midnight,
        "{} not in {{{expected}, {after_midnight}}}",
        plan.selection.week
    );
    assert_eq!(plan.selection.monday.weekday(), chrono::Weekday::Mon);
}

/// ## Summary
/// Every-day items land in exactly one daily subsection, or none for other slots.
#[test_log::test]
fn daily_items_appear_in_one_subsection() {
    let catalog = vec![
        definition("Morning item", TimeSlot::Morning, &DayTag::all(), Cycle::Continuous),
        definition("Evening item", TimeSlot::Evening, &DayTag::all(), Cycle::Continuous),
        definition("Noon item", TimeSlot::Noon, &DayTag::all(), Cycle::Continuous),
    ];
    let plan = build_weekly_plan_at(&catalog, Some("2025-[W]13"), date(2025, 1, 1))
        .expect("plan builds");
    let report = render_weekly_report(&plan, &ReportLabels::default());

    assert_eq!(report.matches("- Morning item").count(), 1);
    assert_eq!(report.matches("- Evening item").count(), 1);
    assert!(!report.contains("Noon item"));
    assert!(plan.variable.is_empty());
}

/// ## Summary
/// Week 1 and week 53 edge cases resolve to the arithmetic Monday.
#[test_log::test]
fn week_numbers_resolve_across_year_boundaries() {
    assert_eq!(date_from_iso_week(2026, 1), Some(date(2025, 12, 29)));
    assert_eq!(date_from_iso_week(2020, 53), Some(date(2020, 12, 28)));

    let plan = build_weekly_plan_at(&[], Some("2026-[W]1"), date(2025, 1, 1)).expect("plan builds");
    assert_eq!(plan.days[0].date, date(2025, 12, 29));
    assert_eq!(plan.days[6].date, date(2026, 1, 4));
}
