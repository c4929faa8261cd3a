//! Read-only schedule views: weekly report, day detail and month overview.

use cadence_core::constants::PLAN_ROUTE_COMPONENT;
use cadence_service::plan::{WeeklyPlan, build_weekly_plan, render_weekly_report};
use cadence_service::schedule::{DaySummary, DefinitionIssue, resolve_day, resolve_month};
use cadence_store::catalog::{LoadIssue, LoadedCatalog};
use chrono::NaiveDate;
use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use serde::Serialize;

use super::response::{render_app_error, render_error};
use crate::catalog_handler::get_catalog_from_depot;
use crate::config::get_config_from_depot;
use crate::error::AppResult;


#[derive(Debug, Serialize)]
struct WeekPlanResponse<'a> {
    label: String,
    #[serde(flatten)]
    plan: &'a WeeklyPlan<'a>,
    issues: Vec<&'a DefinitionIssue>,
    skipped_records: &'a [LoadIssue],
}

#[derive(Debug, Serialize)]
struct MonthResponse {
    year: i32,
    month: u32,
    days: Vec<DaySummary>,
}

async fn load_snapshot(depot: &Depot) -> AppResult<LoadedCatalog> {
    let catalog = get_catalog_from_depot(depot)?;
    Ok(catalog.snapshot().await?)
}

/// ## Summary
/// GET /api/plan/week?week=YYYY-[W]ww - Weekly report.
///
/// Renders markdown by default, or the plan as JSON with `format=json`. A
/// missing or malformed `week` selects the week after the current one; the
/// header and the JSON `selection` name the week actually used.
///
/// ## Errors
/// Returns HTTP 500 if the catalog cannot be read.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn week_plan(req: &mut Request, depot: &Depot, res: &mut Response) {
    let week = req.query::<String>("week");
    let as_json = req
        .query::<String>("format")
        .is_some_and(|f| f.eq_ignore_ascii_case("json"));

    let snapshot = match load_snapshot(depot).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            render_app_error(res, &e);
            return;
        }
    };

    let plan = match build_weekly_plan(&snapshot.definitions, week.as_deref()) {
        Ok(plan) => plan,
        Err(e) => {
            render_app_error(res, &e.into());
            return;
        }
    };

    if as_json {
        res.status_code(StatusCode::OK);
        res.render(Json(WeekPlanResponse {
            label: plan.selection.week.to_string(),
            plan: &plan,
            issues: plan.issues(),
            skipped_records: &snapshot.issues,
        }));
        return;
    }

    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => {
            render_app_error(res, &e);
            return;
        }
    };
    let report = render_weekly_report(&plan, &settings.report);

    res.status_code(StatusCode::OK);
    #[expect(
        clippy::let_underscore_must_use,
        reason = "Header addition failure is non-fatal"
    )]
    let _ = res.add_header(
        "Content-Type",
        salvo::http::HeaderValue::from_static("text/markdown; charset=utf-8"),
        true,
    );
    #[expect(
        clippy::let_underscore_must_use,
        reason = "Write body failure is non-fatal"
    )]
    let _ = res.write_body(report);
}

/// ## Summary
/// GET /api/plan/day/{date} - Items due on one date, with any issues.
///
/// ## Errors
/// Returns HTTP 400 if `date` is not `YYYY-MM-DD`.
/// Returns HTTP 500 if the catalog cannot be read.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn day_detail(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(date) = req
        .param::<String>("date")
        .and_then(|raw| NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok())
    else {
        render_error(res, StatusCode::BAD_REQUEST, "Date must be YYYY-MM-DD");
        return;
    };

    let snapshot = match load_snapshot(depot).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            render_app_error(res, &e);
            return;
        }
    };

    res.status_code(StatusCode::OK);
    res.render(Json(resolve_day(&snapshot.definitions, date)));
}

/// ## Summary
/// GET /api/plan/month/{year}/{month} - Per-day counts for a calendar grid.
///
/// ## Errors
/// Returns HTTP 400 for a non-numeric year or a month outside 1..=12.
/// Returns HTTP 500 if the catalog cannot be read.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn month_overview(req: &mut Request, depot: &Depot, res: &mut Response) {
    let (Some(year), Some(month)) = (req.param::<i32>("year"), req.param::<u32>("month")) else {
        render_error(res, StatusCode::BAD_REQUEST, "Year and month must be numbers");
        return;
    };

    let snapshot = match load_snapshot(depot).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            render_app_error(res, &e);
            return;
        }
    };

    match resolve_month(&snapshot.definitions, year, month) {
        Ok(days) => {
            res.status_code(StatusCode::OK);
            res.render(Json(MonthResponse { year, month, days }));
        }
        Err(e) => render_app_error(res, &e.into()),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PLAN_ROUTE_COMPONENT)
        .push(Router::with_path("week").get(week_plan))
        .push(Router::with_path("day/{date}").get(day_detail))
        .push(Router::with_path("month/{year}/{month}").get(month_overview))
}
