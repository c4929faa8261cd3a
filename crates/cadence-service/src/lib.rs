//! Scheduling engine and catalog services.
//!
//! The engine is a set of pure functions over a catalog snapshot:
//! [`schedule::is_active_on`], [`schedule::resolve_day`],
//! [`schedule::resolve_month`] and [`plan::build_weekly_plan`].

pub mod catalog;
pub mod error;
pub mod plan;
pub mod schedule;
