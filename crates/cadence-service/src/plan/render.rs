use cadence_core::config::ReportLabels;
use cadence_core::types::{DayTag, TimeSlot};
use cadence_store::model::SupplementDefinition;

use super::WeeklyPlan;

/// ## Summary
/// Renders `plan` as a markdown document.
///
/// The header names the week and ISO year actually used. Daily items are
/// listed under the Morning and Evening headings (each only when it has
/// entries; daily items in other slots are not listed). Variable items are
/// tabulated with one column per weekday, marked from the day-mask; the table
/// is left out when there are none.
#[must_use]
pub fn render_weekly_report(plan: &WeeklyPlan<'_>, labels: &ReportLabels) -> String {
    let week = &plan.selection.week;
    let mut lines = vec![format!("# {} {} ({})", labels.title, week.week, week.year)];

    for (slot, heading) in [
        (TimeSlot::Morning, &labels.morning),
        (TimeSlot::Evening, &labels.evening),
    ] {
        let items: Vec<_> = plan.daily.iter().filter(|d| d.time == slot).collect();
        if items.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(format!("### {heading}"));
        lines.extend(items.into_iter().map(|item| format!("- {}", bullet(item))));
    }

    if !plan.variable.is_empty() {
        lines.push(String::new());
        lines.push(format!("### {}", labels.variable));
        lines.push(format!(
            "| {} | {} | {} | {} |",
            labels.column_name,
            labels.column_dose,
            labels.column_time,
            labels.weekdays.join(" | ")
        ));
        lines.push(format!("|{}", "---|".repeat(3 + DayTag::all().len())));
        for item in &plan.variable {
            let marks: Vec<&str> = DayTag::all()
                .into_iter()
                .map(|day| {
                    if item.days.contains(&day) {
                        labels.present.as_str()
                    } else {
                        ""
                    }
                })
                .collect();
            lines.push(format!(
                "| {} | {} | {} | {} |",
                cell(&item.name),
                cell(&item.amount),
                cell(item.time.slot().label()),
                marks.join(" | ")
            ));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

fn bullet(item: &SupplementDefinition) -> String {
    if item.amount.trim().is_empty() {
        item.name.clone()
    } else {
        format!("{} ({})", item.name, item.amount)
    }
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
