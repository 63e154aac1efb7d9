//! HTML calendar page rendering.
//!
//! Each displayed year gets twelve month tables, weeks starting on Monday.
//! Day cells carry a weekday class (`mon`..`sun`) and, where applicable, a
//! status class:
//!
//! | Status | Class |
//! |---|---|
//! | Public holiday + leave | `both` |
//! | Public holiday | `public` |
//! | Planned leave | `holiday` |
//! | Working day | `workday` |
//! | Non-working day | (none) |
//!
//! Cells outside the month are `noday`.

use chrono::{Datelike, NaiveDate};

use crate::calculation::DayLedger;
use crate::error::{EngineError, EngineResult};
use crate::models::{DayStatus, LeavePlan};

const WEEKDAY_CLASSES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const STYLE: &str = r#"<style>
body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif; }
h1, h2 { margin: 0.5em 0; }
.legend span { display:inline-block; padding:4px 8px; margin-right:8px; border:1px solid #ddd; border-radius:4px; }
table { border-collapse: collapse; margin: 8px; }
th { background:#f0f0f0; }
th, td { border: 1px solid #ddd; padding: 4px; text-align: center; }
.workday { background: #d4edda; }
.public  { background: #e2d1f9; }
.holiday { background: #f8d7da; }
.both    { background: #cfe2ff; }
.noday   { background: #f9f9f9; }
.overdrawn { color: #b00020; }
.month-container { display:flex; flex-wrap:wrap; gap: 12px; }
.month-container table { width: 280px; }
.summary { padding: 8px; background: #f6f6f6; border: 1px solid #ddd; border-radius: 4px; }
</style>"#;

/// The CSS class for a day status, if it has one.
pub fn status_class(status: DayStatus) -> Option<&'static str> {
    match status {
        DayStatus::HolidayAndLeave => Some("both"),
        DayStatus::PublicHoliday => Some("public"),
        DayStatus::PlannedLeave => Some("holiday"),
        DayStatus::WorkingDay => Some("workday"),
        DayStatus::NonWorkingDay => None,
    }
}

/// Escapes text for use in HTML content and attribute values.
///
/// # Example
///
/// ```
/// use leave_planner::render::escape_html;
///
/// assert_eq!(escape_html("Q1 <draft> & \"final\""), "Q1 &lt;draft&gt; &amp; &quot;final&quot;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders one month as a Monday-first table.
///
/// Days missing from the ledger get only their weekday class.
///
/// # Errors
///
/// Returns [`EngineError::YearOutOfRange`] if the month cannot be built.
pub fn format_month(ledger: &DayLedger, year: i32, month: u32) -> EngineResult<String> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(EngineError::YearOutOfRange { year })?;

    let mut cells: Vec<String> = Vec::with_capacity(42);
    let leading = first.weekday().num_days_from_monday() as usize;
    cells.extend(std::iter::repeat_n(noday_cell(), leading));

    for date in first.iter_days().take_while(|date| date.month() == month) {
        let weekday_class = WEEKDAY_CLASSES[date.weekday().num_days_from_monday() as usize];
        let class = match ledger.get(date).and_then(|record| status_class(record.status())) {
            Some(status) => format!("{} {}", weekday_class, status),
            None => weekday_class.to_string(),
        };
        cells.push(format!("<td class=\"{}\">{}</td>", class, date.day()));
    }

    let trailing = (7 - cells.len() % 7) % 7;
    cells.extend(std::iter::repeat_n(noday_cell(), trailing));

    let mut html = String::new();
    html.push_str("<table class=\"month\">\n");
    html.push_str(&format!(
        "<tr><th colspan=\"7\" class=\"month\">{}</th></tr>\n",
        first.format("%B %Y")
    ));
    html.push_str("<tr>");
    for (class, header) in WEEKDAY_CLASSES.iter().zip(WEEKDAY_HEADERS) {
        html.push_str(&format!("<th class=\"{}\">{}</th>", class, header));
    }
    html.push_str("</tr>\n");
    for week in cells.chunks(7) {
        html.push_str("<tr>");
        html.push_str(&week.concat());
        html.push_str("</tr>\n");
    }
    html.push_str("</table>");
    Ok(html)
}

fn noday_cell() -> String {
    "<td class=\"noday\">&nbsp;</td>".to_string()
}

/// Renders the full page for a plan.
///
/// The page shows the leave used, the leave left per displayed year, the
/// burned carry-over, a legend, and twelve month tables per displayed year.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::{LeavePlanner, PlannerInputs, PlannerSettings};
/// use leave_planner::render::render_page;
///
/// let plan = LeavePlanner::new(PlannerSettings::for_year(2026))
///     .plan(&PlannerInputs::default())
///     .unwrap();
/// let html = render_page(&plan, "Team <A>").unwrap();
///
/// assert!(html.contains("<title>Team &lt;A&gt;</title>"));
/// assert!(html.contains("<h2>2027</h2>"));
/// ```
pub fn render_page(plan: &LeavePlan, title: &str) -> EngineResult<String> {
    let title = escape_html(title);
    let summary = &plan.summary;

    let mut parts: Vec<String> = vec![
        "<!doctype html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        format!("<title>{}</title>", title),
        STYLE.to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
        format!("<h1>{}</h1>", title),
        format!(
            "<div class=\"summary\"><strong>Annual leave used:</strong> {} day(s)</div>",
            summary.annual_leave_used
        ),
        "<div class=\"legend\">".to_string(),
    ];
    for status in [
        DayStatus::WorkingDay,
        DayStatus::PublicHoliday,
        DayStatus::PlannedLeave,
        DayStatus::HolidayAndLeave,
    ] {
        if let Some(class) = status_class(status) {
            parts.push(format!("<span class=\"{}\">{}</span>", class, status));
        }
    }
    parts.push("</div>".to_string());

    parts.push("<div class=\"summary\">".to_string());
    parts.push("<strong>Annual leave left:</strong>".to_string());
    for balance in &summary.balances {
        if balance.is_overdrawn() {
            parts.push(format!(
                "<div class=\"overdrawn\">Year {}: {} day(s)</div>",
                balance.year, balance.days_left
            ));
        } else {
            parts.push(format!("<div>Year {}: {} day(s)</div>", balance.year, balance.days_left));
        }
    }
    parts.push("</div>".to_string());

    parts.push(format!(
        "<div class=\"summary\"><strong>Burned leave (exceeds carry-over cap):</strong> {} day(s)</div>",
        summary.burned_leave
    ));

    for &year in &plan.years {
        parts.push(format!("<h2>{}</h2>", year));
        parts.push("<div class=\"month-container\">".to_string());
        for month in 1..=12 {
            parts.push(format_month(&plan.ledger, year, month)?);
        }
        parts.push("</div>".to_string());
    }
    parts.push("</body></html>".to_string());

    Ok(parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::WeeklyMask;
    use crate::models::{LeaveRange, PublicHoliday};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn january_ledger() -> DayLedger {
        DayLedger::build(
            &[PublicHoliday::new(make_date("2026-01-01"))],
            &[LeaveRange::new(make_date("2026-01-01"), make_date("2026-01-05")).unwrap()],
            &WeeklyMask::default(),
            Some(
                crate::calculation::DateSpan::new(make_date("2026-01-01"), make_date("2026-01-31"))
                    .unwrap(),
            ),
        )
        .unwrap()
    }

    #[test]
    fn test_month_starts_on_monday_with_padding() {
        let html = format_month(&january_ledger(), 2026, 1).unwrap();

        // 1 Jan 2026 is a Thursday: three padding cells lead the first week
        let first_row = html.lines().nth(3).unwrap();
        assert!(first_row.starts_with(
            "<tr><td class=\"noday\">&nbsp;</td><td class=\"noday\">&nbsp;</td><td class=\"noday\">&nbsp;</td><td class=\"thu both\">1</td>"
        ));
        assert!(html.contains("<th colspan=\"7\" class=\"month\">January 2026</th>"));
    }

    #[test]
    fn test_cell_classes_follow_status() {
        let html = format_month(&january_ledger(), 2026, 1).unwrap();

        assert!(html.contains("<td class=\"fri holiday\">2</td>"));
        assert!(html.contains("<td class=\"sat holiday\">3</td>"));
        assert!(html.contains("<td class=\"mon holiday\">5</td>"));
        assert!(html.contains("<td class=\"tue workday\">6</td>"));
        assert!(html.contains("<td class=\"sat\">10</td>"));
    }

    #[test]
    fn test_every_week_row_is_complete() {
        let html = format_month(&january_ledger(), 2026, 1).unwrap();
        for row in html.lines().filter(|line| line.contains("<td")) {
            assert_eq!(row.matches("<td").count(), 7, "row: {}", row);
        }
    }

    #[test]
    fn test_days_missing_from_ledger_get_weekday_class_only() {
        let html = format_month(&DayLedger::default(), 2026, 2).unwrap();
        assert!(html.contains("<td class=\"mon\">2</td>"));
        assert!(html.contains("<td class=\"sat\">28</td>"));
    }

    #[test]
    fn test_invalid_month_is_an_error() {
        assert!(matches!(
            format_month(&DayLedger::default(), 2026, 13),
            Err(EngineError::YearOutOfRange { year: 2026 })
        ));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("it's"), "it&#x27;s");
        assert_eq!(escape_html("plain"), "plain");
    }
}
