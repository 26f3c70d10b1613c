//! Due Date Helpers
//!
//! Conversions between `<input type="date">` values and `NaiveDate`, the
//! browser's local calendar day, and relative due labels.

use chrono::NaiveDate;

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    // getMonth is zero-based
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Empty or invalid input means "no due date"
pub fn parse_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, INPUT_FORMAT).ok()
}

pub fn format_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_FORMAT).to_string()).unwrap_or_default()
}

/// "Due today", "Due tomorrow", "Overdue by 3 days", or "Due 2026-11-02"
pub fn describe_due(due: NaiveDate, today: NaiveDate) -> String {
    let days = (due - today).num_days();
    match days {
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        -1 => "Overdue by 1 day".to_string(),
        d if d < 0 => format!("Overdue by {} days", -d),
        _ => format!("Due {}", due.format(INPUT_FORMAT)),
    }
}
