use crate::core::calendar::DATE_FMT;
use chrono::{Datelike, NaiveDate, Utc};

/// Current day on the UTC calendar. Only the CLI layer calls this; the
/// engine always receives "today" as an argument.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn current_month() -> (i32, u32) {
    let t = today();
    (t.year(), t.month())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}
