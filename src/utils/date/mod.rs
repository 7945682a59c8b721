// Date utility functions
// Naive wall-clock helpers shared by navigation and the host

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Short month/day label, e.g. "Jun 3"
pub fn month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
