//! Header and navigation.
//!
//! Decides which dates the grid shows and how previous/next/today move the
//! anchor date.

use chrono::{Datelike, Duration, NaiveDate};

pub use crate::models::settings::CalendarView;
use crate::utils::date::{get_week_start, is_weekend, month_day};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
    Today,
}

/// One column header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub date: NaiveDate,
    pub weekday: String,
    pub day: u32,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_weekend: bool,
}

/// Dates shown as columns for the given anchor.
///
/// The week view starts on `first_day_of_week` (0 = Sunday) and drops
/// Saturday and Sunday when weekends are hidden. The day view always shows
/// the anchor itself.
pub fn visible_days(
    view_date: NaiveDate,
    view: CalendarView,
    show_weekends: bool,
    first_day_of_week: u8,
) -> Vec<NaiveDate> {
    match view {
        CalendarView::Day => vec![view_date],
        CalendarView::Week => {
            let start = get_week_start(view_date, first_day_of_week);
            (0..7)
                .map(|offset| start + Duration::days(offset))
                .filter(|date| show_weekends || !is_weekend(*date))
                .collect()
        }
    }
}

/// New anchor date after a navigation action.
pub fn step(
    view_date: NaiveDate,
    view: CalendarView,
    direction: NavDirection,
    show_weekends: bool,
    today: NaiveDate,
) -> NaiveDate {
    let delta = match (view, direction) {
        (_, NavDirection::Today) => return today,
        (CalendarView::Week, NavDirection::Previous) => return view_date - Duration::weeks(1),
        (CalendarView::Week, NavDirection::Next) => return view_date + Duration::weeks(1),
        (CalendarView::Day, NavDirection::Previous) => Duration::days(-1),
        (CalendarView::Day, NavDirection::Next) => Duration::days(1),
    };

    let mut date = view_date + delta;
    while !show_weekends && is_weekend(date) {
        date += delta;
    }
    date
}

pub fn header_cells(days: &[NaiveDate], selected: NaiveDate, today: NaiveDate) -> Vec<HeaderCell> {
    days.iter()
        .map(|&date| HeaderCell {
            date,
            weekday: date.format("%a").to_string(),
            day: date.day(),
            is_selected: date == selected,
            is_today: date == today,
            is_weekend: is_weekend(date),
        })
        .collect()
}

/// Title for the visible range, e.g. "Jun 3 - 9, 2024".
pub fn range_label(days: &[NaiveDate]) -> String {
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        return String::new();
    };

    if first == last {
        return first.format("%a, %b %-d, %Y").to_string();
    }

    if first.year() != last.year() {
        format!(
            "{}, {} - {}, {}",
            month_day(*first),
            first.year(),
            month_day(*last),
            last.year()
        )
    } else if first.month() != last.month() {
        format!("{} - {}, {}", month_day(*first), month_day(*last), last.year())
    } else {
        format!("{} - {}, {}", month_day(*first), last.day(), last.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn test_week_with_weekends() {
        // Wednesday
        let days = visible_days(date(6, 5), CalendarView::Week, true, 1);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(6, 3));
        assert_eq!(days[6], date(6, 9));
    }

    #[test]
    fn test_week_without_weekends() {
        let days = visible_days(date(6, 5), CalendarView::Week, false, 1);
        assert_eq!(
            days,
            vec![date(6, 3), date(6, 4), date(6, 5), date(6, 6), date(6, 7)]
        );
    }

    #[test]
    fn test_sunday_start_week_without_weekends_is_still_workdays() {
        let days = visible_days(date(6, 5), CalendarView::Week, false, 0);
        assert_eq!(days.first(), Some(&date(6, 3)));
        assert_eq!(days.len(), 5);
    }

    #[test]
    fn test_day_view_is_anchor_only() {
        assert_eq!(
            visible_days(date(6, 8), CalendarView::Day, false, 1),
            vec![date(6, 8)]
        );
    }

    #[test_case(CalendarView::Week, NavDirection::Next, true, date(6, 12) ; "week next")]
    #[test_case(CalendarView::Week, NavDirection::Previous, true, date(5, 29) ; "week previous")]
    #[test_case(CalendarView::Day, NavDirection::Next, true, date(6, 6) ; "day next")]
    #[test_case(CalendarView::Day, NavDirection::Previous, true, date(6, 4) ; "day previous")]
    #[test_case(CalendarView::Day, NavDirection::Today, true, date(6, 20) ; "today")]
    fn test_step(view: CalendarView, direction: NavDirection, weekends: bool, expected: NaiveDate) {
        assert_eq!(step(date(6, 5), view, direction, weekends, date(6, 20)), expected);
    }

    #[test]
    fn test_day_step_skips_hidden_weekend() {
        // Friday -> Monday
        assert_eq!(
            step(date(6, 7), CalendarView::Day, NavDirection::Next, false, date(6, 1)),
            date(6, 10)
        );
        // Monday -> Friday
        assert_eq!(
            step(date(6, 10), CalendarView::Day, NavDirection::Previous, false, date(6, 1)),
            date(6, 7)
        );
    }

    #[test]
    fn test_header_cells_flags() {
        let days = visible_days(date(6, 5), CalendarView::Week, true, 1);
        let cells = header_cells(&days, date(6, 5), date(6, 4));

        assert_eq!(cells[0].weekday, "Mon");
        assert_eq!(cells[0].day, 3);
        assert!(cells[2].is_selected);
        assert!(cells[1].is_today);
        assert!(cells[5].is_weekend);
        assert_eq!(cells.iter().filter(|cell| cell.is_selected).count(), 1);
    }

    #[test]
    fn test_range_labels() {
        assert_eq!(range_label(&[]), "");
        assert_eq!(range_label(&[date(6, 3)]), "Mon, Jun 3, 2024");
        assert_eq!(range_label(&[date(6, 3), date(6, 9)]), "Jun 3 - 9, 2024");
        assert_eq!(range_label(&[date(5, 27), date(6, 2)]), "May 27 - Jun 2, 2024");

        let new_year = [
            NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        ];
        assert_eq!(range_label(&new_year), "Dec 30, 2024 - Jan 5, 2025");
    }
}
