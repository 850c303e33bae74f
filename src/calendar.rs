//! Week calendar arithmetic
//!
//! Monday is the canonical week start everywhere (UTC calendar, no timezone
//! negotiation). A week is identified by its Monday date; the window runs
//! through the following Sunday.

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::DayOfWeek;

/// The Monday..Sunday span identified by its Monday date
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// The window starting on the given Monday
    pub fn of(week_start: NaiveDate) -> Self {
        Self {
            start: week_start,
            end: week_start + Duration::days(6),
        }
    }

    /// Whether a date falls inside the window (inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Monday of the week containing `date`
///
/// Day-of-week index has Sunday = 0, so Sunday rolls back a full six days
/// rather than forward to the next Monday.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let index = date.weekday().num_days_from_sunday();
    let offset = if index == 0 { 6 } else { index - 1 };
    date - Duration::days(i64::from(offset))
}

/// The next Monday open for schedule generation
///
/// If a week at or after the current one has already been generated, the
/// slot after it is next; otherwise the week after the current one. This is
/// what makes generation strictly sequential: callers can neither skip
/// ahead nor regenerate the current or a past week.
pub fn next_available_week_start(latest_generated: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    match latest_generated {
        Some(week_start) => week_start + Duration::days(7),
        None => start_of_week(today) + Duration::days(7),
    }
}

/// Concrete date for each day label of the week starting at `week_start`
pub fn week_dates(week_start: NaiveDate) -> [(DayOfWeek, NaiveDate); 7] {
    DayOfWeek::ALL.map(|day| (day, date_for(week_start, day)))
}

/// Concrete date for one day label of the week starting at `week_start`
pub fn date_for(week_start: NaiveDate, day: DayOfWeek) -> NaiveDate {
    week_start + Duration::days(i64::from(day.offset()))
}
