//! Upcoming-release windows and the release-date post-filter.
//!
//! The upstream catalog is asked for a future date range, but it does not
//! reliably honor it, so results are filtered again on `released`.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::CoreError;

/// Release dates are `YYYY-MM-DD`.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default look-ahead when no year is requested.
pub const DEFAULT_DAYS_AHEAD: u64 = 365;

/// Maximum look-ahead (three years).
pub const MAX_DAYS_AHEAD: u64 = 1095;

/// `year` value selecting the rest of this year plus all of next year.
pub const YEAR_BOTH: &str = "both";

/// Which future span to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpcomingWindow {
    /// The given calendar year, never starting before today.
    Year(i32),
    /// Today through the end of next year.
    ThroughNextYear,
    /// Today through today + n days.
    DaysAhead(u64),
}

/// Inclusive date range sent upstream as `start,end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Upstream `dates` parameter value.
    pub fn to_param(&self) -> String {
        format!(
            "{},{}",
            self.start.format(RELEASE_DATE_FORMAT),
            self.end.format(RELEASE_DATE_FORMAT)
        )
    }
}

impl UpcomingWindow {
    /// Build a window from the `year` and `days_ahead` request parameters.
    ///
    /// `year` wins when present: a four-digit year or `both`. Without it the
    /// window is `days_ahead` days (default 365, at most 1095).
    pub fn from_params(year: Option<&str>, days_ahead: Option<u64>) -> Result<Self, CoreError> {
        let days = days_ahead.unwrap_or(DEFAULT_DAYS_AHEAD);
        if !(1..=MAX_DAYS_AHEAD).contains(&days) {
            return Err(CoreError::Validation(format!(
                "days_ahead must be between 1 and {MAX_DAYS_AHEAD} (got {days})"
            )));
        }

        match year.map(str::trim).filter(|y| !y.is_empty()) {
            None => Ok(UpcomingWindow::DaysAhead(days)),
            Some(YEAR_BOTH) => Ok(UpcomingWindow::ThroughNextYear),
            Some(y) if y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()) => y
                .parse::<i32>()
                .map(UpcomingWindow::Year)
                .map_err(|e| CoreError::Validation(format!("Invalid year '{y}': {e}"))),
            Some(other) => Err(CoreError::Validation(format!(
                "year must be a four-digit year or '{YEAR_BOTH}' (got '{other}')"
            ))),
        }
    }

    /// Concrete date range relative to `today`.
    ///
    /// Returns `None` when the window lies entirely in the past (a year that
    /// has already ended), in which case there is nothing upcoming to list.
    pub fn date_range(&self, today: NaiveDate) -> Option<DateRange> {
        let (start, end) = match *self {
            UpcomingWindow::Year(year) => {
                let first = NaiveDate::from_ymd_opt(year, 1, 1)?;
                let last = NaiveDate::from_ymd_opt(year, 12, 31)?;
                (first.max(today), last)
            }
            UpcomingWindow::ThroughNextYear => {
                (today, NaiveDate::from_ymd_opt(today.year() + 1, 12, 31)?)
            }
            UpcomingWindow::DaysAhead(days) => (today, today.checked_add_days(Days::new(days))?),
        };

        (start <= end).then_some(DateRange { start, end })
    }
}

/// Whether a game with this `released` value is still upcoming on `today`.
///
/// Missing, unparsable and past dates are all excluded; today counts as
/// upcoming.
pub fn is_upcoming(released: Option<&str>, today: NaiveDate) -> bool {
    released
        .and_then(|r| NaiveDate::parse_from_str(r.trim(), RELEASE_DATE_FORMAT).ok())
        .is_some_and(|date| date >= today)
}
