//! Business calendar: operating weekdays and month-end reporting periods.
//!
//! Every enumeration is inclusive of both bounds and yields an empty sequence
//! when `start > end`.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

use crate::config::PERIOD_FORMAT;
use crate::error::FixtureError;

/// An end (or start) bound that is either a fixed date or the day the run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Fixed(NaiveDate),
    Today,
}

impl DateBound {
    /// Resolve the bound to a concrete date. `Today` uses the local clock.
    pub fn resolve(&self) -> NaiveDate {
        match self {
            DateBound::Fixed(date) => *date,
            DateBound::Today => Local::now().date_naive(),
        }
    }
}

impl From<NaiveDate> for DateBound {
    fn from(date: NaiveDate) -> Self {
        DateBound::Fixed(date)
    }
}

impl FromStr for DateBound {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("today") {
            return Ok(DateBound::Today);
        }
        NaiveDate::parse_from_str(s, PERIOD_FORMAT)
            .map(DateBound::Fixed)
            .map_err(|e| FixtureError::InvalidArgument(format!("Invalid date '{}': {}", s, e)))
    }
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateBound::Fixed(date) => write!(f, "{}", date.format(PERIOD_FORMAT)),
            DateBound::Today => write!(f, "today"),
        }
    }
}

/// Whether the cafe trades on this date (Monday to Friday).
pub fn is_operating_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every weekday between `start` and `end`, inclusive, in ascending order.
pub fn operating_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_operating_day(*d))
        .collect()
}

/// Last calendar day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    first_of_month(year, month)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

/// Month-end dates of every month from `start`'s month onwards whose
/// month-end is not after `end`.
///
/// A trailing partial month is dropped: `month_ends(2025-10-01, 2025-12-15)`
/// yields October and November only.
pub fn month_ends(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    if start > end {
        return months;
    }

    let mut current = match first_of_month(start.year(), start.month()) {
        Some(d) => d,
        None => return months,
    };
    while current <= end {
        let last_day = month_end(current);
        if last_day <= end {
            months.push(last_day);
        }
        current = match last_day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    months
}

/// Number of weekdays (Monday to Friday) in the given month.
pub fn weekdays_in_month(year: i32, month: u32) -> usize {
    match first_of_month(year, month) {
        Some(first) => operating_days(first, month_end(first)).len(),
        None => 0,
    }
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}
