//! Business calendar: operating days, month-ends and date bounds.

mod common;

use cafe_fixtures::calendar::{
    is_operating_day, month_end, month_ends, operating_days, weekdays_in_month,
};
use cafe_fixtures::DateBound;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use common::date;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// operating_days
// ---------------------------------------------------------------------------

#[test]
fn operating_days_skip_weekends() {
    // 2025-10-01 is a Wednesday.
    let days = operating_days(date(2025, 10, 1), date(2025, 10, 7));
    assert_eq!(
        days,
        vec![
            date(2025, 10, 1),
            date(2025, 10, 2),
            date(2025, 10, 3),
            date(2025, 10, 6),
            date(2025, 10, 7),
        ]
    );
}

#[test]
fn operating_days_include_both_bounds() {
    let days = operating_days(date(2025, 10, 6), date(2025, 10, 10));
    assert_eq!(days.first(), Some(&date(2025, 10, 6)));
    assert_eq!(days.last(), Some(&date(2025, 10, 10)));
    assert_eq!(days.len(), 5);
}

#[test]
fn operating_days_empty_when_start_after_end() {
    assert!(operating_days(date(2025, 10, 10), date(2025, 10, 1)).is_empty());
}

#[test]
fn weekend_only_range_is_empty() {
    assert!(operating_days(date(2025, 10, 4), date(2025, 10, 5)).is_empty());
}

#[test]
fn is_operating_day_matches_weekday() {
    assert!(is_operating_day(date(2025, 10, 3)));
    assert!(!is_operating_day(date(2025, 10, 4)));
    assert!(!is_operating_day(date(2025, 10, 5)));
}

// ---------------------------------------------------------------------------
// month_end / month_ends
// ---------------------------------------------------------------------------

#[test]
fn month_end_handles_lengths_and_leap_years() {
    assert_eq!(month_end(date(2025, 10, 15)), date(2025, 10, 31));
    assert_eq!(month_end(date(2025, 11, 1)), date(2025, 11, 30));
    assert_eq!(month_end(date(2025, 12, 31)), date(2025, 12, 31));
    assert_eq!(month_end(date(2024, 2, 3)), date(2024, 2, 29));
    assert_eq!(month_end(date(2025, 2, 3)), date(2025, 2, 28));
}

#[test]
fn month_ends_drop_trailing_partial_month() {
    assert_eq!(
        month_ends(date(2025, 10, 1), date(2025, 12, 15)),
        vec![date(2025, 10, 31), date(2025, 11, 30)]
    );
}

#[test]
fn month_ends_for_default_range() {
    assert_eq!(
        month_ends(date(2025, 10, 1), date(2026, 1, 23)),
        vec![date(2025, 10, 31), date(2025, 11, 30), date(2025, 12, 31)]
    );
}

#[test]
fn month_ends_include_month_ending_on_end() {
    assert_eq!(
        month_ends(date(2025, 10, 1), date(2025, 10, 31)),
        vec![date(2025, 10, 31)]
    );
}

#[test]
fn month_ends_keep_first_month_when_start_is_mid_month() {
    assert_eq!(
        month_ends(date(2025, 10, 20), date(2025, 11, 30)),
        vec![date(2025, 10, 31), date(2025, 11, 30)]
    );
}

#[test]
fn month_ends_empty_when_start_after_end() {
    assert!(month_ends(date(2025, 12, 1), date(2025, 10, 1)).is_empty());
}

#[test]
fn weekdays_in_month_counts() {
    assert_eq!(weekdays_in_month(2025, 10), 23);
    assert_eq!(weekdays_in_month(2025, 11), 20);
    assert_eq!(weekdays_in_month(2025, 12), 23);
    assert_eq!(weekdays_in_month(2025, 13), 0);
}

// ---------------------------------------------------------------------------
// DateBound
// ---------------------------------------------------------------------------

#[test]
fn date_bound_parses_dates_and_today() {
    let fixed: DateBound = "2025-10-01".parse().unwrap();
    assert_eq!(fixed, DateBound::Fixed(date(2025, 10, 1)));
    assert_eq!(fixed.resolve(), date(2025, 10, 1));

    let today: DateBound = "Today".parse().unwrap();
    assert_eq!(today, DateBound::Today);
    assert_eq!(today.to_string(), "today");
}

#[test]
fn date_bound_rejects_garbage() {
    assert!("01/10/2025".parse::<DateBound>().is_err());
    assert!("".parse::<DateBound>().is_err());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..3_650).prop_map(|offset| date(2020, 1, 1) + Duration::days(offset))
}

proptest! {
    #[test]
    fn operating_days_are_increasing_weekdays(start in any_date(), span in 0i64..120) {
        let days = operating_days(start, start + Duration::days(span));
        for day in &days {
            prop_assert!(!matches!(day.weekday(), Weekday::Sat | Weekday::Sun));
        }
        for pair in days.windows(2) {
            let gap = (pair[1] - pair[0]).num_days();
            prop_assert!(gap == 1 || gap == 3, "gap of {} days", gap);
        }
    }

    #[test]
    fn month_ends_are_last_days_within_range(start in any_date(), span in 0i64..400) {
        let end = start + Duration::days(span);
        let months = month_ends(start, end);
        for m in &months {
            prop_assert!(*m <= end);
            prop_assert_eq!(month_end(*m), *m);
            prop_assert_eq!(m.succ_opt().unwrap().day(), 1);
        }
        for pair in months.windows(2) {
            prop_assert_eq!(pair[0].succ_opt().unwrap().month(), pair[1].month());
        }
    }
}
