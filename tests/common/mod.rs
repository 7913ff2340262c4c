//! Shared test fixtures for the cafe-fixtures integration tests.
//!
//! Provides seeded RNGs, fixed date ranges and `setup_written_dir()`, which
//! generates every CSV dataset for a short period into a temporary output
//! directory and opens a `Connection` over it.

#![allow(dead_code)]

use cafe_fixtures::{Connection, Dataset, RunPlan};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

pub const SEED: u64 = 0x0C0F_FEE5;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

pub fn rng_with(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Two full weeks starting on a Wednesday.
pub fn two_weeks() -> Vec<NaiveDate> {
    cafe_fixtures::calendar::operating_days(date(2025, 10, 1), date(2025, 10, 14))
}

/// Month-ends of October to December 2025.
pub fn quarter() -> Vec<NaiveDate> {
    cafe_fixtures::calendar::month_ends(date(2025, 10, 1), date(2025, 12, 31))
}

/// Every CSV dataset (templates excluded) for October 2025.
pub const CSV_DATASETS: [Dataset; 7] = [
    Dataset::Pos,
    Dataset::Roster,
    Dataset::Expenses,
    Dataset::ChannelRevenues,
    Dataset::IncomeStatement,
    Dataset::BalanceSheet,
    Dataset::CashFlow,
];

/// Generate the CSV datasets for October 2025 into a temporary directory.
///
/// Returns `(Connection, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for as long as the connection reads from it.
pub fn setup_written_dir() -> (Connection, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let plan = RunPlan::new(tmp_dir.path(), date(2025, 10, 1), date(2025, 10, 31));
    let report = plan.run_with(&CSV_DATASETS, &mut rng());
    assert!(report.is_success(), "{}", report);
    let conn = Connection::new(tmp_dir.path()).unwrap();
    (conn, tmp_dir)
}

/// Write raw CSV text to `name` inside `dir` and return its path.
pub fn write_text(dir: &std::path::Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    path
}
