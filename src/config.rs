use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{FixtureError, Result};

/// First business day covered by a default run.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid literal date")
}

/// Last business day covered by a default run (a Friday).
pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 23).expect("valid literal date")
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Output paths, relative to the output directory, keyed by dataset name.
pub fn output_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        // Operational data
        ("pos", "pos/pos_transactions.csv"),
        ("roster", "roster/roster_0.csv"),
        ("employees", "employee/employee_0.csv"),
        // Monthly financial series
        ("expenses", "financial/company_expenses.csv"),
        ("channel_revenues", "financial/channel_revenues.csv"),
        ("income_statement", "financial/income_statement_data.csv"),
        ("balance_sheet", "financial/balance_sheet_data.csv"),
        ("cash_flow", "financial/cash_flow_data.csv"),
        // Report templates
        ("balance_sheet_template", "financial/balance_sheet_template.xlsx"),
        ("cash_flow_template", "financial/cash_flow_template.xlsx"),
        ("income_statement_template", "financial/income_statement_template.xlsx"),
    ])
}

/// Look up the relative output path for a dataset name.
pub fn output_file(name: &str) -> Result<&'static str> {
    output_files()
        .get(name)
        .copied()
        .ok_or_else(|| FixtureError::NotFound(format!("No output file registered for '{}'", name)))
}

/// Timestamp layout of the POS `transaction_datetime` column.
pub const POS_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Timestamp layout of the roster `start_time` / `end_time` columns.
pub const ROSTER_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Layout of month-end period columns.
pub const PERIOD_FORMAT: &str = "%Y-%m-%d";
