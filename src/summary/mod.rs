//! Aggregate reports over written datasets.
//!
//! Each report struct borrows a [`Connection`](crate::connection::Connection),
//! registers the CSV views it needs and runs aggregate SQL built with
//! [`SqlBuilder`](crate::sql_builder::SqlBuilder). Results implement
//! `Display` so the CLI can print them directly.

pub mod financial;
pub mod pos;
pub mod roster;

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

pub use financial::{FinancialDataset, FinancialQuery, FinancialSummary};
pub use pos::{PosDimension, PosQuery, PosSummary};
pub use roster::{RosterQuery, RosterSummary};

/// One row of a grouped aggregate: the group key, its row count and the
/// summed measure.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub count: i64,
    pub total: f64,
}

impl fmt::Display for GroupTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<40} {:>8}  {:>14}", self.key, self.count, money(self.total))
    }
}

// ---------------------------------------------------------------------------
// Row helpers
// ---------------------------------------------------------------------------

pub(crate) fn as_f64(row: &HashMap<String, Value>, column: &str) -> f64 {
    match row.get(column) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub(crate) fn as_i64(row: &HashMap<String, Value>, column: &str) -> i64 {
    match row.get(column) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

pub(crate) fn as_string(row: &HashMap<String, Value>, column: &str) -> String {
    match row.get(column) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Rows shaped `key, n, total` into [`GroupTotal`]s.
pub(crate) fn group_totals(rows: &[HashMap<String, Value>]) -> Vec<GroupTotal> {
    rows.iter()
        .map(|row| GroupTotal {
            key: as_string(row, "key"),
            count: as_i64(row, "n"),
            total: as_f64(row, "total"),
        })
        .collect()
}

pub(crate) fn scalar_f64(value: Option<Value>) -> f64 {
    value.and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub(crate) fn scalar_i64(value: Option<Value>) -> i64 {
    value.and_then(|v| v.as_i64()).unwrap_or(0)
}

/// Double-quote a column name for SQL.
pub(crate) fn quoted(column: &str) -> String {
    format!("\"{}\"", column.replace('"', "\"\""))
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Group an integer string in thousands: `1234567` -> `1,234,567`.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Thousands-separated count.
pub fn count(n: i64) -> String {
    let grouped = group_digits(&n.unsigned_abs().to_string());
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Currency with two decimals and thousands separators, e.g. `$-1,234.50`.
pub fn money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("${}{}.{}", sign, group_digits(whole), cents)
}
