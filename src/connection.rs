//! DuckDB over the written CSV files.
//!
//! Each dataset is exposed as a view named after its key in
//! [`config::output_files`], created the first time a report asks for it.
//! Rows come back as `HashMap<String, serde_json::Value>` so callers can pick
//! columns by name.

use chrono::{DateTime, Duration, NaiveDate};
use duckdb::types::{TimeUnit, ValueRef};
use duckdb::{Connection as DuckDbConnection, Row, ToSql};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config;
use crate::error::{FixtureError, Result};

pub type JsonRow = HashMap<String, Value>;

/// In-memory database plus the set of CSV views registered on it.
pub struct Connection {
    db: DuckDbConnection,
    /// Root the dataset paths are resolved against.
    pub output_dir: PathBuf,
    views: RefCell<BTreeSet<String>>,
}

impl Connection {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            db: DuckDbConnection::open_in_memory()?,
            output_dir: output_dir.into(),
            views: RefCell::new(BTreeSet::new()),
        })
    }

    /// Register every named dataset that is not a view yet.
    ///
    /// A dataset whose file has not been written is `NotFound`.
    pub fn ensure_views(&self, names: &[&str]) -> Result<()> {
        for name in names.iter().filter(|n| !self.has_view(n)) {
            let path = self.output_dir.join(config::output_file(name)?);
            if !path.is_file() {
                return Err(FixtureError::NotFound(format!(
                    "Dataset '{}' has not been generated ({})",
                    name,
                    path.display()
                )));
            }
            self.register_csv(name, &path)?;
        }
        Ok(())
    }

    /// Create or replace view `name` over a headed CSV file.
    pub fn register_csv(&self, name: &str, path: &Path) -> Result<()> {
        // DuckDB wants forward slashes; single quotes are doubled for the literal.
        let literal = path
            .to_string_lossy()
            .replace('\\', "/")
            .replace('\'', "''");
        let ddl = format!(
            "CREATE OR REPLACE VIEW \"{}\" AS SELECT * FROM read_csv_auto('{}', header = true)",
            name.replace('"', "\"\""),
            literal
        );
        self.db.execute_batch(&ddl)?;
        self.views.borrow_mut().insert(name.to_string());
        debug!(view = name, path = %literal, "Registered CSV view");
        Ok(())
    }

    /// Run `sql` and hand each row to `visit` until it returns `false`.
    fn for_each_row<F>(&self, sql: &str, params: &[String], mut visit: F) -> Result<()>
    where
        F: FnMut(&Row<'_>, &[String]) -> Result<bool>,
    {
        let bound: Vec<&dyn ToSql> = params.iter().map(|p| p as &dyn ToSql).collect();
        let mut stmt = self.db.prepare(sql)?;
        let mut rows = stmt.query(bound.as_slice())?;
        // Column names are known only after execution.
        let columns: Vec<String> = rows
            .as_ref()
            .map(|s| s.column_names())
            .unwrap_or_default();
        while let Some(row) = rows.next()? {
            if !visit(row, &columns)? {
                break;
            }
        }
        Ok(())
    }

    /// Run `sql` with `?` parameters; one map per result row.
    pub fn execute(&self, sql: &str, params: &[String]) -> Result<Vec<JsonRow>> {
        let mut out = Vec::new();
        self.for_each_row(sql, params, |row, columns| {
            let mut map = JsonRow::with_capacity(columns.len());
            for (i, column) in columns.iter().enumerate() {
                map.insert(column.clone(), to_json(row.get_ref(i)?));
            }
            out.push(map);
            Ok(true)
        })?;
        Ok(out)
    }

    /// Run `sql` and deserialize each row into `T` by column name.
    pub fn execute_into<T: DeserializeOwned>(&self, sql: &str, params: &[String]) -> Result<Vec<T>> {
        self.execute(sql, params)?
            .into_iter()
            .map(|row| -> Result<T> {
                Ok(serde_json::from_value(Value::Object(row.into_iter().collect()))?)
            })
            .collect()
    }

    /// First column of the first row, `None` for an empty result.
    pub fn execute_scalar(&self, sql: &str, params: &[String]) -> Result<Option<Value>> {
        let mut first = None;
        self.for_each_row(sql, params, |row, _| {
            first = Some(to_json(row.get_ref(0)?));
            Ok(false)
        })?;
        Ok(first)
    }

    pub fn has_view(&self, name: &str) -> bool {
        self.views.borrow().contains(name)
    }

    /// Registered view names, sorted.
    pub fn views(&self) -> Vec<String> {
        self.views.borrow().iter().cloned().collect()
    }

    /// Forget registered views so the next report re-reads the files.
    pub fn reset_views(&self) {
        self.views.borrow_mut().clear();
    }

    /// The underlying DuckDB connection.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.db
    }
}

fn micros(unit: TimeUnit, value: i64) -> i64 {
    match unit {
        TimeUnit::Second => value.saturating_mul(1_000_000),
        TimeUnit::Millisecond => value.saturating_mul(1_000),
        TimeUnit::Microsecond => value,
        TimeUnit::Nanosecond => value / 1_000,
    }
}

/// JSON rendering of a DuckDB value. Dates and timestamps become ISO
/// strings; types with no JSON counterpart become `null`.
fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Boolean(b) => Value::Bool(b),
        ValueRef::TinyInt(n) => n.into(),
        ValueRef::SmallInt(n) => n.into(),
        ValueRef::Int(n) => n.into(),
        ValueRef::BigInt(n) => n.into(),
        ValueRef::UTinyInt(n) => n.into(),
        ValueRef::USmallInt(n) => n.into(),
        ValueRef::UInt(n) => n.into(),
        ValueRef::UBigInt(n) => n.into(),
        // SUM over integers widens to HUGEINT.
        ValueRef::HugeInt(n) => i64::try_from(n)
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(n.to_string())),
        ValueRef::Float(f) => Value::from(f as f64),
        ValueRef::Double(f) => Value::from(f),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Date32(days) => NaiveDate::from_ymd_opt(1970, 1, 1)
            .and_then(|epoch| epoch.checked_add_signed(Duration::days(days as i64)))
            .map(|d| Value::String(d.to_string()))
            .unwrap_or(Value::Null),
        ValueRef::Timestamp(unit, value) => DateTime::from_timestamp_micros(micros(unit, value))
            .map(|dt| Value::String(dt.naive_utc().to_string()))
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
