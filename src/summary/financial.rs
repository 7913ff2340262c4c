//! Totals over the monthly financial files.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::{count, group_totals, money, quoted, scalar_f64, scalar_i64, GroupTotal};
use crate::connection::Connection;
use crate::error::{FixtureError, Result};
use crate::sql_builder::SqlBuilder;

/// One of the monthly financial files, with the columns its report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinancialDataset {
    Expenses,
    ChannelRevenues,
    IncomeStatement,
    BalanceSheet,
    CashFlow,
}

impl FinancialDataset {
    pub const ALL: [FinancialDataset; 5] = [
        FinancialDataset::Expenses,
        FinancialDataset::ChannelRevenues,
        FinancialDataset::IncomeStatement,
        FinancialDataset::BalanceSheet,
        FinancialDataset::CashFlow,
    ];

    /// View name, which is also the output file key.
    pub fn view(&self) -> &'static str {
        match self {
            FinancialDataset::Expenses => "expenses",
            FinancialDataset::ChannelRevenues => "channel_revenues",
            FinancialDataset::IncomeStatement => "income_statement",
            FinancialDataset::BalanceSheet => "balance_sheet",
            FinancialDataset::CashFlow => "cash_flow",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FinancialDataset::Expenses => "Company expenses",
            FinancialDataset::ChannelRevenues => "Channel revenues",
            FinancialDataset::IncomeStatement => "Income statement",
            FinancialDataset::BalanceSheet => "Balance sheet",
            FinancialDataset::CashFlow => "Cash flow",
        }
    }

    pub fn group_column(&self) -> &'static str {
        match self {
            FinancialDataset::Expenses | FinancialDataset::IncomeStatement => "Expense Category",
            FinancialDataset::ChannelRevenues => "Channel",
            FinancialDataset::BalanceSheet => "Balance Sheet Type",
            FinancialDataset::CashFlow => "Cash Flow Type",
        }
    }

    pub fn value_column(&self) -> &'static str {
        match self {
            FinancialDataset::Expenses | FinancialDataset::IncomeStatement => "Expense Values",
            FinancialDataset::ChannelRevenues => "Sales Values",
            FinancialDataset::BalanceSheet => "Balance Sheet Values",
            FinancialDataset::CashFlow => "Cash Flow Values",
        }
    }

    pub fn period_column(&self) -> &'static str {
        match self {
            FinancialDataset::ChannelRevenues => "First Date",
            _ => "Month",
        }
    }
}

impl FromStr for FinancialDataset {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self> {
        FinancialDataset::ALL
            .into_iter()
            .find(|d| d.view() == s)
            .ok_or_else(|| FixtureError::InvalidArgument(format!("Unknown financial dataset '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// FinancialQuery
// ---------------------------------------------------------------------------

/// Query interface for the financial files.
pub struct FinancialQuery<'a> {
    conn: &'a Connection,
}

impl<'a> FinancialQuery<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn count(&self, dataset: FinancialDataset) -> Result<i64> {
        self.conn.ensure_views(&[dataset.view()])?;
        let (sql, params) = SqlBuilder::new(dataset.view()).select(&["COUNT(*)"]).build();
        Ok(scalar_i64(self.conn.execute_scalar(&sql, &params)?))
    }

    /// Sum of the value column over the whole file.
    pub fn total(&self, dataset: FinancialDataset) -> Result<f64> {
        self.conn.ensure_views(&[dataset.view()])?;
        let total = format!(
            "CAST(COALESCE(SUM({}), 0) AS DOUBLE)",
            quoted(dataset.value_column())
        );
        let (sql, params) = SqlBuilder::new(dataset.view()).select(&[total.as_str()]).build();
        Ok(scalar_f64(self.conn.execute_scalar(&sql, &params)?))
    }

    /// Row count and summed value per group, optionally for one period
    /// (`YYYY-MM-DD`).
    pub fn totals(&self, dataset: FinancialDataset, period: Option<&str>) -> Result<Vec<GroupTotal>> {
        self.conn.ensure_views(&[dataset.view()])?;
        let group = quoted(dataset.group_column());
        let key = format!("CAST({} AS VARCHAR) AS key", group);
        let total = format!("CAST(SUM({}) AS DOUBLE) AS total", quoted(dataset.value_column()));
        let mut q = SqlBuilder::new(dataset.view());
        q.select(&[key.as_str(), "COUNT(*) AS n", total.as_str()])
            .group_by(&[group.as_str()])
            .order_by(&["key ASC"]);
        if let Some(period) = period {
            let column = format!("CAST({} AS VARCHAR)", quoted(dataset.period_column()));
            q.where_eq(&column, period);
        }
        let (sql, params) = q.build();
        Ok(group_totals(&self.conn.execute(&sql, &params)?))
    }

    /// Most recent period in the file, as `YYYY-MM-DD`.
    pub fn latest_period(&self, dataset: FinancialDataset) -> Result<Option<String>> {
        self.conn.ensure_views(&[dataset.view()])?;
        let latest = format!("CAST(MAX({}) AS VARCHAR)", quoted(dataset.period_column()));
        let (sql, params) = SqlBuilder::new(dataset.view()).select(&[latest.as_str()]).build();
        Ok(match self.conn.execute_scalar(&sql, &params)? {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
    }

    pub fn summary(&self, dataset: FinancialDataset) -> Result<FinancialSummary> {
        let latest_period = self.latest_period(dataset)?;
        let latest_totals = match &latest_period {
            Some(period) => self.totals(dataset, Some(period))?,
            None => Vec::new(),
        };
        Ok(FinancialSummary {
            dataset,
            records: self.count(dataset)?,
            total: self.total(dataset)?,
            totals: self.totals(dataset, None)?,
            latest_period,
            latest_totals,
        })
    }
}

// ---------------------------------------------------------------------------
// FinancialSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialSummary {
    pub dataset: FinancialDataset,
    pub records: i64,
    pub total: f64,
    pub totals: Vec<GroupTotal>,
    pub latest_period: Option<String>,
    pub latest_totals: Vec<GroupTotal>,
}

impl fmt::Display for FinancialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dataset.title())?;
        writeln!(f, "  Total records:           {}", count(self.records))?;
        writeln!(f, "  Total value:             {}", money(self.total))?;
        writeln!(f, "\nBy {}:", self.dataset.group_column())?;
        for row in &self.totals {
            writeln!(f, "  {}", row)?;
        }
        if let Some(period) = &self.latest_period {
            writeln!(f, "\nPeriod {}:", period)?;
            for row in &self.latest_totals {
                writeln!(f, "  {}", row)?;
            }
        }
        Ok(())
    }
}
