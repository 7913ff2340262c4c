//! POS transaction report over the `pos` view.

use std::fmt;

use chrono::NaiveDate;

use super::{as_f64, as_string, count, group_totals, money, scalar_f64, scalar_i64, GroupTotal};
use crate::config::PERIOD_FORMAT;
use crate::connection::Connection;
use crate::error::Result;
use crate::sql_builder::SqlBuilder;

const VIEW: &str = "pos";
const TIMESTAMP: &str = "CAST(transaction_datetime AS TIMESTAMP)";
const DAY: &str = "strftime(CAST(transaction_datetime AS TIMESTAMP), '%Y-%m-%d')";
const TOP_EMPLOYEES: usize = 10;

/// Column a POS breakdown is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosDimension {
    Category,
    Item,
    Location,
    PaymentMethod,
    Employee,
}

impl PosDimension {
    fn column(&self) -> &'static str {
        match self {
            PosDimension::Category => "category_name",
            PosDimension::Item => "item_name",
            PosDimension::Location => "location_id",
            PosDimension::PaymentMethod => "payment_method",
            PosDimension::Employee => "employee_id",
        }
    }
}

// ---------------------------------------------------------------------------
// PosQuery
// ---------------------------------------------------------------------------

/// Query interface for the POS transactions file.
pub struct PosQuery<'a> {
    conn: &'a Connection,
}

impl<'a> PosQuery<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn ensure(&self) -> Result<()> {
        self.conn.ensure_views(&[VIEW])
    }

    /// Distinct transactions.
    pub fn count_transactions(&self) -> Result<i64> {
        self.ensure()?;
        let (sql, params) = SqlBuilder::new(VIEW)
            .select(&["COUNT(DISTINCT transaction_id)"])
            .build();
        Ok(scalar_i64(self.conn.execute_scalar(&sql, &params)?))
    }

    pub fn count_line_items(&self) -> Result<i64> {
        self.ensure()?;
        let (sql, params) = SqlBuilder::new(VIEW).select(&["COUNT(*)"]).build();
        Ok(scalar_i64(self.conn.execute_scalar(&sql, &params)?))
    }

    /// Sum of line totals.
    pub fn total_revenue(&self) -> Result<f64> {
        self.ensure()?;
        let (sql, params) = SqlBuilder::new(VIEW)
            .select(&["CAST(COALESCE(SUM(line_total), 0) AS DOUBLE)"])
            .build();
        Ok(scalar_f64(self.conn.execute_scalar(&sql, &params)?))
    }

    /// Line count and revenue per value of `dimension`, largest count first.
    pub fn breakdown(&self, dimension: PosDimension, limit: Option<usize>) -> Result<Vec<GroupTotal>> {
        self.ensure()?;
        let column = dimension.column();
        let key = format!("CAST({} AS VARCHAR) AS key", column);
        let mut q = SqlBuilder::new(VIEW);
        q.select(&[
            key.as_str(),
            "COUNT(*) AS n",
            "CAST(SUM(line_total) AS DOUBLE) AS total",
        ])
        .group_by(&[column])
        .order_by(&["n DESC", "key ASC"]);
        if let Some(n) = limit {
            q.limit(n);
        }
        let (sql, params) = q.build();
        Ok(group_totals(&self.conn.execute(&sql, &params)?))
    }

    /// Location ids present in the file, sorted.
    pub fn locations(&self) -> Result<Vec<String>> {
        self.ensure()?;
        let (sql, params) = SqlBuilder::new(VIEW)
            .select(&["location_id"])
            .distinct()
            .order_by(&["location_id"])
            .build();
        let rows = self.conn.execute(&sql, &params)?;
        Ok(rows.iter().map(|row| as_string(row, "location_id")).collect())
    }

    /// Revenue taken at a single location.
    pub fn location_revenue(&self, location_id: &str) -> Result<f64> {
        self.ensure()?;
        let (sql, params) = SqlBuilder::new(VIEW)
            .select(&["CAST(COALESCE(SUM(line_total), 0) AS DOUBLE)"])
            .where_eq("location_id", location_id)
            .build();
        Ok(scalar_f64(self.conn.execute_scalar(&sql, &params)?))
    }

    /// Revenue per business day between `from` and `to`, inclusive.
    pub fn daily_revenue(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<(String, f64)>> {
        self.ensure()?;
        let day = format!("{} AS day", DAY);
        let from = from.format(PERIOD_FORMAT).to_string();
        let to = to.format(PERIOD_FORMAT).to_string();
        let (sql, params) = SqlBuilder::new(VIEW)
            .select(&[day.as_str(), "CAST(SUM(line_total) AS DOUBLE) AS total"])
            .where_between(DAY, &from, &to)
            .group_by(&[DAY])
            .order_by(&["day"])
            .build();
        let rows = self.conn.execute(&sql, &params)?;
        Ok(rows
            .iter()
            .map(|row| (as_string(row, "day"), as_f64(row, "total")))
            .collect())
    }

    /// First and last transaction timestamps, or `None` for an empty file.
    pub fn date_range(&self) -> Result<Option<(String, String)>> {
        self.ensure()?;
        let first = format!("CAST(MIN({}) AS VARCHAR) AS first", TIMESTAMP);
        let last = format!("CAST(MAX({}) AS VARCHAR) AS last", TIMESTAMP);
        let (sql, params) = SqlBuilder::new(VIEW)
            .select(&[first.as_str(), last.as_str()])
            .build();
        let rows = self.conn.execute(&sql, &params)?;
        Ok(rows.first().and_then(|row| {
            let (first, last) = (as_string(row, "first"), as_string(row, "last"));
            if first.is_empty() {
                None
            } else {
                Some((first, last))
            }
        }))
    }

    /// Gather every POS statistic into one report.
    pub fn summary(&self) -> Result<PosSummary> {
        let transactions = self.count_transactions()?;
        let revenue = self.total_revenue()?;
        Ok(PosSummary {
            transactions,
            line_items: self.count_line_items()?,
            revenue,
            average_transaction: if transactions > 0 {
                revenue / transactions as f64
            } else {
                0.0
            },
            by_category: self.breakdown(PosDimension::Category, None)?,
            by_item: self.breakdown(PosDimension::Item, None)?,
            by_location: self.breakdown(PosDimension::Location, None)?,
            by_payment_method: self.breakdown(PosDimension::PaymentMethod, None)?,
            top_employees: self.breakdown(PosDimension::Employee, Some(TOP_EMPLOYEES))?,
            date_range: self.date_range()?,
        })
    }
}

// ---------------------------------------------------------------------------
// PosSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PosSummary {
    pub transactions: i64,
    pub line_items: i64,
    pub revenue: f64,
    pub average_transaction: f64,
    pub by_category: Vec<GroupTotal>,
    pub by_item: Vec<GroupTotal>,
    pub by_location: Vec<GroupTotal>,
    pub by_payment_method: Vec<GroupTotal>,
    pub top_employees: Vec<GroupTotal>,
    pub date_range: Option<(String, String)>,
}

fn section(f: &mut fmt::Formatter<'_>, title: &str, rows: &[GroupTotal]) -> fmt::Result {
    writeln!(f, "\n{}:", title)?;
    for row in rows {
        writeln!(f, "  {}", row)?;
    }
    Ok(())
}

impl fmt::Display for PosSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "POS transactions")?;
        writeln!(f, "  Transactions:            {}", count(self.transactions))?;
        writeln!(f, "  Line items:              {}", count(self.line_items))?;
        writeln!(f, "  Revenue:                 {}", money(self.revenue))?;
        writeln!(f, "  Average transaction:     {}", money(self.average_transaction))?;
        if let Some((first, last)) = &self.date_range {
            writeln!(f, "  Date range:              {} to {}", first, last)?;
        }
        section(f, "By category", &self.by_category)?;
        section(f, "By item", &self.by_item)?;
        section(f, "By location", &self.by_location)?;
        section(f, "By payment method", &self.by_payment_method)?;
        section(f, "Top employees", &self.top_employees)
    }
}
