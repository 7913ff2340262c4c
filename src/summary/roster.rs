//! Roster report over the `roster` view.

use std::fmt;

use super::{as_f64, as_string, count, group_totals, money, scalar_f64, scalar_i64, GroupTotal};
use crate::connection::Connection;
use crate::error::Result;
use crate::sql_builder::SqlBuilder;

const VIEW: &str = "roster";

// The sniffer may or may not detect the `YYYY-MM-DD HH:MM` columns as
// timestamps; both renderings are accepted.
const START: &str = "strptime(CAST(start_time AS VARCHAR), ['%Y-%m-%d %H:%M:%S', '%Y-%m-%d %H:%M'])";
const END: &str = "strptime(CAST(end_time AS VARCHAR), ['%Y-%m-%d %H:%M:%S', '%Y-%m-%d %H:%M'])";

/// Hours worked minus the unpaid break.
fn paid_hours() -> String {
    format!(
        "(date_diff('minute', {}, {}) - break_duration) / 60.0",
        START, END
    )
}

fn shift_cost() -> String {
    format!("{} * pay_rate", paid_hours())
}

// ---------------------------------------------------------------------------
// RosterQuery
// ---------------------------------------------------------------------------

/// Query interface for the roster file.
pub struct RosterQuery<'a> {
    conn: &'a Connection,
}

impl<'a> RosterQuery<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn ensure(&self) -> Result<()> {
        self.conn.ensure_views(&[VIEW])
    }

    pub fn count_shifts(&self) -> Result<i64> {
        self.ensure()?;
        let (sql, params) = SqlBuilder::new(VIEW).select(&["COUNT(*)"]).build();
        Ok(scalar_i64(self.conn.execute_scalar(&sql, &params)?))
    }

    fn shifts_by(&self, column: &str) -> Result<Vec<GroupTotal>> {
        self.ensure()?;
        let key = format!("CAST({} AS VARCHAR) AS key", column);
        let total = format!("CAST(SUM({}) AS DOUBLE) AS total", shift_cost());
        let (sql, params) = SqlBuilder::new(VIEW)
            .select(&[key.as_str(), "COUNT(*) AS n", total.as_str()])
            .group_by(&[column])
            .order_by(&["n DESC", "key ASC"])
            .build();
        Ok(group_totals(&self.conn.execute(&sql, &params)?))
    }

    /// Shift count and labour cost per role.
    pub fn shifts_by_role(&self) -> Result<Vec<GroupTotal>> {
        self.shifts_by("role")
    }

    /// Shift count and labour cost per location.
    pub fn shifts_by_location(&self) -> Result<Vec<GroupTotal>> {
        self.shifts_by("area_department")
    }

    /// Shift count per published flag. Totals carry labour cost.
    pub fn published_split(&self) -> Result<Vec<GroupTotal>> {
        self.shifts_by("published")
    }

    /// Minimum, mean and maximum shifts per rostered employee.
    pub fn shifts_per_employee(&self) -> Result<(i64, f64, i64)> {
        self.ensure()?;
        let per_employee = format!(
            "(SELECT employee_id, COUNT(*) AS n FROM {} GROUP BY employee_id)",
            VIEW
        );
        let (sql, params) = SqlBuilder::new(&per_employee)
            .select(&[
                "CAST(COALESCE(MIN(n), 0) AS DOUBLE) AS lo",
                "CAST(COALESCE(AVG(n), 0) AS DOUBLE) AS mean",
                "CAST(COALESCE(MAX(n), 0) AS DOUBLE) AS hi",
            ])
            .build();
        let rows = self.conn.execute(&sql, &params)?;
        Ok(rows
            .first()
            .map(|row| {
                (
                    as_f64(row, "lo") as i64,
                    as_f64(row, "mean"),
                    as_f64(row, "hi") as i64,
                )
            })
            .unwrap_or((0, 0.0, 0)))
    }

    /// Sum over shifts of paid hours times pay rate.
    pub fn labour_cost(&self) -> Result<f64> {
        self.ensure()?;
        let total = format!("CAST(COALESCE(SUM({}), 0) AS DOUBLE)", shift_cost());
        let (sql, params) = SqlBuilder::new(VIEW).select(&[total.as_str()]).build();
        Ok(scalar_f64(self.conn.execute_scalar(&sql, &params)?))
    }

    /// Mean labour cost of a staffed day, per location.
    pub fn average_daily_cost(&self) -> Result<Vec<(String, f64)>> {
        self.ensure()?;
        let daily = format!(
            "(SELECT area_department, CAST({} AS DATE) AS day, SUM({}) AS cost FROM {} GROUP BY ALL)",
            START,
            shift_cost(),
            VIEW
        );
        let (sql, params) = SqlBuilder::new(&daily)
            .select(&[
                "CAST(area_department AS VARCHAR) AS location",
                "CAST(AVG(cost) AS DOUBLE) AS cost",
            ])
            .group_by(&["area_department"])
            .order_by(&["location"])
            .build();
        let rows = self.conn.execute(&sql, &params)?;
        Ok(rows
            .iter()
            .map(|row| (as_string(row, "location"), as_f64(row, "cost")))
            .collect())
    }

    pub fn summary(&self) -> Result<RosterSummary> {
        let (min_per_employee, mean_per_employee, max_per_employee) = self.shifts_per_employee()?;
        Ok(RosterSummary {
            shifts: self.count_shifts()?,
            by_role: self.shifts_by_role()?,
            by_location: self.shifts_by_location()?,
            min_per_employee,
            mean_per_employee,
            max_per_employee,
            labour_cost: self.labour_cost()?,
            average_daily_cost: self.average_daily_cost()?,
            published: self.published_split()?,
        })
    }
}

// ---------------------------------------------------------------------------
// RosterSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RosterSummary {
    pub shifts: i64,
    pub by_role: Vec<GroupTotal>,
    pub by_location: Vec<GroupTotal>,
    pub min_per_employee: i64,
    pub mean_per_employee: f64,
    pub max_per_employee: i64,
    pub labour_cost: f64,
    pub average_daily_cost: Vec<(String, f64)>,
    pub published: Vec<GroupTotal>,
}

impl RosterSummary {
    fn share(&self, n: i64) -> f64 {
        if self.shifts == 0 {
            0.0
        } else {
            n as f64 * 100.0 / self.shifts as f64
        }
    }

    fn counts(&self, f: &mut fmt::Formatter<'_>, title: &str, rows: &[GroupTotal]) -> fmt::Result {
        writeln!(f, "\n{}:", title)?;
        for row in rows {
            writeln!(f, "  {}: {} ({:.1}%)", row.key, count(row.count), self.share(row.count))?;
        }
        Ok(())
    }
}

impl fmt::Display for RosterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Roster")?;
        writeln!(f, "  Shifts:                  {}", count(self.shifts))?;
        writeln!(
            f,
            "  Shifts per employee:     min {}, avg {:.1}, max {}",
            self.min_per_employee, self.mean_per_employee, self.max_per_employee
        )?;
        writeln!(f, "  Labour cost:             {}", money(self.labour_cost))?;
        self.counts(f, "By role", &self.by_role)?;
        self.counts(f, "By location", &self.by_location)?;
        writeln!(f, "\nAverage daily staffing cost:")?;
        for (location, cost) in &self.average_daily_cost {
            writeln!(f, "  {}: {}", location, money(*cost))?;
        }
        self.counts(f, "Published", &self.published)
    }
}
