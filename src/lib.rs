//! Synthetic data for a four-location café chain.
//!
//! Generates POS transactions, a staff roster with its employee master
//! list, monthly financial series (expenses, channel revenues, income
//! statement, balance sheet, cash flow) and three statement template
//! workbooks. Outputs are CSV files (and XLSX for the templates) below an
//! output directory; written files can be read back through DuckDB for
//! summary reports.
//!
//! # Quick start
//!
//! ```no_run
//! use cafe_fixtures::{CafeFixtures, Dataset};
//!
//! let fixtures = CafeFixtures::builder().output_dir("data").build().unwrap();
//!
//! // Write every dataset
//! let report = fixtures.generate(&Dataset::ALL);
//! assert!(report.is_success());
//!
//! // Summarise what was written
//! println!("{}", fixtures.pos().summary().unwrap());
//! ```

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod connection;
pub mod error;
pub mod generators;
pub mod models;
pub mod orchestrator;
pub mod output;
pub mod sampling;
pub mod sql_builder;
pub mod summary;

pub use calendar::DateBound;
pub use connection::Connection;
pub use error::{FixtureError, Result};
pub use orchestrator::{Dataset, RunPlan, RunReport};
pub use sql_builder::SqlBuilder;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::Rng;

// ---------------------------------------------------------------------------
// CafeFixturesBuilder
// ---------------------------------------------------------------------------

/// Builder for a [`CafeFixtures`] run configuration.
///
/// Defaults: output below `data`, dates from 2025-10-01 to 2026-01-23.
pub struct CafeFixturesBuilder {
    output_dir: PathBuf,
    start: DateBound,
    end: DateBound,
}

impl Default for CafeFixturesBuilder {
    fn default() -> Self {
        Self {
            output_dir: config::default_output_dir(),
            start: DateBound::Fixed(config::default_start_date()),
            end: DateBound::Fixed(config::default_end_date()),
        }
    }
}

impl CafeFixturesBuilder {
    /// Directory all datasets are written below.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }

    /// First calendar day of the run (inclusive).
    pub fn start(mut self, start: impl Into<DateBound>) -> Self {
        self.start = start.into();
        self
    }

    /// Last calendar day of the run (inclusive). [`DateBound::Today`] is
    /// resolved when [`build`](Self::build) is called.
    pub fn end(mut self, end: impl Into<DateBound>) -> Self {
        self.end = end.into();
        self
    }

    /// Resolve the date bounds and open the summary connection.
    pub fn build(self) -> Result<CafeFixtures> {
        let plan = RunPlan::new(self.output_dir, self.start.resolve(), self.end.resolve());
        let conn = Connection::new(plan.output_dir.clone())?;
        Ok(CafeFixtures { plan, conn })
    }
}

// ---------------------------------------------------------------------------
// CafeFixtures
// ---------------------------------------------------------------------------

/// Entry point: a resolved run configuration plus a DuckDB connection over
/// the output directory.
///
/// Created via [`CafeFixtures::builder()`].
pub struct CafeFixtures {
    plan: RunPlan,
    conn: Connection,
}

impl CafeFixtures {
    pub fn builder() -> CafeFixturesBuilder {
        CafeFixturesBuilder::default()
    }

    pub fn plan(&self) -> &RunPlan {
        &self.plan
    }

    pub fn output_dir(&self) -> &Path {
        &self.plan.output_dir
    }

    pub fn start(&self) -> NaiveDate {
        self.plan.start
    }

    pub fn end(&self) -> NaiveDate {
        self.plan.end
    }

    /// Weekdays between start and end, inclusive.
    pub fn operating_days(&self) -> Vec<NaiveDate> {
        self.plan.days()
    }

    /// Month-end dates of the run.
    pub fn month_ends(&self) -> Vec<NaiveDate> {
        self.plan.months()
    }

    // -- Generation ---------------------------------------------------------

    /// Generate and write `datasets` using the thread-local RNG.
    ///
    /// Registered views are dropped so later summaries see the new files.
    pub fn generate(&self, datasets: &[Dataset]) -> RunReport {
        let report = self.plan.run(datasets);
        self.conn.reset_views();
        report
    }

    /// [`generate`](Self::generate) drawing from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, datasets: &[Dataset], rng: &mut R) -> RunReport {
        let report = self.plan.run_with(datasets, rng);
        self.conn.reset_views();
        report
    }

    // -- Summaries ----------------------------------------------------------

    /// POS report over `pos/pos_transactions.csv`.
    pub fn pos(&self) -> summary::PosQuery<'_> {
        summary::PosQuery::new(&self.conn)
    }

    /// Roster report over `roster/roster_0.csv`.
    pub fn roster(&self) -> summary::RosterQuery<'_> {
        summary::RosterQuery::new(&self.conn)
    }

    /// Totals over the monthly financial files.
    pub fn financial(&self) -> summary::FinancialQuery<'_> {
        summary::FinancialQuery::new(&self.conn)
    }

    /// Names of the registered DuckDB views.
    pub fn views(&self) -> Vec<String> {
        self.conn.views()
    }

    /// Run raw SQL with `?` placeholders. Views must be registered first,
    /// e.g. through [`Connection::ensure_views`].
    pub fn sql(
        &self,
        query: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        self.conn.execute(query, params)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl fmt::Display for CafeFixtures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CafeFixtures(output_dir={}, start={}, end={}, views=[{}])",
            self.plan.output_dir.display(),
            self.plan.start,
            self.plan.end,
            self.conn.views().join(", ")
        )
    }
}
