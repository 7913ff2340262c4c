//! Runs a batch of dataset generators and writes their outputs.
//!
//! Each dataset is generated and written independently. A failure is logged
//! and recorded in the [`RunReport`]; the remaining datasets still run.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use rand::prelude::*;
use tracing::{error, info, warn};

use crate::calendar::{month_ends, operating_days};
use crate::catalog::finance::CHANNELS;
use crate::catalog::templates::TEMPLATES;
use crate::error::{FixtureError, Result};
use crate::generators::{balance_sheet, cash_flow, channel_revenue, expenses, income_statement, pos, roster};
use crate::models::ChannelRevenueRow;
use crate::output::{dataset_path, read_csv, write_csv, write_template};

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// A unit of generation. `Roster` also writes the employee master list and
/// `Templates` writes all three workbooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Pos,
    Roster,
    Expenses,
    ChannelRevenues,
    IncomeStatement,
    BalanceSheet,
    CashFlow,
    Templates,
}

impl Dataset {
    pub const ALL: [Dataset; 8] = [
        Dataset::Pos,
        Dataset::Roster,
        Dataset::Expenses,
        Dataset::ChannelRevenues,
        Dataset::IncomeStatement,
        Dataset::BalanceSheet,
        Dataset::CashFlow,
        Dataset::Templates,
    ];

    /// Monthly financial series, in dependency order.
    pub const FINANCIAL: [Dataset; 5] = [
        Dataset::Expenses,
        Dataset::ChannelRevenues,
        Dataset::IncomeStatement,
        Dataset::BalanceSheet,
        Dataset::CashFlow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Pos => "pos",
            Dataset::Roster => "roster",
            Dataset::Expenses => "expenses",
            Dataset::ChannelRevenues => "channel_revenues",
            Dataset::IncomeStatement => "income_statement",
            Dataset::BalanceSheet => "balance_sheet",
            Dataset::CashFlow => "cash_flow",
            Dataset::Templates => "templates",
        }
    }

    /// Resolve a selection: `all`, `financial` or a single dataset name.
    pub fn select(selection: &str) -> Result<Vec<Dataset>> {
        match selection {
            "all" => Ok(Dataset::ALL.to_vec()),
            "financial" => Ok(Dataset::FINANCIAL.to_vec()),
            other => Ok(vec![other.parse()?]),
        }
    }
}

impl FromStr for Dataset {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self> {
        Dataset::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| FixtureError::InvalidArgument(format!("Unknown dataset '{}'", s)))
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// RunReport
// ---------------------------------------------------------------------------

/// Outcome of a batch: rows written per successful dataset and the error
/// message of each failed one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub succeeded: Vec<(Dataset, usize)>,
    pub failed: Vec<(Dataset, String)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dataset, rows) in &self.succeeded {
            writeln!(f, "  ok      {:<18} {} rows", dataset.name(), rows)?;
        }
        for (dataset, message) in &self.failed {
            writeln!(f, "  FAILED  {:<18} {}", dataset.name(), message)?;
        }
        write!(
            f,
            "{} succeeded, {} failed",
            self.succeeded.len(),
            self.failed.len()
        )
    }
}

// ---------------------------------------------------------------------------
// RunPlan
// ---------------------------------------------------------------------------

/// Date range and destination of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub output_dir: PathBuf,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RunPlan {
    pub fn new(output_dir: impl Into<PathBuf>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            output_dir: output_dir.into(),
            start,
            end,
        }
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        operating_days(self.start, self.end)
    }

    pub fn months(&self) -> Vec<NaiveDate> {
        month_ends(self.start, self.end)
    }

    fn path(&self, name: &str) -> Result<PathBuf> {
        dataset_path(&self.output_dir, name)
    }

    /// Generate and write `datasets` in order using the thread-local RNG.
    pub fn run(&self, datasets: &[Dataset]) -> RunReport {
        self.run_with(datasets, &mut thread_rng())
    }

    /// Generate and write `datasets` in order. Failures are logged and
    /// recorded; they never stop the batch.
    pub fn run_with<R: Rng + ?Sized>(&self, datasets: &[Dataset], rng: &mut R) -> RunReport {
        if self.start > self.end {
            warn!(start = %self.start, end = %self.end, "Start date is after end date; outputs will be empty");
        }
        let mut run = Run {
            plan: self,
            channels: None,
        };
        let mut report = RunReport::default();
        for dataset in datasets {
            match run.generate(*dataset, rng) {
                Ok(rows) => {
                    info!(dataset = dataset.name(), rows, "Dataset written");
                    report.succeeded.push((*dataset, rows));
                }
                Err(e) => {
                    error!(dataset = dataset.name(), error = %e, "Dataset failed");
                    report.failed.push((*dataset, e.to_string()));
                }
            }
        }
        report
    }
}

/// State shared between datasets of one batch.
struct Run<'a> {
    plan: &'a RunPlan,
    /// Channel revenues written earlier in this batch.
    channels: Option<Vec<ChannelRevenueRow>>,
}

impl Run<'_> {
    fn generate<R: Rng + ?Sized>(&mut self, dataset: Dataset, rng: &mut R) -> Result<usize> {
        let plan = self.plan;
        match dataset {
            Dataset::Pos => {
                let rows = pos::generate_with(&plan.days(), rng)?;
                write_csv(&plan.path("pos")?, &rows)
            }
            Dataset::Roster => {
                let roster = roster::generate_with(&plan.days(), rng)?;
                write_csv(&plan.path("employees")?, &roster.employees)?;
                write_csv(&plan.path("roster")?, &roster.shifts)
            }
            Dataset::Expenses => {
                let rows = expenses::generate_with(&plan.months(), rng);
                write_csv(&plan.path("expenses")?, &rows)
            }
            Dataset::ChannelRevenues => {
                let rows = channel_revenue::generate_with(&plan.months(), rng)?;
                let written = write_csv(&plan.path("channel_revenues")?, &rows)?;
                self.channels = Some(rows);
                Ok(written)
            }
            Dataset::IncomeStatement => {
                let months = plan.months();
                let channels = self.channels_for(&months, rng)?;
                let rows = income_statement::generate_with(&months, &channels, rng)?;
                write_csv(&plan.path("income_statement")?, &rows)
            }
            Dataset::BalanceSheet => {
                let rows = balance_sheet::generate_with(&plan.months(), rng);
                write_csv(&plan.path("balance_sheet")?, &rows)
            }
            Dataset::CashFlow => {
                let rows = cash_flow::generate_with(&plan.months(), rng);
                write_csv(&plan.path("cash_flow")?, &rows)
            }
            Dataset::Templates => {
                let mut rows = 0;
                for spec in TEMPLATES {
                    rows += write_template(spec, &plan.path(spec.file_key)?)?;
                }
                Ok(rows)
            }
        }
    }

    /// Channel revenues the income statement is derived from: this batch's
    /// rows, else a previously written file covering every month, else a
    /// freshly generated (and written) series.
    fn channels_for<R: Rng + ?Sized>(
        &mut self,
        months: &[NaiveDate],
        rng: &mut R,
    ) -> Result<Vec<ChannelRevenueRow>> {
        if let Some(rows) = &self.channels {
            return Ok(rows.clone());
        }

        let path = self.plan.path("channel_revenues")?;
        if let Some(rows) = read_existing(&path)? {
            if covers(&rows, months) {
                info!(path = %path.display(), "Using existing channel revenues");
                self.channels = Some(rows.clone());
                return Ok(rows);
            }
            warn!(path = %path.display(), "Existing channel revenues do not cover the run; regenerating");
        }

        let rows = channel_revenue::generate_with(months, rng)?;
        write_csv(&path, &rows)?;
        self.channels = Some(rows.clone());
        Ok(rows)
    }
}

fn read_existing(path: &Path) -> Result<Option<Vec<ChannelRevenueRow>>> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(read_csv(path)?))
}

/// Whether `rows` hold a figure for every channel in every month.
pub fn covers(rows: &[ChannelRevenueRow], months: &[NaiveDate]) -> bool {
    months.iter().all(|month| {
        CHANNELS
            .iter()
            .all(|channel| channel_revenue::revenue_for(rows, channel.name, *month).is_some())
    })
}
