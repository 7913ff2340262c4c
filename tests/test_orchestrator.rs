//! Batch runs: dataset selection, outputs on disk and failure isolation.

mod common;

use cafe_fixtures::calendar::DateBound;
use cafe_fixtures::catalog::finance::CHANNELS;
use cafe_fixtures::generators::channel_revenue;
use cafe_fixtures::models::{ChannelRevenueRow, ExpenseRow};
use cafe_fixtures::orchestrator::covers;
use cafe_fixtures::output::{dataset_path, read_csv, write_csv};
use cafe_fixtures::summary::FinancialDataset;
use cafe_fixtures::{CafeFixtures, Dataset, RunPlan};
use common::date;

fn october(dir: &std::path::Path) -> RunPlan {
    RunPlan::new(dir, date(2025, 10, 1), date(2025, 10, 31))
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn select_all_and_financial() {
    assert_eq!(Dataset::select("all").unwrap(), Dataset::ALL.to_vec());
    assert_eq!(Dataset::select("financial").unwrap(), Dataset::FINANCIAL.to_vec());
    assert_eq!(Dataset::select("cash_flow").unwrap(), vec![Dataset::CashFlow]);
    assert!(Dataset::select("inventory").is_err());
}

#[test]
fn dataset_names_parse_back() {
    for dataset in Dataset::ALL {
        assert_eq!(dataset.name().parse::<Dataset>().unwrap(), dataset);
        assert_eq!(dataset.to_string(), dataset.name());
    }
    assert!("POS".parse::<Dataset>().is_err());
}

// ---------------------------------------------------------------------------
// Runs
// ---------------------------------------------------------------------------

#[test]
fn financial_batch_writes_every_series() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let report = october(tmp_dir.path()).run_with(&Dataset::FINANCIAL, &mut common::rng());
    assert!(report.is_success(), "{}", report);
    assert_eq!(report.succeeded.len(), 5);

    for name in ["expenses", "channel_revenues", "income_statement", "balance_sheet", "cash_flow"] {
        assert!(dataset_path(tmp_dir.path(), name).unwrap().is_file(), "{} missing", name);
    }
    let channels: Vec<ChannelRevenueRow> =
        read_csv(&dataset_path(tmp_dir.path(), "channel_revenues").unwrap()).unwrap();
    assert_eq!(channels.len(), CHANNELS.len());
    let rows = report
        .succeeded
        .iter()
        .find(|(d, _)| *d == Dataset::ChannelRevenues)
        .map(|(_, rows)| *rows);
    assert_eq!(rows, Some(CHANNELS.len()));
}

fn revenue_lines(dir: &std::path::Path) -> Vec<(String, f64)> {
    let rows: Vec<ExpenseRow> = read_csv(&dataset_path(dir, "income_statement").unwrap()).unwrap();
    rows.into_iter()
        .filter(|r| r.category == "Revenue")
        .map(|r| (r.item, r.value))
        .collect()
}

#[test]
fn income_statement_alone_writes_channel_revenues() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let report = october(tmp_dir.path()).run_with(&[Dataset::IncomeStatement], &mut common::rng());
    assert!(report.is_success(), "{}", report);

    let path = dataset_path(tmp_dir.path(), "channel_revenues").unwrap();
    let channels: Vec<ChannelRevenueRow> = read_csv(&path).unwrap();
    let month = date(2025, 10, 31);
    assert!(covers(&channels, &[month]));

    let pos = channel_revenue::revenue_for(&channels, "POS", month).unwrap();
    let lines = revenue_lines(tmp_dir.path());
    assert!(lines.contains(&("Total Sales Revenue".to_string(), pos)));
}

#[test]
fn income_statement_reuses_covering_channel_file() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let month = date(2025, 10, 31);
    let existing: Vec<ChannelRevenueRow> = CHANNELS
        .iter()
        .enumerate()
        .map(|(i, channel)| ChannelRevenueRow {
            month_year: "Oct 2025".to_string(),
            first_date: date(2025, 10, 1),
            channel: channel.name.to_string(),
            category: channel.category.to_string(),
            value: 1000.0 * (i as f64 + 1.0),
        })
        .collect();
    let path = dataset_path(tmp_dir.path(), "channel_revenues").unwrap();
    write_csv(&path, &existing).unwrap();

    let report = october(tmp_dir.path()).run_with(&[Dataset::IncomeStatement], &mut common::rng());
    assert!(report.is_success(), "{}", report);

    let lines = revenue_lines(tmp_dir.path());
    for (item, channel) in [
        ("Total Sales Revenue", "POS"),
        ("Delivery Revenue", "Delivery"),
        ("Catering Revenue", "Catering"),
        ("Wholesale Revenue", "Wholesale"),
    ] {
        let expected = channel_revenue::revenue_for(&existing, channel, month).unwrap();
        assert!(lines.contains(&(item.to_string(), expected)), "{} != {}", item, expected);
    }
    // Left untouched.
    assert_eq!(read_csv::<ChannelRevenueRow>(&path).unwrap(), existing);
}

#[test]
fn channel_file_missing_a_month_is_regenerated() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = dataset_path(tmp_dir.path(), "channel_revenues").unwrap();
    let september = channel_revenue::generate_with(&[date(2025, 9, 30)], &mut common::rng()).unwrap();
    write_csv(&path, &september).unwrap();

    let report = october(tmp_dir.path()).run_with(&[Dataset::IncomeStatement], &mut common::rng());
    assert!(report.is_success(), "{}", report);
    let channels: Vec<ChannelRevenueRow> = read_csv(&path).unwrap();
    assert!(covers(&channels, &[date(2025, 10, 31)]));
}

#[test]
fn unwritable_output_fails_every_dataset_without_stopping() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let blocker = common::write_text(tmp_dir.path(), "not-a-dir", "occupied");
    let mut datasets = Dataset::FINANCIAL.to_vec();
    datasets.push(Dataset::Templates);

    let report = RunPlan::new(&blocker, date(2025, 10, 1), date(2025, 10, 31))
        .run_with(&datasets, &mut common::rng());
    assert!(!report.is_success());
    assert!(report.succeeded.is_empty());
    let failed: Vec<Dataset> = report.failed.iter().map(|(d, _)| *d).collect();
    assert_eq!(failed, datasets);
    assert!(report.to_string().ends_with("0 succeeded, 6 failed"));
}

#[test]
fn reversed_range_writes_empty_outputs() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let plan = RunPlan::new(tmp_dir.path(), date(2025, 10, 31), date(2025, 10, 1));
    assert!(plan.days().is_empty());
    assert!(plan.months().is_empty());
    let report = plan.run_with(&[Dataset::Expenses, Dataset::CashFlow], &mut common::rng());
    assert!(report.is_success());
    assert!(report.succeeded.iter().all(|(_, rows)| *rows == 0));
}

// ---------------------------------------------------------------------------
// covers()
// ---------------------------------------------------------------------------

#[test]
fn covers_requires_every_channel_and_month() {
    let months = common::quarter();
    let rows = channel_revenue::generate_with(&months, &mut common::rng()).unwrap();
    assert!(covers(&rows, &months));
    assert!(covers(&rows, &[]));

    let without_wholesale: Vec<ChannelRevenueRow> =
        rows.iter().filter(|r| r.channel != "Wholesale").cloned().collect();
    assert!(!covers(&without_wholesale, &months));
    assert!(!covers(&rows, &[date(2026, 1, 31)]));
}

// ---------------------------------------------------------------------------
// CafeFixtures builder
// ---------------------------------------------------------------------------

#[test]
fn builder_resolves_fixed_dates() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let fixtures = CafeFixtures::builder()
        .output_dir(tmp_dir.path())
        .start(date(2025, 10, 1))
        .end(date(2025, 11, 15))
        .build()
        .unwrap();

    assert_eq!(fixtures.output_dir(), tmp_dir.path());
    assert_eq!(fixtures.start(), date(2025, 10, 1));
    assert_eq!(fixtures.end(), date(2025, 11, 15));
    assert_eq!(fixtures.month_ends(), vec![date(2025, 10, 31)]);
    assert_eq!(fixtures.operating_days().len(), 23 + 10);
    assert!(fixtures.views().is_empty());
    assert!(fixtures.to_string().starts_with("CafeFixtures(output_dir="));
}

#[test]
fn builder_defaults() {
    let fixtures = CafeFixtures::builder().build().unwrap();
    assert_eq!(fixtures.output_dir(), std::path::Path::new("data"));
    assert_eq!(fixtures.start(), date(2025, 10, 1));
    assert_eq!(fixtures.end(), date(2026, 1, 23));
    assert_eq!(fixtures.month_ends().len(), 3);
}

#[test]
fn builder_accepts_today() {
    let fixtures = CafeFixtures::builder()
        .output_dir(tempfile::tempdir().unwrap().path())
        .end(DateBound::Today)
        .build()
        .unwrap();
    assert_eq!(fixtures.end(), chrono::Local::now().date_naive());
}

#[test]
fn generate_then_summarise_through_facade() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let fixtures = CafeFixtures::builder()
        .output_dir(tmp_dir.path())
        .start(date(2025, 10, 1))
        .end(date(2025, 10, 31))
        .build()
        .unwrap();

    let report = fixtures.generate_with(&Dataset::FINANCIAL, &mut common::rng());
    assert!(report.is_success(), "{}", report);
    let latest = fixtures
        .financial()
        .latest_period(FinancialDataset::BalanceSheet)
        .unwrap();
    assert_eq!(latest.as_deref(), Some("2025-10-31"));
}
