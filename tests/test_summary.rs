//! Summary reports over a generated October 2025 output directory.

mod common;

use cafe_fixtures::models::{ExpenseRow, LineItem, Shift};
use cafe_fixtures::output::{dataset_path, read_csv};
use cafe_fixtures::summary::{
    count, money, FinancialDataset, FinancialQuery, PosDimension, PosQuery, RosterQuery,
};
use cafe_fixtures::{Connection, FixtureError};
use common::{date, setup_written_dir};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * b.abs().max(1.0)
}

// ---------------------------------------------------------------------------
// POS
// ---------------------------------------------------------------------------

#[test]
fn pos_counts_match_written_rows() {
    let (conn, tmp_dir) = setup_written_dir();
    let lines: Vec<LineItem> = read_csv(&dataset_path(tmp_dir.path(), "pos").unwrap()).unwrap();
    let pos = PosQuery::new(&conn);

    // 770 transactions a day over 23 weekdays.
    assert_eq!(pos.count_transactions().unwrap(), 770 * 23);
    assert_eq!(pos.count_line_items().unwrap(), lines.len() as i64);
    let revenue: f64 = lines.iter().map(|l| l.line_total).sum();
    assert!(close(pos.total_revenue().unwrap(), revenue));
}

#[test]
fn pos_breakdowns() {
    let (conn, _tmp_dir) = setup_written_dir();
    let pos = PosQuery::new(&conn);

    let by_location = pos.breakdown(PosDimension::Location, None).unwrap();
    assert_eq!(by_location.len(), 4);
    let lines: i64 = by_location.iter().map(|g| g.count).sum();
    assert_eq!(lines, pos.count_line_items().unwrap());
    // Largest site first.
    assert_eq!(by_location[0].key, "LOC-001");

    let categories: Vec<String> = pos
        .breakdown(PosDimension::Category, None)
        .unwrap()
        .into_iter()
        .map(|g| g.key)
        .collect();
    assert!(categories.contains(&"Hot Drinks".to_string()));
    assert!(categories.len() <= 3);

    let top = pos.breakdown(PosDimension::Employee, Some(2)).unwrap();
    assert_eq!(top.len(), 2);
    assert!(top[0].count >= top[1].count);
}

#[test]
fn pos_locations_and_revenue() {
    let (conn, _tmp_dir) = setup_written_dir();
    let pos = PosQuery::new(&conn);
    assert_eq!(pos.locations().unwrap(), vec!["LOC-001", "LOC-002", "LOC-003", "LOC-004"]);

    let per_site: f64 = pos
        .locations()
        .unwrap()
        .iter()
        .map(|loc| pos.location_revenue(loc).unwrap())
        .sum();
    assert!(close(per_site, pos.total_revenue().unwrap()));
    assert_eq!(pos.location_revenue("LOC-999").unwrap(), 0.0);
}

#[test]
fn pos_daily_revenue_and_range() {
    let (conn, _tmp_dir) = setup_written_dir();
    let pos = PosQuery::new(&conn);

    let first_days = pos.daily_revenue(date(2025, 10, 1), date(2025, 10, 5)).unwrap();
    let days: Vec<&str> = first_days.iter().map(|(d, _)| d.as_str()).collect();
    assert_eq!(days, vec!["2025-10-01", "2025-10-02", "2025-10-03"]);
    assert!(first_days.iter().all(|(_, total)| *total > 0.0));

    let month = pos.daily_revenue(date(2025, 10, 1), date(2025, 10, 31)).unwrap();
    assert_eq!(month.len(), 23);
    let sum: f64 = month.iter().map(|(_, t)| t).sum();
    assert!(close(sum, pos.total_revenue().unwrap()));

    let (first, last) = pos.date_range().unwrap().unwrap();
    assert!(first.starts_with("2025-10-01"));
    assert!(last.starts_with("2025-10-31"));
}

#[test]
fn pos_summary_renders() {
    let (conn, _tmp_dir) = setup_written_dir();
    let summary = PosQuery::new(&conn).summary().unwrap();
    assert_eq!(summary.transactions, 17_710);
    assert!(summary.average_transaction > 0.0);
    assert!(summary.top_employees.len() <= 10);

    let text = summary.to_string();
    assert!(text.starts_with("POS transactions"));
    assert!(text.contains("17,710"));
    assert!(text.contains("By payment method:"));
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

#[test]
fn roster_counts_and_labour_cost() {
    let (conn, tmp_dir) = setup_written_dir();
    let shifts: Vec<Shift> = read_csv(&dataset_path(tmp_dir.path(), "roster").unwrap()).unwrap();
    let roster = RosterQuery::new(&conn);

    assert_eq!(roster.count_shifts().unwrap(), shifts.len() as i64);
    let expected: f64 = shifts
        .iter()
        .map(|s| (s.hours() - s.break_duration as f64 / 60.0) * s.pay_rate)
        .sum();
    assert!(close(roster.labour_cost().unwrap(), expected));

    let by_location = roster.shifts_by_location().unwrap();
    assert_eq!(by_location.iter().map(|g| g.count).sum::<i64>(), shifts.len() as i64);
    let by_role = roster.shifts_by_role().unwrap();
    assert_eq!(by_role.iter().map(|g| g.count).sum::<i64>(), shifts.len() as i64);
    let published = roster.published_split().unwrap();
    assert_eq!(published.iter().map(|g| g.count).sum::<i64>(), shifts.len() as i64);
}

#[test]
fn roster_per_employee_and_daily_cost() {
    let (conn, _tmp_dir) = setup_written_dir();
    let roster = RosterQuery::new(&conn);

    let (lo, mean, hi) = roster.shifts_per_employee().unwrap();
    assert!(lo >= 1);
    // At most one shift a day.
    assert!(hi <= 23);
    assert!(lo as f64 <= mean && mean <= hi as f64);

    let daily = roster.average_daily_cost().unwrap();
    assert!(!daily.is_empty() && daily.len() <= 4);
    assert!(daily.iter().all(|(_, cost)| *cost > 0.0));

    let text = roster.summary().unwrap().to_string();
    assert!(text.contains("Average daily staffing cost:"));
}

// ---------------------------------------------------------------------------
// Financial
// ---------------------------------------------------------------------------

#[test]
fn financial_totals_match_files() {
    let (conn, tmp_dir) = setup_written_dir();
    let financial = FinancialQuery::new(&conn);

    let expenses: Vec<ExpenseRow> =
        read_csv(&dataset_path(tmp_dir.path(), "expenses").unwrap()).unwrap();
    assert_eq!(financial.count(FinancialDataset::Expenses).unwrap(), expenses.len() as i64);
    let sum: f64 = expenses.iter().map(|r| r.value).sum();
    assert!(close(financial.total(FinancialDataset::Expenses).unwrap(), sum));

    let groups = financial.totals(FinancialDataset::Expenses, None).unwrap();
    assert_eq!(groups.iter().map(|g| g.count).sum::<i64>(), expenses.len() as i64);
    assert!(groups.windows(2).all(|w| w[0].key <= w[1].key));
}

#[test]
fn financial_periods() {
    let (conn, _tmp_dir) = setup_written_dir();
    let financial = FinancialQuery::new(&conn);

    for dataset in [
        FinancialDataset::Expenses,
        FinancialDataset::IncomeStatement,
        FinancialDataset::BalanceSheet,
        FinancialDataset::CashFlow,
    ] {
        assert_eq!(
            financial.latest_period(dataset).unwrap().as_deref(),
            Some("2025-10-31"),
            "{:?}",
            dataset
        );
    }
    assert_eq!(
        financial.latest_period(FinancialDataset::ChannelRevenues).unwrap().as_deref(),
        Some("2025-10-01")
    );

    let channels = financial
        .totals(FinancialDataset::ChannelRevenues, Some("2025-10-01"))
        .unwrap();
    assert_eq!(channels.len(), 4);
    assert!(financial
        .totals(FinancialDataset::ChannelRevenues, Some("2025-11-01"))
        .unwrap()
        .is_empty());
}

#[test]
fn financial_summary_renders() {
    let (conn, _tmp_dir) = setup_written_dir();
    let summary = FinancialQuery::new(&conn)
        .summary(FinancialDataset::BalanceSheet)
        .unwrap();
    assert_eq!(summary.latest_period.as_deref(), Some("2025-10-31"));
    assert_eq!(summary.totals.len(), summary.latest_totals.len());
    let text = summary.to_string();
    assert!(text.starts_with("Balance sheet"));
    assert!(text.contains("By Balance Sheet Type:"));
}

#[test]
fn financial_dataset_names() {
    for dataset in FinancialDataset::ALL {
        assert_eq!(dataset.view().parse::<FinancialDataset>().unwrap(), dataset);
    }
    assert!("pos".parse::<FinancialDataset>().is_err());
}

// ---------------------------------------------------------------------------
// Missing files and formatting
// ---------------------------------------------------------------------------

#[test]
fn summaries_of_missing_files_are_not_found() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let conn = Connection::new(tmp_dir.path()).unwrap();
    assert!(matches!(PosQuery::new(&conn).count_transactions(), Err(FixtureError::NotFound(_))));
    assert!(matches!(RosterQuery::new(&conn).labour_cost(), Err(FixtureError::NotFound(_))));
    assert!(matches!(
        FinancialQuery::new(&conn).total(FinancialDataset::CashFlow),
        Err(FixtureError::NotFound(_))
    ));
}

#[test]
fn number_formatting() {
    assert_eq!(count(0), "0");
    assert_eq!(count(17_710), "17,710");
    assert_eq!(count(-1_234_567), "-1,234,567");
    assert_eq!(money(0.0), "$0.00");
    assert_eq!(money(1234.5), "$1,234.50");
    assert_eq!(money(-1234.5), "$-1,234.50");
    assert_eq!(money(999.999), "$1,000.00");
    assert_eq!(money(-0.001), "$0.00");
}
