//! Connection integration tests: CSV view registration and SQL execution.

mod common;

use cafe_fixtures::{Connection, FixtureError};

const SHIFTS: &str = "\
employee_id,role,pay_rate,notes
EMP-001,Barista,30.5,Opening shift
EMP-002,Kitchen,29.0,
EMP-003,Barista,31.25,Training
";

fn shifts_conn() -> (Connection, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = common::write_text(tmp_dir.path(), "shifts.csv", SHIFTS);
    let conn = Connection::new(tmp_dir.path()).unwrap();
    conn.register_csv("shifts", &path).unwrap();
    (conn, tmp_dir)
}

// ---------------------------------------------------------------------------
// execute
// ---------------------------------------------------------------------------

#[test]
fn execute_returns_correct_rows() {
    let (conn, _tmp) = shifts_conn();

    let rows = conn
        .execute("SELECT * FROM shifts ORDER BY employee_id", &[])
        .unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["employee_id"], "EMP-001");
    assert_eq!(rows[2]["employee_id"], "EMP-003");
}

#[test]
fn execute_with_params() {
    let (conn, _tmp) = shifts_conn();

    let rows = conn
        .execute("SELECT * FROM shifts WHERE role = ?", &["Barista".to_string()])
        .unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn execute_returns_empty_for_no_matches() {
    let (conn, _tmp) = shifts_conn();

    let rows = conn
        .execute("SELECT * FROM shifts WHERE role = ?", &["Manager".to_string()])
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn execute_reports_sql_errors() {
    let (conn, _tmp) = shifts_conn();
    assert!(matches!(
        conn.execute("SELECT * FROM missing_view", &[]),
        Err(FixtureError::DuckDb(_))
    ));
}

// ---------------------------------------------------------------------------
// execute_scalar
// ---------------------------------------------------------------------------

#[test]
fn execute_scalar_returns_single_value() {
    let (conn, _tmp) = shifts_conn();

    let result = conn.execute_scalar("SELECT COUNT(*) FROM shifts", &[]).unwrap();
    assert_eq!(result.unwrap().as_i64().unwrap(), 3);
}

#[test]
fn execute_scalar_returns_none_for_empty_result() {
    let (conn, _tmp) = shifts_conn();

    let result = conn
        .execute_scalar(
            "SELECT employee_id FROM shifts WHERE employee_id = ?",
            &["EMP-999".to_string()],
        )
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// register_csv / ensure_views
// ---------------------------------------------------------------------------

#[test]
fn register_csv_marks_view_as_registered() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = common::write_text(tmp_dir.path(), "x.csv", "x\n1\n");
    let conn = Connection::new(tmp_dir.path()).unwrap();

    assert!(!conn.has_view("my_view"));
    conn.register_csv("my_view", &path).unwrap();
    assert!(conn.has_view("my_view"));
}

#[test]
fn register_csv_replaces_existing_view() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let conn = Connection::new(tmp_dir.path()).unwrap();

    let old = common::write_text(tmp_dir.path(), "old.csv", "val\nold\n");
    conn.register_csv("replaceable", &old).unwrap();
    let new = common::write_text(tmp_dir.path(), "new.csv", "val\nnew\n");
    conn.register_csv("replaceable", &new).unwrap();

    let rows = conn.execute("SELECT * FROM replaceable", &[]).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["val"], "new");
}

#[test]
fn register_csv_handles_quotes_in_path() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let dir = tmp_dir.path().join("owner's files");
    std::fs::create_dir_all(&dir).unwrap();
    let path = common::write_text(&dir, "x.csv", "x\n7\n");
    let conn = Connection::new(tmp_dir.path()).unwrap();

    conn.register_csv("quoted", &path).unwrap();
    let value = conn.execute_scalar("SELECT x FROM quoted", &[]).unwrap();
    assert_eq!(value.unwrap().as_i64(), Some(7));
}

#[test]
fn ensure_views_registers_written_datasets() {
    let (conn, _tmp) = common::setup_written_dir();
    assert!(conn.views().is_empty());

    conn.ensure_views(&["expenses", "cash_flow"]).unwrap();
    assert!(conn.has_view("expenses"));
    assert!(conn.has_view("cash_flow"));
    // Idempotent.
    conn.ensure_views(&["expenses"]).unwrap();
    assert_eq!(conn.views().len(), 2);
}

#[test]
fn ensure_views_missing_file_is_not_found() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let conn = Connection::new(tmp_dir.path()).unwrap();
    assert!(matches!(conn.ensure_views(&["pos"]), Err(FixtureError::NotFound(_))));
    assert!(!conn.has_view("pos"));
}

#[test]
fn ensure_views_unknown_name_is_rejected() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let conn = Connection::new(tmp_dir.path()).unwrap();
    assert!(conn.ensure_views(&["inventory"]).is_err());
}

// ---------------------------------------------------------------------------
// has_view / views / reset_views
// ---------------------------------------------------------------------------

#[test]
fn has_view_returns_false_initially() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let conn = Connection::new(tmp_dir.path()).unwrap();

    assert!(!conn.has_view("pos"));
    assert!(!conn.has_view("roster"));
}

#[test]
fn reset_views_clears_registered_views() {
    let (conn, _tmp) = shifts_conn();
    assert_eq!(conn.views(), vec!["shifts".to_string()]);

    conn.reset_views();

    assert!(conn.views().is_empty());
    assert!(!conn.has_view("shifts"));
}

// ---------------------------------------------------------------------------
// raw
// ---------------------------------------------------------------------------

#[test]
fn raw_provides_access_to_underlying_duckdb_connection() {
    let (conn, _tmp) = shifts_conn();

    let raw = conn.raw();
    raw.execute_batch("CREATE TABLE raw_test (id INTEGER, value TEXT)")
        .unwrap();
    raw.execute_batch("INSERT INTO raw_test VALUES (1, 'hello')")
        .unwrap();

    let rows = conn.execute("SELECT * FROM raw_test", &[]).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["value"], "hello");
}

// ---------------------------------------------------------------------------
// execute_into
// ---------------------------------------------------------------------------

#[test]
fn execute_into_deserializes_rows() {
    let (conn, _tmp) = shifts_conn();

    #[derive(serde::Deserialize, Debug)]
    struct Rate {
        employee_id: String,
        pay_rate: f64,
    }

    let rates: Vec<Rate> = conn
        .execute_into("SELECT employee_id, pay_rate FROM shifts ORDER BY employee_id", &[])
        .unwrap();
    assert_eq!(rates.len(), 3);
    assert_eq!(rates[0].employee_id, "EMP-001");
    assert!((rates[0].pay_rate - 30.5).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// Type conversions
// ---------------------------------------------------------------------------

#[test]
fn empty_fields_are_converted_to_json_null() {
    let (conn, _tmp) = shifts_conn();

    let rows = conn
        .execute(
            "SELECT notes FROM shifts WHERE employee_id = ?",
            &["EMP-002".to_string()],
        )
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["notes"].is_null());
}

#[test]
fn boolean_values_are_converted_correctly() {
    let (conn, _tmp) = shifts_conn();

    let rows = conn
        .execute("SELECT pay_rate > 30 AS high FROM shifts ORDER BY employee_id", &[])
        .unwrap();
    assert_eq!(rows[0]["high"], true);
    assert_eq!(rows[1]["high"], false);
}

#[test]
fn numeric_values_are_converted_correctly() {
    let (conn, _tmp) = shifts_conn();

    let rows = conn
        .execute(
            "SELECT pay_rate FROM shifts WHERE employee_id = ?",
            &["EMP-003".to_string()],
        )
        .unwrap();
    assert_eq!(rows.len(), 1);
    let rate = rows[0]["pay_rate"].as_f64().unwrap();
    assert!((rate - 31.25).abs() < f64::EPSILON);

    let sum = conn
        .execute_scalar("SELECT SUM(CAST(pay_rate * 4 AS INTEGER)) FROM shifts", &[])
        .unwrap()
        .unwrap();
    assert_eq!(sum.as_i64(), Some(363));
}
