//! Unit tests for the SqlBuilder query construction.

use cafe_fixtures::SqlBuilder;

// ---------------------------------------------------------------------------
// Basic construction
// ---------------------------------------------------------------------------

#[test]
fn new_creates_select_star_from_view() {
    let (sql, params) = SqlBuilder::new("pos").build();
    assert_eq!(sql, "SELECT *\nFROM pos");
    assert!(params.is_empty());
}

#[test]
fn select_replaces_default_star() {
    let (sql, _) = SqlBuilder::new("pos")
        .select(&["transaction_id", "line_total"])
        .build();
    assert!(sql.starts_with("SELECT transaction_id, line_total\n"));
}

#[test]
fn subquery_as_source() {
    let (sql, _) = SqlBuilder::new("(SELECT employee_id, COUNT(*) AS n FROM roster GROUP BY employee_id)")
        .select(&["MAX(n)"])
        .build();
    assert_eq!(
        sql,
        "SELECT MAX(n)\nFROM (SELECT employee_id, COUNT(*) AS n FROM roster GROUP BY employee_id)"
    );
}

// ---------------------------------------------------------------------------
// WHERE conditions
// ---------------------------------------------------------------------------

#[test]
fn where_eq_adds_equality_with_param() {
    let (sql, params) = SqlBuilder::new("pos")
        .where_eq("location_id", "LOC-002")
        .build();
    assert!(sql.contains("WHERE location_id = ?"));
    assert_eq!(params, vec!["LOC-002"]);
}

#[test]
fn where_gte_and_lte_bound_a_range() {
    let (sql, params) = SqlBuilder::new("expenses")
        .where_gte("\"Month\"", "2025-10-31")
        .where_lte("\"Month\"", "2025-12-31")
        .build();
    assert!(sql.contains("WHERE \"Month\" >= ? AND \"Month\" <= ?"));
    assert_eq!(params, vec!["2025-10-31", "2025-12-31"]);
}

#[test]
fn where_between_is_inclusive_range() {
    let (sql, params) = SqlBuilder::new("pos")
        .where_between("CAST(transaction_datetime AS DATE)", "2025-10-01", "2025-10-03")
        .build();
    assert!(sql.contains(
        "WHERE CAST(transaction_datetime AS DATE) >= ? AND CAST(transaction_datetime AS DATE) <= ?"
    ));
    assert_eq!(params, vec!["2025-10-01", "2025-10-03"]);
}

#[test]
fn where_clause_appends_params_in_order() {
    let (sql, params) = SqlBuilder::new("roster")
        .where_eq("role", "Barista")
        .where_clause("pay_rate BETWEEN ? AND ?", &["28", "32"])
        .build();
    assert!(sql.contains("role = ?"));
    assert!(sql.contains("pay_rate BETWEEN ? AND ?"));
    assert_eq!(params, vec!["Barista", "28", "32"]);
}

#[test]
fn values_are_never_interpolated() {
    let (sql, params) = SqlBuilder::new("pos")
        .where_eq("customer_name", "O'Brien")
        .build();
    assert!(!sql.contains("O'Brien"));
    assert_eq!(params, vec!["O'Brien"]);
}

// ---------------------------------------------------------------------------
// DISTINCT
// ---------------------------------------------------------------------------

#[test]
fn distinct_adds_keyword() {
    let (sql, _) = SqlBuilder::new("pos")
        .select(&["location_id"])
        .distinct()
        .build();
    assert!(sql.starts_with("SELECT DISTINCT location_id"));
}

// ---------------------------------------------------------------------------
// GROUP BY / ORDER BY / LIMIT
// ---------------------------------------------------------------------------

#[test]
fn group_by_adds_clause() {
    let (sql, _) = SqlBuilder::new("pos")
        .select(&["category_name", "COUNT(*) AS n"])
        .group_by(&["category_name"])
        .build();
    assert!(sql.contains("GROUP BY category_name"));
}

#[test]
fn order_by_adds_clause() {
    let (sql, _) = SqlBuilder::new("pos")
        .order_by(&["n DESC", "key ASC"])
        .build();
    assert!(sql.contains("ORDER BY n DESC, key ASC"));
}

#[test]
fn limit_adds_clause() {
    let (sql, _) = SqlBuilder::new("pos").limit(10).build();
    assert!(sql.ends_with("LIMIT 10"));
}

// ---------------------------------------------------------------------------
// Combined / chained
// ---------------------------------------------------------------------------

#[test]
fn multiple_where_clauses_joined_with_and() {
    let (sql, _) = SqlBuilder::new("roster")
        .where_eq("area_department", "LOC-001")
        .where_eq("role", "Kitchen")
        .build();
    assert!(sql.contains("WHERE area_department = ? AND role = ?"));
}

#[test]
fn clauses_are_emitted_in_sql_order() {
    let (sql, params) = SqlBuilder::new("pos")
        .select(&["employee_id AS key", "COUNT(*) AS n"])
        .limit(5)
        .order_by(&["n DESC"])
        .group_by(&["employee_id"])
        .where_eq("payment_method", "card")
        .build();

    assert_eq!(
        sql,
        "SELECT employee_id AS key, COUNT(*) AS n\n\
         FROM pos\n\
         WHERE payment_method = ?\n\
         GROUP BY employee_id\n\
         ORDER BY n DESC\n\
         LIMIT 5"
    );
    assert_eq!(params, vec!["card"]);
}

#[test]
fn builder_can_be_reused_after_build() {
    let mut q = SqlBuilder::new("cash_flow");
    q.where_eq("\"Cash Flow Type\"", "Operations");
    let (first, _) = q.build();
    q.limit(1);
    let (second, params) = q.build();
    assert!(!first.contains("LIMIT"));
    assert!(second.ends_with("LIMIT 1"));
    assert_eq!(params, vec!["Operations"]);
}
