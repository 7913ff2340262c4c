//! Parameterised SELECT construction for the summary reports.
//!
//! Values are bound through `?` placeholders and returned alongside the SQL;
//! only identifiers and expressions written by this crate are spliced into
//! the text. Every method takes `&mut self` and returns it for chaining.
//!
//! # Example
//!
//! ```rust
//! use cafe_fixtures::SqlBuilder;
//! let (sql, params) = SqlBuilder::new("pos")
//!     .select(&["location_id", "COUNT(*) AS n"])
//!     .where_eq("payment_method", "card")
//!     .group_by(&["location_id"])
//!     .order_by(&["n DESC"])
//!     .limit(10)
//!     .build();
//! assert_eq!(params, vec!["card".to_string()]);
//! assert!(sql.starts_with("SELECT location_id, COUNT(*) AS n"));
//! ```

/// A SELECT over one view or subquery.
///
/// Clauses may be added in any order; [`build`](Self::build) always emits
/// them in SQL order.
pub struct SqlBuilder {
    source: String,
    columns: Vec<String>,
    distinct: bool,
    filters: Vec<String>,
    params: Vec<String>,
    groups: Vec<String>,
    ordering: Vec<String>,
    limit: Option<usize>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SqlBuilder {
    /// Select `*` from `source`, a view name or a parenthesised subquery.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            columns: Vec::new(),
            distinct: false,
            filters: Vec::new(),
            params: Vec::new(),
            groups: Vec::new(),
            ordering: Vec::new(),
            limit: None,
        }
    }

    /// Replace the selected expressions.
    pub fn select(&mut self, columns: &[&str]) -> &mut Self {
        self.columns = owned(columns);
        self
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    /// Add a raw condition. `params` bind its `?` placeholders in order.
    pub fn where_clause(&mut self, condition: &str, params: &[&str]) -> &mut Self {
        self.filters.push(condition.to_string());
        self.params.extend(owned(params));
        self
    }

    fn compare(&mut self, expr: &str, op: &str, value: &str) -> &mut Self {
        self.filters.push(format!("{} {} ?", expr, op));
        self.params.push(value.to_string());
        self
    }

    /// `expr = ?`
    pub fn where_eq(&mut self, expr: &str, value: &str) -> &mut Self {
        self.compare(expr, "=", value)
    }

    /// `expr >= ?`
    pub fn where_gte(&mut self, expr: &str, value: &str) -> &mut Self {
        self.compare(expr, ">=", value)
    }

    /// `expr <= ?`
    pub fn where_lte(&mut self, expr: &str, value: &str) -> &mut Self {
        self.compare(expr, "<=", value)
    }

    /// Inclusive range: `expr >= ? AND expr <= ?`.
    pub fn where_between(&mut self, expr: &str, low: &str, high: &str) -> &mut Self {
        self.where_gte(expr, low).where_lte(expr, high)
    }

    pub fn group_by(&mut self, exprs: &[&str]) -> &mut Self {
        self.groups.extend(owned(exprs));
        self
    }

    /// Sort keys such as `"n DESC"`.
    pub fn order_by(&mut self, keys: &[&str]) -> &mut Self {
        self.ordering.extend(owned(keys));
        self
    }

    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit = Some(n);
        self
    }

    /// The SQL text, one clause per line, and its bound parameters.
    pub fn build(&self) -> (String, Vec<String>) {
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };
        let mut lines = vec![
            format!(
                "SELECT {}{}",
                if self.distinct { "DISTINCT " } else { "" },
                columns
            ),
            format!("FROM {}", self.source),
        ];
        if !self.filters.is_empty() {
            lines.push(format!("WHERE {}", self.filters.join(" AND ")));
        }
        if !self.groups.is_empty() {
            lines.push(format!("GROUP BY {}", self.groups.join(", ")));
        }
        if !self.ordering.is_empty() {
            lines.push(format!("ORDER BY {}", self.ordering.join(", ")));
        }
        if let Some(n) = self.limit {
            lines.push(format!("LIMIT {}", n));
        }
        (lines.join("\n"), self.params.clone())
    }
}
