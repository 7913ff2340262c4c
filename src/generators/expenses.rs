//! Monthly company expenses by category and item.

use chrono::NaiveDate;
use rand::prelude::*;
use tracing::info;

use crate::catalog::finance::EXPENSE_CATEGORIES;
use crate::models::ExpenseRow;
use crate::sampling::{chance, round2, uniform};

/// One row per incurred expense item per month, sorted by month, category
/// and item.
pub fn generate_with<R: Rng + ?Sized>(months: &[NaiveDate], rng: &mut R) -> Vec<ExpenseRow> {
    let mut rows = Vec::new();
    for month in months {
        for category in EXPENSE_CATEGORIES {
            for item in category.items {
                if chance(category.skip_chance, rng) {
                    continue;
                }
                let (low, high) = category.base_range;
                let base = uniform(low, high, rng);
                let swing = base * uniform(-category.variation, category.variation, rng);
                rows.push(ExpenseRow {
                    month: *month,
                    category: category.name.to_string(),
                    item: item.to_string(),
                    value: round2(base + swing),
                });
            }
        }
    }

    rows.sort_by(|a, b| (a.month, &a.category, &a.item).cmp(&(b.month, &b.category, &b.item)));
    info!(months = months.len(), rows = rows.len(), "Generated company expenses");
    rows
}

/// [`generate_with`] using the thread-local RNG.
pub fn generate(months: &[NaiveDate]) -> Vec<ExpenseRow> {
    generate_with(months, &mut thread_rng())
}
