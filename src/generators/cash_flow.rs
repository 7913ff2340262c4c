//! Monthly cash flow movements.

use chrono::{Datelike, NaiveDate};
use rand::prelude::*;
use tracing::info;

use crate::catalog::finance::{CashFlowLine, FlowAmount, FlowDirection, CASH_FLOW};
use crate::models::CashFlowRow;
use crate::sampling::{chance, round2, uniform, vary};

/// Amount for `line` this month, signed by its direction, or `None` when an
/// occasional line does not occur.
pub fn sample_line<R: Rng + ?Sized>(line: &CashFlowLine, rng: &mut R) -> Option<f64> {
    let magnitude = match line.amount {
        FlowAmount::Recurring { base, variation } => vary(base, variation, rng).abs(),
        FlowAmount::Occasional { frequency, low, high } => {
            if !chance(frequency, rng) {
                return None;
            }
            uniform(low, high, rng)
        }
    };
    Some(match line.direction {
        FlowDirection::Inflow => magnitude,
        FlowDirection::Outflow => -magnitude,
    })
}

/// Cash flow rows for every month-end in `months`, sorted by month, flow
/// type and category.
pub fn generate_with<R: Rng + ?Sized>(months: &[NaiveDate], rng: &mut R) -> Vec<CashFlowRow> {
    let mut rows = Vec::new();
    for month in months {
        for line in CASH_FLOW {
            let Some(value) = sample_line(line, rng) else {
                continue;
            };
            rows.push(CashFlowRow {
                year: month.year(),
                month: *month,
                flow_type: line.flow_type.to_string(),
                category: line.category.to_string(),
                sub_category: line.sub_category.to_string(),
                value: round2(value),
            });
        }
    }

    rows.sort_by(|a, b| {
        (a.month, &a.flow_type, &a.category).cmp(&(b.month, &b.flow_type, &b.category))
    });
    info!(months = months.len(), rows = rows.len(), "Generated cash flow");
    rows
}

/// [`generate_with`] using the thread-local RNG.
pub fn generate(months: &[NaiveDate]) -> Vec<CashFlowRow> {
    generate_with(months, &mut thread_rng())
}
