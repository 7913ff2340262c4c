//! Monthly balance sheet snapshots.
//!
//! Most lines are drawn independently each month around a base value. The
//! running lines (accumulated depreciation, retained earnings, long-term
//! loans) are folded over the months in order.

use chrono::{Datelike, NaiveDate};
use rand::prelude::*;
use tracing::info;

use crate::catalog::finance::{
    monthly_depreciation_total, BalanceBehaviour, ACCUMULATED_DEPRECIATION_OPENING,
    BALANCE_SHEET, LOAN_REPAYMENT_RANGE, LONG_TERM_LOAN_OPENING, MONTHLY_PROFIT_RANGE,
    RETAINED_EARNINGS_OPENING,
};
use crate::models::BalanceSheetRow;
use crate::sampling::{round2, uniform, vary};

/// Balances carried from one month to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningBalances {
    pub accumulated_depreciation: f64,
    pub retained_earnings: f64,
    pub long_term_loan: f64,
}

impl RunningBalances {
    /// Balances before the first reported month.
    pub fn opening() -> Self {
        Self {
            accumulated_depreciation: ACCUMULATED_DEPRECIATION_OPENING,
            retained_earnings: RETAINED_EARNINGS_OPENING,
            long_term_loan: LONG_TERM_LOAN_OPENING,
        }
    }

    /// Balances at the end of the next month. The loan is first repaid in
    /// the month after the opening month.
    pub fn advance<R: Rng + ?Sized>(self, first_month: bool, rng: &mut R) -> Self {
        let (profit_low, profit_high) = MONTHLY_PROFIT_RANGE;
        let long_term_loan = if first_month {
            self.long_term_loan
        } else {
            let (low, high) = LOAN_REPAYMENT_RANGE;
            (self.long_term_loan - uniform(low, high, rng)).max(0.0)
        };
        Self {
            accumulated_depreciation: self.accumulated_depreciation - monthly_depreciation_total(),
            retained_earnings: self.retained_earnings + uniform(profit_low, profit_high, rng),
            long_term_loan,
        }
    }
}

/// Balance sheet rows for every month-end in `months` (ascending), sorted
/// by month, sheet type, category and sub-category.
pub fn generate_with<R: Rng + ?Sized>(months: &[NaiveDate], rng: &mut R) -> Vec<BalanceSheetRow> {
    let mut rows = Vec::with_capacity(months.len() * BALANCE_SHEET.len());
    let mut balances = RunningBalances::opening();

    for (i, month) in months.iter().enumerate() {
        balances = balances.advance(i == 0, rng);
        for line in BALANCE_SHEET {
            let value = match line.behaviour {
                BalanceBehaviour::Varied { base, variation } => vary(base, variation, rng),
                BalanceBehaviour::AccumulatedDepreciation => balances.accumulated_depreciation,
                BalanceBehaviour::RetainedEarnings => balances.retained_earnings,
                BalanceBehaviour::LongTermLoan => balances.long_term_loan,
            };
            rows.push(BalanceSheetRow {
                year: month.year(),
                month: *month,
                sheet_type: line.sheet_type.to_string(),
                category: line.category.to_string(),
                sub_category: line.sub_category.to_string(),
                value: round2(value),
            });
        }
    }

    rows.sort_by(|a, b| {
        (a.month, &a.sheet_type, &a.category, &a.sub_category)
            .cmp(&(b.month, &b.sheet_type, &b.category, &b.sub_category))
    });
    info!(months = months.len(), rows = rows.len(), "Generated balance sheet");
    rows
}

/// [`generate_with`] using the thread-local RNG.
pub fn generate(months: &[NaiveDate]) -> Vec<BalanceSheetRow> {
    generate_with(months, &mut thread_rng())
}
