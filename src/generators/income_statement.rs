//! Monthly income statement figures.
//!
//! Revenue lines are the same month's channel revenues, so the income
//! statement and the channel report describe one business. Cost of goods
//! is a share of in-store sales; the remaining lines are flat or occasional
//! amounts.

use chrono::NaiveDate;
use rand::prelude::*;
use tracing::info;

use super::channel_revenue::revenue_for;
use crate::catalog::finance::{IncomeBasis, INCOME_JITTER, INCOME_STATEMENT, SALES_CHANNEL};
use crate::error::{FixtureError, Result};
use crate::models::{ChannelRevenueRow, ExpenseRow};
use crate::sampling::{chance, round2, uniform};

fn channel_revenue(channels: &[ChannelRevenueRow], channel: &str, month: NaiveDate) -> Result<f64> {
    revenue_for(channels, channel, month).ok_or_else(|| {
        FixtureError::NotFound(format!(
            "No '{}' channel revenue for {}",
            channel,
            month.format("%Y-%m")
        ))
    })
}

/// Income statement rows for every month-end in `months`, sorted by month,
/// category and item. Every month in `months` must have channel revenues.
pub fn generate_with<R: Rng + ?Sized>(
    months: &[NaiveDate],
    channels: &[ChannelRevenueRow],
    rng: &mut R,
) -> Result<Vec<ExpenseRow>> {
    let (jitter_low, jitter_high) = INCOME_JITTER;
    let mut rows = Vec::with_capacity(months.len() * INCOME_STATEMENT.len());

    for month in months {
        let sales = channel_revenue(channels, SALES_CHANNEL, *month)?;
        for line in INCOME_STATEMENT {
            let value = match line.basis {
                IncomeBasis::Channel(name) => channel_revenue(channels, name, *month)?,
                IncomeBasis::SalesShare(low, high) => {
                    sales * uniform(low, high, rng) * uniform(jitter_low, jitter_high, rng)
                }
                IncomeBasis::Flat(low, high) => {
                    uniform(low, high, rng) * uniform(jitter_low, jitter_high, rng)
                }
                IncomeBasis::Occasional { chance: p, low, high } => {
                    if chance(p, rng) {
                        uniform(low, high, rng) * uniform(jitter_low, jitter_high, rng)
                    } else {
                        0.0
                    }
                }
            };
            rows.push(ExpenseRow {
                month: *month,
                category: line.category.to_string(),
                item: line.item.to_string(),
                value: round2(value.abs()),
            });
        }
    }

    rows.sort_by(|a, b| (a.month, &a.category, &a.item).cmp(&(b.month, &b.category, &b.item)));
    info!(months = months.len(), rows = rows.len(), "Generated income statement");
    Ok(rows)
}

/// [`generate_with`] using the thread-local RNG.
pub fn generate(months: &[NaiveDate], channels: &[ChannelRevenueRow]) -> Result<Vec<ExpenseRow>> {
    generate_with(months, channels, &mut thread_rng())
}
