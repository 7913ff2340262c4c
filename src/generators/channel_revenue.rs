//! Monthly revenue per sales channel.

use chrono::{Datelike, NaiveDate};
use rand::prelude::*;
use tracing::info;

use crate::calendar::weekdays_in_month;
use crate::catalog::finance::{CHANNELS, CHANNEL_VARIATION};
use crate::error::{FixtureError, Result};
use crate::models::ChannelRevenueRow;
use crate::sampling::{round2, vary};

fn first_of_month(date: NaiveDate) -> Result<NaiveDate> {
    date.with_day(1)
        .ok_or_else(|| FixtureError::InvalidArgument(format!("No first day for {}", date)))
}

/// `base_daily * weekdays * (1 + uniform(-0.15, 0.15))` for each channel and
/// month, sorted by month then channel.
pub fn generate_with<R: Rng + ?Sized>(
    months: &[NaiveDate],
    rng: &mut R,
) -> Result<Vec<ChannelRevenueRow>> {
    let mut rows = Vec::with_capacity(months.len() * CHANNELS.len());
    for month in months {
        let first_date = first_of_month(*month)?;
        let weekdays = weekdays_in_month(month.year(), month.month()) as f64;
        for channel in CHANNELS {
            rows.push(ChannelRevenueRow {
                month_year: month.format("%b %Y").to_string(),
                first_date,
                channel: channel.name.to_string(),
                category: channel.category.to_string(),
                value: round2(vary(channel.base_daily * weekdays, CHANNEL_VARIATION, rng)),
            });
        }
    }

    rows.sort_by(|a, b| (a.first_date, &a.channel).cmp(&(b.first_date, &b.channel)));
    info!(months = months.len(), rows = rows.len(), "Generated channel revenues");
    Ok(rows)
}

/// [`generate_with`] using the thread-local RNG.
pub fn generate(months: &[NaiveDate]) -> Result<Vec<ChannelRevenueRow>> {
    generate_with(months, &mut thread_rng())
}

/// Revenue recorded for `channel` in the month containing `month`.
pub fn revenue_for(rows: &[ChannelRevenueRow], channel: &str, month: NaiveDate) -> Option<f64> {
    rows.iter()
        .find(|r| {
            r.channel == channel
                && r.first_date.year() == month.year()
                && r.first_date.month() == month.month()
        })
        .map(|r| r.value)
}
