//! Point-of-sale transaction generator.
//!
//! Every operating day, each location rings up its fixed daily volume of
//! transactions. A transaction carries one to four line items sampled from
//! the menu, a single timestamp, customer, till operator and payment method.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rand::prelude::*;
use tracing::{debug, info};

use crate::catalog::menu::{
    self, Category, MenuItem, ModifierRule, Size, BATCH_FILTER_COFFEE, BLACK_VARIANTS,
    CATEGORY_WEIGHTS, HOT_COFFEE_MODIFIERS, ICED_DRINK_WEIGHTS, LONG_MACHIATO,
    LONG_MACHIATO_MODIFIERS, MACHIATO_MODIFIERS, MILK_TYPES, PAYMENT_METHODS,
};
use crate::catalog::staff::{
    Location, TillShift, DEFAULT_TILL_EMPLOYEE, FIRST_NAMES, LOCATIONS, TILL_STAFF,
};
use crate::error::{FixtureError, Result};
use crate::models::LineItem;
use crate::sampling::{chance, pick_pair, pick_uniform, pick_weighted, round2, uniform_int, uniform_money};

/// Share of transactions without a customer name.
const ANONYMOUS_CUSTOMER_CHANCE: f64 = 0.15;

/// Batch/filter coffee is only brewed between these times (inclusive).
const FILTER_WINDOW: ((u32, u32), (u32, u32)) = ((8, 15), (13, 45));

/// Fallback windows `(hour, first minute, last minute)` outside the peaks.
const OFF_PEAK_WINDOWS: &[(u32, u32, u32)] = &[
    (6, 30, 59),
    (7, 0, 59),
    (10, 0, 59),
    (11, 0, 59),
    (14, 0, 30),
];

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

/// Next transaction and order numbers. Threaded through a run by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub transaction: u32,
    pub order: u32,
}

impl Default for Counters {
    fn default() -> Self {
        Self { transaction: 1, order: 1 }
    }
}

/// `TXN-{YYYYMMDD}-{counter:04}`.
pub fn transaction_id(date: NaiveDate, counter: u32) -> String {
    format!("TXN-{}-{:04}", date.format("%Y%m%d"), counter)
}

/// `ORD-{VARIANT}-{counter:04}` with the variant uppercased and spaces,
/// `&`, `-` and `/` removed.
pub fn order_id(variant: &str, counter: u32) -> String {
    let cleaned: String = variant
        .to_uppercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '&' | '-' | '/'))
        .collect();
    format!("ORD-{}-{:04}", cleaned, counter)
}

// ---------------------------------------------------------------------------
// Line item sampling
// ---------------------------------------------------------------------------

/// A menu draw before pricing and quantity.
#[derive(Debug, Clone, Copy)]
pub struct MenuDraw {
    pub item: &'static MenuItem,
    pub variant: &'static str,
    pub size: Option<Size>,
    pub milk: Option<&'static str>,
    pub modifiers: &'static [&'static str],
}

impl MenuDraw {
    pub fn is_batch_filter(&self) -> bool {
        self.variant == BATCH_FILTER_COFFEE
    }
}

/// 70% one item, 25% two, otherwise three or four.
pub fn item_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
    let roll: f64 = rng.gen();
    if roll < 0.70 {
        1
    } else if roll < 0.95 {
        2
    } else {
        uniform_int(3, 4, rng) as usize
    }
}

fn pick_item<R: Rng + ?Sized>(category: Category, rng: &mut R) -> Result<&'static MenuItem> {
    let items = menu::items_in(category);
    let picked = if category == Category::IcedDrinks {
        let weights: Vec<f64> = items
            .iter()
            .map(|item| {
                ICED_DRINK_WEIGHTS
                    .iter()
                    .find(|(name, _)| *name == item.name)
                    .map(|(_, w)| *w)
                    .unwrap_or(1.0)
            })
            .collect();
        pick_weighted(&items, &weights, rng)
    } else {
        pick_uniform(&items, rng)
    };
    picked
        .copied()
        .ok_or_else(|| FixtureError::NotFound(format!("No menu items in category '{}'", category)))
}

fn pick_variant<R: Rng + ?Sized>(item: &MenuItem, rng: &mut R) -> Result<&'static str> {
    let picked = match item.variant_weights {
        Some(weights) => pick_weighted(item.variants, weights, rng),
        None => pick_uniform(item.variants, rng),
    };
    picked
        .copied()
        .ok_or_else(|| FixtureError::NotFound(format!("Menu item '{}' has no variants", item.name)))
}

fn pick_milk<R: Rng + ?Sized>(item: &MenuItem, variant: &str, rng: &mut R) -> Option<&'static str> {
    if !item.category.is_drink() || !item.takes_milk || BLACK_VARIANTS.contains(&variant) {
        return None;
    }
    pick_pair(MILK_TYPES, rng).copied()
}

fn pick_modifiers<R: Rng + ?Sized>(
    item: &MenuItem,
    variant: &str,
    rng: &mut R,
) -> &'static [&'static str] {
    let picked = match item.modifiers {
        ModifierRule::None => None,
        ModifierRule::Uniform(options) => pick_uniform(options, rng),
        ModifierRule::HotCoffee if variant == LONG_MACHIATO => pick_pair(LONG_MACHIATO_MODIFIERS, rng),
        ModifierRule::HotCoffee if variant.contains("Machiato") => pick_uniform(MACHIATO_MODIFIERS, rng),
        ModifierRule::HotCoffee => pick_uniform(HOT_COFFEE_MODIFIERS, rng),
    };
    picked.copied().unwrap_or(&[])
}

/// Modifier list as a JSON array with `", "` between elements.
pub fn modifiers_json(modifiers: &[&str]) -> Result<String> {
    let quoted = modifiers
        .iter()
        .map(serde_json::to_string)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(format!("[{}]", quoted.join(", ")))
}

/// Draw category, item, variant, size, milk and modifiers for one line.
pub fn draw_menu_item<R: Rng + ?Sized>(rng: &mut R) -> Result<MenuDraw> {
    let category = pick_pair(CATEGORY_WEIGHTS, rng)
        .copied()
        .unwrap_or(Category::HotDrinks);
    let item = pick_item(category, rng)?;
    let variant = pick_variant(item, rng)?;

    let size = if variant == BATCH_FILTER_COFFEE {
        None
    } else {
        pick_uniform(item.sizes, rng).copied().flatten()
    };

    Ok(MenuDraw {
        item,
        variant,
        size,
        milk: pick_milk(item, variant, rng),
        modifiers: pick_modifiers(item, variant, rng),
    })
}

/// Unit price for an item and size. A point range yields its exact value.
pub fn unit_price<R: Rng + ?Sized>(item: &MenuItem, size: Option<Size>, rng: &mut R) -> Result<f64> {
    let band = item.price_band(size).ok_or_else(|| {
        FixtureError::NotFound(format!(
            "No price for '{}' in size {}",
            item.name,
            size.map(|s| s.name()).unwrap_or("none")
        ))
    })?;
    if band.low == band.high {
        return Ok(band.low);
    }
    Ok(uniform_money(band.low, band.high, rng))
}

// ---------------------------------------------------------------------------
// Timestamps and staff
// ---------------------------------------------------------------------------

fn at(date: NaiveDate, hour: u32, minute: u32, second: u32) -> Result<NaiveDateTime> {
    NaiveTime::from_hms_opt(hour, minute, second)
        .map(|time| date.and_time(time))
        .ok_or_else(|| {
            FixtureError::InvalidArgument(format!("Invalid time {:02}:{:02}:{:02}", hour, minute, second))
        })
}

/// Transaction timestamp on `date`.
///
/// Batch/filter orders land on a whole minute inside the filter window.
/// Everything else follows the trading pattern: 40% in the 08:00 rush, 30%
/// over lunch (12:00-13:59) and the rest spread over the quieter hours.
pub fn transaction_time<R: Rng + ?Sized>(
    date: NaiveDate,
    batch_filter: bool,
    rng: &mut R,
) -> Result<NaiveDateTime> {
    if batch_filter {
        let ((sh, sm), (eh, em)) = FILTER_WINDOW;
        let minutes = uniform_int(sh * 60 + sm, eh * 60 + em, rng);
        return at(date, minutes / 60, minutes % 60, 0);
    }

    let roll: f64 = rng.gen();
    let (hour, minute) = if roll < 0.40 {
        (uniform_int(8, 9, rng), uniform_int(0, 59, rng))
    } else if roll < 0.70 {
        (uniform_int(12, 13, rng), uniform_int(0, 59, rng))
    } else {
        let (hour, first, last) = pick_uniform(OFF_PEAK_WINDOWS, rng)
            .copied()
            .unwrap_or((10, 0, 59));
        (hour, uniform_int(first, last, rng))
    };
    at(date, hour, minute, uniform_int(0, 59, rng))
}

/// Till operator for a sale at `time`. Morning operators cover until noon,
/// afternoon operators from noon; all-day operators are always eligible.
pub fn till_employee<R: Rng + ?Sized>(time: NaiveDateTime, rng: &mut R) -> &'static str {
    let morning = (6..12).contains(&time.hour());
    let eligible: Vec<&'static str> = TILL_STAFF
        .iter()
        .filter(|(_, shift)| match shift {
            TillShift::AllDay => true,
            TillShift::Morning => morning,
            TillShift::Afternoon => !morning,
        })
        .map(|(id, _)| *id)
        .collect();
    pick_uniform(&eligible, rng)
        .copied()
        .unwrap_or(DEFAULT_TILL_EMPLOYEE)
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Assemble one transaction at `location` on `date`.
///
/// Returns the line items and the counters to use for the next transaction.
pub fn generate_transaction<R: Rng + ?Sized>(
    date: NaiveDate,
    location: &Location,
    counters: Counters,
    rng: &mut R,
) -> Result<(Vec<LineItem>, Counters)> {
    let draws = (0..item_count(rng))
        .map(|_| draw_menu_item(rng))
        .collect::<Result<Vec<_>>>()?;

    let datetime = transaction_time(date, draws.iter().any(MenuDraw::is_batch_filter), rng)?;
    let customer_name = if chance(ANONYMOUS_CUSTOMER_CHANCE, rng) {
        None
    } else {
        pick_uniform(FIRST_NAMES, rng).map(|name| name.to_string())
    };
    let payment_method = pick_pair(PAYMENT_METHODS, rng).copied().unwrap_or("card");
    let employee_id = till_employee(datetime, rng);
    let txn_id = transaction_id(date, counters.transaction);

    let mut order = counters.order;
    let mut lines = Vec::with_capacity(draws.len());
    for draw in draws {
        let quantity = if chance(0.80, rng) { 1 } else { 2 };
        let price = unit_price(draw.item, draw.size, rng)?;
        lines.push(LineItem {
            transaction_id: txn_id.clone(),
            order_id: order_id(draw.variant, order),
            transaction_datetime: datetime,
            category_name: draw.item.category,
            item_name: draw.item.name.to_string(),
            variation_name: draw.variant.to_string(),
            size: draw.size,
            milk_type: draw.milk.map(str::to_string),
            quantity,
            unit_price: price,
            line_total: round2(price * quantity as f64),
            modifiers: modifiers_json(draw.modifiers)?,
            employee_id: employee_id.to_string(),
            payment_method: payment_method.to_string(),
            customer_name: customer_name.clone(),
            location_id: location.id.to_string(),
        });
        order += 1;
    }

    let next = Counters {
        transaction: counters.transaction + 1,
        order,
    };
    Ok((lines, next))
}

/// Every location's transactions for every day in `days`, sorted by
/// timestamp (stable).
pub fn generate_with<R: Rng + ?Sized>(days: &[NaiveDate], rng: &mut R) -> Result<Vec<LineItem>> {
    let mut lines = Vec::new();
    let mut counters = Counters::default();

    for date in days {
        for location in LOCATIONS {
            for _ in 0..location.daily_transactions {
                let (batch, next) = generate_transaction(*date, location, counters, rng)?;
                lines.extend(batch);
                counters = next;
            }
        }
        debug!(%date, transactions = counters.transaction - 1, "POS day complete");
    }

    lines.sort_by_key(|line| line.transaction_datetime);
    info!(
        days = days.len(),
        transactions = counters.transaction - 1,
        line_items = lines.len(),
        "Generated POS transactions"
    );
    Ok(lines)
}

/// [`generate_with`] using the thread-local RNG.
pub fn generate(days: &[NaiveDate]) -> Result<Vec<LineItem>> {
    generate_with(days, &mut thread_rng())
}
