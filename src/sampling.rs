//! Random draws used by every generator.
//!
//! All helpers take the RNG explicitly so callers can thread a single
//! generator through a run (or seed one in tests). Weights are plain
//! non-negative numbers and need not sum to one.

use rand::distributions::{Distribution, WeightedIndex};
use rand::prelude::*;

/// Round to two decimal places (cents).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted random pick.
///
/// Falls back to a uniform pick when the weights are unusable (all zero,
/// negative, non-finite or of the wrong length). Returns `None` only for an
/// empty option list.
pub fn pick_weighted<'a, T, R: Rng + ?Sized>(
    options: &'a [T],
    weights: &[f64],
    rng: &mut R,
) -> Option<&'a T> {
    if options.is_empty() {
        return None;
    }
    if weights.len() != options.len() {
        return options.choose(rng);
    }
    match WeightedIndex::new(weights) {
        Ok(dist) => options.get(dist.sample(rng)),
        Err(_) => options.choose(rng),
    }
}

/// Weighted pick over `(option, weight)` pairs.
pub fn pick_pair<'a, T, R: Rng + ?Sized>(pairs: &'a [(T, f64)], rng: &mut R) -> Option<&'a T> {
    if pairs.is_empty() {
        return None;
    }
    let weights: Vec<f64> = pairs.iter().map(|(_, w)| *w).collect();
    match WeightedIndex::new(&weights) {
        Ok(dist) => pairs.get(dist.sample(rng)).map(|(option, _)| option),
        Err(_) => pairs.choose(rng).map(|(option, _)| option),
    }
}

/// Uniform pick, `None` for an empty slice.
pub fn pick_uniform<'a, T, R: Rng + ?Sized>(options: &'a [T], rng: &mut R) -> Option<&'a T> {
    options.choose(rng)
}

/// `true` with probability `frequency` (clamped to `[0, 1]`).
pub fn chance<R: Rng + ?Sized>(frequency: f64, rng: &mut R) -> bool {
    if frequency.is_nan() || frequency <= 0.0 {
        return false;
    }
    if frequency >= 1.0 {
        return true;
    }
    rng.gen::<f64>() < frequency
}

/// Uniform draw in the closed interval `[low, high]`. Bounds may be given in
/// either order; a degenerate interval returns the bound itself.
pub fn uniform<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
    if lo == hi {
        return lo;
    }
    rng.gen_range(lo..=hi)
}

/// Uniform draw in `[low, high]` rounded to cents.
pub fn uniform_money<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    round2(uniform(low, high, rng))
}

/// Uniform integer draw in the closed interval `[low, high]`.
pub fn uniform_int<R: Rng + ?Sized>(low: u32, high: u32, rng: &mut R) -> u32 {
    let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
    rng.gen_range(lo..=hi)
}

/// `base * (1 + uniform(-variation, variation))`.
pub fn vary<R: Rng + ?Sized>(base: f64, variation: f64, rng: &mut R) -> f64 {
    let v = variation.abs();
    base * (1.0 + uniform(-v, v, rng))
}
