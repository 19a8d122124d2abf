// src/spacing.rs
//! Resolves a spacing schema into a concrete gap distance.

use crate::chooser;
use crate::core::{Spacing, SpacingRange};
use crate::error::SeedError;
use crate::random::RandomSource;

/// Resolve `spacing` to a distance, drawing from `random` as needed.
/// Fixed numbers pass through untouched; a weighted list first selects
/// one range, then the range resolves like any other.
pub fn calculate(random: &mut dyn RandomSource, spacing: &Spacing) -> Result<f64, SeedError> {
    match spacing {
        Spacing::Fixed(n) => Ok(*n),
        Spacing::Range(range) => Ok(from_range(random, range)),
        Spacing::Weighted(choices) => {
            let range = chooser::choose_among(random, choices)?;
            Ok(from_range(random, &range))
        }
    }
}

fn from_range(random: &mut dyn RandomSource, range: &SpacingRange) -> f64 {
    let value = chooser::random_between(random, range.min, range.max);
    (value / range.round_to).round() * range.round_to
}
