//! Daily feed amount worksheet.
//!
//! Feed is dosed as a fraction of body weight per day. The worksheet scales
//! the per-fish dose by the number of fish in the tank.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use aqua_core::calc::diet::{DietConfig, daily_feed};
//!
//! // Ten 25 g fish at the default 2% of body weight: 0.5 g each, 5 g total.
//! let result = daily_feed(&DietConfig::default(), dec!(25), 10).unwrap();
//! assert_eq!(result.per_fish_g, dec!(0.50));
//! assert_eq!(result.daily_total_g, dec!(5.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calc::common::round_half_up;

/// Errors from the diet worksheet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DietError {
    /// Feed rate must be in (0, 1].
    #[error("feed rate must be between 0 and 1, got {0}")]
    InvalidFeedRate(Decimal),

    /// Body weight must be positive.
    #[error("body weight must be positive, got {0}")]
    NonPositiveBodyWeight(Decimal),

    /// At least one fish must be fed.
    #[error("fish count must be at least 1")]
    ZeroFishCount,
}

/// Configuration for the feed dose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietConfig {
    /// Daily feed as a fraction of body weight.
    pub feed_rate: Decimal,
}

impl Default for DietConfig {
    fn default() -> Self {
        Self {
            feed_rate: Decimal::new(2, 2), // 0.02
        }
    }
}

impl DietConfig {
    pub fn validate(&self) -> Result<(), DietError> {
        if self.feed_rate <= Decimal::ZERO || self.feed_rate > Decimal::ONE {
            return Err(DietError::InvalidFeedRate(self.feed_rate));
        }
        Ok(())
    }
}

/// Result of a feed calculation, in grams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietResult {
    pub per_fish_g: Decimal,
    pub daily_total_g: Decimal,
}

/// Calculates the daily feed amount for `fish_count` fish of the given
/// average body weight.
pub fn daily_feed(
    config: &DietConfig,
    body_weight_g: Decimal,
    fish_count: u32,
) -> Result<DietResult, DietError> {
    config.validate()?;
    if body_weight_g <= Decimal::ZERO {
        return Err(DietError::NonPositiveBodyWeight(body_weight_g));
    }
    if fish_count == 0 {
        return Err(DietError::ZeroFishCount);
    }

    // Round only for display; the total is computed from the exact dose so
    // rounding error does not scale with the fish count.
    let exact_per_fish = body_weight_g * config.feed_rate;
    let total = round_half_up(exact_per_fish * Decimal::from(fish_count));

    Ok(DietResult {
        per_fish_g: round_half_up(exact_per_fish),
        daily_total_g: total,
    })
}
