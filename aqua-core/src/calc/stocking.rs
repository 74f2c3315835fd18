//! Fish stocking capacity worksheet.
//!
//! Uses the classic rule of thumb: a tank supports a fixed number of liters
//! per centimeter of adult fish length. The worksheet answers "how many fish
//! of this species fit in this tank", either from a known water volume or
//! from the tank's dimensions.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use aqua_core::calc::stocking::{StockingConfig, StockingWorksheet};
//!
//! let worksheet = StockingWorksheet::new(StockingConfig::default()).unwrap();
//!
//! // 100 L at 2 L/cm supports 50 cm of fish; ten 5 cm tetras.
//! let result = worksheet.by_volume(dec!(100), dec!(5)).unwrap();
//! assert_eq!(result.capacity_cm, dec!(50.00));
//! assert_eq!(result.max_fish, 10);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calc::common::round_half_up;
use crate::calc::volume::{TankDimensions, VolumeError, water_volume};

/// Errors from the stocking worksheet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StockingError {
    /// Liters-per-centimeter must be positive.
    #[error("liters per cm of fish must be positive, got {0}")]
    InvalidLitersPerCm(Decimal),

    /// The water volume must be positive.
    #[error("water volume must be positive, got {0}")]
    NonPositiveVolume(Decimal),

    /// The adult fish length must be positive.
    #[error("adult fish length must be positive, got {0}")]
    NonPositiveAdultLength(Decimal),

    /// The by-dimensions variant failed to compute a volume.
    #[error(transparent)]
    Volume(#[from] VolumeError),
}

/// Configuration for the stocking rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockingConfig {
    /// Liters of water required per centimeter of adult fish length.
    pub liters_per_cm: Decimal,
}

impl Default for StockingConfig {
    fn default() -> Self {
        Self {
            liters_per_cm: Decimal::TWO,
        }
    }
}

impl StockingConfig {
    /// Checks that the rule parameter is usable.
    pub fn validate(&self) -> Result<(), StockingError> {
        if self.liters_per_cm <= Decimal::ZERO {
            return Err(StockingError::InvalidLitersPerCm(self.liters_per_cm));
        }
        Ok(())
    }
}

/// Result of a stocking calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockingResult {
    /// Water volume the calculation was based on, in liters.
    pub usable_volume_liters: Decimal,
    /// Total centimeters of adult fish the volume supports.
    pub capacity_cm: Decimal,
    /// Whole number of fish of the given adult length.
    pub max_fish: u32,
}

/// Stocking worksheet bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct StockingWorksheet {
    config: StockingConfig,
}

impl StockingWorksheet {
    /// Creates a worksheet, validating the configuration first.
    pub fn new(config: StockingConfig) -> Result<Self, StockingError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Stocking capacity from a known water volume.
    pub fn by_volume(
        &self,
        volume_liters: Decimal,
        adult_length_cm: Decimal,
    ) -> Result<StockingResult, StockingError> {
        if volume_liters <= Decimal::ZERO {
            return Err(StockingError::NonPositiveVolume(volume_liters));
        }
        if adult_length_cm <= Decimal::ZERO {
            return Err(StockingError::NonPositiveAdultLength(adult_length_cm));
        }

        let capacity_cm = round_half_up(volume_liters / self.config.liters_per_cm);
        let max_fish = (capacity_cm / adult_length_cm)
            .floor()
            .to_u32()
            .unwrap_or_else(|| {
                warn!(%capacity_cm, %adult_length_cm, "fish count out of range, clamping");
                u32::MAX
            });

        if max_fish == 0 {
            warn!(%volume_liters, %adult_length_cm, "tank too small for even one fish");
        }

        Ok(StockingResult {
            usable_volume_liters: round_half_up(volume_liters),
            capacity_cm,
            max_fish,
        })
    }

    /// Stocking capacity from tank dimensions: computes the water volume,
    /// then applies the by-volume rule to it.
    pub fn by_dimensions(
        &self,
        dims: &TankDimensions,
        fill_factor: Decimal,
        adult_length_cm: Decimal,
    ) -> Result<StockingResult, StockingError> {
        let volume = water_volume(dims, fill_factor)?;
        self.by_volume(volume, adult_length_cm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn worksheet() -> StockingWorksheet {
        StockingWorksheet::new(StockingConfig::default()).unwrap()
    }

    #[test]
    fn by_volume_basic_rule() {
        let result = worksheet().by_volume(dec!(120), dec!(6)).unwrap();
        assert_eq!(result.usable_volume_liters, dec!(120.00));
        assert_eq!(result.capacity_cm, dec!(60.00));
        assert_eq!(result.max_fish, 10);
    }

    #[test]
    fn fish_count_is_floored() {
        // 100 L -> 50 cm capacity; 7 cm fish -> 7.14 -> 7 fish.
        let result = worksheet().by_volume(dec!(100), dec!(7)).unwrap();
        assert_eq!(result.max_fish, 7);
    }

    #[test]
    fn tank_too_small_yields_zero_fish() {
        let result = worksheet().by_volume(dec!(5), dec!(10)).unwrap();
        assert_eq!(result.max_fish, 0);
    }

    #[test]
    fn by_dimensions_matches_by_volume_for_same_water() {
        let ws = worksheet();
        let dims = TankDimensions {
            length_cm: dec!(100),
            width_cm: dec!(40),
            height_cm: dec!(50),
        };
        // 200 L at full fill.
        let from_dims = ws.by_dimensions(&dims, Decimal::ONE, dec!(5)).unwrap();
        let from_volume = ws.by_volume(dec!(200), dec!(5)).unwrap();
        assert_eq!(from_dims, from_volume);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let ws = worksheet();
        assert_eq!(
            ws.by_volume(Decimal::ZERO, dec!(5)),
            Err(StockingError::NonPositiveVolume(Decimal::ZERO))
        );
        assert_eq!(
            ws.by_volume(dec!(100), dec!(-1)),
            Err(StockingError::NonPositiveAdultLength(dec!(-1)))
        );
    }

    #[test]
    fn rejects_invalid_config() {
        let err = StockingWorksheet::new(StockingConfig {
            liters_per_cm: Decimal::ZERO,
        })
        .unwrap_err();
        assert_eq!(err, StockingError::InvalidLitersPerCm(Decimal::ZERO));
    }
}
