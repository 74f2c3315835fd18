//! Water volume calculation for a rectangular tank.
//!
//! Volume in liters is `length × width × height / 1000` with dimensions in
//! centimeters, scaled by a fill factor that accounts for substrate,
//! hardscape, and the air gap below the rim.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use aqua_core::calc::volume::{TankDimensions, water_volume};
//!
//! let dims = TankDimensions {
//!     length_cm: dec!(100),
//!     width_cm: dec!(40),
//!     height_cm: dec!(50),
//! };
//!
//! // A full tank holds 200 L; at 90% fill that is 180 L.
//! assert_eq!(water_volume(&dims, dec!(0.90)).unwrap(), dec!(180.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calc::common::round_half_up;

/// Errors from the volume calculator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VolumeError {
    /// A tank dimension was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension {
        field: &'static str,
        value: Decimal,
    },

    /// The fill factor must be in (0, 1].
    #[error("fill factor must be between 0 and 1, got {0}")]
    InvalidFillFactor(Decimal),
}

/// Interior dimensions of a rectangular tank, in centimeters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TankDimensions {
    pub length_cm: Decimal,
    pub width_cm: Decimal,
    pub height_cm: Decimal,
}

impl TankDimensions {
    /// Checks that all three dimensions are positive.
    pub fn validate(&self) -> Result<(), VolumeError> {
        for (field, value) in [
            ("length", self.length_cm),
            ("width", self.width_cm),
            ("height", self.height_cm),
        ] {
            if value <= Decimal::ZERO {
                return Err(VolumeError::NonPositiveDimension { field, value });
            }
        }
        Ok(())
    }
}

/// The conventional fill factor when the user does not supply one.
pub fn default_fill_factor() -> Decimal {
    Decimal::new(90, 2) // 0.90
}

/// Calculates the water volume of a tank in liters, rounded to two decimal
/// places.
pub fn water_volume(dims: &TankDimensions, fill_factor: Decimal) -> Result<Decimal, VolumeError> {
    dims.validate()?;
    if fill_factor <= Decimal::ZERO || fill_factor > Decimal::ONE {
        return Err(VolumeError::InvalidFillFactor(fill_factor));
    }

    let cubic_cm = dims.length_cm * dims.width_cm * dims.height_cm;
    let liters = cubic_cm / Decimal::from(1000) * fill_factor;
    Ok(round_half_up(liters))
}
