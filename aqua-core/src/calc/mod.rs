//! Aquarium calculator worksheets.
//!
//! Each calculator follows the same shape: a configuration struct validated
//! up front, a calculation entry point, and a result struct carrying the
//! intermediate values a screen may want to display.

pub mod common;
pub mod diet;
pub mod stocking;
pub mod volume;

pub use diet::{DietConfig, DietError, DietResult, daily_feed};
pub use stocking::{StockingConfig, StockingError, StockingResult, StockingWorksheet};
pub use volume::{TankDimensions, VolumeError, water_volume};
