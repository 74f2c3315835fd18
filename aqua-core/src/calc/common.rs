//! Shared helpers for the calculator worksheets.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use aqua_core::calc::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(12.344)), dec!(12.34));
/// assert_eq!(round_half_up(dec!(12.345)), dec!(12.35));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// One US gallon in liters.
pub fn liters_per_gallon() -> Decimal {
    Decimal::new(378_541, 5) // 3.78541
}

/// Converts liters to US gallons, rounded to two decimal places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use aqua_core::calc::common::liters_to_gallons;
///
/// assert_eq!(liters_to_gallons(dec!(100)), dec!(26.42));
/// ```
pub fn liters_to_gallons(liters: Decimal) -> Decimal {
    round_half_up(liters / liters_per_gallon())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(round_half_up(dec!(0.005)), dec!(0.01));
        assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
    }

    #[test]
    fn gallon_conversion() {
        assert_eq!(liters_to_gallons(dec!(3.78541)), dec!(1.00));
        assert_eq!(liters_to_gallons(Decimal::ZERO), dec!(0.00));
    }
}
