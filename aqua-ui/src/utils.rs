use rust_decimal::Decimal;

/// Normalizes numeric input: trims whitespace and removes the comma
/// thousands separator.
fn normalize(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a required decimal field, pushing a message onto `errors` when the
/// field is empty or unparseable.
pub fn parse_required_decimal(
    field: &'static str,
    value: &str,
    errors: &mut Vec<String>,
) -> Option<Decimal> {
    let normalized = normalize(value);
    if normalized.is_empty() {
        errors.push(format!("{field} is required"));
        return None;
    }
    match normalized.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(field, input = %value, "invalid decimal: {e}");
            errors.push(format!("{field} must be a valid number"));
            None
        }
    }
}

/// Parses a required whole-number field.
pub fn parse_required_u32(
    field: &'static str,
    value: &str,
    errors: &mut Vec<String>,
) -> Option<u32> {
    let normalized = normalize(value);
    if normalized.is_empty() {
        errors.push(format!("{field} is required"));
        return None;
    }
    match normalized.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(format!("{field} must be a whole number"));
            None
        }
    }
}

/// Converts a user-entered percentage (e.g. `90`) to a factor (`0.90`).
pub fn percent_to_factor(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn required_decimal_handles_commas_and_whitespace() {
        let mut errors = Vec::new();
        assert_eq!(
            parse_required_decimal("Volume", " 1,234.5 ", &mut errors),
            Some(dec!(1234.5))
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn required_decimal_reports_empty_and_invalid() {
        let mut errors = Vec::new();
        assert_eq!(parse_required_decimal("Volume", "", &mut errors), None);
        assert_eq!(parse_required_decimal("Volume", "abc", &mut errors), None);
        assert_eq!(
            errors,
            vec![
                "Volume is required".to_string(),
                "Volume must be a valid number".to_string(),
            ]
        );
    }

    #[test]
    fn required_u32_rejects_fractions() {
        let mut errors = Vec::new();
        assert_eq!(parse_required_u32("Fish count", "2.5", &mut errors), None);
        assert_eq!(errors, vec!["Fish count must be a whole number".to_string()]);
    }

    #[test]
    fn percent_conversion() {
        assert_eq!(percent_to_factor(dec!(90)), dec!(0.90));
    }
}
