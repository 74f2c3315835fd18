//! Application settings: defaults, optional TOML file, CLI overrides on top.
//!
//! Decimal fields are written as strings in the file:
//!
//! ```toml
//! service_url = "https://identity.example.com"
//! request_timeout_secs = 10
//! liters_per_cm = "2"
//! feed_rate = "0.02"
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use aqua_core::calc::{DietConfig, StockingConfig};
use aqua_identity::IdentityConfig;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Identity service base URL.
    pub service_url: String,
    /// Per-request timeout for identity calls.
    pub request_timeout_secs: u64,
    /// Stocking rule: liters of water per centimeter of adult fish.
    pub liters_per_cm: Decimal,
    /// Diet rule: daily feed as a fraction of body weight.
    pub feed_rate: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: "https://identity.example.com".to_string(),
            request_timeout_secs: 10,
            liters_per_cm: StockingConfig::default().liters_per_cm,
            feed_rate: DietConfig::default().feed_rate,
        }
    }
}

impl Settings {
    pub fn identity(&self) -> IdentityConfig {
        IdentityConfig {
            base_url: self.service_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    pub fn stocking(&self) -> StockingConfig {
        StockingConfig {
            liters_per_cm: self.liters_per_cm,
        }
    }

    pub fn diet(&self) -> DietConfig {
        DietConfig {
            feed_rate: self.feed_rate,
        }
    }
}

/// Loads settings from `path`. No path, or a path that does not exist,
/// yields the defaults; an unreadable or malformed file is an error.
pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    if !path.exists() {
        warn!(path = %path.display(), "config file not found, using defaults");
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file '{}'", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_match_worksheet_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.liters_per_cm, Decimal::TWO);
        assert_eq!(settings.feed_rate, dec!(0.02));
        assert_eq!(settings.identity().timeout, Duration::from_secs(10));
    }

    #[test]
    fn parses_partial_toml_over_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            service_url = "https://id.internal"
            liters_per_cm = "1.5"
            "#,
        )
        .unwrap();
        assert_eq!(settings.service_url, "https://id.internal");
        assert_eq!(settings.liters_per_cm, dec!(1.5));
        // Untouched fields keep their defaults.
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.feed_rate, dec!(0.02));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = load_or_default(Some(Path::new("/nonexistent/aquacalc.toml"))).unwrap();
        assert_eq!(settings.service_url, Settings::default().service_url);
    }
}
