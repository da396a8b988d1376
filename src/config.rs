//! Storefront configuration
//!
//! Currency, price-filter ceiling and customization catalog, loaded from YAML:
//!
//! ```yaml
//! currency: PKR
//! price_ceiling: "100000 PKR"
//! customizations:
//!   - key: fabric_upgrade
//!     label: Fabric Upgrade
//!     description: Upgrade to premium pure fabric
//!     unit_cost: "2000 PKR"
//! ```

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, JPY, PKR, USD},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    customization::{Catalog, CatalogError, CustomizationOption},
    filters::{DEFAULT_PRICE_CEILING, FilterSelection, PriceRange, summary::FilterSummarizer},
};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A price is not in the configured currency (expected, found)
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Invalid customization catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    currency: String,
    price_ceiling: String,
    #[serde(default)]
    customizations: Vec<OptionFile>,
}

#[derive(Debug, Deserialize)]
struct OptionFile {
    key: String,
    label: String,
    #[serde(default)]
    description: String,
    unit_cost: String,
    #[serde(default)]
    quantity_based: bool,
}

/// Storefront configuration
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    currency: &'static Currency,
    price_ceiling: i64,
    catalog: Catalog<'static>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: PKR,
            price_ceiling: DEFAULT_PRICE_CEILING,
            catalog: Catalog::default_pkr(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        debug!(path = %path.display(), "loading storefront config");

        Self::from_yaml_str(&contents)
    }

    /// Parse configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, a price or currency is invalid, or the
    /// customization catalog is rejected.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_norway::from_str(yaml)?;
        let currency = parse_currency(&file.currency)?;
        let price_ceiling = parse_price_in(&file.price_ceiling, currency)?;

        let options = file
            .customizations
            .into_iter()
            .map(|option| {
                let unit_cost = parse_price_in(&option.unit_cost, currency)?;

                Ok::<_, ConfigError>(CustomizationOption {
                    key: option.key,
                    label: option.label,
                    description: option.description,
                    unit_cost: Money::from_minor(unit_cost, currency),
                    quantity_based: option.quantity_based,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Catalog::with_options(options, currency)?;

        debug!(
            currency = currency.iso_alpha_code,
            price_ceiling,
            customizations = catalog.len(),
            "parsed storefront config"
        );

        Ok(Self {
            currency,
            price_ceiling,
            catalog,
        })
    }

    /// Store currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Upper bound of the price filter in minor units.
    pub fn price_ceiling(&self) -> i64 {
        self.price_ceiling
    }

    /// Customization catalog.
    pub fn catalog(&self) -> &Catalog<'static> {
        &self.catalog
    }

    /// An empty filter selection spanning the configured price range.
    pub fn filter_selection(&self) -> FilterSelection {
        FilterSelection::new(PriceRange::up_to(self.price_ceiling))
    }

    /// A summarizer formatting prices in the store currency.
    pub fn summarizer(&self) -> FilterSummarizer {
        FilterSummarizer::new(self.currency)
    }
}

/// Look up a supported ISO currency by code.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownCurrency`] for codes the storefront does not trade in.
pub fn parse_currency(code: &str) -> Result<&'static Currency, ConfigError> {
    match code.trim() {
        "PKR" => Ok(PKR),
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        "JPY" => Ok(JPY),
        other => Err(ConfigError::UnknownCurrency(other.to_string())),
    }
}

/// Parse price string (e.g., "2000 PKR") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the amount is not
/// a non-negative decimal, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), ConfigError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, code] = parts.as_slice() else {
        return Err(ConfigError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| ConfigError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(ConfigError::InvalidPrice(s.to_string()));
    }

    let currency = parse_currency(code)?;

    let minor_units = 10_i64
        .checked_pow(currency.exponent)
        .and_then(|scale| amount.checked_mul(Decimal::from(scale)))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| ConfigError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

fn parse_price_in(s: &str, currency: &'static Currency) -> Result<i64, ConfigError> {
    let (minor_units, found) = parse_price(s)?;

    if found == currency {
        Ok(minor_units)
    } else {
        Err(ConfigError::CurrencyMismatch(
            currency.iso_alpha_code.to_string(),
            found.iso_alpha_code.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const YAML: &str = r#"
currency: PKR
price_ceiling: "50000 PKR"
customizations:
  - key: fabric_upgrade
    label: Fabric Upgrade
    unit_cost: "2000 PKR"
  - key: additional_accessories
    label: Additional Accessories
    description: Per piece
    unit_cost: "500 PKR"
    quantity_based: true
"#;

    #[test]
    fn parses_catalog_in_order() -> TestResult {
        let config = StorefrontConfig::from_yaml_str(YAML)?;

        let keys: Vec<&str> = config.catalog().iter().map(|option| option.key.as_str()).collect();

        assert_eq!(keys, ["fabric_upgrade", "additional_accessories"]);
        assert_eq!(config.price_ceiling(), 5_000_000);
        assert_eq!(config.currency(), PKR);

        let accessories = config
            .catalog()
            .get("additional_accessories")
            .ok_or("missing option")?;

        assert!(accessories.quantity_based);
        assert_eq!(accessories.unit_cost, Money::from_minor(50_000, PKR));

        Ok(())
    }

    #[test]
    fn filter_selection_spans_configured_ceiling() -> TestResult {
        let config = StorefrontConfig::from_yaml_str(YAML)?;
        let selection = config.filter_selection();

        assert_eq!(selection.full_range(), PriceRange::new(0, 5_000_000)?);
        assert!(selection.is_cleared());

        Ok(())
    }

    #[test]
    fn rejects_prices_in_other_currencies() {
        let yaml = "currency: PKR\nprice_ceiling: \"10 GBP\"\n";

        let result = StorefrontConfig::from_yaml_str(yaml);

        assert!(matches!(
            result,
            Err(ConfigError::CurrencyMismatch(expected, found))
                if expected == "PKR" && found == "GBP"
        ));
    }

    #[test]
    fn rejects_duplicate_customizations() {
        let yaml = r#"
currency: PKR
price_ceiling: "100 PKR"
customizations:
  - { key: lining, label: Lining, unit_cost: "1 PKR" }
  - { key: lining, label: Lining, unit_cost: "2 PKR" }
"#;

        let result = StorefrontConfig::from_yaml_str(yaml);

        assert!(matches!(
            result,
            Err(ConfigError::Catalog(CatalogError::DuplicateKey(key))) if key == "lining"
        ));
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99PKR");

        assert!(matches!(result, Err(ConfigError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        let result = parse_price("-5 PKR");

        assert!(matches!(result, Err(ConfigError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(ConfigError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_converts_to_minor_units() -> TestResult {
        assert_eq!(parse_price("1250.5 PKR")?, (125_050, PKR));

        Ok(())
    }

    #[test]
    fn parse_price_scales_by_currency_exponent() -> TestResult {
        assert_eq!(parse_price("1500 JPY")?, (1_500, JPY));
        assert_eq!(parse_price("15.5 USD")?, (1_550, USD));

        Ok(())
    }

    #[test]
    fn zero_exponent_config_round_trips_through_formatting() -> TestResult {
        let yaml = "currency: JPY\nprice_ceiling: \"20000 JPY\"\n";
        let config = StorefrontConfig::from_yaml_str(yaml)?;

        assert_eq!(config.price_ceiling(), 20_000);
        assert_eq!(
            crate::format::format_money(&Money::from_minor(config.price_ceiling(), JPY)),
            "JPY 20,000"
        );

        Ok(())
    }

    #[test]
    fn default_config_uses_builtin_catalog() {
        let config = StorefrontConfig::default();

        assert_eq!(config.catalog(), &Catalog::default_pkr());
        assert_eq!(config.price_ceiling(), DEFAULT_PRICE_CEILING);
    }
}
