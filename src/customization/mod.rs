//! Customizations
//!
//! Optional add-ons offered on a product page. Each option carries either a flat cost or a
//! per-unit cost.

use rusty_money::{
    Money,
    iso::{Currency, PKR},
};
use thiserror::Error;

pub mod selection;

pub use selection::CustomizationSelection;

/// Errors raised while building a [`Catalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// An option with an empty key was supplied.
    #[error("customization key must not be empty")]
    EmptyKey,

    /// Two options share a key.
    #[error("duplicate customization key: {0}")]
    DuplicateKey(String),

    /// An option's unit cost is below zero.
    #[error("customization {0} has a negative unit cost")]
    NegativeCost(String),

    /// An option is priced in a different currency (key, option currency, catalog currency).
    #[error("customization {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),
}

/// A catalog-defined add-on.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomizationOption<'a> {
    /// Stable key used by selections
    pub key: String,

    /// Display name
    pub label: String,

    /// Short description
    pub description: String,

    /// Cost of the option, or of one unit for quantity-based options
    pub unit_cost: Money<'a, Currency>,

    /// Whether the cost is multiplied by a selected quantity
    pub quantity_based: bool,
}

impl<'a> CustomizationOption<'a> {
    /// An option charged once when enabled.
    pub fn flat(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        unit_cost: Money<'a, Currency>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
            unit_cost,
            quantity_based: false,
        }
    }

    /// An option charged per selected unit.
    pub fn per_unit(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        unit_cost: Money<'a, Currency>,
    ) -> Self {
        Self {
            quantity_based: true,
            ..Self::flat(key, label, description, unit_cost)
        }
    }
}

/// Ordered, key-unique set of customization options in a single currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<'a> {
    options: Vec<CustomizationOption<'a>>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            options: Vec::new(),
            currency,
        }
    }

    /// Create a catalog from `options`, in order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] for the first option that [`Catalog::push`] rejects.
    pub fn with_options(
        options: impl IntoIterator<Item = CustomizationOption<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(currency);

        options
            .into_iter()
            .try_for_each(|option| catalog.push(option))?;

        Ok(catalog)
    }

    /// Append an option.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::EmptyKey`]: the key is empty.
    /// - [`CatalogError::DuplicateKey`]: the key is already in the catalog.
    /// - [`CatalogError::NegativeCost`]: the unit cost is below zero.
    /// - [`CatalogError::CurrencyMismatch`]: the unit cost is in another currency.
    pub fn push(&mut self, option: CustomizationOption<'a>) -> Result<(), CatalogError> {
        if option.key.is_empty() {
            return Err(CatalogError::EmptyKey);
        }

        if self.get(&option.key).is_some() {
            return Err(CatalogError::DuplicateKey(option.key));
        }

        if option.unit_cost.to_minor_units() < 0 {
            return Err(CatalogError::NegativeCost(option.key));
        }

        let option_currency = option.unit_cost.currency();

        if option_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                option.key,
                option_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        self.options.push(option);

        Ok(())
    }

    /// Look up an option by key.
    pub fn get(&self, key: &str) -> Option<&CustomizationOption<'a>> {
        self.options.iter().find(|option| option.key == key)
    }

    /// Iterate over options in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CustomizationOption<'a>> {
        self.options.iter()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the catalog has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Currency all options are priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl Catalog<'static> {
    /// The storefront's built-in catalog, priced in PKR.
    pub fn default_pkr() -> Self {
        Self {
            options: vec![
                CustomizationOption::flat(
                    "fabric_upgrade",
                    "Fabric Upgrade",
                    "Upgrade to premium pure fabric",
                    Money::from_minor(200_000, PKR),
                ),
                CustomizationOption::flat(
                    "custom_embroidery",
                    "Custom Embroidery",
                    "Hand embroidery on neckline and sleeves",
                    Money::from_minor(350_000, PKR),
                ),
                CustomizationOption::flat(
                    "express_stitching",
                    "Express Stitching",
                    "Stitched and dispatched within 5 days",
                    Money::from_minor(150_000, PKR),
                ),
                CustomizationOption::per_unit(
                    "additional_accessories",
                    "Additional Accessories",
                    "Matching dupatta pins, buttons or tassels",
                    Money::from_minor(50_000, PKR),
                ),
            ],
            currency: PKR,
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use super::*;

    fn embroidery(cost: i64) -> CustomizationOption<'static> {
        CustomizationOption::flat("embroidery", "Embroidery", "", Money::from_minor(cost, PKR))
    }

    #[test]
    fn default_catalog_is_valid() -> TestResult {
        let builtin = Catalog::default_pkr();
        let rebuilt = Catalog::with_options(builtin.iter().cloned(), PKR)?;

        assert_eq!(rebuilt, builtin);
        assert_eq!(builtin.len(), 4);

        Ok(())
    }

    #[test]
    fn push_rejects_duplicate_keys() -> TestResult {
        let mut catalog = Catalog::new(PKR);

        catalog.push(embroidery(100))?;

        assert_eq!(
            catalog.push(embroidery(200)),
            Err(CatalogError::DuplicateKey("embroidery".to_string()))
        );
        assert_eq!(catalog.len(), 1);

        Ok(())
    }

    #[test]
    fn push_rejects_empty_key_and_negative_cost() {
        let mut catalog = Catalog::new(PKR);
        let unnamed = CustomizationOption::flat("", "Unnamed", "", Money::from_minor(1, PKR));

        assert_eq!(catalog.push(unnamed), Err(CatalogError::EmptyKey));
        assert_eq!(
            catalog.push(embroidery(-1)),
            Err(CatalogError::NegativeCost("embroidery".to_string()))
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn push_rejects_other_currencies() {
        let mut catalog = Catalog::new(PKR);
        let option =
            CustomizationOption::flat("gift_wrap", "Gift Wrap", "", Money::from_minor(300, GBP));

        assert_eq!(
            catalog.push(option),
            Err(CatalogError::CurrencyMismatch(
                "gift_wrap".to_string(),
                GBP.iso_alpha_code,
                PKR.iso_alpha_code
            ))
        );
    }

    #[test]
    fn per_unit_marks_option_quantity_based() {
        let option = CustomizationOption::per_unit("pins", "Pins", "", Money::from_minor(500, PKR));

        assert!(option.quantity_based);
    }
}
