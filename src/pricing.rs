//! Prices
//!
//! Composes a base price and the enabled customizations into a [`PriceBreakdown`].

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::customization::{Catalog, CustomizationSelection};

/// Errors that can occur while composing a price.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The base price is below zero (minor units).
    #[error("base price {0} is negative")]
    NegativeBasePrice(i64),

    /// The base price and the catalog use different currencies (base, catalog).
    #[error("base price has currency {0}, but catalog has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// The cost of an option, or the running total, does not fit in minor units.
    #[error("cost overflow while adding customization {0}")]
    Overflow(String),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Cost contributed by one enabled option.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownLine<'a> {
    /// Option key
    pub key: String,

    /// Option label
    pub label: String,

    /// Units charged; always 1 for flat options
    pub quantity: u32,

    /// Contributed cost
    pub cost: Money<'a, Currency>,
}

/// A total price decomposed into its base and additional components.
///
/// `total_price` is always exactly `base_price + additional_cost`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown<'a> {
    base_price: Money<'a, Currency>,
    additional_cost: Money<'a, Currency>,
    total_price: Money<'a, Currency>,
    lines: Vec<BreakdownLine<'a>>,
}

impl<'a> PriceBreakdown<'a> {
    /// Price before customizations.
    pub fn base_price(&self) -> Money<'a, Currency> {
        self.base_price
    }

    /// Sum of all enabled customizations.
    pub fn additional_cost(&self) -> Money<'a, Currency> {
        self.additional_cost
    }

    /// Base price plus additional cost.
    pub fn total_price(&self) -> Money<'a, Currency> {
        self.total_price
    }

    /// Itemised costs of enabled options, in catalog order.
    pub fn lines(&self) -> &[BreakdownLine<'a>] {
        &self.lines
    }
}

/// Compose `base_price` with the options enabled in `selection`.
///
/// Flat options add their unit cost once. Quantity-based options add `unit_cost × quantity`, so
/// an enabled option with a zero quantity contributes nothing.
///
/// # Errors
///
/// - [`PricingError::NegativeBasePrice`]: the base price is below zero.
/// - [`PricingError::CurrencyMismatch`]: the base price is not in the catalog's currency.
/// - [`PricingError::Overflow`]: a cost does not fit in `i64` minor units.
/// - [`PricingError::Money`]: wrapped money arithmetic error.
pub fn compose<'a>(
    base_price: Money<'a, Currency>,
    catalog: &Catalog<'a>,
    selection: &CustomizationSelection,
) -> Result<PriceBreakdown<'a>, PricingError> {
    let base_minor = base_price.to_minor_units();

    if base_minor < 0 {
        return Err(PricingError::NegativeBasePrice(base_minor));
    }

    let currency = catalog.currency();

    if base_price.currency() != currency {
        return Err(PricingError::CurrencyMismatch(
            base_price.currency().iso_alpha_code,
            currency.iso_alpha_code,
        ));
    }

    let mut lines = Vec::new();
    let mut additional_minor: i64 = 0;

    for option in catalog.iter().filter(|option| selection.is_enabled(&option.key)) {
        let quantity = if option.quantity_based {
            selection.quantity(&option.key)
        } else {
            1
        };

        let overflow = || PricingError::Overflow(option.key.clone());

        let cost_minor = option
            .unit_cost
            .to_minor_units()
            .checked_mul(i64::from(quantity))
            .ok_or_else(overflow)?;

        additional_minor = additional_minor
            .checked_add(cost_minor)
            .ok_or_else(overflow)?;

        lines.push(BreakdownLine {
            key: option.key.clone(),
            label: option.label.clone(),
            quantity,
            cost: Money::from_minor(cost_minor, currency),
        });
    }

    let additional_cost = Money::from_minor(additional_minor, currency);
    let total_price = base_price.add(additional_cost)?;

    Ok(PriceBreakdown {
        base_price,
        additional_cost,
        total_price,
        lines,
    })
}
