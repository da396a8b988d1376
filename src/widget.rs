//! Customization widget
//!
//! Stateful owner of a [`CustomizationSelection`] that keeps its [`PriceBreakdown`] current and
//! reports every change to a [`PriceObserver`].

use rusty_money::{Money, iso::Currency};
use tracing::debug;

use crate::{
    customization::{Catalog, CustomizationSelection},
    format::format_money,
    pricing::{PriceBreakdown, PricingError, compose},
};

/// Receives the composed price after every input change.
pub trait PriceObserver {
    /// Called once per change with the complete breakdown.
    fn on_price_change(&mut self, breakdown: &PriceBreakdown<'_>);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PriceObserver for NoopObserver {
    fn on_price_change(&mut self, _breakdown: &PriceBreakdown<'_>) {}
}

impl<F> PriceObserver for F
where
    F: FnMut(&PriceBreakdown<'_>),
{
    fn on_price_change(&mut self, breakdown: &PriceBreakdown<'_>) {
        self(breakdown);
    }
}

/// Price customization widget state.
#[derive(Debug)]
pub struct CustomizationWidget<'a, O: PriceObserver = NoopObserver> {
    catalog: Catalog<'a>,
    base_price: Money<'a, Currency>,
    selection: CustomizationSelection,
    breakdown: PriceBreakdown<'a>,
    observer: O,
}

impl<'a, O: PriceObserver> CustomizationWidget<'a, O> {
    /// Create a widget with nothing selected and report its initial price.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the base price cannot be composed with `catalog`.
    pub fn new(
        base_price: Money<'a, Currency>,
        catalog: Catalog<'a>,
        mut observer: O,
    ) -> Result<Self, PricingError> {
        let selection = CustomizationSelection::for_catalog(&catalog);
        let breakdown = compose(base_price, &catalog, &selection)?;

        observer.on_price_change(&breakdown);

        Ok(Self {
            catalog,
            base_price,
            selection,
            breakdown,
            observer,
        })
    }

    /// Enable or disable an option.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the new selection cannot be composed.
    pub fn toggle(
        &mut self,
        key: &str,
        enabled: bool,
    ) -> Result<&PriceBreakdown<'a>, PricingError> {
        let next = self.selection.toggle(key, enabled);

        self.apply(next, self.base_price)
    }

    /// Change an option's quantity by `delta`.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the new selection cannot be composed.
    pub fn change_quantity(
        &mut self,
        key: &str,
        delta: i64,
    ) -> Result<&PriceBreakdown<'a>, PricingError> {
        let next = self.selection.set_quantity(key, delta);

        self.apply(next, self.base_price)
    }

    /// Replace the base price, e.g. when another product variant is chosen.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the new base price cannot be composed.
    pub fn set_base_price(
        &mut self,
        base_price: Money<'a, Currency>,
    ) -> Result<&PriceBreakdown<'a>, PricingError> {
        let selection = self.selection.clone();

        self.apply(selection, base_price)
    }

    /// Current selection.
    pub fn selection(&self) -> &CustomizationSelection {
        &self.selection
    }

    /// Breakdown for the current selection.
    pub fn breakdown(&self) -> &PriceBreakdown<'a> {
        &self.breakdown
    }

    /// Options offered by this widget.
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// The registered observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn apply(
        &mut self,
        selection: CustomizationSelection,
        base_price: Money<'a, Currency>,
    ) -> Result<&PriceBreakdown<'a>, PricingError> {
        if selection == self.selection && base_price == self.base_price {
            return Ok(&self.breakdown);
        }

        let breakdown = compose(base_price, &self.catalog, &selection)?;

        self.selection = selection;
        self.base_price = base_price;
        self.breakdown = breakdown;

        debug!(
            total = %format_money(&self.breakdown.total_price()),
            lines = self.breakdown.lines().len(),
            "customization price recomposed"
        );

        self.observer.on_price_change(&self.breakdown);

        Ok(&self.breakdown)
    }
}
