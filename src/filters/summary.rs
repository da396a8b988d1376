//! Active filter summaries

use rusty_money::iso::Currency;

use crate::{
    filters::{FilterField, FilterSelection, PriceRange},
    format::format_range,
};

/// Identifies the selection dimension an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    /// The price range
    PriceRange,

    /// One of the multi-value fields
    Field(FilterField),
}

/// The underlying value of an active filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterValue {
    /// Both price bounds, removed together.
    PriceRange(PriceRange),

    /// A single selected value of a field.
    Field {
        /// Field the value belongs to
        field: FilterField,

        /// Selected value
        value: String,
    },
}

/// One removable, user-facing token for a selected constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveFilterEntry {
    raw_value: FilterValue,
    label: String,
    display_value: String,
}

impl ActiveFilterEntry {
    /// Entry for a narrowed price range.
    pub fn price_range(range: PriceRange, currency: &Currency) -> Self {
        Self {
            raw_value: FilterValue::PriceRange(range),
            label: "Price".to_string(),
            display_value: format_range(range.min(), range.max(), currency),
        }
    }

    /// Entry for a single selected field value.
    pub fn field_value(field: FilterField, value: impl Into<String>) -> Self {
        let value = value.into();

        Self {
            display_value: value.clone(),
            label: field.label(),
            raw_value: FilterValue::Field { field, value },
        }
    }

    /// Dimension this entry came from.
    pub fn field_key(&self) -> FilterKey {
        match &self.raw_value {
            FilterValue::PriceRange(_) => FilterKey::PriceRange,
            FilterValue::Field { field, .. } => FilterKey::Field(*field),
        }
    }

    /// Human-readable field name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Underlying value, used for removal.
    pub fn raw_value(&self) -> &FilterValue {
        &self.raw_value
    }

    /// Formatted value for presentation.
    pub fn display_value(&self) -> &str {
        &self.display_value
    }
}

/// Flattens a [`FilterSelection`] into its active filter entries.
#[derive(Debug, Clone)]
pub struct FilterSummarizer {
    currency: &'static Currency,
}

impl FilterSummarizer {
    /// Create a summarizer that formats prices in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self { currency }
    }

    /// Currency used for price entries.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Active entries in display order: the price range first, then each field's values in
    /// [`FilterField::ALL`] order and insertion order within a field.
    pub fn summarize(&self, selection: &FilterSelection) -> Vec<ActiveFilterEntry> {
        let price = selection
            .has_price_bound()
            .then(|| ActiveFilterEntry::price_range(selection.price_range(), self.currency));

        price
            .into_iter()
            .chain(FilterField::ALL.iter().flat_map(|field| {
                selection
                    .values(*field)
                    .iter()
                    .map(move |value| ActiveFilterEntry::field_value(*field, value.as_str()))
            }))
            .collect()
    }

    /// Whether `summarize` would yield at least one entry.
    pub fn has_active(&self, selection: &FilterSelection) -> bool {
        !self.summarize(selection).is_empty()
    }
}
