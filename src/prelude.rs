//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    config::{ConfigError, StorefrontConfig},
    customization::{Catalog, CatalogError, CustomizationOption, CustomizationSelection},
    filters::{
        FilterError, FilterField, FilterSelection, PriceRange,
        store::{FilterObserver, FilterStore, MemoryFilterStore, clear_filters, remove_active},
        summary::{ActiveFilterEntry, FilterKey, FilterSummarizer, FilterValue},
    },
    format::{format_money, format_range},
    pricing::{BreakdownLine, PriceBreakdown, PricingError, compose},
    quote::QuoteError,
    widget::{CustomizationWidget, NoopObserver, PriceObserver},
};
