//! Customization selection

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::customization::Catalog;

/// Per-widget toggle and quantity state for a [`Catalog`].
///
/// Operations return a new selection. Keys that are not part of the catalog the selection was
/// created for are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomizationSelection {
    enabled: FxHashMap<String, bool>,
    quantities: FxHashMap<String, u32>,
}

impl CustomizationSelection {
    /// Everything disabled, every quantity-based option at zero.
    pub fn for_catalog(catalog: &Catalog<'_>) -> Self {
        let enabled = catalog
            .iter()
            .map(|option| (option.key.clone(), false))
            .collect();

        let quantities = catalog
            .iter()
            .filter(|option| option.quantity_based)
            .map(|option| (option.key.clone(), 0))
            .collect();

        Self {
            enabled,
            quantities,
        }
    }

    /// Whether `key` is enabled. Unknown keys are disabled.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.enabled.get(key).copied().unwrap_or(false)
    }

    /// Accumulated quantity for `key`, zero for unknown or flat options.
    pub fn quantity(&self, key: &str) -> u32 {
        self.quantities.get(key).copied().unwrap_or(0)
    }

    /// Enable or disable `key`. The option's quantity is kept either way.
    #[must_use]
    pub fn toggle(&self, key: &str, enabled: bool) -> Self {
        let mut next = self.clone();

        match next.enabled.get_mut(key) {
            Some(flag) => *flag = enabled,
            None => trace!(key, "ignoring toggle of unknown customization"),
        }

        next
    }

    /// Adjust the quantity of `key` by `delta`, clamping at zero.
    ///
    /// Only quantity-based options have a quantity; the enabled flag is left alone.
    #[must_use]
    pub fn set_quantity(&self, key: &str, delta: i64) -> Self {
        let mut next = self.clone();

        match next.quantities.get_mut(key) {
            Some(quantity) => {
                let adjusted = i64::from(*quantity).saturating_add(delta).max(0);
                *quantity = u32::try_from(adjusted).unwrap_or(u32::MAX);
            }
            None => trace!(key, "ignoring quantity change of unknown customization"),
        }

        next
    }
}
