//! Filters
//!
//! A [`FilterSelection`] is the value held by the catalogue's filter-state store. It is never
//! mutated in place: every operation returns a new selection so observers can detect changes by
//! comparing values.

use smallvec::SmallVec;
use thiserror::Error;
use tracing::trace;

use crate::filters::summary::{ActiveFilterEntry, FilterValue};

pub mod store;
pub mod summary;

/// Default upper price bound in minor units (PKR 100,000).
pub const DEFAULT_PRICE_CEILING: i64 = 10_000_000;

type FieldValueSet = SmallVec<[String; 4]>;

/// Errors raised while building filter state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The lower bound is above the upper bound (min, max).
    #[error("price range minimum {0} exceeds maximum {1}")]
    InvertedRange(i64, i64),

    /// A bound is below zero.
    #[error("price range bound {0} is negative")]
    NegativeBound(i64),
}

/// Inclusive price bounds in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    min: i64,
    max: i64,
}

impl PriceRange {
    /// Create a new price range.
    ///
    /// # Errors
    ///
    /// - [`FilterError::NegativeBound`]: either bound is below zero.
    /// - [`FilterError::InvertedRange`]: `min` is greater than `max`.
    pub fn new(min: i64, max: i64) -> Result<Self, FilterError> {
        if min < 0 {
            return Err(FilterError::NegativeBound(min));
        }

        if max < 0 {
            return Err(FilterError::NegativeBound(max));
        }

        if min > max {
            return Err(FilterError::InvertedRange(min, max));
        }

        Ok(Self { min, max })
    }

    /// The full range from zero up to `ceiling`. Negative ceilings collapse to zero.
    pub fn up_to(ceiling: i64) -> Self {
        Self {
            min: 0,
            max: ceiling.max(0),
        }
    }

    /// Lower bound in minor units.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound in minor units.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Clamp both bounds into `bounds`.
    #[must_use]
    pub fn clamp_to(self, bounds: PriceRange) -> Self {
        Self {
            min: self.min.clamp(bounds.min, bounds.max),
            max: self.max.clamp(bounds.min, bounds.max),
        }
    }
}

/// The multi-value filter dimensions, in the order they are summarised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    /// Fabric, e.g. "Silk"
    Fabric,

    /// Colour
    Color,

    /// Garment size
    Size,

    /// Occasion, e.g. "Bridal"
    Occasion,

    /// Stock availability
    Availability,
}

impl FilterField {
    /// All fields in display order.
    pub const ALL: [FilterField; 5] = [
        FilterField::Fabric,
        FilterField::Color,
        FilterField::Size,
        FilterField::Occasion,
        FilterField::Availability,
    ];

    /// Field name as used by the store.
    pub fn name(self) -> &'static str {
        match self {
            FilterField::Fabric => "fabric",
            FilterField::Color => "color",
            FilterField::Size => "size",
            FilterField::Occasion => "occasion",
            FilterField::Availability => "availability",
        }
    }

    /// Field name with its first character capitalised.
    pub fn label(self) -> String {
        let mut chars = self.name().chars();

        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldValues {
    fabric: FieldValueSet,
    color: FieldValueSet,
    size: FieldValueSet,
    occasion: FieldValueSet,
    availability: FieldValueSet,
}

impl FieldValues {
    fn get(&self, field: FilterField) -> &FieldValueSet {
        match field {
            FilterField::Fabric => &self.fabric,
            FilterField::Color => &self.color,
            FilterField::Size => &self.size,
            FilterField::Occasion => &self.occasion,
            FilterField::Availability => &self.availability,
        }
    }

    fn get_mut(&mut self, field: FilterField) -> &mut FieldValueSet {
        match field {
            FilterField::Fabric => &mut self.fabric,
            FilterField::Color => &mut self.color,
            FilterField::Size => &mut self.size,
            FilterField::Occasion => &mut self.occasion,
            FilterField::Availability => &mut self.availability,
        }
    }
}

/// Structured filter state: a price range plus a set of values per [`FilterField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    full_range: PriceRange,
    price_range: PriceRange,
    values: FieldValues,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::new(PriceRange::up_to(DEFAULT_PRICE_CEILING))
    }
}

impl FilterSelection {
    /// Create an empty selection whose default price range is `full_range`.
    pub fn new(full_range: PriceRange) -> Self {
        Self {
            full_range,
            price_range: full_range,
            values: FieldValues::default(),
        }
    }

    /// The unfiltered price range.
    pub fn full_range(&self) -> PriceRange {
        self.full_range
    }

    /// The selected price range.
    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    /// Whether the price range has been narrowed from the full range.
    pub fn has_price_bound(&self) -> bool {
        self.price_range != self.full_range
    }

    /// Selected values for `field`, in the order they were added.
    pub fn values(&self, field: FilterField) -> &[String] {
        self.values.get(field)
    }

    /// Whether nothing is selected.
    pub fn is_cleared(&self) -> bool {
        !self.has_price_bound()
            && FilterField::ALL
                .iter()
                .all(|field| self.values.get(*field).is_empty())
    }

    /// Select a price range, clamped into the full range.
    #[must_use]
    pub fn with_price_range(&self, range: PriceRange) -> Self {
        let mut next = self.clone();
        next.price_range = range.clamp_to(self.full_range);
        next
    }

    /// Add `value` to `field`. Adding a value that is already selected changes nothing.
    #[must_use]
    pub fn with_value(&self, field: FilterField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        let set = next.values.get_mut(field);

        if !set.contains(&value) {
            set.push(value);
        }

        next
    }

    /// Remove `value` from `field`, keeping the order of the remaining values.
    #[must_use]
    pub fn without_value(&self, field: FilterField, value: &str) -> Self {
        let mut next = self.clone();
        next.values.get_mut(field).retain(|selected| selected != value);
        next
    }

    /// Select `value` if it is absent, deselect it if it is present.
    #[must_use]
    pub fn toggle_value(&self, field: FilterField, value: impl Into<String>) -> Self {
        let value = value.into();

        if self.values(field).contains(&value) {
            self.without_value(field, &value)
        } else {
            self.with_value(field, value)
        }
    }

    /// Remove the constraint represented by `entry`.
    ///
    /// A price entry resets both bounds at once. Entries that no longer match the selection are
    /// ignored.
    #[must_use]
    pub fn remove(&self, entry: &ActiveFilterEntry) -> Self {
        match entry.raw_value() {
            FilterValue::PriceRange(range) => {
                if self.has_price_bound() && self.price_range == *range {
                    let mut next = self.clone();
                    next.price_range = self.full_range;
                    next
                } else {
                    trace!(?range, "ignoring removal of stale price range entry");
                    self.clone()
                }
            }
            FilterValue::Field { field, value } => self.without_value(*field, value),
        }
    }

    /// Reset every field to its default in a single new value.
    #[must_use]
    pub fn clear_all(&self) -> Self {
        Self::new(self.full_range)
    }
}
