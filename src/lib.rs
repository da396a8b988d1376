//! Storefront
//!
//! State derivation and price composition for a clothing storefront: active filter chips
//! derived from the catalogue filter state, and product prices composed from customization
//! add-ons.

pub mod config;
pub mod customization;
pub mod filters;
pub mod format;
pub mod prelude;
pub mod pricing;
pub mod quote;
pub mod widget;
