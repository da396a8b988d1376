//! Storefront quote
//!
//! Prints the price breakdown for a base price and a set of customizations.
//!
//! ```text
//! storefront-quote --base "5000 PKR" --enable fabric_upgrade --quantity additional_accessories=3
//! ```

use std::{io, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use rusty_money::Money;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use storefront::{config::parse_price, prelude::*};

/// Storefront quote arguments
#[derive(Debug, Parser)]
#[command(
    name = "storefront-quote",
    about = "Compose a customized product price",
    long_about = None
)]
struct QuoteArgs {
    /// Storefront configuration file; the built-in PKR catalog is used when omitted
    #[arg(short, long, env = "STOREFRONT_CONFIG")]
    config: Option<PathBuf>,

    /// Base price, e.g. "5000 PKR"
    #[arg(short, long)]
    base: String,

    /// Customization to enable (repeatable)
    #[arg(short, long = "enable")]
    enable: Vec<String>,

    /// Quantity for a quantity-based customization as KEY=N (repeatable)
    #[arg(short, long = "quantity")]
    quantity: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug)]
struct LogObserver;

impl PriceObserver for LogObserver {
    fn on_price_change(&mut self, breakdown: &PriceBreakdown<'_>) {
        debug!(total = %format_money(&breakdown.total_price()), "price changed");
    }
}

fn main() -> Result<()> {
    let args = QuoteArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => StorefrontConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => StorefrontConfig::default(),
    };

    let (base_minor, currency) = parse_price(&args.base)?;
    let catalog = config.catalog().clone();

    let mut widget = CustomizationWidget::new(
        Money::from_minor(base_minor, currency),
        catalog,
        LogObserver,
    )?;

    for key in &args.enable {
        if widget.catalog().get(key).is_none() {
            warn!(key = %key, "unknown customization");
        }

        widget.toggle(key, true)?;
    }

    for pair in &args.quantity {
        let (key, count) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("expected KEY=N, got {pair}"))?;
        let count: i64 = count.parse().with_context(|| format!("invalid quantity in {pair}"))?;
        let current = i64::from(widget.selection().quantity(key));

        widget.change_quantity(key, count.saturating_sub(current))?;
    }

    widget.breakdown().write_to(io::stdout().lock())?;

    Ok(())
}
