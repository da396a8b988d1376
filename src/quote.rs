//! Quote
//!
//! Plain-text rendering of a [`PriceBreakdown`].

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{format::format_money, pricing::PriceBreakdown};

/// Errors that can occur when writing a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// IO error
    #[error("IO error")]
    IO,
}

impl PriceBreakdown<'_> {
    /// Write the breakdown as a table followed by a total line.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::IO`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), QuoteError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Qty", "Cost"]);
        builder.push_record([
            "Base price".to_string(),
            String::new(),
            format_money(&self.base_price()),
        ]);

        for line in self.lines() {
            builder.push_record([
                line.label.clone(),
                line.quantity.to_string(),
                format_money(&line.cost),
            ]);
        }

        builder.push_record([
            "Customizations".to_string(),
            String::new(),
            format_money(&self.additional_cost()),
        ]);

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));
        let footer_row = self.lines().len() + 2;

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);
        theme.insert_horizontal_line(footer_row, separator);

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..3), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| QuoteError::IO)?;
        writeln!(out, " Total: {}\n", format_money(&self.total_price()))
            .map_err(|_err| QuoteError::IO)
    }
}
