//! Currency formatting

use rusty_money::{Formatter, LocalFormat, Money, Params, Position, iso::Currency};

const CODE_FIRST: &[Position] = &[
    Position::Code,
    Position::Space,
    Position::Sign,
    Position::Amount,
];

/// Formats money as its currency code followed by the amount, grouped by the currency's locale.
///
/// Minor units are only shown when non-zero, so `from_minor(100_000, PKR)` renders as
/// `PKR 1,000` and `from_minor(125_050, PKR)` as `PKR 1,250.50`.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    let currency = money.currency();
    let locale = LocalFormat::from_locale(currency.locale);

    let rounding = if money.amount().fract().is_zero() {
        0
    } else {
        currency.exponent
    };

    Formatter::money(
        money,
        Params {
            digit_separator: locale.digit_separator,
            exponent_separator: locale.exponent_separator,
            separator_pattern: locale.digit_separator_pattern,
            positions: CODE_FIRST,
            rounding: Some(rounding),
            symbol: None,
            code: Some(currency.iso_alpha_code),
        },
    )
}

/// Formats a price range in minor units as `CODE min - CODE max`.
pub fn format_range(min_minor: i64, max_minor: i64, currency: &Currency) -> String {
    format!(
        "{} - {}",
        format_money(&Money::from_minor(min_minor, currency)),
        format_money(&Money::from_minor(max_minor, currency))
    )
}
