use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// ASCII digits only; full-width input is folded to ASCII first
static PRICE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\d)+\.?(?-u:\d)*").unwrap());

/// Fold full-width digits (`０`-`９`) and the full-width full stop to ASCII
fn fold_full_width(price: &str) -> String {
    price
        .chars()
        .map(|c| match c {
            '\u{FF10}'..='\u{FF19}' => char::from_digit(c as u32 - 0xFF10, 10).unwrap_or(c),
            '\u{FF0E}' => '.',
            _ => c,
        })
        .collect()
}

/// First number in a price string such as `26.58万`, or `0.0`.
///
/// Ranges like `18.28万31.02万` keep only the first figure.
pub fn parse_price(price: &str) -> f64 {
    let folded = fold_full_width(price);
    match PRICE_NUMBER.find(&folded) {
        Some(found) => found.as_str().parse().unwrap_or(0.0),
        None => {
            trace!(price, "no number in price string");
            0.0
        }
    }
}
