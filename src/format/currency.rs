//! Currency-adorned display and its reduction back to editable text.

use rust_decimal::Decimal;

use super::numbers::format_amount;
use crate::currency::codes::CurrencyCode;
use crate::locale::profile::{CurrencyPlacement, NBSP, NumeralProfile};

/// Render `value` the way a locale's currency formatter would:
/// `$1,234.56`, `1.234,56 €`, `€ 1.234,56`. The sign always leads.
pub fn format_currency(value: Decimal, profile: &NumeralProfile, currency: CurrencyCode) -> String {
    let body = format_amount(value, profile);
    let (sign, digits) = match body.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", body.as_str()),
    };
    let symbol = currency.symbol();
    match profile.currency_placement() {
        CurrencyPlacement::Prefix => format!("{sign}{symbol}{digits}"),
        CurrencyPlacement::PrefixSpaced => format!("{sign}{symbol}{NBSP}{digits}"),
        CurrencyPlacement::SuffixSpaced => format!("{sign}{digits}{NBSP}{symbol}"),
    }
}

/// Reduce formatter output to sign, digits and the profile's separators.
///
/// Symbols, codes and padding on either side are dropped, including any
/// separator characters they contain (`kr.`, `Rs.`).
pub fn strip_adornment(text: &str, profile: &NumeralProfile) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || profile.is_separator(*c))
        .collect();
    let (Some(first), Some(last)) = (
        kept.find(|c: char| c.is_ascii_digit()),
        kept.rfind(|c: char| c.is_ascii_digit()),
    ) else {
        return String::new();
    };

    let mut out = String::with_capacity(last - first + 2);
    if kept[..first].contains('-') {
        out.push('-');
    }
    out.push_str(&kept[first..=last]);
    out
}
