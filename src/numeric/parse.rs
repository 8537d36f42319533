//! Numeral parsing under a locale's separator conventions.
//!
//! Accepted:
//! - Digit runs joined by the profile's grouping separators, in any positions
//!   (grouping is lenient: `1,23,456` and `123,456` both read as 123456 in en-US).
//! - At most one decimal separator, with no grouping after it.
//! - An optional leading sign for whole amounts (`parse_amount`).
//!
//! Separators must sit between digits; `,5`, `5,` and `5..2` are rejected.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::locale::profile::NumeralProfile;
use crate::normalize::trim::blank_trim;

/// Parse an unsigned numeric literal into an exact decimal.
///
/// Returns `None` when the literal breaks the profile's separator rules or
/// does not fit the decimal type.
pub fn parse_numeral(literal: &str, profile: &NumeralProfile) -> Option<Decimal> {
    let token = blank_trim(literal);
    if token.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(token.len());
    let mut seen_decimal = false;
    let mut prev_digit = false;

    for c in token.chars() {
        if c.is_ascii_digit() {
            normalized.push(c);
            prev_digit = true;
            continue;
        }
        if !prev_digit {
            return None;
        }
        prev_digit = false;

        if c == profile.decimal_separator() {
            if seen_decimal {
                return None;
            }
            seen_decimal = true;
            normalized.push('.');
        } else if profile.is_group_separator(c) {
            if seen_decimal {
                return None;
            }
        } else {
            return None;
        }
    }

    if !prev_digit {
        return None;
    }
    Decimal::from_str(&normalized).ok()
}

/// Parse a plain amount: optional sign followed by a numeral.
pub fn parse_amount(text: &str, profile: &NumeralProfile) -> Option<Decimal> {
    let trimmed = blank_trim(text);
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if rest.starts_with(|c: char| !c.is_ascii_digit()) {
        return None;
    }
    let value = parse_numeral(rest, profile)?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::table::resolve_tag;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_western_grouping() {
        let us = resolve_tag("en-US");
        assert_eq!(parse_numeral("123", &us), Some(dec!(123)));
        assert_eq!(parse_numeral("123.45", &us), Some(dec!(123.45)));
        assert_eq!(parse_numeral("1,234", &us), Some(dec!(1234)));
        assert_eq!(parse_numeral("1,234,567.89", &us), Some(dec!(1234567.89)));
    }

    #[test]
    fn parses_swapped_separators() {
        let de = resolve_tag("de-DE");
        assert_eq!(parse_numeral("123456,789", &de), Some(dec!(123456.789)));
        assert_eq!(parse_numeral("5.214,12", &de), Some(dec!(5214.12)));
        assert_eq!(parse_numeral("71000000000000,01", &de), Some(dec!(71000000000000.01)));
    }

    #[test]
    fn parses_variable_and_whitespace_grouping() {
        let hi = resolve_tag("hi-IN");
        assert_eq!(parse_numeral("1,23,456.789", &hi), Some(dec!(123456.789)));

        let pl = resolve_tag("pl-PL");
        assert_eq!(parse_numeral("123 456,789", &pl), Some(dec!(123456.789)));
        assert_eq!(parse_numeral("123\u{a0}456,789", &pl), Some(dec!(123456.789)));
    }

    #[test]
    fn grouping_positions_are_lenient() {
        let us = resolve_tag("en-US");
        assert_eq!(parse_numeral("1,23,456", &us), Some(dec!(123456)));
        assert_eq!(parse_numeral("12,34", &us), Some(dec!(1234)));
    }

    #[test]
    fn rejects_misplaced_separators() {
        let de = resolve_tag("de-DE");
        assert_eq!(parse_numeral("5..214,12", &de), None);
        assert_eq!(parse_numeral("5..214,1234", &de), None);
        assert_eq!(parse_numeral(",5", &de), None);
        assert_eq!(parse_numeral("5,", &de), None);
        assert_eq!(parse_numeral("5.", &de), None);
        assert_eq!(parse_numeral("1,2,3", &de), None);
        assert_eq!(parse_numeral("1,234.5", &de), None);
    }

    #[test]
    fn rejects_foreign_separators() {
        let de = resolve_tag("de-DE");
        assert_eq!(parse_numeral("12 34", &de), None);
        assert_eq!(parse_numeral("12\u{a0}345", &de), None);
        assert_eq!(parse_numeral("1'234", &de), None);
    }

    #[test]
    fn rejects_invalid_tokens() {
        let us = resolve_tag("en-US");
        assert_eq!(parse_numeral("", &us), None);
        assert_eq!(parse_numeral("   ", &us), None);
        assert_eq!(parse_numeral("NaN", &us), None);
        assert_eq!(parse_numeral("1e6", &us), None);
        assert_eq!(parse_numeral("-1", &us), None);
    }

    #[test]
    fn rejects_out_of_range() {
        let us = resolve_tag("en-US");
        assert_eq!(parse_numeral("99999999999999999999999999999999999", &us), None);
    }

    #[test]
    fn parses_signed_amounts() {
        let de = resolve_tag("de-DE");
        assert_eq!(parse_amount("-123,456", &de), Some(dec!(-123.456)));
        assert_eq!(parse_amount("+5", &de), Some(dec!(5)));
        assert_eq!(parse_amount(" 123.456,79", &de), Some(dec!(123456.79)));
        assert_eq!(parse_amount("--1", &de), None);
        assert_eq!(parse_amount("- 1", &de), None);
        assert_eq!(parse_amount("-", &de), None);
    }
}
