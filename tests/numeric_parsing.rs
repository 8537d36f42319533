use moneyfield::numeric::parse::{parse_amount, parse_numeral};
use moneyfield::locale::resolve_tag;
use rust_decimal_macros::dec;

#[test]
fn parses_supported_formats() {
    let us = resolve_tag("en-US");
    assert_eq!(parse_amount("123", &us), Some(dec!(123)));
    assert_eq!(parse_amount("-123", &us), Some(dec!(-123)));
    assert_eq!(parse_amount("+123", &us), Some(dec!(123)));
    assert_eq!(parse_amount("123.45", &us), Some(dec!(123.45)));
    assert_eq!(parse_amount("-1,234,567.89", &us), Some(dec!(-1234567.89)));
    assert_eq!(parse_amount("  1,234  ", &us), Some(dec!(1234)));

    let de = resolve_tag("de-DE");
    assert_eq!(parse_amount("-5.214,12", &de), Some(dec!(-5214.12)));
    assert_eq!(parse_numeral("71000000000000,01", &de), Some(dec!(71000000000000.01)));

    let hi = resolve_tag("hi-IN");
    assert_eq!(parse_numeral("1,23,45,678.9", &hi), Some(dec!(12345678.9)));

    let pl = resolve_tag("pl-PL");
    assert_eq!(parse_numeral("123 456,789", &pl), Some(dec!(123456.789)));
    assert_eq!(parse_numeral("123\u{a0}456,789", &pl), Some(dec!(123456.789)));
}

#[test]
fn rejects_invalid_formats() {
    let us = resolve_tag("en-US");
    assert!(parse_amount("", &us).is_none());
    assert!(parse_amount("$12", &us).is_none());
    assert!(parse_amount(",123", &us).is_none());
    assert!(parse_amount("123,", &us).is_none());
    assert!(parse_amount("1,234.5.6", &us).is_none());
    assert!(parse_amount("1.234,5", &us).is_none());
    assert!(parse_amount("--1", &us).is_none());
    assert!(parse_amount("- 1", &us).is_none());
    assert!(parse_amount("1e6", &us).is_none());
    assert!(parse_amount("NaN", &us).is_none());
    assert!(parse_amount("1 234", &us).is_none());

    let de = resolve_tag("de-DE");
    assert!(parse_numeral("5..214,1234", &de).is_none());
    assert!(parse_numeral("1,5.000", &de).is_none());
}

#[test]
fn rejects_values_beyond_decimal_range() {
    let us = resolve_tag("en-US");
    assert!(parse_amount("99999999999999999999999999999999", &us).is_none());
}
