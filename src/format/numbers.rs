// Locale number rendering: grouping, fixed fraction digits, rounding.

use rust_decimal::Decimal;

use crate::locale::profile::NumeralProfile;

/// Insert the profile's grouping separator into a run of ASCII digits.
///
/// The group nearest the decimal point uses the first configured length,
/// each group further left the next one, and the last length repeats.
/// Integers shorter than the first group plus the profile's minimum grouping
/// digits are left ungrouped.
pub fn group_integer(digits: &str, profile: &NumeralProfile) -> String {
    debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    let lengths = profile.group_lengths();
    let first = lengths[0] as usize;
    if digits.len() < first + profile.min_grouping_digits() as usize {
        return digits.to_string();
    }

    // Group sizes, rightmost first.
    let mut sizes = Vec::with_capacity(digits.len() / first + 1);
    let mut remaining = digits.len();
    let mut idx = 0;
    loop {
        let len = lengths[idx.min(lengths.len() - 1)] as usize;
        if remaining <= len {
            sizes.push(remaining);
            break;
        }
        sizes.push(len);
        remaining -= len;
        idx += 1;
    }

    let sep = profile.grouping_separator();
    let mut out = String::with_capacity(digits.len() + sizes.len() * sep.len_utf8());
    let mut start = 0;
    for (n, size) in sizes.iter().rev().enumerate() {
        if n > 0 {
            out.push(sep);
        }
        out.push_str(&digits[start..start + size]);
        start += size;
    }
    out
}

/// Render `value` as editable amount text: optional `-`, grouped integer
/// digits, decimal separator and exactly the currency's fraction digits.
pub fn format_amount(value: Decimal, profile: &NumeralProfile) -> String {
    let rounded = profile.round(value);
    let plain = rounded.abs().to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let fraction_digits = profile.currency_fraction_digits() as usize;

    let mut out = String::with_capacity(plain.len() + plain.len() / 2 + 2);
    if rounded.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_integer(int_part, profile));
    if fraction_digits > 0 {
        out.push(profile.decimal_separator());
        out.push_str(frac_part);
        for _ in frac_part.len()..fraction_digits {
            out.push('0');
        }
    }
    out
}
