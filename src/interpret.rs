//! One validate → evaluate → format cycle over a text snapshot.

use rust_decimal::Decimal;

use crate::currency::codes::CurrencyCode;
use crate::error::{AmountError, EvalError};
use crate::format::{format_amount, format_currency, strip_adornment};
use crate::locale::profile::NumeralProfile;
use crate::normalize::trim::blank_trim;
use crate::numeric::{evaluate, is_well_formed, parse_amount};

/// Successful reading of an amount text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    /// The value as displayed: rounded to the profile's fraction digits.
    pub value: Decimal,
    /// Canonical locale text for `value`.
    pub text: String,
}

/// Interpret `text` under `profile`.
///
/// With `currency` set, the text is produced by the currency formatter and
/// then stripped of its adornment; without, it is rendered directly. Both
/// yield the same string.
pub fn interpret(
    text: &str,
    profile: &NumeralProfile,
    calculable: bool,
    currency: Option<CurrencyCode>,
) -> Result<Interpretation, AmountError> {
    if !is_well_formed(text, profile, calculable) {
        return Err(AmountError::Lexical);
    }

    let raw = if calculable {
        evaluate(text, profile)?
    } else {
        parse_amount(text, profile).ok_or_else(|| EvalError::Numeral {
            literal: blank_trim(text).to_string(),
        })?
    };

    let value = profile.round(raw);
    let text = match currency {
        Some(code) => strip_adornment(&format_currency(value, profile, code), profile),
        None => format_amount(value, profile),
    };
    Ok(Interpretation { value, text })
}

/// Canonical text for `text`, or the reason it is invalid.
pub fn normalize(text: &str, profile: &NumeralProfile, calculable: bool) -> Result<String, AmountError> {
    interpret(text, profile, calculable, None).map(|i| i.text)
}
