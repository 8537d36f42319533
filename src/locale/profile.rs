//! Resolved numeral conventions for one locale (and, optionally, one currency).

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::currency::codes::{CurrencyCode, DEFAULT_MINOR_UNITS};
use crate::error::ConfigError;

/// Largest scale the decimal type can carry.
pub const MAX_FRACTION_DIGITS: u32 = 28;

/// No-break space, accepted inside numerals in every locale.
pub const NBSP: char = '\u{a0}';

/// Rounding applied when an amount is reduced to the currency's fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    HalfUp,
    #[default]
    HalfEven,
    HalfDown,
    Up,
    Down,
    Ceiling,
    Floor,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 7] = [
        RoundingMode::HalfUp,
        RoundingMode::HalfEven,
        RoundingMode::HalfDown,
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
        }
    }

    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = ConfigError;

    /// Accepts `HALF_UP`, `half-up`, `half_up` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        RoundingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| ConfigError::UnknownRoundingMode(s.to_string()))
    }
}

/// Where a currency symbol sits relative to the number in adorned display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyPlacement {
    /// `$1,234.56`
    #[default]
    Prefix,
    /// `€ 1.234,56`
    PrefixSpaced,
    /// `1.234,56 €`
    SuffixSpaced,
}

/// Decimal separator, grouping rule and currency rounding for one locale.
///
/// Immutable once built; `with_*` methods return adjusted copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralProfile {
    decimal_separator: char,
    /// Accepted on input; the first one is emitted on output.
    group_separators: Vec<char>,
    /// First entry is the group nearest the decimal point; the last repeats.
    group_lengths: Vec<u8>,
    min_grouping_digits: u8,
    currency_fraction_digits: u32,
    rounding_mode: RoundingMode,
    currency_placement: CurrencyPlacement,
    default_currency: Option<CurrencyCode>,
}

impl NumeralProfile {
    pub fn new(
        decimal_separator: char,
        group_separators: Vec<char>,
        group_lengths: Vec<u8>,
    ) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| {
            Err(ConfigError::InvalidProfile {
                reason: reason.to_string(),
            })
        };
        if group_separators.is_empty() {
            return invalid("at least one grouping separator is required");
        }
        if group_lengths.is_empty() || group_lengths.contains(&0) {
            return invalid("group lengths must be non-empty and positive");
        }
        if group_separators.contains(&decimal_separator) {
            return invalid("decimal separator doubles as grouping separator");
        }
        let reserved = |c: char| c.is_ascii_digit() || "+-*/^()".contains(c);
        if reserved(decimal_separator) || group_separators.iter().any(|c| reserved(*c)) {
            return invalid("separators must not be digits or operators");
        }
        Ok(Self {
            decimal_separator,
            group_separators,
            group_lengths,
            min_grouping_digits: 1,
            currency_fraction_digits: DEFAULT_MINOR_UNITS,
            rounding_mode: RoundingMode::default(),
            currency_placement: CurrencyPlacement::default(),
            default_currency: None,
        })
    }

    pub fn with_min_grouping_digits(mut self, digits: u8) -> Self {
        self.min_grouping_digits = digits.max(1);
        self
    }

    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.currency_fraction_digits = digits.min(MAX_FRACTION_DIGITS);
        self
    }

    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    pub fn with_currency_placement(mut self, placement: CurrencyPlacement) -> Self {
        self.currency_placement = placement;
        self
    }

    /// Locale's own currency; its minor units become the fraction digits.
    pub fn with_default_currency(mut self, code: CurrencyCode) -> Self {
        self.default_currency = Some(code);
        self.with_fraction_digits(code.minor_units())
    }

    /// Round to the selected currency's minor units instead of the locale default.
    pub fn with_currency(self, code: CurrencyCode) -> Self {
        self.with_fraction_digits(code.minor_units())
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn group_separators(&self) -> &[char] {
        &self.group_separators
    }

    /// Separator emitted between digit groups.
    pub fn grouping_separator(&self) -> char {
        self.group_separators[0]
    }

    pub fn group_lengths(&self) -> &[u8] {
        &self.group_lengths
    }

    pub fn min_grouping_digits(&self) -> u8 {
        self.min_grouping_digits
    }

    pub fn currency_fraction_digits(&self) -> u32 {
        self.currency_fraction_digits
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    pub fn currency_placement(&self) -> CurrencyPlacement {
        self.currency_placement
    }

    pub fn default_currency(&self) -> Option<CurrencyCode> {
        self.default_currency
    }

    #[inline]
    pub fn is_group_separator(&self, c: char) -> bool {
        self.group_separators.contains(&c)
    }

    /// Decimal or grouping separator of this profile.
    #[inline]
    pub fn is_separator(&self, c: char) -> bool {
        c == self.decimal_separator || self.is_group_separator(c)
    }

    /// Characters a numeric literal may be made of.
    #[inline]
    pub fn is_numeral_char(&self, c: char) -> bool {
        c.is_ascii_digit() || c == NBSP || self.is_separator(c)
    }

    /// Round to the currency's fraction digits with the profile's rounding
    /// mode. The result carries exactly that scale (`6` becomes `6.00`).
    pub fn round(&self, value: Decimal) -> Decimal {
        let mut rounded = value.round_dp_with_strategy(
            self.currency_fraction_digits,
            self.rounding_mode.strategy(),
        );
        rounded.rescale(self.currency_fraction_digits);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        rounded
    }
}

impl Default for NumeralProfile {
    /// Western grouping in threes, `.` decimal, `,` grouping.
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separators: vec![','],
            group_lengths: vec![3],
            min_grouping_digits: 1,
            currency_fraction_digits: DEFAULT_MINOR_UNITS,
            rounding_mode: RoundingMode::default(),
            currency_placement: CurrencyPlacement::default(),
            default_currency: None,
        }
    }
}
