use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codes::CurrencyCode;

/// An exact decimal amount paired with its ISO-4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonetaryValue {
    pub amount: Decimal,
    pub currency: CurrencyCode,
}

impl MonetaryValue {
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// True when `allowed` contains this value's currency.
    pub fn is_allowed_in(&self, allowed: &[CurrencyCode]) -> bool {
        allowed.contains(&self.currency)
    }
}

impl fmt::Display for MonetaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
