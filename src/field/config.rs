//! Construction-time settings of a money field.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::currency::codes::{CurrencyCode, known_codes};
use crate::currency::money::MonetaryValue;
use crate::error::ConfigError;
use crate::locale::profile::RoundingMode;

/// Settings fixed when a field is built.
///
/// Deserializes from JSON; omitted keys take their defaults:
///
/// ```json
/// { "calculable": true, "allowed_currencies": ["EUR", "USD"],
///   "initial_value": { "amount": "12.50", "currency": "EUR" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Accept arithmetic expressions instead of plain amounts.
    pub calculable: bool,
    /// Empty text means "no value" rather than invalid.
    pub nullable: bool,
    /// Currencies the field may hold.
    pub allowed_currencies: Vec<CurrencyCode>,
    pub initial_value: Option<MonetaryValue>,
    /// Overrides the locale's rounding mode.
    pub rounding_mode: Option<RoundingMode>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            calculable: false,
            nullable: true,
            allowed_currencies: known_codes(),
            initial_value: None,
            rounding_mode: None,
        }
    }
}

impl FieldConfig {
    pub fn calculable() -> Self {
        Self {
            calculable: true,
            ..Self::default()
        }
    }

    pub fn with_allowed_currencies(mut self, codes: Vec<CurrencyCode>) -> Self {
        self.allowed_currencies = codes;
        self
    }

    pub fn with_initial_value(mut self, value: MonetaryValue) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn allows(&self, code: CurrencyCode) -> bool {
        self.allowed_currencies.contains(&code)
    }

    /// The initial value, if any, must use an allowed currency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.initial_value {
            Some(value) if !value.is_allowed_in(&self.allowed_currencies) => Err(ConfigError::CurrencyNotAllowed {
                code: value.currency.to_string(),
            }),
            _ => Ok(()),
        }
    }
}
