//! ISO-4217 currency codes and the minor-unit / symbol table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minor units used when a code is well-formed but not in [`CURRENCIES`].
pub const DEFAULT_MINOR_UNITS: u32 = 2;

/// A validated ISO-4217 alphabetic code (three ASCII uppercase letters).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    pub fn new(code: &str) -> Result<Self, ConfigError> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(ConfigError::InvalidCurrencyCode {
                code: code.to_string(),
            });
        }
        Ok(Self([bytes[0], bytes[1], bytes[2]]))
    }

    pub fn as_str(&self) -> &str {
        // Only `new` builds codes, and it admits ASCII letters alone.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Table entry for this code, if known.
    pub fn currency(&self) -> Option<&'static Currency> {
        CURRENCIES.iter().find(|c| c.code == self.as_str())
    }

    /// Fraction digits used for rounding amounts in this currency.
    pub fn minor_units(&self) -> u32 {
        self.currency()
            .map(|c| c.minor_units)
            .unwrap_or(DEFAULT_MINOR_UNITS)
    }

    /// Display symbol; unknown codes display as the code itself.
    pub fn symbol(&self) -> &str {
        match self.currency() {
            Some(c) => c.symbol,
            None => self.as_str(),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CurrencyCode").field(&self.as_str()).finish()
    }
}

impl FromStr for CurrencyCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

/// Static currency metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub minor_units: u32,
    pub symbol: &'static str,
}

const fn currency(
    code: &'static str,
    name: &'static str,
    minor_units: u32,
    symbol: &'static str,
) -> Currency {
    Currency {
        code,
        name,
        minor_units,
        symbol,
    }
}

/// Known currencies, sorted by code.
pub static CURRENCIES: &[Currency] = &[
    currency("ATS", "Austrian Schilling", 2, "öS"),
    currency("AUD", "Australian Dollar", 2, "A$"),
    currency("BHD", "Bahraini Dinar", 3, "BHD"),
    currency("BRL", "Brazilian Real", 2, "R$"),
    currency("CAD", "Canadian Dollar", 2, "CA$"),
    currency("CHF", "Swiss Franc", 2, "CHF"),
    currency("CLP", "Chilean Peso", 0, "CLP"),
    currency("CNY", "Chinese Yuan", 2, "CN¥"),
    currency("CZK", "Czech Koruna", 2, "Kč"),
    currency("DEM", "German Mark", 2, "DM"),
    currency("DKK", "Danish Krone", 2, "kr."),
    currency("EUR", "Euro", 2, "€"),
    currency("GBP", "British Pound", 2, "£"),
    currency("HKD", "Hong Kong Dollar", 2, "HK$"),
    currency("HUF", "Hungarian Forint", 2, "Ft"),
    currency("IDR", "Indonesian Rupiah", 2, "Rp"),
    currency("ILS", "Israeli New Shekel", 2, "₪"),
    currency("INR", "Indian Rupee", 2, "₹"),
    currency("ISK", "Icelandic Króna", 0, "ISK"),
    currency("JOD", "Jordanian Dinar", 3, "JOD"),
    currency("JPY", "Japanese Yen", 0, "¥"),
    currency("KRW", "South Korean Won", 0, "₩"),
    currency("KWD", "Kuwaiti Dinar", 3, "KWD"),
    currency("MXN", "Mexican Peso", 2, "MX$"),
    currency("NOK", "Norwegian Krone", 2, "kr"),
    currency("NZD", "New Zealand Dollar", 2, "NZ$"),
    currency("OMR", "Omani Rial", 3, "OMR"),
    currency("PLN", "Polish Zloty", 2, "zł"),
    currency("RUB", "Russian Ruble", 2, "₽"),
    currency("SEK", "Swedish Krona", 2, "kr"),
    currency("SGD", "Singapore Dollar", 2, "SGD"),
    currency("THB", "Thai Baht", 2, "฿"),
    currency("TND", "Tunisian Dinar", 3, "TND"),
    currency("TRY", "Turkish Lira", 2, "₺"),
    currency("UAH", "Ukrainian Hryvnia", 2, "₴"),
    currency("USD", "US Dollar", 2, "$"),
    currency("VND", "Vietnamese Dong", 0, "₫"),
    currency("ZAR", "South African Rand", 2, "R"),
];

/// Every code in the table, sorted.
pub fn known_codes() -> Vec<CurrencyCode> {
    CURRENCIES
        .iter()
        .filter_map(|c| CurrencyCode::new(c.code).ok())
        .collect()
}
