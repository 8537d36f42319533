use std::path::PathBuf;

use clap::Parser;

use crate::currency::codes::CurrencyCode;
use crate::locale::profile::RoundingMode;

const DEFAULT_LOCALE: &str = "en-US";

/// Command-line arguments of the diagnostic binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "moneyfield",
    about = "Interpret monetary amounts typed in a locale's notation.",
    override_usage = "moneyfield [--locale <tag>] [--currency <code>] [--calc] [--required] [--rounding <mode>] [--config <path>] [--json] [--] <TEXT>..."
)]
pub struct Args {
    /// Texts committed to the field, one after another.
    #[arg(value_name = "TEXT", required = true, allow_hyphen_values = true)]
    pub texts: Vec<String>,

    /// Locale tag such as de-DE, hi_IN or pl (default: en-US).
    #[arg(long, value_name = "TAG", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Currency selected before the first text (ISO-4217, e.g. EUR).
    #[arg(long, value_name = "CODE", value_parser = parse_currency)]
    pub currency: Option<CurrencyCode>,

    /// Accept arithmetic expressions (+ - * / ^ and parentheses).
    #[arg(long)]
    pub calc: bool,

    /// Treat empty text as invalid.
    #[arg(long)]
    pub required: bool,

    /// Rounding mode: HALF_EVEN, HALF_UP, HALF_DOWN, UP, DOWN, CEILING, FLOOR.
    #[arg(long, value_name = "MODE", value_parser = parse_rounding)]
    pub rounding: Option<RoundingMode>,

    /// JSON field configuration; flags override its settings.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit JSON output (single object).
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn parse() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

fn parse_currency(raw: &str) -> Result<CurrencyCode, String> {
    CurrencyCode::new(raw).map_err(|err| err.to_string())
}

fn parse_rounding(raw: &str) -> Result<RoundingMode, String> {
    raw.parse::<RoundingMode>().map_err(|err| err.to_string())
}
