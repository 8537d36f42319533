//! Error taxonomy for the amount interpreter and field construction.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::invalid::codes::InvalidCode;

/// Failure while evaluating text that passed the lexical check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unexpected {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("missing ')' for '(' at offset {offset}")]
    UnbalancedParen { offset: usize },
    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },
    #[error("numeral {literal:?} does not follow the locale's separators")]
    Numeral { literal: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("cannot raise {base} to {exponent} without losing precision")]
    Exponent { base: Decimal, exponent: Decimal },
    #[error("arithmetic overflow")]
    Overflow,
}

impl EvalError {
    pub fn code(&self) -> InvalidCode {
        match self {
            EvalError::UnexpectedChar { .. } => InvalidCode::UnexpectedChar,
            EvalError::UnexpectedEnd => InvalidCode::UnexpectedEnd,
            EvalError::UnbalancedParen { .. } => InvalidCode::Unbalanced,
            EvalError::TooDeep { .. } => InvalidCode::Nesting,
            EvalError::Numeral { .. } => InvalidCode::Numeral,
            EvalError::DivisionByZero => InvalidCode::DivisionByZero,
            EvalError::Exponent { .. } => InvalidCode::Exponent,
            EvalError::Overflow => InvalidCode::Overflow,
        }
    }
}

/// Why one validate/evaluate cycle rejected the text.
///
/// Both kinds surface identically to the field (text kept verbatim,
/// `invalid` raised); the distinction is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("text does not match the amount grammar")]
    Lexical,
    #[error("a value is required")]
    Required,
    #[error(transparent)]
    Evaluation(#[from] EvalError),
}

impl AmountError {
    pub fn code(&self) -> InvalidCode {
        match self {
            AmountError::Lexical => InvalidCode::Lexical,
            AmountError::Required => InvalidCode::Required,
            AmountError::Evaluation(err) => err.code(),
        }
    }
}

/// Construction-time failure. Aborts field creation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the initial value's currency code '{code}' is not in the list of currency codes")]
    CurrencyNotAllowed { code: String },
    #[error("'{code}' is not an ISO-4217 alphabetic currency code")]
    InvalidCurrencyCode { code: String },
    #[error("invalid numeral profile: {reason}")]
    InvalidProfile { reason: String },
    #[error("unknown rounding mode '{0}'")]
    UnknownRoundingMode(String),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
