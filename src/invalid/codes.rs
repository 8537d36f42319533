use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Canonical reasons an amount text was flagged invalid.
///
/// The field itself only surfaces a single `invalid` flag; these codes
/// exist for logging and the diagnostic CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidCode {
    Lexical,
    Required,
    UnexpectedChar,
    UnexpectedEnd,
    Unbalanced,
    Nesting,
    Numeral,
    DivisionByZero,
    Exponent,
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown invalid code")]
pub struct UnknownInvalidCode;

impl InvalidCode {
    pub const ALL: [InvalidCode; 10] = [
        InvalidCode::Lexical,
        InvalidCode::Required,
        InvalidCode::UnexpectedChar,
        InvalidCode::UnexpectedEnd,
        InvalidCode::Unbalanced,
        InvalidCode::Nesting,
        InvalidCode::Numeral,
        InvalidCode::DivisionByZero,
        InvalidCode::Exponent,
        InvalidCode::Overflow,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            InvalidCode::Lexical => "E_LEXICAL",
            InvalidCode::Required => "E_REQUIRED",
            InvalidCode::UnexpectedChar => "E_UNEXPECTED_CHAR",
            InvalidCode::UnexpectedEnd => "E_UNEXPECTED_END",
            InvalidCode::Unbalanced => "E_UNBALANCED",
            InvalidCode::Nesting => "E_NESTING",
            InvalidCode::Numeral => "E_NUMERAL",
            InvalidCode::DivisionByZero => "E_DIV_ZERO",
            InvalidCode::Exponent => "E_EXPONENT",
            InvalidCode::Overflow => "E_OVERFLOW",
        }
    }

    /// A short, stable reason label for human output.
    #[inline]
    pub const fn reason(self) -> &'static str {
        match self {
            InvalidCode::Lexical => "text is not an amount",
            InvalidCode::Required => "a value is required",
            InvalidCode::UnexpectedChar => "unexpected character",
            InvalidCode::UnexpectedEnd => "expression ends early",
            InvalidCode::Unbalanced => "unbalanced parentheses",
            InvalidCode::Nesting => "expression nested too deeply",
            InvalidCode::Numeral => "number does not match locale separators",
            InvalidCode::DivisionByZero => "division by zero",
            InvalidCode::Exponent => "exponent cannot be applied exactly",
            InvalidCode::Overflow => "amount out of range",
        }
    }
}

impl fmt::Display for InvalidCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvalidCode {
    type Err = UnknownInvalidCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E_LEXICAL" => Ok(InvalidCode::Lexical),
            "E_REQUIRED" => Ok(InvalidCode::Required),
            "E_UNEXPECTED_CHAR" => Ok(InvalidCode::UnexpectedChar),
            "E_UNEXPECTED_END" => Ok(InvalidCode::UnexpectedEnd),
            "E_UNBALANCED" => Ok(InvalidCode::Unbalanced),
            "E_NESTING" => Ok(InvalidCode::Nesting),
            "E_NUMERAL" => Ok(InvalidCode::Numeral),
            "E_DIV_ZERO" => Ok(InvalidCode::DivisionByZero),
            "E_EXPONENT" => Ok(InvalidCode::Exponent),
            "E_OVERFLOW" => Ok(InvalidCode::Overflow),
            _ => Err(UnknownInvalidCode),
        }
    }
}
