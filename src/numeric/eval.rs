//! Recursive-descent evaluation of calculable amounts in exact decimal.
//!
//! Grammar:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := ('+' | '-') factor | primary ('^' factor)?
//! primary    := NUMBER | '(' expression ')'
//! ```
//!
//! `NUMBER` is the longest run of digits, profile separators and no-break
//! spaces, read with `numeric::parse::parse_numeral`. Quotients are rounded to
//! the profile's fraction digits. Integer exponents multiply exactly; other
//! exponents go through `f64::powf` only when base and exponent survive the
//! trip to `f64` unchanged.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use tracing::trace;

use super::parse::parse_numeral;
use crate::error::EvalError;
use crate::locale::profile::NumeralProfile;
use crate::normalize::trim::is_blank;

/// Nesting limit for parentheses and unary signs.
pub const MAX_DEPTH: usize = 256;

/// Evaluate `text` to an exact decimal under `profile`.
pub fn evaluate(text: &str, profile: &NumeralProfile) -> Result<Decimal, EvalError> {
    let mut parser = Parser {
        text,
        pos: 0,
        depth: 0,
        profile,
    };
    let value = parser.expression()?;
    parser.skip_blanks();
    match parser.peek() {
        None => Ok(value),
        Some(')') => Err(EvalError::UnbalancedParen { offset: parser.pos }),
        Some(found) => Err(EvalError::UnexpectedChar {
            found,
            offset: parser.pos,
        }),
    }
}

/// Cursor over one input; lives for a single `evaluate` call.
struct Parser<'a> {
    text: &'a str,
    pos: usize,
    depth: usize,
    profile: &'a NumeralProfile,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn skip_blanks(&mut self) {
        while let Some(c) = self.peek()
            && is_blank(c)
        {
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_blanks();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn descend(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(())
    }

    fn expression(&mut self) -> Result<Decimal, EvalError> {
        let mut x = self.term()?;
        loop {
            if self.eat('+') {
                let y = self.term()?;
                x = x.checked_add(y).ok_or(EvalError::Overflow)?;
            } else if self.eat('-') {
                let y = self.term()?;
                x = x.checked_sub(y).ok_or(EvalError::Overflow)?;
            } else {
                return Ok(x);
            }
        }
    }

    fn term(&mut self) -> Result<Decimal, EvalError> {
        let mut x = self.factor()?;
        loop {
            if self.eat('*') {
                let y = self.factor()?;
                x = x.checked_mul(y).ok_or(EvalError::Overflow)?;
            } else if self.eat('/') {
                let y = self.factor()?;
                x = divide(x, y, self.profile)?;
            } else {
                return Ok(x);
            }
        }
    }

    fn factor(&mut self) -> Result<Decimal, EvalError> {
        self.descend()?;
        let value = if self.eat('+') {
            self.factor()?
        } else if self.eat('-') {
            -self.factor()?
        } else {
            let base = self.primary()?;
            if self.eat('^') {
                let exponent = self.factor()?;
                power(base, exponent, self.profile)?
            } else {
                base
            }
        };
        self.depth -= 1;
        Ok(value)
    }

    fn primary(&mut self) -> Result<Decimal, EvalError> {
        self.skip_blanks();
        let start = self.pos;
        if self.eat('(') {
            let value = self.expression()?;
            if self.eat(')') {
                return Ok(value);
            }
            return match self.peek() {
                Some(found) => Err(EvalError::UnexpectedChar {
                    found,
                    offset: self.pos,
                }),
                None => Err(EvalError::UnbalancedParen { offset: start }),
            };
        }

        match self.peek() {
            Some(c) if self.profile.is_numeral_char(c) => self.number(),
            Some(found) => Err(EvalError::UnexpectedChar {
                found,
                offset: self.pos,
            }),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<Decimal, EvalError> {
        let start = self.pos;
        while let Some(c) = self.peek()
            && self.profile.is_numeral_char(c)
        {
            self.pos += c.len_utf8();
        }
        let literal = &self.text[start..self.pos];
        let value = parse_numeral(literal, self.profile).ok_or_else(|| EvalError::Numeral {
            literal: literal.to_string(),
        })?;
        trace!(literal, %value, "numeral");
        Ok(value)
    }
}

/// Quotient rounded to the profile's fraction digits.
fn divide(x: Decimal, y: Decimal, profile: &NumeralProfile) -> Result<Decimal, EvalError> {
    if y.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    let quotient = x.checked_div(y).ok_or(EvalError::Overflow)?;
    Ok(quotient.round_dp_with_strategy(
        profile.currency_fraction_digits(),
        profile.rounding_mode().strategy(),
    ))
}

fn power(base: Decimal, exponent: Decimal, profile: &NumeralProfile) -> Result<Decimal, EvalError> {
    if exponent.fract().is_zero() {
        let n = exponent.to_i64().ok_or(EvalError::Overflow)?;
        return integer_power(base, n, profile);
    }
    float_power(base, exponent)
}

/// Square-and-multiply; negative exponents divide into one.
fn integer_power(base: Decimal, n: i64, profile: &NumeralProfile) -> Result<Decimal, EvalError> {
    let mut result = Decimal::ONE;
    let mut square = base;
    let mut remaining = n.unsigned_abs();
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(square).ok_or(EvalError::Overflow)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = square.checked_mul(square).ok_or(EvalError::Overflow)?;
        }
    }
    if n < 0 {
        divide(Decimal::ONE, result, profile)
    } else {
        Ok(result)
    }
}

fn float_power(base: Decimal, exponent: Decimal) -> Result<Decimal, EvalError> {
    let refused = || EvalError::Exponent { base, exponent };
    let (Some(b), Some(e)) = (exact_f64(base), exponent.to_f64()) else {
        return Err(refused());
    };
    let raised = b.powf(e);
    if !raised.is_finite() {
        return Err(refused());
    }
    Decimal::from_f64(raised).ok_or_else(refused)
}

/// `value` as `f64` if the conversion is lossless.
fn exact_f64(value: Decimal) -> Option<f64> {
    let float = value.to_f64()?;
    (Decimal::from_f64_retain(float) == Some(value)).then_some(float)
}
