//! The money field: text in, canonical text and monetary value out.
//!
//! Every text the user commits runs one interpretation cycle. A valid text is
//! replaced by its canonical locale rendering and the value is emitted; an
//! invalid text is kept verbatim and the last value stays in place.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::config::FieldConfig;
use crate::currency::codes::CurrencyCode;
use crate::currency::money::MonetaryValue;
use crate::error::{AmountError, ConfigError};
use crate::format::{format_amount, format_currency};
use crate::interpret::{Interpretation, interpret};
use crate::locale::profile::NumeralProfile;
use crate::locale::table::resolve_profile;
use crate::locale::tags::LocaleId;
use crate::normalize::trim::is_blank_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    Empty,
    Valid,
    Invalid,
}

/// What a cycle did to the bound monetary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueChange {
    Unchanged,
    Set(MonetaryValue),
    Cleared,
}

/// Observable result of one field operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// Text the field shows after the operation.
    pub text: String,
    pub invalid: bool,
    pub state: FieldState,
    pub value: ValueChange,
    /// Why the text was rejected, when it was.
    pub error: Option<AmountError>,
}

#[derive(Debug, Clone)]
pub struct MoneyField {
    config: FieldConfig,
    locale: LocaleId,
    currency: Option<CurrencyCode>,
    /// Locale profile with the currency and rounding overrides applied.
    profile: NumeralProfile,
    text: String,
    state: FieldState,
    /// Last accepted amount, rounded as displayed.
    amount: Option<Decimal>,
    value: Option<MonetaryValue>,
    error: Option<AmountError>,
}

impl MoneyField {
    /// Build a field for `locale`, presenting the configured initial value.
    pub fn new(config: FieldConfig, locale: LocaleId) -> Result<Self, ConfigError> {
        config.validate()?;
        let initial = config.initial_value;
        let mut field = Self {
            profile: NumeralProfile::default(),
            config,
            locale,
            currency: None,
            text: String::new(),
            state: FieldState::Empty,
            amount: None,
            value: None,
            error: None,
        };
        field.refresh_profile();
        if let Some(value) = initial {
            field.present(value);
        }
        Ok(field)
    }

    /// Commit `text` as typed and run one interpretation cycle.
    pub fn set_text(&mut self, text: &str) -> FieldUpdate {
        self.text = text.to_string();
        if is_blank_text(text) {
            if self.config.nullable {
                return self.empty();
            }
            return self.reject(AmountError::Required);
        }
        self.cycle()
    }

    /// Enter `amount` programmatically, as if typed in canonical form.
    pub fn set_amount(&mut self, amount: Decimal) -> FieldUpdate {
        let text = format_amount(amount, &self.profile);
        self.set_text(&text)
    }

    /// Select the currency. A non-empty text is re-interpreted under the
    /// currency's rounding. Deselecting re-renders a valid amount under the
    /// locale's own rounding and unbinds the value.
    pub fn set_currency(&mut self, currency: Option<CurrencyCode>) -> Result<FieldUpdate, ConfigError> {
        if let Some(code) = currency
            && !self.config.allows(code)
        {
            return Err(ConfigError::CurrencyNotAllowed {
                code: code.to_string(),
            });
        }
        self.currency = currency;
        self.refresh_profile();
        if currency.is_none() {
            self.rerender();
            let change = match self.value.take() {
                Some(_) => ValueChange::Cleared,
                None => ValueChange::Unchanged,
            };
            return Ok(self.update(change));
        }
        if self.state == FieldState::Empty {
            return Ok(self.update(ValueChange::Unchanged));
        }
        Ok(self.cycle())
    }

    /// Switch locale. A valid amount is re-rendered with the new separators;
    /// invalid text is left alone.
    pub fn set_locale(&mut self, locale: LocaleId) -> FieldUpdate {
        debug!(from = %self.locale, to = %locale, "locale changed");
        self.locale = locale;
        self.refresh_profile();
        self.rerender();
        self.update(ValueChange::Unchanged)
    }

    /// Bind a value from outside. `None` empties the field.
    pub fn set_value(&mut self, value: Option<MonetaryValue>) -> Result<FieldUpdate, ConfigError> {
        let Some(value) = value else {
            self.text.clear();
            return Ok(self.empty());
        };
        if !self.config.allows(value.currency) {
            return Err(ConfigError::CurrencyNotAllowed {
                code: value.currency.to_string(),
            });
        }
        self.present(value);
        Ok(self.update(ValueChange::Set(value)))
    }

    /// Reset text, currency and value.
    pub fn clear(&mut self) -> FieldUpdate {
        self.text.clear();
        self.currency = None;
        self.refresh_profile();
        self.empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_invalid(&self) -> bool {
        self.state == FieldState::Invalid
    }

    pub fn value(&self) -> Option<MonetaryValue> {
        self.value
    }

    pub fn amount(&self) -> Option<Decimal> {
        self.amount
    }

    pub fn currency(&self) -> Option<CurrencyCode> {
        self.currency
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    pub fn profile(&self) -> &NumeralProfile {
        &self.profile
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn error(&self) -> Option<&AmountError> {
        self.error.as_ref()
    }

    /// Read-only presentation with the currency symbol, e.g. `1.234,50 €`.
    pub fn display(&self) -> Option<String> {
        match (self.state, self.amount, self.currency) {
            (FieldState::Valid, Some(amount), Some(code)) => {
                Some(format_currency(amount, &self.profile, code))
            }
            _ => None,
        }
    }

    fn refresh_profile(&mut self) {
        let mut profile = resolve_profile(&self.locale);
        if let Some(code) = self.currency {
            profile = profile.with_currency(code);
        }
        if let Some(mode) = self.config.rounding_mode {
            profile = profile.with_rounding_mode(mode);
        }
        self.profile = profile;
    }

    /// Bring a valid amount's text in line with the current profile.
    fn rerender(&mut self) {
        if self.state == FieldState::Valid
            && let Some(amount) = self.amount
        {
            let amount = self.profile.round(amount);
            self.amount = Some(amount);
            self.text = format_amount(amount, &self.profile);
        }
    }

    /// Show `value` without re-emitting it.
    fn present(&mut self, value: MonetaryValue) {
        self.currency = Some(value.currency);
        self.refresh_profile();
        let amount = self.profile.round(value.amount);
        self.text = format_amount(amount, &self.profile);
        self.amount = Some(amount);
        self.value = Some(value);
        self.state = FieldState::Valid;
        self.error = None;
    }

    fn cycle(&mut self) -> FieldUpdate {
        match interpret(&self.text, &self.profile, self.config.calculable, self.currency) {
            Ok(Interpretation { value, text }) => {
                debug!(
                    locale = %self.locale,
                    calculable = self.config.calculable,
                    %value,
                    "amount accepted"
                );
                self.text = text;
                self.amount = Some(value);
                self.state = FieldState::Valid;
                self.error = None;
                let change = match self.currency {
                    Some(code) => {
                        let money = MonetaryValue::new(value, code);
                        self.value = Some(money);
                        ValueChange::Set(money)
                    }
                    None => ValueChange::Unchanged,
                };
                self.update(change)
            }
            Err(err) => self.reject(err),
        }
    }

    fn reject(&mut self, err: AmountError) -> FieldUpdate {
        debug!(
            locale = %self.locale,
            code = %err.code(),
            error = %err,
            text = %self.text,
            "amount rejected"
        );
        self.state = FieldState::Invalid;
        self.error = Some(err);
        self.update(ValueChange::Unchanged)
    }

    fn empty(&mut self) -> FieldUpdate {
        self.text.clear();
        self.state = FieldState::Empty;
        self.amount = None;
        self.value = None;
        self.error = None;
        self.update(ValueChange::Cleared)
    }

    fn update(&self, value: ValueChange) -> FieldUpdate {
        FieldUpdate {
            text: self.text.clone(),
            invalid: self.is_invalid(),
            state: self.state,
            value,
            error: self.error.clone(),
        }
    }
}
