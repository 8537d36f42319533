// JSON output schema assembly

use serde::Serialize;

use crate::cli::exit::Outcome as RunOutcome;
use crate::currency::codes::CurrencyCode;
use crate::currency::money::MonetaryValue;
use crate::error::{AmountError, ConfigError};
use crate::field::{FieldState, MoneyField, ValueChange};
use crate::locale::profile::RoundingMode;
use crate::session::Step;

pub const VERSION: &str = "moneyfield.v0";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Valid,
    Empty,
    Invalid,
    Error,
}

impl From<RunOutcome> for Outcome {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Valid => Outcome::Valid,
            RunOutcome::Empty => Outcome::Empty,
            RunOutcome::Invalid => Outcome::Invalid,
            RunOutcome::Error => Outcome::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    Unchanged,
    Set,
    Cleared,
}

#[derive(Debug, Clone, Serialize)]
pub struct Reason {
    pub code: &'static str,
    pub message: String,
}

impl Reason {
    pub fn new(err: &AmountError) -> Self {
        Self {
            code: err.code().as_str(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSettings {
    pub locale: String,
    pub currency: Option<CurrencyCode>,
    pub calculable: bool,
    pub nullable: bool,
    pub rounding: RoundingMode,
    pub fraction_digits: u32,
}

impl FieldSettings {
    pub fn of(field: &MoneyField) -> Self {
        let profile = field.profile();
        Self {
            locale: field.locale().to_string(),
            currency: field.currency(),
            calculable: field.config().calculable,
            nullable: field.config().nullable,
            rounding: profile.rounding_mode(),
            fraction_digits: profile.currency_fraction_digits(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepOutput {
    pub input: String,
    pub text: String,
    pub state: FieldState,
    pub invalid: bool,
    pub change: Change,
    /// Emitted value when `change` is `set`.
    pub value: Option<MonetaryValue>,
    pub reason: Option<Reason>,
}

impl StepOutput {
    pub fn new(step: &Step) -> Self {
        let update = &step.update;
        let (change, value) = match update.value {
            ValueChange::Unchanged => (Change::Unchanged, None),
            ValueChange::Set(value) => (Change::Set, Some(value)),
            ValueChange::Cleared => (Change::Cleared, None),
        };
        Self {
            input: step.input.clone(),
            text: update.text.clone(),
            state: update.state,
            invalid: update.invalid,
            change,
            value,
            reason: update.error.as_ref().map(Reason::new),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    pub version: &'static str,
    pub outcome: Outcome,
    pub field: Option<FieldSettings>,
    pub steps: Vec<StepOutput>,
    /// Value bound to the field after the last step.
    pub value: Option<MonetaryValue>,
    pub display: Option<String>,
    pub error: Option<String>,
}

impl JsonOutput {
    pub fn session(outcome: RunOutcome, field: &MoneyField, steps: &[Step]) -> Self {
        Self {
            version: VERSION,
            outcome: outcome.into(),
            field: Some(FieldSettings::of(field)),
            steps: steps.iter().map(StepOutput::new).collect(),
            value: field.value(),
            display: field.display(),
            error: None,
        }
    }

    pub fn error(err: &ConfigError) -> Self {
        Self {
            version: VERSION,
            outcome: Outcome::Error,
            field: None,
            steps: Vec::new(),
            value: None,
            display: None,
            error: Some(err.to_string()),
        }
    }

    pub fn render(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string(self)?;
        out.push('\n');
        Ok(out)
    }
}
