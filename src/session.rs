//! CLI run: configure a field, feed it the texts, render the result.

use std::error::Error;

use crate::cli::args::Args;
use crate::cli::exit::{Outcome, OutputMode};
use crate::error::ConfigError;
use crate::field::{FieldConfig, FieldState, FieldUpdate, MoneyField};
use crate::locale::tags::LocaleId;
use crate::output::human::{render_error, render_session};
use crate::output::json::JsonOutput;

pub struct SessionResult {
    pub outcome: Outcome,
    pub output: String,
}

/// One committed text and what the field made of it.
#[derive(Debug, Clone)]
pub struct Step {
    pub input: String,
    pub update: FieldUpdate,
}

pub fn run(args: &Args) -> Result<SessionResult, Box<dyn Error>> {
    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut field = match build_field(args) {
        Ok(field) => field,
        Err(err) => {
            let output = match mode {
                OutputMode::Json => JsonOutput::error(&err).render()?,
                OutputMode::Human => render_error(&err),
            };
            return Ok(SessionResult {
                outcome: Outcome::Error,
                output,
            });
        }
    };

    let steps = feed(&mut field, &args.texts);
    let outcome = outcome_for(field.state());
    let output = match mode {
        OutputMode::Json => JsonOutput::session(outcome, &field, &steps).render()?,
        OutputMode::Human => render_session(&field, &steps),
    };
    Ok(SessionResult { outcome, output })
}

/// Field configured from `--config` with the flags layered on top.
pub fn build_field(args: &Args) -> Result<MoneyField, ConfigError> {
    let mut config = match &args.config {
        Some(path) => FieldConfig::from_path(path)?,
        None => FieldConfig::default(),
    };
    if args.calc {
        config.calculable = true;
    }
    if args.required {
        config.nullable = false;
    }
    if args.rounding.is_some() {
        config.rounding_mode = args.rounding;
    }

    let mut field = MoneyField::new(config, LocaleId::parse(&args.locale))?;
    if let Some(code) = args.currency {
        field.set_currency(Some(code))?;
    }
    Ok(field)
}

/// Commit each text in order.
pub fn feed(field: &mut MoneyField, texts: &[String]) -> Vec<Step> {
    texts
        .iter()
        .map(|text| Step {
            input: text.clone(),
            update: field.set_text(text),
        })
        .collect()
}

pub fn outcome_for(state: FieldState) -> Outcome {
    match state {
        FieldState::Valid => Outcome::Valid,
        FieldState::Empty => Outcome::Empty,
        FieldState::Invalid => Outcome::Invalid,
    }
}
