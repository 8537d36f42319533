// Human-readable rendering of a CLI run

use std::fmt::Write;

use crate::error::ConfigError;
use crate::field::{FieldState, MoneyField, ValueChange};
use crate::session::Step;

/// Header line, then one line per committed text:
///
/// ```text
/// moneyfield: locale=de-DE currency=EUR calculable rounding=HALF_EVEN
/// "1+2" -> "3,00" VALID value=3.00 EUR
/// "1/0" -> "1/0" INVALID E_DIV_ZERO: division by zero
/// ```
pub fn render_session(field: &MoneyField, steps: &[Step]) -> String {
    let mut out = String::new();
    let currency = field
        .currency()
        .map_or_else(|| "none".to_string(), |code| code.to_string());
    let mode = if field.config().calculable {
        "calculable"
    } else {
        "plain"
    };
    let _ = writeln!(
        out,
        "moneyfield: locale={} currency={currency} {mode} rounding={}",
        field.locale(),
        field.profile().rounding_mode()
    );

    for step in steps {
        let update = &step.update;
        let _ = write!(out, "{:?} -> {:?} {}", step.input, update.text, state_label(update.state));
        match (&update.error, update.value) {
            (Some(err), _) => {
                let _ = write!(out, " {}: {err}", err.code());
            }
            (None, ValueChange::Set(value)) => {
                let _ = write!(out, " value={value}");
            }
            (None, ValueChange::Cleared) => out.push_str(" value=none"),
            (None, ValueChange::Unchanged) => {}
        }
        out.push('\n');
    }

    if let Some(display) = field.display() {
        let _ = writeln!(out, "display: {display}");
    }
    out
}

pub fn render_error(err: &ConfigError) -> String {
    format!("moneyfield: {err}\n")
}

fn state_label(state: FieldState) -> &'static str {
    match state {
        FieldState::Empty => "EMPTY",
        FieldState::Valid => "VALID",
        FieldState::Invalid => "INVALID",
    }
}
