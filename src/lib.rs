#![forbid(unsafe_code)]

pub mod cli;
pub mod currency;
pub mod error;
pub mod field;
pub mod format;
pub mod interpret;
pub mod invalid;
pub mod locale;
pub mod normalize;
pub mod numeric;
pub mod output;
pub mod session;

pub use currency::codes::CurrencyCode;
pub use currency::money::MonetaryValue;
pub use error::{AmountError, ConfigError, EvalError};
pub use field::{FieldConfig, FieldState, FieldUpdate, MoneyField, ValueChange};
pub use interpret::{Interpretation, interpret, normalize};
pub use locale::{LocaleId, NumeralProfile, RoundingMode};

/// Run the moneyfield CLI. Returns exit code (0, 1, or 2).
pub fn run() -> Result<u8, Box<dyn std::error::Error>> {
    use std::io::{self, Write};

    let args = match cli::args::Args::parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            return Ok(match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 2,
            });
        }
    };

    let result = session::run(&args)?;
    let mode = if args.json {
        cli::exit::OutputMode::Json
    } else {
        cli::exit::OutputMode::Human
    };
    let stream = cli::exit::output_stream(result.outcome, mode);

    match stream {
        cli::exit::OutputStream::Stdout => {
            let mut stdout = io::stdout();
            stdout.write_all(result.output.as_bytes())?;
            stdout.flush()?;
        }
        cli::exit::OutputStream::Stderr => {
            let mut stderr = io::stderr();
            stderr.write_all(result.output.as_bytes())?;
            stderr.flush()?;
        }
    }

    Ok(cli::exit::exit_code(result.outcome))
}
