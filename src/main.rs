#![forbid(unsafe_code)]

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("MONEYFIELD_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match moneyfield::run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("moneyfield: {e}");
            ExitCode::from(2)
        }
    }
}
