//! Exit codes & stdout/stderr routing.

/// How a CLI run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Empty,
    Invalid,
    /// Configuration could not be applied; no text was interpreted.
    Error,
}

/// Output mode chosen by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Target stream for output emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

pub fn exit_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Valid | Outcome::Empty => 0,
        Outcome::Invalid => 1,
        Outcome::Error => 2,
    }
}

/// Output stream for a given outcome and output mode.
///
/// In JSON mode, everything goes to stdout.
/// In human mode, configuration errors go to stderr.
pub fn output_stream(outcome: Outcome, mode: OutputMode) -> OutputStream {
    match (mode, outcome) {
        (OutputMode::Json, _) => OutputStream::Stdout,
        (OutputMode::Human, Outcome::Error) => OutputStream::Stderr,
        (OutputMode::Human, _) => OutputStream::Stdout,
    }
}
