use clap::Parser;
use moneyfield::cli::args::Args;
use moneyfield::cli::exit::{Outcome, OutputMode, OutputStream, exit_code, output_stream};
use moneyfield::session;

fn run(argv: &[&str]) -> session::SessionResult {
    let args = Args::try_parse_from(argv).expect("arguments should parse");
    session::run(&args).expect("session should render")
}

#[test]
fn exit_codes_follow_final_state() {
    assert_eq!(exit_code(Outcome::Valid), 0);
    assert_eq!(exit_code(Outcome::Empty), 0);
    assert_eq!(exit_code(Outcome::Invalid), 1);
    assert_eq!(exit_code(Outcome::Error), 2);
}

#[test]
fn json_mode_routes_all_to_stdout() {
    for outcome in [Outcome::Valid, Outcome::Empty, Outcome::Invalid, Outcome::Error] {
        assert_eq!(output_stream(outcome, OutputMode::Json), OutputStream::Stdout);
    }
}

#[test]
fn human_mode_errors_to_stderr() {
    assert_eq!(output_stream(Outcome::Valid, OutputMode::Human), OutputStream::Stdout);
    assert_eq!(output_stream(Outcome::Invalid, OutputMode::Human), OutputStream::Stdout);
    assert_eq!(output_stream(Outcome::Error, OutputMode::Human), OutputStream::Stderr);
}

#[test]
fn human_run_reports_each_text() {
    let result = run(&[
        "moneyfield",
        "--locale",
        "de-DE",
        "--currency",
        "EUR",
        "--calc",
        "1+2+3",
        "1/0",
    ]);
    assert_eq!(result.outcome, Outcome::Invalid);
    let lines: Vec<&str> = result.output.lines().collect();
    assert_eq!(lines[1], "\"1+2+3\" -> \"6,00\" VALID value=6.00 EUR");
    assert_eq!(lines[2], "\"1/0\" -> \"1/0\" INVALID E_DIV_ZERO: division by zero");
}

#[test]
fn json_run_is_one_object() {
    let result = run(&[
        "moneyfield",
        "--json",
        "--locale",
        "hi-IN",
        "--currency",
        "INR",
        "--",
        "-987654.321",
    ]);
    assert_eq!(result.outcome, Outcome::Valid);
    let value: serde_json::Value = serde_json::from_str(&result.output).expect("json");
    assert_eq!(value["outcome"], "VALID");
    assert_eq!(value["steps"][0]["text"], "-9,87,654.32");
    assert_eq!(value["value"]["amount"], "-987654.32");
    assert_eq!(value["display"], "-₹9,87,654.32");
}

#[test]
fn disallowed_initial_value_is_a_configuration_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("field.json");
    std::fs::write(
        &path,
        r#"{ "allowed_currencies": ["USD"],
             "initial_value": { "amount": "1", "currency": "EUR" } }"#,
    )
    .expect("write config");

    let path_arg = path.to_string_lossy().into_owned();
    let result = run(&["moneyfield", "--json", "--config", &path_arg, "1"]);
    assert_eq!(result.outcome, Outcome::Error);
    let value: serde_json::Value = serde_json::from_str(&result.output).expect("json");
    assert_eq!(value["outcome"], "ERROR");
    assert!(value["error"].as_str().expect("message").contains("'EUR'"));
}
