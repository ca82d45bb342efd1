//! End-to-end tests for the polymul command line

use clap::Parser;
use polymul_cli::{run, Cli, Command};
use polymul_core::config::{OutputFormat, Settings};
use std::io::Write;
use tempfile::NamedTempFile;

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let settings = cli.settings()?;
    let mut out = Vec::new();
    run(&cli, &settings, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_invocation_prints_fourth_roots() {
    let output = run_args(&["polymul"]).unwrap();
    assert_eq!(
        output,
        "Root 0: (1+0i)\n\
         Root 1: (6.123233995736766e-17+1i)\n\
         Root 2: (-1+1.2246467991473532e-16i)\n\
         Root 3: (-1.8369701987210297e-16-1i)\n"
    );
}

#[test]
fn test_roots_with_order() {
    let output = run_args(&["polymul", "roots", "-n", "6"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Root 0: (1+0i)");
    assert!(lines[5].starts_with("Root 5: ("));
}

#[test]
fn test_roots_uses_configured_order() {
    let file = config_file("[roots]\norder = 3\n");
    let path = file.path().to_str().unwrap();

    let output = run_args(&["polymul", "--config", path]).unwrap();
    assert_eq!(output.lines().count(), 3);

    let output = run_args(&["polymul", "--config", path, "roots", "-n", "5"]).unwrap();
    assert_eq!(output.lines().count(), 5);
}

#[test]
fn test_format_flag_overrides_config_file() {
    let file = config_file("output = \"json\"\n");
    let path = file.path().to_str().unwrap();

    let output = run_args(&["polymul", "--config", path, "roots", "-n", "1"]).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());

    let output =
        run_args(&["polymul", "--config", path, "--format", "text", "roots", "-n", "1"]).unwrap();
    assert_eq!(output, "Root 0: (1+0i)\n");
}

#[test]
fn test_log_level_flag_overrides_config_file() {
    let file = config_file("[logging]\nlevel = \"error\"\n");
    let path = file.path().to_str().unwrap();

    let cli = Cli::try_parse_from(["polymul", "--config", path]).unwrap();
    assert_eq!(cli.settings().unwrap().logging.level, "error");

    let cli = Cli::try_parse_from(["polymul", "--config", path, "--log-level", "DEBUG"]).unwrap();
    assert_eq!(cli.settings().unwrap().logging.level, "debug");
}

#[test]
fn test_unknown_log_level_flag_fails() {
    let err = run_args(&["polymul", "--log-level", "loud"]).unwrap_err();
    assert!(err.to_string().contains("Unknown log level"), "{err}");
}

#[test]
fn test_broken_config_file_fails() {
    let file = config_file("roots = 5\nlogging = \"debug\"\n");
    let path = file.path().to_str().unwrap();
    assert!(run_args(&["polymul", "--config", path]).is_err());
}

#[test]
fn test_roots_zero_order_fails() {
    let err = run_args(&["polymul", "roots", "--order", "0"]).unwrap_err();
    assert!(err.to_string().contains("Invalid argument"));
}

#[test]
fn test_negative_order_rejected_by_parser() {
    assert!(Cli::try_parse_from(["polymul", "roots", "-n", "-4"]).is_err());
}

#[test]
fn test_roots_json() {
    let output = run_args(&["polymul", "--format", "json", "roots", "-n", "2"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["index"], 0);
    assert_eq!(rows[0]["re"], 1.0);
    assert_eq!(rows[0]["im"], 0.0);
}

#[test]
fn test_karatsuba_command() {
    let output = run_args(&["polymul", "karatsuba", "12345", "6789"]).unwrap();
    assert_eq!(
        output,
        "Result: 12345 × 6789 = 83810205\nVerification: true\n"
    );
}

#[test]
fn test_toom3_negative_operand() {
    let output = run_args(&["polymul", "toom3", "-1234567", "7654321"]).unwrap();
    assert_eq!(
        output,
        "Result: -1234567 × 7654321 = -9449772114007\nVerification: true\n"
    );
}

#[test]
fn test_compare_json() {
    let output = run_args(&["polymul", "compare", "123", "456", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["standard"], "56088");
    assert_eq!(value["toom3"], "56088");
    assert_eq!(value["all_agree"], true);
}

#[test]
fn test_invalid_integer_rejected() {
    assert!(Cli::try_parse_from(["polymul", "karatsuba", "12x", "3"]).is_err());
}

#[test]
fn test_parsed_structure() {
    let cli = Cli::try_parse_from(["polymul", "--log-level", "debug", "compare", "1", "2"]).unwrap();
    assert_eq!(cli.log_level.as_deref(), Some("debug"));
    assert!(matches!(cli.command, Some(Command::Compare { .. })));
    assert_eq!(Settings::default().output, OutputFormat::Text);
}

#[test]
fn test_karatsuba_demo() {
    let output = run_args(&["polymul", "demo", "karatsuba"]).unwrap();
    assert_eq!(
        output,
        "Karatsuba Multiplication Algorithm Demonstration\n\
         ------------------------------------------------\n\
         Example 1: 123 × 456 = 56088\n\
         Verification: true\n\
         \n\
         Example 2: 12345 × 6789 = 83810205\n\
         Verification: true\n\
         \n\
         Example 3: 1234567 × 7654321 = 9449772114007\n\
         Verification: true\n"
    );
}

#[test]
fn test_all_demos() {
    let output = run_args(&["polymul", "demo"]).unwrap();
    assert!(output.starts_with("Karatsuba Multiplication Algorithm Demonstration\n"));
    assert!(output.contains("\n\nToom-3 Multiplication Algorithm Demonstration\n"));
    assert!(output.contains("Numbers: 1234567 × 7654321\n"));
    assert_eq!(output.matches("All methods agree: true").count(), 2);
    assert!(!output.contains("false"));
}

#[test]
fn test_toom3_demo_json() {
    let output = run_args(&["polymul", "--format", "json", "demo", "toom3"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let demos = value.as_array().unwrap();
    assert_eq!(demos.len(), 1);
    assert_eq!(demos[0]["demo"], "toom3");
    let examples = demos[0]["examples"].as_array().unwrap();
    assert_eq!(examples.len(), 2);
    assert_eq!(examples[1]["toom3"], "9449772114007");
    assert_eq!(examples[1]["all_agree"], true);
}
