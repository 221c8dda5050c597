//! Command-line front end: argument parsing through rendered output

use tenpin::cli::{parse_args, run};
use tenpin::report::OutputFormat;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn perfect_game_text_output() {
    let config = parse_args(&args(&["10"; 12]), OutputFormat::Text).unwrap();
    let out = run(&config).unwrap();
    assert!(out.contains("Frame 10: [X, X, X]"));
    assert!(out.contains("Score: 300"));
    assert!(out.ends_with("Game over"));
}

#[test]
fn json_output_is_a_score_card() {
    let config = parse_args(
        &args(&["--format", "json", "5", "5", "3"]),
        OutputFormat::Text,
    )
    .unwrap();
    let out = run(&config).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["score"], 16);
    assert_eq!(v["current_frame"], 2);
    assert_eq!(v["current_roll"], 2);
    assert_eq!(v["frames"][0]["rolls"], serde_json::json!([5, 5]));
}

#[test]
fn rejected_roll_reports_position_and_reason() {
    let config = parse_args(&args(&["6", "7"]), OutputFormat::Text).unwrap();
    let err = run(&config).unwrap_err();
    assert_eq!(err.to_string(), "roll 2 (7 pins) rejected");
    let cause = err.root_cause().to_string();
    assert!(cause.starts_with("Cannot knock down more pins than available"));
}

#[test]
fn roll_after_game_over_is_reported() {
    let mut list = vec!["0"; 20];
    list.push("1");
    let config = parse_args(&args(&list), OutputFormat::Text).unwrap();
    let err = run(&config).unwrap_err();
    assert_eq!(err.root_cause().to_string(), "Cannot roll after game is over");
}

#[test]
fn negative_pins_reach_the_game() {
    let config = parse_args(&args(&["-1"]), OutputFormat::Text).unwrap();
    let err = run(&config).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .starts_with("Pins must be between 0 and 10"));
}
