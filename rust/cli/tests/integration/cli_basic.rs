// A-series: Basic CLI functionality tests

use crate::helpers::cli_runner::CliRunner;

#[test]
fn a1_help_lists_all_commands() {
    let cli = CliRunner::new().expect("CliRunner should initialize with binary path");
    let res = cli.run(&["--help"]);

    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in ["play", "deal", "eval", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn a2_version_prints_version_and_exits_zero() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["--version"]);
    assert_eq!(res.exit_code, 0, "--version should exit 0");
    assert!(res.stdout.contains("headsup"));
}

#[test]
fn a3_unknown_subcommand_shows_help_excerpt_on_stderr() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["unknown"]);
    assert_eq!(res.exit_code, 2, "unknown subcommand should exit 2");
    assert!(
        res.stderr.contains("Commands:"),
        "stderr should contain help Commands section\n---stderr---\n{}\n-----------",
        res.stderr
    );
    assert!(res.stderr.contains("  play"));
}

#[test]
fn a4_deal_is_reproducible_by_seed() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let a = cli.run(&["deal", "--seed", "2024"]);
    let b = cli.run(&["deal", "--seed", "2024"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.starts_with("Seed: 2024\n"));
}

#[test]
fn a5_deal_json_is_a_table_snapshot() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["deal", "--seed", "1", "--json"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let json: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["seed"], 1);
    assert_eq!(json["hand_number"], 1);
    assert_eq!(json["round"], "Preflop");
    assert_eq!(json["button"], "One");
    assert_eq!(json["pot"], 3);
    assert_eq!(json["board"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["players"].as_array().map(Vec::len), Some(2));
}
