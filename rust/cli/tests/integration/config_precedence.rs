use crate::helpers::cli_runner::CliRunner;

use serde_json::Value;
use std::fs;

fn cfg_json(cli: &CliRunner, env: &[(&str, &str)]) -> Value {
    let res = cli.run_with_env(&["cfg"], env);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    serde_json::from_str(&res.stdout).unwrap()
}

#[test]
fn i1_cfg_shows_defaults() {
    let cli = CliRunner::new().expect("init");
    let json = cfg_json(&cli, &[]);

    assert_eq!(json["starting_stack"]["value"], 200);
    assert_eq!(json["small_blind"]["value"], 1);
    assert_eq!(json["big_blind"]["value"], 2);
    assert_eq!(json["small_bet"]["value"], 2);
    assert_eq!(json["big_bet"]["value"], 4);
    assert!(json["seed"]["value"].is_null());
    for key in ["starting_stack", "big_bet", "seed"] {
        assert_eq!(json[key]["source"], "default");
    }
}

#[test]
fn i2_precedence_env_over_file_over_default() {
    let cli = CliRunner::new().expect("init");
    let cfg_path = cli.workdir().join("headsup.toml");
    fs::write(&cfg_path, "seed = 456\nstarting_stack = 80\nbig_bet = 6\n").unwrap();
    let cfg_path = cfg_path.to_string_lossy().into_owned();

    let json = cfg_json(&cli, &[("HEADSUP_CONFIG", cfg_path.as_str())]);
    assert_eq!(json["seed"]["value"], 456);
    assert_eq!(json["seed"]["source"], "file");
    assert_eq!(json["starting_stack"]["value"], 80);
    assert_eq!(json["big_bet"]["source"], "file");
    assert_eq!(json["small_bet"]["source"], "default");

    let json = cfg_json(
        &cli,
        &[
            ("HEADSUP_CONFIG", cfg_path.as_str()),
            ("HEADSUP_SEED", "123"),
            ("HEADSUP_STACK", "60"),
        ],
    );
    assert_eq!(json["seed"]["value"], 123);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["starting_stack"]["value"], 60);
    assert_eq!(json["starting_stack"]["source"], "env");
    assert_eq!(json["big_bet"]["value"], 6);
}

#[test]
fn i3_configured_seed_drives_deal_and_flag_overrides_it() {
    let cli = CliRunner::new().expect("init");
    let configured = cli.run_with_env(&["deal"], &[("HEADSUP_SEED", "77")]);
    let explicit = cli.run(&["deal", "--seed", "77"]);
    assert_eq!(configured.exit_code, 0);
    assert_eq!(configured.stdout, explicit.stdout);

    let overridden = cli.run_with_env(&["deal", "--seed", "5"], &[("HEADSUP_SEED", "77")]);
    assert!(overridden.stdout.starts_with("Seed: 5\n"));
}

#[test]
fn i4_configured_stakes_reach_the_table() {
    let cli = CliRunner::new().expect("init");
    let cfg_path = cli.workdir().join("stakes.toml");
    fs::write(&cfg_path, "small_blind = 5\nbig_blind = 10\n").unwrap();
    let cfg_path = cfg_path.to_string_lossy().into_owned();

    let res = cli.run_with_env(
        &["deal", "--seed", "3", "--json"],
        &[("HEADSUP_CONFIG", cfg_path.as_str()), ("HEADSUP_STACK", "100")],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["pot"], 15);
    assert_eq!(json["round_outstanding"], 10);
}

#[test]
fn i5_invalid_config_exits_2() {
    let cli = CliRunner::new().expect("init");
    for env in [
        [("HEADSUP_SEED", "abc")],
        [("HEADSUP_STACK", "0")],
        [("HEADSUP_CONFIG", "/nonexistent/headsup.toml")],
    ] {
        for cmd in ["cfg", "deal"] {
            let res = cli.run_with_env(&[cmd], &env);
            assert_eq!(res.exit_code, 2, "{} with {:?}", cmd, env);
            assert!(res.stderr.contains("Configuration error"), "{}", res.stderr);
        }
    }
}
