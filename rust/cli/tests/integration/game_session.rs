// B-series: scripted play sessions through stdin

use crate::helpers::cli_runner::CliRunner;

fn stacks_line(stdout: &str) -> Option<(u32, u32)> {
    let line = stdout.lines().find(|l| l.starts_with("Stacks: "))?;
    let nums: Vec<u32> = line
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();
    match nums.as_slice() {
        [one, two] => Some((*one, *two)),
        _ => None,
    }
}

#[test]
fn b1_fold_then_quit() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(&["play", "--seed", "42"], "f\nq\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Seat One folds."));
    assert!(res.stdout.contains("Seat Two wins 3."));
    // Second hand: the button moved to seat two.
    assert!(res.stdout.contains("Hand #2  Preflop  pot 3"));
    assert!(res.stdout.contains("Seat Two (button)"));
    assert!(res.stdout.contains("Hands completed: 1"));
    assert_eq!(stacks_line(&res.stdout), Some((199, 201)));
}

#[test]
fn b2_same_seed_same_session() {
    let cli = CliRunner::new().expect("init");
    let script = "c\nc\nr\nc\nc\nc\nc\nc\n";
    let a = cli.run_with_input(&["play", "--seed", "9", "--hands", "1"], script);
    let b = cli.run_with_input(&["play", "--seed", "9", "--hands", "1"], script);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.contains("Seat Two: bet 2"));
    assert!(a.stdout.contains("Seat One: call 2"));
    assert!(a.stdout.contains("Hands completed: 1"));
}

#[test]
fn b3_chips_are_conserved_over_many_hands() {
    let cli = CliRunner::new().expect("init");
    let script = "r\nr\nc\nc\nr\nc\nf\n".repeat(30);
    let res = cli.run_with_input(&["play", "--seed", "11", "--hands", "20"], &script);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let (one, two) = stacks_line(&res.stdout).expect("stacks line");
    assert_eq!(one + two, 400);
}

#[test]
fn b4_invalid_actions_are_reported_not_fatal() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(
        &["play", "--seed", "5", "--hands", "1"],
        "allin\nbet 10\nf\n",
    );
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stderr.matches("Error:").count(), 2);
    assert!(res.stdout.contains("Hands completed: 1"));
}

#[test]
fn b5_zero_hands_exits_2() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(&["play", "--hands", "0"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("hands must be >= 1"));
}

#[test]
fn b6_short_stacks_end_the_session() {
    let cli = CliRunner::new().expect("init");
    // With one chip each, folding the button's all-in blind leaves Seat One
    // unable to post the next hand.
    let res = cli.run_with_env_and_input(
        &["play", "--seed", "13"],
        &[("HEADSUP_STACK", "1")],
        "f\n",
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Seat One is out of chips."));
    assert!(res.stdout.contains("Hands completed: 1"));
    assert_eq!(stacks_line(&res.stdout), Some((0, 2)));
    assert!(!res.stderr.contains("input ended"));
}
