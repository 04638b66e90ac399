use crate::helpers::cli_runner::CliRunner;

#[test]
fn e1_eval_names_the_best_hand() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run(&["eval", "Ah", "Ks", "Ac", "Tc", "5s", "9h", "9s"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let first = res.stdout.lines().next().unwrap_or_default();
    assert_eq!(first, "two pair aces and nines");
    assert!(res.stdout.contains("Ranking: TwoPair"));
}

#[test]
fn e2_eval_accepts_a_single_list_argument() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run(&["eval", "Ah 2h 3s 4c 5d"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("straight five high\n"));
}

#[test]
fn e3_eval_rejects_bad_input_with_exit_2() {
    let cli = CliRunner::new().unwrap();
    for args in [
        vec!["eval", "Ah", "Ks", "Qd"],
        vec!["eval", "Ah", "Ks", "Qd", "Jc", "Xx"],
        vec!["eval", "Ah", "Ks", "Qd", "Jc", "Ah"],
        vec!["eval", "2c", "3c", "4c", "5c", "6c", "7c", "8c", "9c"],
    ] {
        let res = cli.run(&args);
        assert_eq!(res.exit_code, 2, "{:?} should fail", args);
        assert!(res.stderr.starts_with("Error: Invalid input"), "{}", res.stderr);
        assert!(res.stdout.is_empty());
    }
}

#[test]
fn e4_eval_requires_cards() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run(&["eval"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.to_lowercase().contains("required"), "stderr: {}", res.stderr);
}
