use crate::helpers::cli_runner::CliRunner;

#[test]
fn help_lists_every_command() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["deal", "rank", "eval", "cfg"] {
        assert!(res.stdout.contains(cmd), "missing {} in help", cmd);
    }
}

#[test]
fn version_prints_to_stdout() {
    let cli = CliRunner::new();
    let res = cli.run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("stud "));
}

#[test]
fn missing_command_exits_with_usage() {
    let cli = CliRunner::new();
    let res = cli.run(&[]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Usage: stud <command> [options]"));
}

#[test]
fn eval_prints_single_ranked_line() {
    let cli = CliRunner::new();
    let res = cli.run(&["eval", "9D 9C 9H 9S 3C"]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "9D 9C 9H 9S 3C - Four of a Kind\n");
}

#[test]
fn eval_rejects_lowercase_suit() {
    let cli = CliRunner::new();
    let res = cli.run(&["eval", "9d 9C 9H 9S 3C"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Suits must be uppercase: d"), "{}", res.stderr);
    assert!(res.stdout.is_empty());
}

#[test]
fn debug_logging_goes_to_stderr() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["eval", "9D 9C 9H 9S 3C"], &[("RUST_LOG", "stud_engine=debug")]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "9D 9C 9H 9S 3C - Four of a Kind\n");
    assert!(res.stderr.contains("classified"), "{}", res.stderr);
}
