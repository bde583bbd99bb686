use crate::helpers::cli_runner::CliRunner;
use crate::helpers::decks::{EVERY_CATEGORY, EVERY_CATEGORY_RANKED, PAIR_TIE};

use serde_json::Value;

#[test]
fn ranks_every_category_in_order() {
    let cli = CliRunner::new();
    let deck = cli.write_file("deck.txt", EVERY_CATEGORY);
    let res = cli.run(&["rank", "--input", deck.to_string_lossy().as_ref()]);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("*** Here are the ten hands..."));
    assert_eq!(res.winning_order(), EVERY_CATEGORY_RANKED);
}

#[test]
fn reads_from_stdin() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["rank", "--input", "-"], PAIR_TIE);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("*** File: -"));
    assert_eq!(
        res.winning_order(),
        ["KH KS 3H 6S 8C - Pair", "KD KC 2H 5S 9D - Pair"]
    );
}

#[test]
fn byte_order_mark_is_ignored() {
    let cli = CliRunner::new();
    let deck = cli.write_file("bom.txt", &format!("\u{feff}{}", PAIR_TIE));
    let res = cli.run(&["rank", "-i", deck.to_string_lossy().as_ref()]);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
}

#[test]
fn json_output_is_machine_readable() {
    let cli = CliRunner::new();
    let deck = cli.write_file("deck.txt", EVERY_CATEGORY);
    let res = cli.run(&[
        "rank",
        "--input",
        deck.to_string_lossy().as_ref(),
        "--format",
        "json",
    ]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    let hands = json["hands"].as_array().unwrap();
    assert_eq!(hands.len(), 10);
    let orders: Vec<u64> = hands
        .iter()
        .map(|h| h["rank_order"].as_u64().unwrap())
        .collect();
    assert_eq!(orders, (5..=14).collect::<Vec<u64>>());
}

#[test]
fn duplicate_card_reports_line() {
    let cli = CliRunner::new();
    let deck = cli.write_file("dup.txt", "KD KC 2H 5S 9D\nQD QC 3H 6S 9D\n");
    let res = cli.run(&["rank", "--input", deck.to_string_lossy().as_ref()]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("line 2: Duplicate card: 9D"),
        "{}",
        res.stderr
    );
    assert!(res.stdout.is_empty());
}

#[test]
fn missing_file_reports_path() {
    let cli = CliRunner::new();
    let res = cli.run(&["rank", "--input", "absent.txt"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Could not open file absent.txt"), "{}", res.stderr);
}
