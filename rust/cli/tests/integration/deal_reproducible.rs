use crate::helpers::cli_runner::CliRunner;

use std::collections::HashSet;

fn section<'a>(stdout: &'a str, header: &str) -> Vec<&'a str> {
    stdout
        .lines()
        .skip_while(|l| !l.starts_with(header))
        .skip(1)
        .take_while(|l| !l.is_empty())
        .collect()
}

#[test]
fn same_seed_same_report() {
    let cli = CliRunner::new();
    let a = cli.run(&["deal", "--seed", "2024"]);
    let b = cli.run(&["deal", "--seed", "2024"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn dealt_and_remaining_cover_the_whole_deck() {
    let cli = CliRunner::new();
    let res = cli.run(&["deal", "--seed", "77", "--hands", "6"]);
    assert_eq!(res.exit_code, 0);

    let shuffled: Vec<&str> = section(&res.stdout, "*** Shuffled 52 card deck:")
        .iter()
        .flat_map(|row| row.split(' '))
        .collect();
    assert_eq!(shuffled.len(), 52);

    let hands = section(&res.stdout, "*** Here are the six hands...");
    assert_eq!(hands.len(), 6);
    let remaining = section(&res.stdout, "*** Here is what remains in the deck...");
    assert_eq!(remaining.len(), 1);

    let mut seen = HashSet::new();
    for card in hands
        .iter()
        .chain(remaining.iter())
        .flat_map(|line| line.split(' '))
    {
        assert!(seen.insert(card), "card {} dealt twice", card);
    }
    assert_eq!(seen.len(), 52);
    assert_eq!(seen, shuffled.into_iter().collect());
}

#[test]
fn round_robin_dealing() {
    let cli = CliRunner::new();
    let res = cli.run(&["deal", "--seed", "9", "--hands", "2"]);
    let shuffled: Vec<&str> = section(&res.stdout, "*** Shuffled 52 card deck:")
        .iter()
        .flat_map(|row| row.split(' '))
        .collect();
    let hands = section(&res.stdout, "*** Here are the two hands...");
    let first: Vec<&str> = hands[0].split(' ').collect();
    let second: Vec<&str> = hands[1].split(' ').collect();
    assert_eq!(first, [shuffled[0], shuffled[2], shuffled[4], shuffled[6], shuffled[8]]);
    assert_eq!(second, [shuffled[1], shuffled[3], shuffled[5], shuffled[7], shuffled[9]]);
}

#[test]
fn winning_order_lists_every_dealt_hand() {
    let cli = CliRunner::new();
    let res = cli.run(&["deal", "--seed", "31", "--hands", "5", "--hide-deck"]);
    let hands: HashSet<&str> = section(&res.stdout, "*** Here are the five hands...")
        .into_iter()
        .collect();
    let ranked: HashSet<&str> = res
        .winning_order()
        .iter()
        .filter_map(|l| l.split(" - ").next())
        .collect();
    assert_eq!(hands, ranked);
}

#[test]
fn out_of_range_hand_count_is_rejected() {
    let cli = CliRunner::new();
    let res = cli.run(&["deal", "--hands", "11"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
}
