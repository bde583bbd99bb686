//! Hand, deck, and ranking formatters for terminal display.
//!
//! This module provides pure functions that render engine values as the text
//! the analyzer prints. Cards always render in their token form (`10H`, `AS`)
//! so printed hands can be pasted back into a test-deck file.
//!
//! ## Example
//!
//! ```rust
//! use stud_engine::cards::parse_hand;
//! use stud_engine::hand::classify;
//! use stud_cli::formatters::{format_hand, format_ranked_line};
//!
//! let hand = classify(&parse_hand("10H JH QH KH AH").unwrap());
//! assert_eq!(format_hand(hand.cards()), "10H JH QH KH AH");
//! assert_eq!(format_ranked_line(&hand), "10H JH QH KH AH - Royal Straight Flush");
//! ```

use serde::Serialize;
use stud_engine::cards::Card;
use stud_engine::hand::ClassifiedHand;
use stud_engine::ranking::RankedResult;

/// Cards printed per row when showing a whole deck.
pub const DECK_ROW_WIDTH: usize = 13;

/// Join cards with single spaces, in the order given.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line of the winning order: the input tokens, then the label.
pub fn format_ranked_line(hand: &ClassifiedHand) -> String {
    format!("{} - {}", format_hand(hand.cards()), hand.category().label())
}

/// Split a deck into rows of [`DECK_ROW_WIDTH`] cards.
pub fn format_deck_rows(cards: &[Card]) -> Vec<String> {
    cards.chunks(DECK_ROW_WIDTH).map(format_hand).collect()
}

/// English word for small counts ("six hands"); digits past ten.
pub fn count_word(n: usize) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS
        .get(n)
        .map(|w| w.to_string())
        .unwrap_or_else(|| n.to_string())
}

#[derive(Debug, Serialize)]
struct RankedEntry {
    position: usize,
    cards: Vec<String>,
    category: &'static str,
    rank_order: u8,
}

/// Render a ranking as pretty JSON with labels from the output contract.
pub fn format_ranked_json(ranked: &RankedResult) -> serde_json::Result<String> {
    let entries: Vec<RankedEntry> = ranked
        .hands()
        .iter()
        .enumerate()
        .map(|(i, h)| RankedEntry {
            position: i + 1,
            cards: h.cards().iter().map(Card::to_string).collect(),
            category: h.category().label(),
            rank_order: h.rank_order(),
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "hands": entries }))
}
