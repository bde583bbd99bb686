//! Test-deck parsing and validation.
//!
//! A test deck lists one hand per line. Cards on a line are separated by
//! commas, whitespace, or both, so both of these are accepted:
//!
//! ```text
//! 10H, JH, QH, KH, AH
//! 2D 2C 2H 5S 5D
//! ```
//!
//! ## Error Handling
//!
//! Validation stops at the first problem and reports it as a
//! [`BatchValidationError`] naming the offending line. Checks:
//! - every token parses as a card (uppercase suit, known face)
//! - every line holds exactly five cards
//! - no card appears twice anywhere in the file
//! - at least one hand is present

use std::collections::HashSet;

use stud_engine::cards::{Card, hand_from_cards};

use crate::error::BatchValidationError;

/// Parse a whole test deck into hands, in file order.
///
/// Blank lines are skipped; line numbers in errors count them anyway.
///
/// # Example
///
/// ```rust
/// # use stud_cli::validation::parse_test_deck;
/// let hands = parse_test_deck("10H, JH, QH, KH, AH\n2D 2C 2H 5S 5D\n").unwrap();
/// assert_eq!(hands.len(), 2);
///
/// let err = parse_test_deck("2D 2C 2H 5S 2D\n").unwrap_err();
/// assert_eq!(err.to_string(), "line 1: Duplicate card: 2D");
/// ```
pub fn parse_test_deck(content: &str) -> Result<Vec<[Card; 5]>, BatchValidationError<String>> {
    let mut seen: HashSet<Card> = HashSet::new();
    let mut hands = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let fail = |message: String| BatchValidationError {
            item_context: format!("line {}", idx + 1),
            message,
        };
        let tokens = split_tokens(line);
        if tokens.is_empty() {
            continue;
        }

        let mut cards = Vec::with_capacity(tokens.len());
        for token in tokens {
            let card: Card = token
                .parse()
                .map_err(|e| fail(format!("Invalid card {}: {}", token, e)))?;
            if !seen.insert(card) {
                return Err(fail(format!("Duplicate card: {}", card)));
            }
            cards.push(card);
        }
        let hand = hand_from_cards(&cards).map_err(|e| fail(e.to_string()))?;
        hands.push(hand);
    }

    if hands.is_empty() {
        return Err(BatchValidationError {
            item_context: "input".to_string(),
            message: "No hands found".to_string(),
        });
    }
    tracing::debug!(hands = hands.len(), "parsed test deck");
    Ok(hands)
}

/// Split one line on commas and whitespace, dropping empty pieces.
pub fn split_tokens(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}
