//! Single-hand evaluation command.

use crate::error::CliError;
use crate::formatters::format_ranked_line;
use std::io::Write;
use stud_engine::cards::parse_hand;
use stud_engine::hand::classify;

/// Handle the eval command: classify one hand and print `cards - label`.
///
/// Separators may be commas or whitespace, as in a test-deck line.
pub fn handle_eval_command(hand: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let normalized = hand.replace(',', " ");
    let cards = parse_hand(&normalized)?;
    let classified = classify(&cards);
    writeln!(out, "{}", format_ranked_line(&classified))?;
    Ok(())
}
