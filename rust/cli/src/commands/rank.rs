//! Rank command handler.
//!
//! Loads a test deck, echoes the hands it found, and prints the winning
//! hand order as text or JSON.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::formatters::{count_word, format_hand, format_ranked_json, format_ranked_line};
use crate::io_utils::read_text_auto;
use crate::ui;
use crate::validation::parse_test_deck;
use std::io::Write;
use stud_engine::ranking::rank_cards;

/// Handle the rank command.
///
/// # Arguments
///
/// * `input` - Test-deck path, or `-` for stdin
/// * `format` - Text report or JSON document
/// * `out` - Output stream for the report
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when the file cannot be read or fails
/// validation, `CliError::Io` when writing fails.
pub fn handle_rank_command(
    input: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(input).map_err(CliError::InvalidInput)?;
    let hands = parse_test_deck(&content)?;
    let ranked = rank_cards(&hands);
    tracing::info!(input, hands = hands.len(), "ranked test deck");

    if format == OutputFormat::Json {
        let json = format_ranked_json(&ranked).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    writeln!(out, "*** P O K E R   H A N D   A N A L Y Z E R ***")?;
    writeln!(out)?;
    ui::write_section(out, "USING TEST DECK ***")?;
    writeln!(out)?;
    ui::write_section(out, &format!("File: {}", input))?;
    writeln!(out)?;
    ui::write_section(out, &format!("Here are the {} hands...", count_word(hands.len())))?;
    for cards in &hands {
        writeln!(out, "{}", format_hand(cards))?;
    }
    writeln!(out)?;
    writeln!(out, "--- WINNING HAND ORDER ---")?;
    for hand in ranked.hands() {
        writeln!(out, "{}", format_ranked_line(hand))?;
    }
    Ok(())
}
