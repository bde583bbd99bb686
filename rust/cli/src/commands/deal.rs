//! Deal command handler.
//!
//! This module provides the `deal` command which shuffles a fresh deck,
//! deals five-card hands round-robin, shows what remains, and prints the
//! winning hand order. Seeding makes the whole report reproducible.

use crate::config;
use crate::error::CliError;
use crate::formatters::{count_word, format_deck_rows, format_hand, format_ranked_line};
use crate::ui;
use std::io::Write;
use stud_engine::deck::Deck;
use stud_engine::ranking::rank_cards;

/// Options for a deal run; `None` falls back to configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealOptions {
    pub seed: Option<u64>,
    pub hands: Option<usize>,
    pub hide_deck: bool,
}

/// Handle the deal command.
///
/// Flags take precedence over configuration values, which take precedence
/// over defaults. Without any seed a random one is drawn.
///
/// # Arguments
///
/// * `opts` - Values given on the command line
/// * `out` - Output stream for the report
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on configuration, dealing, or
/// I/O errors.
pub fn handle_deal_command(opts: DealOptions, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let hands = opts.hands.unwrap_or(cfg.hands);
    let show_deck = cfg.show_deck && !opts.hide_deck;
    tracing::info!(seed, hands, "dealing");

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    writeln!(out, "*** POKER HAND ANALYZER ***")?;
    writeln!(out)?;
    if show_deck {
        ui::write_section(out, "Shuffled 52 card deck:")?;
        for row in format_deck_rows(deck.cards()) {
            writeln!(out, "{}", row)?;
        }
        writeln!(out)?;
    }

    let dealt = deck.deal_hands(hands)?;
    ui::write_section(out, &format!("Here are the {} hands...", count_word(hands)))?;
    for cards in &dealt {
        writeln!(out, "{}", format_hand(cards))?;
    }
    writeln!(out)?;

    ui::write_section(out, "Here is what remains in the deck...")?;
    writeln!(out, "{}", format_hand(deck.undealt()))?;
    writeln!(out)?;

    let ranked = rank_cards(&dealt);
    writeln!(out, "--- WINNING HAND ORDER ---")?;
    for hand in ranked.hands() {
        writeln!(out, "{}", format_ranked_line(hand))?;
    }
    Ok(())
}
