//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use stud_engine::deck::MAX_HANDS;

#[derive(Parser, Debug)]
#[command(
    name = "stud",
    author,
    version,
    about = "Five-card stud hand analyzer",
    long_about = None
)]
pub struct StudCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shuffle a deck, deal hands, and print the winning order
    Deal {
        /// RNG seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Number of five-card hands to deal
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_HANDS as i64))]
        hands: Option<u8>,
        /// Do not print the shuffled deck
        #[arg(long)]
        hide_deck: bool,
    },
    /// Rank the hands listed in a test-deck file (`-` reads stdin)
    Rank {
        #[arg(long, short)]
        input: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Classify a single hand, e.g. "10H JH QH KH AH"
    Eval {
        hand: String,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
