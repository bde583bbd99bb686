//! # Stud CLI Library
//!
//! This library provides the command-line interface for the stud hand
//! analyzer. It exposes subcommands for dealing random tables, ranking
//! prepared test decks, and classifying single hands.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["stud", "deal", "--seed", "42", "--hands", "6"];
//! let code = stud_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Shuffle, deal up to ten hands, and print the winning order
//! - `rank`: Rank the hands in a test-deck file
//! - `eval`: Classify one hand
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, StudCli};
use commands::{
    DealOptions, handle_cfg_command, handle_deal_command, handle_eval_command,
    handle_rank_command,
};

pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["stud", "eval", "10H JH QH KH AH"];
/// let code = stud_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "rank", "eval", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = StudCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Stud Hand Analyzer");
                    write_or_exit!(err, "Usage: stud <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: stud --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Deal {
                seed,
                hands,
                hide_deck,
            } => {
                let opts = DealOptions {
                    seed,
                    hands: hands.map(usize::from),
                    hide_deck,
                };
                exit_with!(handle_deal_command(opts, out), err)
            }
            Commands::Rank { input, format } => {
                exit_with!(handle_rank_command(&input, format, out), err)
            }
            Commands::Eval { hand } => exit_with!(handle_eval_command(&hand, out), err),
            Commands::Cfg => exit_with!(handle_cfg_command(out), err),
        },
    }
}
