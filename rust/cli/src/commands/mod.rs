//! Command handler modules for the stud CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod deal;
mod eval;
mod rank;

pub use cfg::handle_cfg_command;
pub use deal::{DealOptions, handle_deal_command};
pub use eval::handle_eval_command;
pub use rank::handle_rank_command;
