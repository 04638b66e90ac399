//! Command handler modules for the headsup CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and, for `play`,
//!   the input stream (`&mut dyn BufRead`) are passed in
//! - Error propagation: all errors propagated via `CliError`

mod cfg;
mod deal;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
