//! # headsup CLI Library
//!
//! Command-line driver for the heads-up fixed-limit engine: interactive play,
//! single deals, hand evaluation and configuration display.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand, reading
//! player actions from stdin. [`run_with_input`] does the same with any
//! buffered reader, which is how scripted sessions and tests drive `play`.
//!
//! ```
//! use std::io::{self, Cursor};
//! let args = ["headsup", "play", "--seed", "42", "--hands", "1"];
//! let mut input = Cursor::new("f\n");
//! let code = headsup_cli::run_with_input(args, &mut input, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands with both seats read from stdin (`f`, `c`, `r`, `q`)
//! - `deal`: Deal a single hand for inspection, as text or JSON
//! - `eval`: Name the best hand among 5 to 7 cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

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

use cli::{Commands, HeadsupCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["headsup", "deal", "--seed", "42"];
/// let code = headsup_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], reading player actions from `input` instead of stdin.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HeadsupCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: headsup <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: headsup --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Deal { seed, json } => config::load()
            .map_err(CliError::from)
            .and_then(|config| handle_deal_command(&config, seed, json, out)),
        Commands::Play { seed, hands } => config::load()
            .map_err(CliError::from)
            .and_then(|config| handle_play_command(&config, seed, hands, out, err, input)),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
