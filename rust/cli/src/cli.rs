//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "headsup",
    version,
    about = "Heads-up fixed-limit hold'em at the terminal"
)]
pub struct HeadsupCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands with both seats driven from stdin
    Play {
        /// RNG seed for the deck (overrides HEADSUP_SEED and the config file)
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many completed hands
        #[arg(long)]
        hands: Option<u32>,
    },
    /// Deal the first hand of a table and print it
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Print the table snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate the best five-card hand from 5 to 7 cards
    Eval {
        /// Cards such as `Ah Kd 9s 9c 2h`
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
