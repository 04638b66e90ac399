//! Deal command handler.
//!
//! Seats two players, posts the blinds and deals the first hand, then prints
//! the resulting table. With `--json` the snapshot is the engine's
//! serialisable `TableView`.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::render_table;
use headsup_engine::table::Table;
use std::io::Write;

/// Deals one hand and prints it. `seed` overrides the configured seed; with
/// neither a random one is drawn and printed so the deal can be repeated.
pub fn handle_deal_command(
    config: &Config,
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let table = Table::with_seed(config.table_config(), seed);
    let view = table.view();

    if json {
        let mut value = serde_json::to_value(&view).map_err(std::io::Error::other)?;
        value["seed"] = serde_json::json!(seed);
        let text = serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
    } else {
        writeln!(out, "Seed: {}", seed)?;
        writeln!(out, "{}", render_table(&view))?;
    }
    Ok(())
}
