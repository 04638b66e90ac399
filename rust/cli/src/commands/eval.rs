//! Hand evaluation command.
//!
//! Reads five to seven cards from the command line and prints the best
//! five-card hand they make.

use crate::error::CliError;
use crate::formatters::format_cards;
use headsup_engine::cards::parse_cards;
use headsup_engine::hand::evaluate;
use std::io::Write;

/// Evaluates `cards` and writes the description, ranking and chosen cards.
///
/// Arguments may be separate (`Ah Kd ...`) or one quoted list (`"Ah,Kd,..."`).
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for malformed card text, duplicate cards
/// or a card count outside 5..=7.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(&cards.join(" "))?;
    let hand = evaluate(&cards)?;
    writeln!(out, "{}", hand.description())?;
    writeln!(out, "Ranking: {:?}", hand.ranking())?;
    writeln!(out, "Cards: {}", format_cards(hand.cards()))?;
    Ok(())
}
