//! # Play Command
//!
//! Hot-seat fixed-limit play: both seats are driven from the same input
//! stream, one action per line.
//!
//! The table is printed before each decision, round changes and hand results
//! are announced, and the session ends on `q`/`quit`, end of input, after
//! `--hands` completed hands, or once a seat has no chips left to post.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_action, format_hand_result, render_table, round_label, seat_label};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action, validate_hands};
use headsup_engine::table::{ActionOutcome, Table};
use std::io::{BufRead, Write};

/// Handle the play command.
///
/// # Arguments
///
/// * `config` - Resolved configuration (stakes, stacks, default seed)
/// * `seed` - RNG seed; overrides the configured seed, random when neither is set
/// * `hands` - Stop after this many completed hands (must be >= 1, default: unlimited)
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player actions
///
/// # Errors
///
/// Returns `CliError::InvalidInput` if `hands` is zero and `CliError::Io` if
/// the output cannot be written.
pub fn handle_play_command(
    config: &Config,
    seed: Option<u64>,
    hands: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    validate_hands(hands).map_err(CliError::InvalidInput)?;

    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    writeln!(
        out,
        "play: seed={} stack={} blinds={}/{} bets={}/{}",
        seed,
        config.starting_stack,
        config.small_blind,
        config.big_blind,
        config.small_bet,
        config.big_bet
    )?;

    let mut table = Table::with_seed(config.table_config(), seed);
    let mut completed = 0u32;
    let mut show_table = true;

    loop {
        if let Some(seat) = table.busted_seat() {
            writeln!(out, "{} is out of chips.", seat_label(seat))?;
            break;
        }
        if show_table {
            writeln!(out, "{}", render_table(&table.view()))?;
            show_table = false;
        }

        let seat = table.turn();
        write!(
            out,
            "{} [f]old [c]heck/call [r]aise [q]uit: ",
            seat_label(seat)
        )?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            ui::display_warning(err, "input ended; stopping the session")?;
            break;
        };
        let action = match parse_player_action(&line) {
            ParseResult::Action(action) => action,
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        let cost = table.cost(action);
        let mut called = format_action(action, table.to_call(), cost);
        if cost > 0 && cost == table.player(seat).chips() {
            called.push_str(" (all-in)");
        }
        let outcome = table.apply_action(action)?;
        writeln!(out, "{}: {}", seat_label(seat), called)?;
        show_table = true;

        match outcome {
            ActionOutcome::Continue => {}
            ActionOutcome::RoundComplete(round) => {
                writeln!(out, "*** {} ***", round_label(round).to_uppercase())?;
            }
            ActionOutcome::HandOver(result) => {
                for line in format_hand_result(&result) {
                    writeln!(out, "{}", line)?;
                }
                completed += 1;
                if hands.is_some_and(|limit| completed >= limit) {
                    break;
                }
                writeln!(out)?;
            }
        }
    }

    // Chips already posted for an unfinished hand still belong to the seat.
    let [one, two] = table.players();
    writeln!(out, "Hands completed: {}", completed)?;
    writeln!(
        out,
        "Stacks: Seat One {}, Seat Two {}",
        one.chips() + one.hand_committed(),
        two.chips() + two.hand_committed()
    )?;
    Ok(())
}
