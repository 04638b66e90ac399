//! Card, table and result formatters for terminal display.
//!
//! Pure functions turning engine values into the lines the `play` and `deal`
//! commands print. Suits use Unicode symbols where the terminal supports
//! them and fall back to the `c`/`d`/`h`/`s` letters otherwise.
//!
//! ## Example
//!
//! ```rust
//! use headsup_engine::cards::{Card, Rank, Suit};
//! use headsup_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use headsup_engine::cards::{Card, Suit};
use headsup_engine::player::Seat;
use headsup_engine::table::{Action, HandEnd, HandResult, Round, TableView};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        suit.to_char().to_string()
    }
}

/// String like "A♠" (Unicode) or "As" (ASCII)
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.to_char(), format_suit(&card.suit))
}

pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// Formatted board string like "[A♠ K♥ Q♦]" or "[]" if empty
pub fn format_board(cards: &[Card]) -> String {
    format!("[{}]", format_cards(cards))
}

pub fn seat_label(seat: Seat) -> &'static str {
    match seat {
        Seat::One => "Seat One",
        Seat::Two => "Seat Two",
    }
}

pub fn round_label(round: Round) -> &'static str {
    match round {
        Round::Preflop => "Preflop",
        Round::Flop => "Flop",
        Round::Turn => "Turn",
        Round::River => "River",
    }
}

/// Names an action the way a dealer would call it out.
///
/// `to_call` is the table's value *before* the action and `cost` the chips
/// the action actually moves (see `Table::cost`), so a short all-in is
/// announced for what was put in.
///
/// ```rust
/// use headsup_engine::table::Action;
/// # use headsup_cli::formatters::format_action;
///
/// assert_eq!(format_action(Action::CheckCall, 0, 0), "check");
/// assert_eq!(format_action(Action::CheckCall, 1, 1), "call 1");
/// assert_eq!(format_action(Action::BetRaise, 0, 4), "bet 4");
/// assert_eq!(format_action(Action::BetRaise, 2, 4), "raise 2");
/// assert_eq!(format_action(Action::BetRaise, 2, 2), "call 2");
/// ```
pub fn format_action(action: Action, to_call: u32, cost: u32) -> String {
    match (action, to_call) {
        (Action::Fold, _) => "fold".to_string(),
        (Action::CheckCall, 0) => "check".to_string(),
        (Action::CheckCall, _) => format!("call {}", cost),
        (Action::BetRaise, 0) => format!("bet {}", cost),
        // All-in for no more than the call.
        (Action::BetRaise, n) if cost <= n => format!("call {}", cost),
        (Action::BetRaise, n) => format!("raise {}", cost - n),
    }
}

/// Multi-line rendering of a table snapshot, both seats face up.
pub fn render_table(view: &TableView) -> String {
    let mut lines = Vec::with_capacity(6);
    lines.push(format!(
        "Hand #{}  {}  pot {}",
        view.hand_number,
        round_label(view.round),
        view.pot
    ));
    for seat in Seat::all() {
        let p = &view.players[seat.index()];
        let mut line = format!(
            "{}{}: {} chips  {}",
            seat_label(seat),
            if seat == view.button { " (button)" } else { "" },
            p.chips(),
            format_board(p.hole_cards())
        );
        if p.round_committed() > 0 {
            line.push_str(&format!("  bet {}", p.round_committed()));
        }
        if p.is_all_in() {
            line.push_str("  all-in");
        }
        lines.push(line);
    }
    lines.push(format!("Board: {}", format_board(&view.board)));
    let to_call = view
        .round_outstanding
        .saturating_sub(view.players[view.turn.index()].round_committed());
    lines.push(format!(
        "To act: {} (to call {}, bet {})",
        seat_label(view.turn),
        to_call,
        view.bet_size
    ));
    lines.join("\n")
}

/// Lines announcing how a hand ended and who was paid.
pub fn format_hand_result(result: &HandResult) -> Vec<String> {
    let mut lines = Vec::new();
    match &result.end {
        HandEnd::Fold { folder } => {
            lines.push(format!("{} folds.", seat_label(*folder)));
        }
        HandEnd::Showdown { hands } => {
            for seat in Seat::all() {
                let hand = &hands[seat.index()];
                lines.push(format!(
                    "{} shows {}: {}",
                    seat_label(seat),
                    format_cards(hand.cards()),
                    hand.description()
                ));
            }
        }
    }
    if result.is_split() {
        lines.push(format!(
            "Split pot of {}: {} {}, {} {}",
            result.pot,
            seat_label(Seat::One),
            result.payouts[0],
            seat_label(Seat::Two),
            result.payouts[1]
        ));
    } else {
        for seat in result.winners() {
            lines.push(format!(
                "{} wins {}.",
                seat_label(seat),
                result.payouts[seat.index()]
            ));
        }
    }
    lines
}
