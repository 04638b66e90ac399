//! Input parsing and validation for interactive commands.

use headsup_engine::table::Action;

/// Result type for parsing user input into table actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid action parsed from input
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into an [`Action`] or the quit command.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c", "check" or "call" → CheckCall
/// - "r", "bet" or "raise" → BetRaise
/// - "q" or "quit" → Quit command
///
/// Bets are fixed-limit, so anything after the first word is rejected rather
/// than read as an amount.
///
/// # Example
///
/// ```rust
/// # use headsup_cli::validation::{parse_player_action, ParseResult};
/// use headsup_engine::table::Action;
///
/// assert_eq!(parse_player_action("F"), ParseResult::Action(Action::Fold));
/// assert_eq!(parse_player_action("call"), ParseResult::Action(Action::CheckCall));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("shove") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&word) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    if word == "q" || word == "quit" {
        return ParseResult::Quit;
    }

    let action = match word {
        "f" | "fold" => Action::Fold,
        "c" | "check" | "call" => Action::CheckCall,
        "r" | "bet" | "raise" => Action::BetRaise,
        _ => {
            return ParseResult::Invalid(format!(
                "Unrecognized action '{}'. Valid actions: f(old), c(heck/call), r(aise/bet), q(uit)",
                word
            ));
        }
    };

    if parts.len() > 1 {
        return ParseResult::Invalid(format!(
            "'{}' takes no amount; bets are fixed-limit",
            word
        ));
    }
    ParseResult::Action(action)
}

/// Validate the `--hands` limit of an interactive session.
pub fn validate_hands(hands: Option<u32>) -> Result<(), String> {
    match hands {
        Some(0) => Err("hands must be >= 1".to_string()),
        _ => Ok(()),
    }
}
