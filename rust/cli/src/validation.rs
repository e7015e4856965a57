//! Input parsing and validation for interactive commands.
//!
//! Parsers return small result enums so the caller can tell a valid entry, a
//! quit request and a typo apart without string matching.

use drawpoker_engine::cards::Card;
use drawpoker_engine::hand::{DiscardMask, HAND_SIZE};
use drawpoker_engine::player::Action;

/// Outcome of parsing a betting prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    Invalid(String),
}

/// Outcome of parsing a discard prompt.
#[derive(Debug, PartialEq)]
pub enum DrawInput {
    Discard(DiscardMask),
    Quit,
    Invalid(String),
}

fn is_quit(word: &str) -> bool {
    word == "q" || word == "quit"
}

/// Parse user input into a betting action (case-insensitive).
///
/// - "c" or "check" → Check
/// - "b" or "bet" → Bet (the amount is fixed by the table)
/// - "f" or "fold" → Fold
/// - "q" or "quit" → Quit
///
/// # Example
///
/// ```rust
/// # use drawpoker_cli::validation::{parse_player_action, ParseResult};
/// use drawpoker_engine::player::Action;
///
/// assert_eq!(parse_player_action("Bet"), ParseResult::Action(Action::Bet));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("raise 50") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&first) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    if is_quit(first) {
        return ParseResult::Quit;
    }

    match first {
        "check" | "c" => ParseResult::Action(Action::Check),
        "bet" | "b" if parts.len() == 1 => ParseResult::Action(Action::Bet),
        "bet" | "b" => ParseResult::Invalid(
            "Bets are a fixed amount; enter 'bet' without a number".to_string(),
        ),
        "fold" | "f" => ParseResult::Action(Action::Fold),
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: check, bet, fold, q",
            first
        )),
    }
}

/// Parse the draw prompt: 1-based card positions separated by spaces or
/// commas, or "none"/empty to stand pat.
///
/// # Example
///
/// ```rust
/// # use drawpoker_cli::validation::{parse_discards, DrawInput};
///
/// assert_eq!(
///     parse_discards("1 3,5"),
///     DrawInput::Discard([true, false, true, false, true])
/// );
/// assert_eq!(parse_discards("none"), DrawInput::Discard([false; 5]));
/// assert!(matches!(parse_discards("6"), DrawInput::Invalid(_)));
/// ```
pub fn parse_discards(input: &str) -> DrawInput {
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "none" || input == "n" || input == "0" {
        return DrawInput::Discard([false; HAND_SIZE]);
    }
    if is_quit(&input) {
        return DrawInput::Quit;
    }

    let mut mask = [false; HAND_SIZE];
    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        match token.parse::<usize>() {
            Ok(pos @ 1..=HAND_SIZE) => {
                if mask[pos - 1] {
                    return DrawInput::Invalid(format!("Position {} listed twice", pos));
                }
                mask[pos - 1] = true;
            }
            _ => {
                return DrawInput::Invalid(format!(
                    "'{}' is not a card position (1-{})",
                    token, HAND_SIZE
                ));
            }
        }
    }
    DrawInput::Discard(mask)
}

/// Parses exactly five cards from arguments such as `["Ah", "10h"]` or
/// `["Ah Kh,Qh"]`.
pub fn parse_cards<S: AsRef<str>>(args: &[S]) -> Result<[Card; HAND_SIZE], String> {
    let cards = args
        .iter()
        .flat_map(|a| {
            a.as_ref()
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .map(|t| t.parse::<Card>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<Card>, String>>()?;

    for (i, c) in cards.iter().enumerate() {
        if cards[..i].contains(c) {
            return Err(format!("duplicate card {}", c));
        }
    }
    let n = cards.len();
    cards
        .try_into()
        .map_err(|_| format!("expected {} cards, got {}", HAND_SIZE, n))
}
