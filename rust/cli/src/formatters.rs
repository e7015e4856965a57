//! Card, hand, and action formatters for terminal display.
//!
//! Suits render as Unicode symbols (♥ ♦ ♣ ♠) where the terminal is expected to
//! support them and as letters (h d c s) otherwise.
//!
//! ## Example
//!
//! ```rust
//! use drawpoker_engine::cards::{Card, Rank, Suit};
//! use drawpoker_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use drawpoker_engine::cards::{Card, Suit};
use drawpoker_engine::hand::Hand;
use drawpoker_engine::player::Action;
use drawpoker_engine::rules::TableRules;

/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix-like systems are assumed
/// to render Unicode.
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
    format_suit_with(suit, supports_unicode())
}

fn format_suit_with(suit: &Suit, unicode: bool) -> String {
    if unicode {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// String like "A♠" (Unicode) or "As" (ASCII); tens render as "10".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Cards in bracket notation: "[A♠ K♥ 9♦ 9♣ 2♠]".
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_hand(hand: &Hand) -> String {
    format_cards(hand.cards())
}

/// Hand with 1-based positions under each card, for the discard prompt.
///
/// ```text
///  1   2   3   4   5
/// A♠  K♥  9♦  9♣  2♠
/// ```
pub fn format_hand_positions(hand: &Hand) -> String {
    let header: Vec<String> = (1..=hand.cards().len()).map(|i| format!("{:<4}", i)).collect();
    let cards: Vec<String> = hand
        .cards()
        .iter()
        .map(|c| format!("{:<4}", format_card(c)))
        .collect();
    format!(
        "{}\n{}",
        header.concat().trim_end(),
        cards.concat().trim_end()
    )
}

/// "check", "bet 20" or "fold"
pub fn format_action(action: &Action, rules: &TableRules) -> String {
    match action {
        Action::Bet => format!("bet {}", rules.bet),
        other => other.as_str().to_string(),
    }
}
