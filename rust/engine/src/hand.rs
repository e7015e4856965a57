use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::deck::Deck;
use crate::errors::GameError;

pub const HAND_SIZE: usize = 5;

/// Positions to replace during a draw; `true` means discard.
pub type DiscardMask = [bool; HAND_SIZE];

/// Exactly five cards held by one side of the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn evaluate(&self) -> HandEvaluation {
        evaluate_hand(&self.cards)
    }

    /// Replaces every masked position with the next card from `deck`.
    ///
    /// Either all replacements happen or none do: if the deck cannot cover the
    /// whole mask the hand is left untouched and `DeckExhausted` is returned.
    pub fn replace(&mut self, mask: &DiscardMask, deck: &mut Deck) -> Result<usize, GameError> {
        let count = mask.iter().filter(|&&d| d).count();
        if deck.remaining() < count {
            return Err(GameError::DeckExhausted);
        }
        for (slot, _) in self.cards.iter_mut().zip(mask).filter(|(_, d)| **d) {
            *slot = deck.deal_card()?;
        }
        Ok(count)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    Trips = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::Trips => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::Quads => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category plus the single rank that orders hands inside it.
///
/// Field order matters: the derived ordering compares `category` first and
/// `tiebreak` second, which is the only comparison rule for hands. Remaining
/// kickers are never looked at, so e.g. `A K Q J 2` and `A 5 4 3 2` (offsuit)
/// compare equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub category: Category,
    pub tiebreak: Rank,
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Category::HighCard
            | Category::Straight
            | Category::Flush
            | Category::StraightFlush => write!(f, "{}, {} high", self.category, self.tiebreak),
            _ => write!(f, "{} of {}", self.category, self.tiebreak),
        }
    }
}

pub fn evaluate_hand(cards: &[Card; HAND_SIZE]) -> HandEvaluation {
    // Count ranks
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[c.rank.value() as usize] += 1;
    }

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let mut sorted: [Rank; HAND_SIZE] = (*cards).map(|c| c.rank);
    sorted.sort_unstable();
    let straight = sorted.windows(2).all(|w| w[1].value() == w[0].value() + 1);
    let top = sorted[HAND_SIZE - 1];

    let (quads, trips, pairs) = classify_multiples(&rank_counts);

    let (category, tiebreak) = if straight && flush {
        (Category::StraightFlush, top)
    } else if let Some(q) = quads {
        (Category::Quads, q)
    } else if let (Some(t), Some(_)) = (trips, pairs.first()) {
        (Category::FullHouse, t)
    } else if flush {
        (Category::Flush, top)
    } else if straight {
        (Category::Straight, top)
    } else if let Some(t) = trips {
        (Category::Trips, t)
    } else if pairs.len() >= 2 {
        (Category::TwoPair, pairs[0])
    } else if let Some(&p) = pairs.first() {
        (Category::Pair, p)
    } else {
        (Category::HighCard, top)
    };

    HandEvaluation { category, tiebreak }
}

pub fn compare_hands(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.cmp(b)
}

/// Quad rank, trip rank and pair ranks (highest pair first).
fn classify_multiples(rank_counts: &[u8; 15]) -> (Option<Rank>, Option<Rank>, Vec<Rank>) {
    let mut quads = None;
    let mut trips = None;
    let mut pairs = vec![];
    for r in (2..=14u8).rev() {
        let Some(rank) = Rank::from_u8(r) else {
            continue;
        };
        match rank_counts[r as usize] {
            4 => quads = Some(rank),
            3 => trips = Some(rank),
            2 => pairs.push(rank),
            _ => {}
        }
    }
    (quads, trips, pairs)
}
