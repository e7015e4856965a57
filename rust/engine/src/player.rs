use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::Hand;

/// The two sides of the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    /// The externally controlled side (human at the front end)
    Player,
    /// The side driven by an [`crate::policy::OpponentPolicy`]
    Opponent,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Opponent => 1,
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::Player => Seat::Opponent,
            Seat::Opponent => Seat::Player,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player => f.write_str("player"),
            Seat::Opponent => f.write_str("opponent"),
        }
    }
}

/// A betting decision. `Bet` always commits the table's fixed bet amount.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Pass without putting chips in
    Check,
    /// Put the fixed bet amount into the pot
    Bet,
    /// Give up the round and the pot
    Fold,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Check, Action::Bet, Action::Fold];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Check => "check",
            Action::Bet => "bet",
            Action::Fold => "fold",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default starting stack size for each side in chips
pub const STARTING_STACK: u32 = 1_000;

/// One side of the table: its chip stack and, during a round, its hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    stack: u32,
    hand: Option<Hand>,
}

impl Player {
    pub fn new(seat: Seat, stack: u32) -> Self {
        Self {
            seat,
            stack,
            hand: None,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    pub(crate) fn hand_mut(&mut self) -> Option<&mut Hand> {
        self.hand.as_mut()
    }

    pub(crate) fn set_hand(&mut self, hand: Hand) {
        self.hand = Some(hand);
    }

    /// Credits `amount`. Validated rules keep every stack within
    /// `MAX_STARTING_STACK * 2`, so this cannot overflow.
    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack += amount;
    }

    /// Removes `amount` from the stack, refusing to go negative.
    pub(crate) fn take_chips(&mut self, amount: u32) -> Result<u32, GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                required: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        Ok(amount)
    }
}
