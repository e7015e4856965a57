//! Baseline policy for the automated seat.
//!
//! A small rule-based strategy driven by the evaluated category of its own
//! hand. It is meant as a sparring partner and a reference for simulations,
//! not as a strong player.

use rand::{Rng, RngCore};
use tracing::trace;

use drawpoker_engine::cards::Rank;
use drawpoker_engine::hand::{Category, DiscardMask, Hand, HAND_SIZE};
use drawpoker_engine::player::Action;

use crate::{OpponentPolicy, TableView};

/// Chance of giving up a weak high-card hand when facing a bet
const WEAK_FOLD_PROBABILITY: f64 = 0.5;

/// Rule-based policy keyed on hand strength.
///
/// # Strategy
///
/// **Betting:**
/// - Pair of tens or better, or any two pair and up: bet when affordable,
///   whether or not a bet is already in
/// - Facing a bet with jack-high or worse: fold half the time, else check
/// - Anything else: check
///
/// **Draw:**
/// - Straight or better: stand pat
/// - Paired hands: keep the paired cards, draw the rest
/// - Nothing: keep the two highest cards
///
/// # Example
///
/// ```rust
/// use drawpoker_ai::baseline::BaselineAI;
/// use drawpoker_ai::OpponentPolicy;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Hand strength on a 0-10 scale.
    fn strength(hand: &Hand) -> u8 {
        let eval = hand.evaluate();
        match eval.category {
            Category::HighCard if eval.tiebreak >= Rank::Queen => 2,
            Category::HighCard => 1,
            Category::Pair if eval.tiebreak >= Rank::Ten => 4,
            Category::Pair => 3,
            Category::TwoPair => 5,
            Category::Trips => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::Quads | Category::StraightFlush => 10,
        }
    }

    fn decide_action(strength: u8, view: &TableView<'_>, rng: &mut dyn RngCore) -> Action {
        if !view.facing_bet() {
            return Self::decide_no_bet_action(strength, view);
        }
        match strength {
            4..=10 if view.can_bet() => Action::Bet,
            0..=1 if rng.random_bool(WEAK_FOLD_PROBABILITY) => Action::Fold,
            _ => Action::Check,
        }
    }

    fn decide_no_bet_action(strength: u8, view: &TableView<'_>) -> Action {
        if strength >= 4 && view.can_bet() {
            Action::Bet
        } else {
            Action::Check
        }
    }

    fn discards_for(hand: &Hand) -> DiscardMask {
        let cards = hand.cards();
        if hand.evaluate().category >= Category::Straight {
            return [false; HAND_SIZE];
        }

        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.rank.value() as usize] += 1;
        }
        let paired: DiscardMask = (*cards).map(|c| counts[c.rank.value() as usize] >= 2);
        if paired.iter().any(|&p| p) {
            return paired.map(|keep| !keep);
        }

        // Nothing made: hold the two highest cards.
        let mut order: Vec<usize> = (0..HAND_SIZE).collect();
        order.sort_by(|&a, &b| cards[b].rank.cmp(&cards[a].rank));
        let mut mask = [true; HAND_SIZE];
        for &i in order.iter().take(2) {
            mask[i] = false;
        }
        mask
    }
}

impl OpponentPolicy for BaselineAI {
    fn decide(&self, view: &TableView<'_>, rng: &mut dyn RngCore) -> Action {
        let strength = Self::strength(view.hand);
        let action = Self::decide_action(strength, view, rng);
        trace!(strength, facing = view.current_bet, %action, "baseline decision");
        action
    }

    fn choose_discards(&self, view: &TableView<'_>, _rng: &mut dyn RngCore) -> DiscardMask {
        Self::discards_for(view.hand)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
