//! Opponent decision interface and the reference random policy.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::{Rng, RngCore};

use crate::hand::{DiscardMask, Hand};
use crate::phase::Phase;
use crate::player::Action;
use crate::rules::TableRules;

/// What a policy may see when it is asked to act: its own hand and the public
/// chip state. The other side's cards are never exposed.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub phase: Phase,
    pub hand: &'a Hand,
    /// Chips behind for the acting side
    pub stack: u32,
    /// Chips behind for the other side
    pub other_stack: u32,
    pub pot: u32,
    /// Bet made by the other side on this street, 0 when none
    pub current_bet: u32,
    pub rules: &'a TableRules,
}

impl TableView<'_> {
    pub fn can_bet(&self) -> bool {
        self.stack >= self.rules.bet
    }

    pub fn facing_bet(&self) -> bool {
        self.current_bet > 0
    }
}

/// Pluggable decision maker for a seat driven by [`crate::session::Session::advance`].
///
/// Each method is called once per turn and its answer is final. The session
/// still validates the result: an unaffordable `Bet` is played as `Check`.
pub trait OpponentPolicy: Send + Sync {
    /// Betting decision for `OpponentTurn1`/`OpponentTurn2`.
    fn decide(&self, view: &TableView<'_>, rng: &mut dyn RngCore) -> Action;

    /// Positions to replace during the draw.
    fn choose_discards(&self, view: &TableView<'_>, rng: &mut dyn RngCore) -> DiscardMask;

    fn name(&self) -> &str;
}

/// Uniform choice among check, bet and fold; never draws.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl RandomPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl OpponentPolicy for RandomPolicy {
    fn decide(&self, view: &TableView<'_>, rng: &mut dyn RngCore) -> Action {
        match Action::ALL[rng.random_range(0..Action::ALL.len())] {
            Action::Bet if !view.can_bet() => Action::Check,
            a => a,
        }
    }

    fn choose_discards(&self, _view: &TableView<'_>, _rng: &mut dyn RngCore) -> DiscardMask {
        [false; 5]
    }

    fn name(&self) -> &str {
        "RandomPolicy"
    }
}

/// Replays a fixed list of actions in order, then checks. Never draws unless
/// given a discard mask. Useful for deterministic sessions.
#[derive(Debug, Default)]
pub struct ScriptedPolicy {
    actions: Mutex<VecDeque<Action>>,
    discards: DiscardMask,
}

impl ScriptedPolicy {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: Mutex::new(actions.into_iter().collect()),
            discards: [false; 5],
        }
    }

    pub fn with_discards(mut self, discards: DiscardMask) -> Self {
        self.discards = discards;
        self
    }
}

impl OpponentPolicy for ScriptedPolicy {
    fn decide(&self, _view: &TableView<'_>, _rng: &mut dyn RngCore) -> Action {
        self.actions
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or(Action::Check)
    }

    fn choose_discards(&self, _view: &TableView<'_>, _rng: &mut dyn RngCore) -> DiscardMask {
        self.discards
    }

    fn name(&self) -> &str {
        "ScriptedPolicy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn sample_hand() -> Hand {
        let cards: Vec<Card> = "Ah Kd 7c 5s 2h"
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect();
        Hand::new(cards.try_into().unwrap())
    }

    #[test]
    fn random_policy_never_bets_without_chips() {
        let rules = TableRules::default();
        let hand = sample_hand();
        let view = TableView {
            phase: Phase::OpponentTurn1,
            hand: &hand,
            stack: 5,
            other_stack: 1000,
            pot: 20,
            current_bet: 0,
            rules: &rules,
        };
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        for _ in 0..200 {
            assert_ne!(RandomPolicy.decide(&view, &mut rng), Action::Bet);
        }
    }

    #[test]
    fn random_policy_uses_all_three_actions() {
        let rules = TableRules::default();
        let hand = sample_hand();
        let view = TableView {
            phase: Phase::OpponentTurn2,
            hand: &hand,
            stack: 500,
            other_stack: 500,
            pot: 20,
            current_bet: 0,
            rules: &rules,
        };
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let seen: std::collections::HashSet<Action> =
            (0..200).map(|_| RandomPolicy.decide(&view, &mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn scripted_policy_replays_then_checks() {
        let rules = TableRules::default();
        let hand = sample_hand();
        let view = TableView {
            phase: Phase::OpponentTurn1,
            hand: &hand,
            stack: 500,
            other_stack: 500,
            pot: 20,
            current_bet: 0,
            rules: &rules,
        };
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let p = ScriptedPolicy::new([Action::Bet, Action::Fold]);
        assert_eq!(p.decide(&view, &mut rng), Action::Bet);
        assert_eq!(p.decide(&view, &mut rng), Action::Fold);
        assert_eq!(p.decide(&view, &mut rng), Action::Check);
    }
}
