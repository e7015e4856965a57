use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::{Action as A, STARTING_STACK};

/// Default ante paid by each side at the start of a round
pub const DEFAULT_ANTE: u32 = 10;
/// Default fixed bet amount
pub const DEFAULT_BET: u32 = 20;
/// Largest stack for which both stacks plus the pot still fit in a `u32`
pub const MAX_STARTING_STACK: u32 = u32::MAX / 2;

/// Stakes for a session: starting stacks, the ante and the single fixed bet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    pub starting_stack: u32,
    pub ante: u32,
    pub bet: u32,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            ante: DEFAULT_ANTE,
            bet: DEFAULT_BET,
        }
    }
}

impl TableRules {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_stack == 0 {
            return Err(GameError::InvalidRules(
                "starting_stack must be > 0".into(),
            ));
        }
        if self.ante == 0 {
            return Err(GameError::InvalidRules("ante must be > 0".into()));
        }
        if self.bet == 0 {
            return Err(GameError::InvalidRules("bet must be > 0".into()));
        }
        if self.starting_stack > MAX_STARTING_STACK {
            return Err(GameError::InvalidRules(format!(
                "starting_stack must be <= {}",
                MAX_STARTING_STACK
            )));
        }
        if self.ante > self.starting_stack || self.bet > self.starting_stack {
            return Err(GameError::InvalidRules(
                "ante and bet must not exceed starting_stack".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Check,
    Bet(u32),
    Fold,
}

/// Validates a betting action against the acting side's stack.
///
/// Check and Fold are always legal. A Bet commits exactly `rules.bet`; when the
/// stack cannot cover it the action is rejected with
/// [`GameError::InsufficientChips`] and the caller falls back to Check or Fold.
///
/// # Examples
///
/// ```
/// use drawpoker_engine::rules::{validate_action, TableRules, ValidatedAction};
/// use drawpoker_engine::player::Action;
/// use drawpoker_engine::errors::GameError;
///
/// let rules = TableRules::default();
/// assert_eq!(validate_action(500, &rules, Action::Bet), Ok(ValidatedAction::Bet(20)));
/// assert!(matches!(
///     validate_action(5, &rules, Action::Bet),
///     Err(GameError::InsufficientChips { required: 20, available: 5 })
/// ));
/// ```
pub fn validate_action(
    stack: u32,
    rules: &TableRules,
    action: A,
) -> Result<ValidatedAction, GameError> {
    match action {
        A::Check => Ok(ValidatedAction::Check),
        A::Fold => Ok(ValidatedAction::Fold),
        A::Bet => {
            if stack < rules.bet {
                Err(GameError::InsufficientChips {
                    required: rules.bet,
                    available: stack,
                })
            } else {
                Ok(ValidatedAction::Bet(rules.bet))
            }
        }
    }
}

/// Actions the acting side may take with `stack` chips.
pub fn legal_actions(stack: u32, rules: &TableRules) -> Vec<A> {
    A::ALL
        .into_iter()
        .filter(|&a| validate_action(stack, rules, a).is_ok())
        .collect()
}
