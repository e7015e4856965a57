//! # drawpoker-ai: Opponent Policies for Five-Card Draw
//!
//! Implementations of [`OpponentPolicy`] that drive the automated seat of a
//! [`drawpoker_engine::session::Session`], plus a factory to pick one by name.
//!
//! ## Core Components
//!
//! - [`OpponentPolicy`] - Decision interface (re-exported from the engine)
//! - [`baseline`] - Hand-strength aware policy
//! - [`PassivePolicy`] - Always checks, never draws
//! - [`create_ai`] - Factory function for creating policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use drawpoker_ai::create_ai;
//! use drawpoker_engine::rules::TableRules;
//! use drawpoker_engine::session::Session;
//!
//! let ai = create_ai("baseline").expect("known policy");
//! let mut session = Session::new(TableRules::default(), 42, ai).unwrap();
//! session.init_round().unwrap();
//! assert_eq!(session.policy_name(), "BaselineAI");
//! ```
//!
//! ## AI Types
//!
//! - `"random"` - Uniform random actions, no draws
//! - `"passive"` - Check every street, no draws
//! - `"baseline"` - Bets made hands, draws to its best combination

use rand::RngCore;

use drawpoker_engine::hand::DiscardMask;
use drawpoker_engine::player::Action;
pub use drawpoker_engine::policy::{OpponentPolicy, RandomPolicy, TableView};

pub mod baseline;

/// Names accepted by [`create_ai`]
pub const AI_NAMES: [&str; 3] = ["random", "passive", "baseline"];

/// Checks every street and stands pat.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassivePolicy;

impl OpponentPolicy for PassivePolicy {
    fn decide(&self, _view: &TableView<'_>, _rng: &mut dyn RngCore) -> Action {
        Action::Check
    }

    fn choose_discards(&self, _view: &TableView<'_>, _rng: &mut dyn RngCore) -> DiscardMask {
        [false; 5]
    }

    fn name(&self) -> &str {
        "PassivePolicy"
    }
}

/// Factory function to create opponent policies by name.
///
/// Names are matched case-insensitively; unknown names yield `None`.
///
/// # Example
///
/// ```rust
/// use drawpoker_ai::create_ai;
///
/// assert_eq!(create_ai("Baseline").unwrap().name(), "BaselineAI");
/// assert!(create_ai("gto").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Box<dyn OpponentPolicy>> {
    match ai_type.trim().to_ascii_lowercase().as_str() {
        "random" => Some(Box::new(RandomPolicy)),
        "passive" => Some(Box::new(PassivePolicy)),
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        _ => None,
    }
}

pub fn available_ais() -> &'static [&'static str] {
    &AI_NAMES
}
