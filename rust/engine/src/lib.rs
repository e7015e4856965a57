//! # drawpoker-engine: Heads-up Five-Card Draw Core
//!
//! A deterministic two-player five-card draw engine: one human seat against one
//! automated opponent. Each round collects an ante, deals five cards each, runs
//! a betting street, a single draw, a second betting street and a showdown.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and notation parsing
//! - [`deck`] - 52-card deck with Fisher-Yates shuffling
//! - [`hand`] - Five-card hand, draw replacement and hand evaluation
//! - [`phase`] - Round phases and betting streets
//! - [`player`] - Seats, betting actions and chip stacks
//! - [`pot`] - Pot accumulation and tie splitting
//! - [`rules`] - Table stakes and action validation
//! - [`policy`] - Opponent decision interface
//! - [`session`] - The round state machine
//! - [`logger`] - Narration log and round history records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use drawpoker_engine::cards::Card;
//! use drawpoker_engine::hand::{evaluate_hand, Category};
//!
//! let cards: Vec<Card> = ["Kh", "Qh", "9h", "5h", "2h"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let eval = evaluate_hand(&cards.try_into().unwrap());
//! assert_eq!(eval.category, Category::Flush);
//! ```
//!
//! ## Deterministic Play
//!
//! A session seeded with the same value deals the same cards and gets the same
//! opponent decisions:
//!
//! ```rust
//! use drawpoker_engine::policy::RandomPolicy;
//! use drawpoker_engine::rules::TableRules;
//! use drawpoker_engine::session::Session;
//!
//! let mut a = Session::new(TableRules::default(), 42, Box::new(RandomPolicy)).unwrap();
//! let mut b = Session::new(TableRules::default(), 42, Box::new(RandomPolicy)).unwrap();
//! a.init_round().unwrap();
//! b.init_round().unwrap();
//! assert_eq!(a.current_hands(), b.current_hands());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod phase;
pub mod player;
pub mod policy;
pub mod pot;
pub mod rules;
pub mod session;
