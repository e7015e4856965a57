//! Deal command handler: deals one round and shows both hands.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_hand;
use drawpoker_engine::policy::RandomPolicy;
use drawpoker_engine::session::Session;
use std::io::Write;

/// Deals a single round with the configured stakes and prints both hands
/// with their evaluations.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut session = Session::new(cfg.rules(), seed, Box::new(RandomPolicy))?;
    session.init_round()?;
    let (player, opponent) = session
        .current_hands()
        .ok_or_else(|| CliError::InvalidInput("no hands after dealing".into()))?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Player:   {}  {}", format_hand(&player), player.evaluate())?;
    writeln!(out, "Opponent: {}  {}", format_hand(&opponent), opponent.evaluate())?;
    writeln!(out, "Deck: {} cards left", session.deck_remaining())?;
    Ok(())
}
