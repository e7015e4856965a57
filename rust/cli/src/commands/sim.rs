//! Simulation command handler: two policies play each other.
//!
//! The player seat is driven by `ai_a` through the same view and validation
//! the interactive front end uses; the opponent seat is the session's own
//! policy `ai_b`. The chip total is checked after every step, and each
//! finished round can be appended to a JSONL file as a `RoundRecord`.
//!
//! # Examples
//!
//! ```no_run
//! use drawpoker_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_sim_command(100, Some(42), "baseline", "random", Some("data/sim.jsonl".into()), &mut out, &mut err).unwrap();
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use drawpoker_ai::{OpponentPolicy, available_ais, create_ai};
use drawpoker_engine::errors::GameError;
use drawpoker_engine::hand::HAND_SIZE;
use drawpoker_engine::logger::{RoundLogger, RoundOutcome};
use drawpoker_engine::phase::Phase;
use drawpoker_engine::player::{Action, Seat};
use drawpoker_engine::session::Session;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use tracing::{debug, info};

/// Offset between the session seed and the player-seat policy's RNG seed
const PLAYER_SEED_OFFSET: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    a_wins: u32,
    b_wins: u32,
    splits: u32,
}

impl Tally {
    fn record(&mut self, outcome: Option<&RoundOutcome>) {
        match outcome.map(|o| o.winner) {
            Some(Some(Seat::Player)) => self.a_wins += 1,
            Some(Some(Seat::Opponent)) => self.b_wins += 1,
            Some(None) => self.splits += 1,
            None => {}
        }
    }
}

pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    ai_a: &str,
    ai_b: &str,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let policy_a = lookup_policy(ai_a, err)?;
    let policy_b = lookup_policy(ai_b, err)?;

    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let rules = cfg.rules();
    let mut session = Session::new(rules, seed, policy_b)?;
    let mut player_rng = ChaCha20Rng::seed_from_u64(seed.wrapping_add(PLAYER_SEED_OFFSET));
    let mut logger = match output.as_deref() {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };
    let expected = 2 * u64::from(rules.starting_stack);

    writeln!(
        out,
        "sim: rounds={} seed={} a={} b={}",
        rounds,
        seed,
        policy_a.name(),
        session.policy_name()
    )?;
    session.start()?;

    let mut tally = Tally::default();
    let mut completed = 0u32;
    for _ in 0..rounds {
        match session.init_round() {
            Ok(()) => {}
            Err(GameError::InsufficientChips { .. }) => break,
            Err(e) => return Err(e.into()),
        }
        check_chips(&session, expected)?;
        play_round(&mut session, policy_a.as_ref(), &mut player_rng, expected)?;
        tally.record(session.outcome());
        completed += 1;

        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            if let Some(record) = session.round_record(id) {
                logger.write(&record)?;
            }
        }
        debug!(round = completed, chips = ?session.chip_totals(), "sim round done");
    }
    info!(completed, ?tally, "simulation finished");

    let (a_chips, b_chips, _) = session.chip_totals();
    writeln!(out, "Simulated: {} rounds", completed)?;
    if session.current_phase() == Phase::GameOver {
        ui::display_warning(
            err,
            &format!(
                "stopped after {} of {} rounds: a side could not pay the ante",
                completed, rounds
            ),
        )?;
    }
    writeln!(
        out,
        "Wins: a {} / b {} / split {}",
        tally.a_wins, tally.b_wins, tally.splits
    )?;
    writeln!(out, "Final chips: a {} / b {}", a_chips, b_chips)?;
    if let Some(path) = output {
        writeln!(out, "Rounds written to {}", path)?;
    }
    Ok(())
}

fn lookup_policy(name: &str, err: &mut dyn Write) -> Result<Box<dyn OpponentPolicy>, CliError> {
    match create_ai(name) {
        Some(p) => Ok(p),
        None => {
            let msg = format!(
                "unknown ai '{}' (available: {})",
                name,
                available_ais().join(", ")
            );
            ui::write_error(err, &msg)?;
            Err(CliError::InvalidInput(msg))
        }
    }
}

/// Drives one round to `RoundEnd`, asking `policy` for the player seat.
fn play_round(
    session: &mut Session,
    policy: &dyn OpponentPolicy,
    rng: &mut ChaCha20Rng,
    expected: u64,
) -> Result<(), CliError> {
    loop {
        match session.current_phase() {
            Phase::Betting1 | Phase::Betting2 => {
                let wanted = match session.view(Seat::Player) {
                    Some(view) => policy.decide(&view, rng),
                    None => Action::Check,
                };
                let action = if session.legal_actions().contains(&wanted) {
                    wanted
                } else {
                    Action::Check
                };
                session.submit_player_action(action)?;
            }
            Phase::PlayerDraw => {
                let mask = match session.view(Seat::Player) {
                    Some(view) => policy.choose_discards(&view, rng),
                    None => [false; HAND_SIZE],
                };
                session.submit_player_draw(mask)?;
            }
            Phase::RoundEnd | Phase::GameOver => return Ok(()),
            phase if phase.is_automatic() => {
                session.advance()?;
            }
            phase => {
                return Err(CliError::Invariant(format!(
                    "round stalled in phase {}",
                    phase
                )));
            }
        }
        check_chips(session, expected)?;
    }
}

fn check_chips(session: &Session, expected: u64) -> Result<(), CliError> {
    let (p, o, pot) = session.chip_totals();
    let total = u64::from(p) + u64::from(o) + u64::from(pot);
    if total != expected {
        return Err(CliError::Invariant(format!(
            "chip total {} != {} in round {} ({})",
            total,
            expected,
            session.round_no(),
            session.current_phase()
        )));
    }
    Ok(())
}
