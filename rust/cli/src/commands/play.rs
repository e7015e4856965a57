//! # Play Command
//!
//! Interactive five-card draw against an AI opponent on stdin/stdout.
//!
//! Each round the player is prompted for a betting action on both streets
//! and for discard positions in between. Narration from the engine log is
//! echoed as it appears. The session ends after the requested number of
//! rounds, on `q`/EOF, or when a side can no longer pay the ante.

use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::{format_action, format_hand, format_hand_positions};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{DrawInput, ParseResult, parse_discards, parse_player_action};
use drawpoker_ai::{available_ais, create_ai};
use drawpoker_engine::errors::GameError;
use drawpoker_engine::logger::Resolution;
use drawpoker_engine::phase::Phase;
use drawpoker_engine::player::Seat;
use drawpoker_engine::session::Session;
use std::io::{BufRead, Write};

/// Handle the play command.
///
/// `hands` defaults to 1. `seed` and `ai` fall back to the configuration,
/// and the seed to a random value after that.
pub fn handle_play_command(
    hands: Option<u32>,
    seed: Option<u64>,
    ai: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };
    let hands = hands.unwrap_or(1);
    let seed = seed.or(cfg.seed);
    let ai = ai.unwrap_or_else(|| cfg.ai.clone());

    execute_play_command(&cfg, hands, seed, &ai, stdin, out, err)
}

fn execute_play_command(
    cfg: &Config,
    hands: u32,
    seed: Option<u64>,
    ai: &str,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let Some(policy) = create_ai(ai) else {
        let msg = format!(
            "unknown ai '{}' (available: {})",
            ai,
            available_ais().join(", ")
        );
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    };

    let seed = seed.unwrap_or_else(rand::random);
    let rules = cfg.rules();
    let mut session = Session::new(rules, seed, policy)?;

    writeln!(
        out,
        "play: hands={} seed={} ai={}",
        hands,
        seed,
        session.policy_name()
    )?;
    writeln!(out, "Stakes: ante {} / bet {}", rules.ante, rules.bet)?;
    session.start()?;

    let mut seen = 0u64;
    let mut played = 0u32;
    let mut quit_requested = false;

    'rounds: for i in 1..=hands {
        match session.init_round() {
            Ok(()) => {}
            Err(GameError::InsufficientChips { .. }) => break,
            Err(e) => return Err(e.into()),
        }
        writeln!(out, "\n--- Round {} ---", i)?;

        loop {
            print_new_log(&session, &mut seen, out)?;
            match session.current_phase() {
                Phase::Betting1 | Phase::Betting2 => {
                    show_table(&session, out)?;
                    let choices: Vec<String> = session
                        .legal_actions()
                        .iter()
                        .map(|a| format_action(a, &rules))
                        .collect();
                    write!(out, "Your action ({} / q): ", choices.join(" / "))?;
                    out.flush()?;

                    let Some(input) = read_stdin_line(stdin) else {
                        quit_requested = true;
                        break 'rounds;
                    };
                    match parse_player_action(&input) {
                        ParseResult::Action(action) => {
                            if let Err(e) = session.submit_player_action(action) {
                                ui::write_error(err, &e.to_string())?;
                            }
                        }
                        ParseResult::Quit => {
                            quit_requested = true;
                            break 'rounds;
                        }
                        ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
                    }
                }
                Phase::PlayerDraw => {
                    if let Some((hand, _)) = session.current_hands() {
                        writeln!(out, "{}", format_hand_positions(&hand))?;
                    }
                    write!(out, "Discard positions (e.g. 1 3 5, none, q): ")?;
                    out.flush()?;

                    let Some(input) = read_stdin_line(stdin) else {
                        quit_requested = true;
                        break 'rounds;
                    };
                    match parse_discards(&input) {
                        DrawInput::Discard(mask) => {
                            if let Err(e) = session.submit_player_draw(mask) {
                                ui::write_error(err, &e.to_string())?;
                            }
                        }
                        DrawInput::Quit => {
                            quit_requested = true;
                            break 'rounds;
                        }
                        DrawInput::Invalid(msg) => ui::write_error(err, &msg)?,
                    }
                }
                Phase::RoundEnd | Phase::GameOver => break,
                _ => {
                    session.advance()?;
                }
            }
        }

        print_new_log(&session, &mut seen, out)?;
        show_result(&session, out)?;
        played += 1;
    }

    print_new_log(&session, &mut seen, out)?;
    if quit_requested {
        writeln!(out, "Quit requested.")?;
    }
    if session.current_phase() == Phase::GameOver {
        writeln!(out, "Game over.")?;
    }
    let (player, opponent, pot) = session.chip_totals();
    writeln!(out, "Rounds played: {}", played)?;
    write!(out, "Final chips: you {} / opponent {}", player, opponent)?;
    if pot > 0 {
        write!(out, " (pot {} left on the table)", pot)?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_new_log(session: &Session, seen: &mut u64, out: &mut dyn Write) -> Result<(), CliError> {
    let log = session.state().log();
    for line in log.since(*seen) {
        writeln!(out, "* {}", line)?;
    }
    *seen = log.pushed();
    Ok(())
}

fn show_table(session: &Session, out: &mut dyn Write) -> Result<(), CliError> {
    let (player, opponent, pot) = session.chip_totals();
    if let Some((hand, _)) = session.current_hands() {
        writeln!(out, "Your hand: {}  ({})", format_hand(&hand), hand.evaluate())?;
    }
    writeln!(
        out,
        "Pot: {} | You: {} | Opponent: {}",
        pot, player, opponent
    )?;
    Ok(())
}

fn show_result(session: &Session, out: &mut dyn Write) -> Result<(), CliError> {
    let Some(outcome) = session.outcome() else {
        return Ok(());
    };
    if let (Resolution::Showdown { opponent, .. }, Some((_, hand))) =
        (&outcome.resolution, session.current_hands())
    {
        writeln!(out, "Opponent shows: {}  ({})", format_hand(&hand), opponent)?;
    }
    let verdict = match outcome.winner {
        Some(Seat::Player) => "you win",
        Some(Seat::Opponent) => "opponent wins",
        None => "split",
    };
    let (player, opponent, _) = session.chip_totals();
    writeln!(
        out,
        "Result: {} | Chips: you {} / opponent {}",
        verdict, player, opponent
    )?;
    Ok(())
}
