//! Scripted interactive sessions through the play command handler.

use drawpoker_cli::CliError;
use drawpoker_cli::commands::play::handle_play_command;
use std::io::Cursor;

fn play(hands: u32, seed: u64, ai: &str, input: &str) -> (Result<(), CliError>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let result = handle_play_command(
        Some(hands),
        Some(seed),
        Some(ai.to_string()),
        &mut out,
        &mut err,
        &mut stdin,
    );
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn final_chips(out: &str) -> (u32, u32) {
    let line = out
        .lines()
        .find(|l| l.starts_with("Final chips:"))
        .expect("final chips line");
    let nums: Vec<u32> = line
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().unwrap())
        .collect();
    (nums[0], nums[1])
}

#[test]
fn session_header_names_the_opponent() {
    let (result, out, _) = play(1, 3, "baseline", "q\n");
    assert!(result.is_ok());
    assert!(out.contains("play: hands=1 seed=3 ai=BaselineAI"));
    assert!(out.contains("Stakes: ante 10 / bet 20"));
    assert!(out.contains("* New round started. Ante 10 from each player."));
}

#[test]
fn prompt_lists_legal_actions() {
    let (_, out, _) = play(1, 3, "passive", "q\n");
    assert!(out.contains("Your action (check / bet 20 / fold / q): "));
    assert!(out.contains("Your hand: ["));
    assert!(out.contains("Pot: 20 | You: 990 | Opponent: 990"));
}

#[test]
fn checked_down_round_against_passive_opponent() {
    let (result, out, err) = play(1, 21, "passive", "c\nn\nc\n");
    assert!(result.is_ok(), "stderr: {}", err);
    assert!(out.contains("* You check."));
    assert!(out.contains("* Opponent checks."));
    assert!(out.contains("* You draw 0 cards."));
    assert!(out.contains("Opponent shows:"));
    let (you, opp) = final_chips(&out);
    assert_eq!(you + opp, 2000);
    assert!(!out.contains("left on the table"));
}

#[test]
fn betting_both_streets_moves_bets_into_the_pot() {
    let (result, out, err) = play(1, 8, "passive", "b\n1 2 3\nbet\n");
    assert!(result.is_ok(), "stderr: {}", err);
    assert!(out.contains("* You bet 20."));
    assert!(out.contains("* You draw 3 cards."));
    assert!(out.contains("Result:"));
    let (you, opp) = final_chips(&out);
    assert_eq!(you + opp, 2000);
}

#[test]
fn multi_round_session_counts_rounds() {
    let (result, out, _) = play(3, 4, "passive", "f\nf\nf\n");
    assert!(result.is_ok());
    assert!(out.contains("--- Round 3 ---"));
    assert!(out.contains("Rounds played: 3"));
    assert_eq!(final_chips(&out), (970, 1030));
}

#[test]
fn sized_bet_is_rejected_and_reprompted() {
    let (result, out, err) = play(1, 4, "passive", "bet 50\nfold\n");
    assert!(result.is_ok());
    assert!(err.contains("Error:"));
    assert!(out.contains("* You folded."));
}

#[test]
fn duplicate_discard_is_rejected_and_reprompted() {
    let (result, out, err) = play(1, 6, "passive", "check\n2 2\n2\ncheck\n");
    assert!(result.is_ok());
    assert!(err.contains("Position 2 listed twice"));
    assert!(out.contains("* You draw 1 card"));
}

#[test]
fn quit_during_draw_ends_session() {
    let (result, out, _) = play(2, 6, "passive", "check\nq\n");
    assert!(result.is_ok());
    assert!(out.contains("Quit requested."));
    assert!(out.contains("Rounds played: 0"));
    assert!(out.contains("(pot 20 left on the table)"));
}
