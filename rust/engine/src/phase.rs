use std::fmt;

use serde::{Deserialize, Serialize};

/// Named states of the round state machine.
///
/// The order of a normal round is linear:
/// `InitRound -> Betting1 -> OpponentTurn1 -> PlayerDraw -> OpponentDraw ->
/// Betting2 -> OpponentTurn2 -> Showdown -> RoundEnd`. A fold in any betting
/// phase jumps straight to `RoundEnd`. `GameOver` is entered only when a side
/// cannot pay the ante and nothing leaves it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Menu,
    InitRound,
    #[serde(rename = "betting_1")]
    Betting1,
    #[serde(rename = "opponent_turn_1")]
    OpponentTurn1,
    PlayerDraw,
    OpponentDraw,
    #[serde(rename = "betting_2")]
    Betting2,
    #[serde(rename = "opponent_turn_2")]
    OpponentTurn2,
    Showdown,
    RoundEnd,
    GameOver,
}

impl Phase {
    /// Phases in which the human side must submit a betting action.
    pub fn is_player_betting(self) -> bool {
        matches!(self, Phase::Betting1 | Phase::Betting2)
    }

    /// Phases that `advance()` resolves without external input.
    pub fn is_automatic(self) -> bool {
        matches!(
            self,
            Phase::InitRound
                | Phase::OpponentTurn1
                | Phase::OpponentDraw
                | Phase::OpponentTurn2
                | Phase::Showdown
        )
    }

    /// Whether a round is currently running (cards dealt, pot live).
    pub fn in_round(self) -> bool {
        !matches!(
            self,
            Phase::Menu | Phase::InitRound | Phase::RoundEnd | Phase::GameOver
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::InitRound => "init_round",
            Phase::Betting1 => "betting_1",
            Phase::OpponentTurn1 => "opponent_turn_1",
            Phase::PlayerDraw => "player_draw",
            Phase::OpponentDraw => "opponent_draw",
            Phase::Betting2 => "betting_2",
            Phase::OpponentTurn2 => "opponent_turn_2",
            Phase::Showdown => "showdown",
            Phase::RoundEnd => "round_end",
            Phase::GameOver => "game_over",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two betting rounds an action belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    /// Before the draw
    PreDraw,
    /// After the draw
    PostDraw,
}

impl Phase {
    pub fn street(self) -> Option<Street> {
        match self {
            Phase::Betting1 | Phase::OpponentTurn1 => Some(Street::PreDraw),
            Phase::Betting2 | Phase::OpponentTurn2 => Some(Street::PostDraw),
            _ => None,
        }
    }
}
