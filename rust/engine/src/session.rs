use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{DiscardMask, Hand, HAND_SIZE};
use crate::logger::{
    ActionRecord, DrawRecord, EventLog, Resolution, RoundOutcome, RoundRecord,
};
use crate::phase::Phase;
use crate::player::{Action, Player, Seat};
use crate::policy::{OpponentPolicy, TableView};
use crate::pot::Pot;
use crate::rules::{legal_actions, validate_action, TableRules, ValidatedAction};

/// Mutable state of the current round: phase, pot, the two stacks with their
/// hands, and the narration log.
///
/// `player_chips + opponent_chips + pot` never changes while a session runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    phase: Phase,
    pot: Pot,
    current_bet: u32,
    players: [Player; 2],
    log: EventLog,
}

impl RoundState {
    fn new(stack: u32) -> Self {
        Self {
            phase: Phase::Menu,
            pot: Pot::new(),
            current_bet: 0,
            players: [
                Player::new(Seat::Player, stack),
                Player::new(Seat::Opponent, stack),
            ],
            log: EventLog::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pot(&self) -> u32 {
        self.pot.amount()
    }

    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    pub fn player_chips(&self) -> u32 {
        self.players[Seat::Player.index()].stack()
    }

    pub fn opponent_chips(&self) -> u32 {
        self.players[Seat::Opponent.index()].stack()
    }

    pub fn seat(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    fn seat_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    fn total_chips(&self) -> u64 {
        u64::from(self.player_chips()) + u64::from(self.opponent_chips()) + u64::from(self.pot())
    }
}

/// One heads-up draw poker session: the round state, the deck, the RNG and the
/// opponent policy, owned together and mutated only through the transition
/// methods below.
///
/// # Examples
///
/// ```
/// use drawpoker_engine::phase::Phase;
/// use drawpoker_engine::player::Action;
/// use drawpoker_engine::policy::RandomPolicy;
/// use drawpoker_engine::rules::TableRules;
/// use drawpoker_engine::session::Session;
///
/// let mut session = Session::new(TableRules::default(), 42, Box::new(RandomPolicy)).unwrap();
/// session.init_round().unwrap();
/// assert_eq!(session.current_phase(), Phase::Betting1);
/// assert_eq!(session.chip_totals(), (990, 990, 20));
///
/// session.submit_player_action(Action::Fold).unwrap();
/// assert_eq!(session.current_phase(), Phase::RoundEnd);
/// assert_eq!(session.chip_totals(), (990, 1010, 0));
/// ```
pub struct Session {
    rules: TableRules,
    seed: Option<u64>,
    rng: ChaCha20Rng,
    policy: Box<dyn OpponentPolicy>,
    state: RoundState,
    deck: Deck,
    round_no: u32,
    auto_deal: bool,
    actions: Vec<ActionRecord>,
    draws: Vec<DrawRecord>,
    outcome: Option<RoundOutcome>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("rules", &self.rules)
            .field("seed", &self.seed)
            .field("policy", &self.policy.name())
            .field("state", &self.state)
            .field("round_no", &self.round_no)
            .finish()
    }
}

impl Session {
    /// Session whose randomness (shuffles and policy draws) comes from a
    /// ChaCha20 generator seeded with `seed`.
    pub fn new(
        rules: TableRules,
        seed: u64,
        policy: Box<dyn OpponentPolicy>,
    ) -> Result<Self, GameError> {
        let mut s = Self::with_rng(rules, ChaCha20Rng::seed_from_u64(seed), policy)?;
        s.seed = Some(seed);
        Ok(s)
    }

    pub fn with_rng(
        rules: TableRules,
        rng: ChaCha20Rng,
        policy: Box<dyn OpponentPolicy>,
    ) -> Result<Self, GameError> {
        rules.validate()?;
        Ok(Self {
            rules,
            seed: None,
            rng,
            policy,
            state: RoundState::new(rules.starting_stack),
            deck: Deck::new_ordered(),
            round_no: 0,
            auto_deal: false,
            actions: Vec::new(),
            draws: Vec::new(),
            outcome: None,
        })
    }

    /// When set, `advance()` in `RoundEnd` deals the next round.
    pub fn set_auto_deal(&mut self, on: bool) {
        self.auto_deal = on;
    }

    /// Leaves the menu. The next `advance()` (or an explicit `init_round()`) deals.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state.phase != Phase::Menu {
            return Err(self.invalid("start"));
        }
        self.state.phase = Phase::InitRound;
        debug!(phase = %self.state.phase, "session started");
        Ok(())
    }

    /// Takes the ante from both stacks, shuffles a fresh deck and deals five
    /// cards to each side, leaving the session in `Betting1`.
    ///
    /// If either side cannot cover the ante no chips move, the session enters
    /// `GameOver` and `InsufficientChips` is returned.
    pub fn init_round(&mut self) -> Result<(), GameError> {
        match self.state.phase {
            Phase::GameOver => return Err(self.invalid("init_round")),
            phase if phase.in_round() => return Err(GameError::RoundInProgress { phase }),
            _ => {}
        }

        let ante = self.rules.ante;
        let short = self.state.players.iter().find(|p| p.stack() < ante);
        if let Some(p) = short {
            let err = GameError::InsufficientChips {
                required: ante,
                available: p.stack(),
            };
            let who = p.seat();
            warn!(seat = %who, stack = p.stack(), ante, "ante cannot be paid; game over");
            self.state.log.push(match who {
                Seat::Player => "You cannot cover the ante. Game over.",
                Seat::Opponent => "Opponent cannot cover the ante. Game over.",
            });
            self.state.phase = Phase::GameOver;
            return Err(err);
        }

        let mut deck = Deck::new_shuffled(&mut self.rng);
        let dealt = (0..2 * HAND_SIZE)
            .map(|_| deck.deal_card())
            .collect::<Result<Vec<Card>, _>>()?;
        let player_hand = Hand::new(std::array::from_fn(|i| dealt[2 * i]));
        let opponent_hand = Hand::new(std::array::from_fn(|i| dealt[2 * i + 1]));

        let mut players = self.state.players.clone();
        let mut pot = Pot::new();
        for (p, hand) in players.iter_mut().zip([player_hand, opponent_hand]) {
            pot.add(p.take_chips(ante)?);
            p.set_hand(hand);
        }

        let mut log = std::mem::take(&mut self.state.log);
        log.push(format!(
            "New round started. Ante {} from each player.",
            ante
        ));

        self.round_no += 1;
        self.deck = deck;
        self.state = RoundState {
            phase: Phase::Betting1,
            pot,
            current_bet: 0,
            players,
            log,
        };
        self.actions.clear();
        self.draws.clear();
        self.outcome = None;

        info!(
            round = self.round_no,
            player_chips = self.state.player_chips(),
            opponent_chips = self.state.opponent_chips(),
            pot = self.state.pot(),
            "round started"
        );
        Ok(())
    }

    /// Applies the human side's decision during `Betting1`/`Betting2`.
    ///
    /// Rejected submissions (wrong phase, unaffordable bet) leave the session
    /// unchanged.
    pub fn submit_player_action(&mut self, action: Action) -> Result<(), GameError> {
        if !self.state.phase.is_player_betting() {
            return Err(self.invalid(action.as_str()));
        }
        let validated = validate_action(self.state.player_chips(), &self.rules, action)?;
        self.apply_action(Seat::Player, validated, None)
    }

    /// Replaces the masked positions of the player's hand during `PlayerDraw`.
    pub fn submit_player_draw(&mut self, discard_mask: DiscardMask) -> Result<(), GameError> {
        if self.state.phase != Phase::PlayerDraw {
            return Err(self.invalid("draw"));
        }
        self.draw(Seat::Player, discard_mask)?;
        self.state.phase = Phase::OpponentDraw;
        Ok(())
    }

    /// Runs one automatic step. Returns `false` when the current phase waits
    /// for external input and nothing happened.
    pub fn advance(&mut self) -> Result<bool, GameError> {
        match self.state.phase {
            Phase::InitRound => self.init_round().map(|_| true),
            Phase::RoundEnd if self.auto_deal => self.init_round().map(|_| true),
            Phase::OpponentTurn1 | Phase::OpponentTurn2 => self.opponent_turn().map(|_| true),
            Phase::OpponentDraw => self.opponent_draw().map(|_| true),
            Phase::Showdown => self.showdown().map(|_| true),
            _ => Ok(false),
        }
    }

    pub fn current_phase(&self) -> Phase {
        self.state.phase
    }

    /// `(player, opponent)` hands; `None` before the first deal.
    pub fn current_hands(&self) -> Option<(Hand, Hand)> {
        let p = self.state.seat(Seat::Player).hand()?;
        let o = self.state.seat(Seat::Opponent).hand()?;
        Some((*p, *o))
    }

    /// `(player_chips, opponent_chips, pot)`
    pub fn chip_totals(&self) -> (u32, u32, u32) {
        (
            self.state.player_chips(),
            self.state.opponent_chips(),
            self.state.pot(),
        )
    }

    /// Narration lines, oldest first, at most 20.
    pub fn log_entries(&self) -> Vec<String> {
        self.state.log.entries()
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Outcome of the last finished round, cleared when a new round starts.
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Actions the player may submit now; empty outside betting phases.
    pub fn legal_actions(&self) -> Vec<Action> {
        if !self.state.phase.is_player_betting() {
            return Vec::new();
        }
        legal_actions(self.state.player_chips(), &self.rules)
    }

    /// What `seat` may see right now; `None` before the first deal.
    pub fn view(&self, seat: Seat) -> Option<TableView<'_>> {
        view_for(&self.state, &self.rules, seat)
    }

    /// Snapshot of the current (or last finished) round for history export.
    pub fn round_record(&self, round_id: impl Into<String>) -> Option<RoundRecord> {
        if self.round_no == 0 {
            return None;
        }
        Some(RoundRecord {
            round_id: round_id.into(),
            round_no: self.round_no,
            seed: self.seed,
            ante: self.rules.ante,
            bet: self.rules.bet,
            actions: self.actions.clone(),
            draws: self.draws.clone(),
            player_hand: self.state.seat(Seat::Player).hand().copied(),
            opponent_hand: self.state.seat(Seat::Opponent).hand().copied(),
            outcome: self.outcome.clone(),
            chips_after: (self.state.player_chips(), self.state.opponent_chips()),
            ts: None,
        })
    }

    /// Overwrites both hands of the round in progress.
    #[doc(hidden)]
    pub fn set_hands_for_test(&mut self, player: Hand, opponent: Hand) {
        self.state.seat_mut(Seat::Player).set_hand(player);
        self.state.seat_mut(Seat::Opponent).set_hand(opponent);
    }

    fn invalid(&self, action: &str) -> GameError {
        GameError::InvalidAction {
            phase: self.state.phase,
            action: action.to_string(),
        }
    }

    fn opponent_turn(&mut self) -> Result<(), GameError> {
        let view = view_for(&self.state, &self.rules, Seat::Opponent)
            .ok_or_else(|| self.invalid("opponent_turn"))?;
        let requested = self.policy.decide(&view, &mut self.rng);
        match validate_action(self.state.opponent_chips(), &self.rules, requested) {
            Ok(v) => self.apply_action(Seat::Opponent, v, None),
            Err(GameError::InsufficientChips {
                required,
                available,
            }) => {
                warn!(
                    policy = self.policy.name(),
                    required, available, "opponent cannot afford bet; playing check"
                );
                self.apply_action(Seat::Opponent, ValidatedAction::Check, Some(requested))
            }
            Err(e) => Err(e),
        }
    }

    fn opponent_draw(&mut self) -> Result<(), GameError> {
        let view = view_for(&self.state, &self.rules, Seat::Opponent)
            .ok_or_else(|| self.invalid("opponent_draw"))?;
        let mask = self.policy.choose_discards(&view, &mut self.rng);
        self.draw(Seat::Opponent, mask)?;
        self.state.phase = Phase::Betting2;
        self.state.current_bet = 0;
        Ok(())
    }

    fn draw(&mut self, seat: Seat, mask: DiscardMask) -> Result<(), GameError> {
        let missing = self.invalid("draw");
        let hand = self.state.seat_mut(seat).hand_mut().ok_or(missing)?;
        let n = hand.replace(&mask, &mut self.deck)?;
        self.draws.push(DrawRecord {
            seat,
            discarded: (0..HAND_SIZE).filter(|&i| mask[i]).collect(),
        });
        let plural = if n == 1 { "card" } else { "cards" };
        self.state.log.push(match seat {
            Seat::Player => format!("You draw {} {}.", n, plural),
            Seat::Opponent => format!("Opponent draws {} {}.", n, plural),
        });
        debug!(%seat, replaced = n, deck_remaining = self.deck.remaining(), "draw");
        Ok(())
    }

    /// Commits a validated action for `seat` and moves to the next phase.
    fn apply_action(
        &mut self,
        seat: Seat,
        action: ValidatedAction,
        requested: Option<Action>,
    ) -> Result<(), GameError> {
        let before = self.state.total_chips();
        let street = self
            .state
            .phase
            .street()
            .ok_or_else(|| self.invalid("bet"))?;
        let next = match self.state.phase {
            Phase::Betting1 => Phase::OpponentTurn1,
            Phase::OpponentTurn1 => Phase::PlayerDraw,
            Phase::Betting2 => Phase::OpponentTurn2,
            _ => Phase::Showdown,
        };

        let (recorded, amount) = match action {
            ValidatedAction::Check => {
                self.state.log.push(match seat {
                    Seat::Player => "You check.".to_string(),
                    Seat::Opponent => "Opponent checks.".to_string(),
                });
                self.state.phase = next;
                (Action::Check, 0)
            }
            ValidatedAction::Bet(amount) => {
                let chips = self.state.seat_mut(seat).take_chips(amount)?;
                self.state.pot.add(chips);
                self.state.current_bet = chips;
                self.state.log.push(match seat {
                    Seat::Player => format!("You bet {}.", chips),
                    Seat::Opponent => format!("Opponent bets {}.", chips),
                });
                self.state.phase = next;
                (Action::Bet, chips)
            }
            ValidatedAction::Fold => {
                let winner = seat.other();
                let pot = self.state.pot.take();
                self.state.seat_mut(winner).add_chips(pot);
                self.state.log.push(match seat {
                    Seat::Player => format!("You folded. Opponent wins the pot of {}.", pot),
                    Seat::Opponent => format!("Opponent folds. You win the pot of {}!", pot),
                });
                let mut payouts = [0, 0];
                payouts[winner.index()] = pot;
                self.finish_round(RoundOutcome {
                    winner: Some(winner),
                    pot,
                    player_payout: payouts[Seat::Player.index()],
                    opponent_payout: payouts[Seat::Opponent.index()],
                    resolution: Resolution::Fold { folded: seat },
                });
                (Action::Fold, 0)
            }
        };

        self.actions.push(ActionRecord {
            seat,
            street,
            action: recorded,
            amount,
            requested,
        });
        debug!(%seat, action = %recorded, amount, phase = %self.state.phase, "action applied");
        debug_assert_eq!(before, self.state.total_chips(), "chips created or destroyed");
        Ok(())
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        let (player_hand, opponent_hand) = self
            .current_hands()
            .ok_or_else(|| self.invalid("showdown"))?;
        let player_eval = player_hand.evaluate();
        let opponent_eval = opponent_hand.evaluate();
        let before = self.state.total_chips();

        let pot = self.state.pot.amount();
        let (winner, payouts) = match player_eval.cmp(&opponent_eval) {
            std::cmp::Ordering::Greater => {
                self.state.log.push(format!(
                    "You win the showdown with {}!",
                    player_eval
                ));
                (Some(Seat::Player), [self.state.pot.take(), 0])
            }
            std::cmp::Ordering::Less => {
                self.state.log.push(format!(
                    "Opponent wins the showdown with {}.",
                    opponent_eval
                ));
                (Some(Seat::Opponent), [0, self.state.pot.take()])
            }
            std::cmp::Ordering::Equal => {
                self.state.log.push("It's a tie! Pot split.");
                (None, self.state.pot.split(Seat::Player))
            }
        };
        self.state
            .seat_mut(Seat::Player)
            .add_chips(payouts[Seat::Player.index()]);
        self.state
            .seat_mut(Seat::Opponent)
            .add_chips(payouts[Seat::Opponent.index()]);

        self.finish_round(RoundOutcome {
            winner,
            pot,
            player_payout: payouts[Seat::Player.index()],
            opponent_payout: payouts[Seat::Opponent.index()],
            resolution: Resolution::Showdown {
                player: player_eval,
                opponent: opponent_eval,
            },
        });
        debug_assert_eq!(before, self.state.total_chips(), "chips created or destroyed");
        Ok(())
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        info!(
            round = self.round_no,
            winner = ?outcome.winner,
            pot = outcome.pot,
            player_chips = self.state.player_chips(),
            opponent_chips = self.state.opponent_chips(),
            "round finished"
        );
        self.state.current_bet = 0;
        self.state.phase = Phase::RoundEnd;
        self.outcome = Some(outcome);
    }
}

fn view_for<'a>(state: &'a RoundState, rules: &'a TableRules, seat: Seat) -> Option<TableView<'a>> {
    let me = state.seat(seat);
    let other = state.seat(seat.other());
    // A bet on this street counts as "facing" only for the side that did not make it.
    let current_bet = match (state.phase, seat) {
        (Phase::OpponentTurn1 | Phase::OpponentTurn2, Seat::Opponent) => state.current_bet,
        _ => 0,
    };
    Some(TableView {
        phase: state.phase,
        hand: me.hand()?,
        stack: me.stack(),
        other_stack: other.stack(),
        pot: state.pot(),
        current_bet,
        rules,
    })
}
