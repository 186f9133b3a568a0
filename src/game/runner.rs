//! The game runner: deals, drives turn order and settles the game.
//!
//! ## Flow
//!
//! 1. Four cards are laid face up on the table and each seat is initialised.
//! 2. While the deck has cards, four are dealt to each seat and the seats
//!    alternate turns, seat 0 first, until both hands are empty.
//! 3. The table is swept to the last capturer and both keeps are scored.
//!
//! Each turn the acting seat proposes an action against a fresh snapshot.
//! The action is validated, then applied, then reported to the other seat.
//! What happens to a rejected action is set by `GameConfig::rejection` and
//! applies to both seats alike.
//!
//! `Game::play` runs the whole loop. `deal`, `step` and `finish` expose the
//! same flow one move at a time, which is what replay uses.

use tracing::{debug, info};

use super::error::GameError;
use super::outcome::GameOutcome;
use super::participant::Participant;
use super::record::GameRecord;
use crate::core::{
    is_full_deck, Action, ActionRecord, Card, GameConfig, GameRng, GameState, PlayerId, PlayerMap,
    PLAYER_COUNT,
};
use crate::rules::{apply, candidate_actions, sweep, validate, Resolution};

/// One game of Cassino.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,

    /// Dealing order, kept for the record.
    deck: Vec<Card>,

    state: GameState,
    history: Vec<ActionRecord>,
    to_act: PlayerId,
    hands_dealt: u32,
}

impl Game {
    /// Shuffle (or take the configured deck) and lay out the opening table.
    ///
    /// Panics if a preset deck is not a permutation of the 52 cards; use
    /// `try_new` for configs that did not come from `GameConfig::with_deck`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        match Self::try_new(config) {
            Ok(game) => game,
            Err(err) => panic!("{}", err),
        }
    }

    /// Like `new`, but returns `GameError::InvalidDeck` for a preset deck
    /// that is not a permutation of the 52 cards.
    pub fn try_new(config: GameConfig) -> Result<Self, GameError> {
        let deck = match &config.deck {
            Some(deck) if is_full_deck(deck) => deck.clone(),
            Some(_) => return Err(GameError::InvalidDeck),
            None => GameRng::new(config.seed).shuffled_deck(),
        };

        let mut state = GameState::new(deck.clone());
        state.deal_table();
        info!(
            seed = config.seed,
            preset_deck = config.deck.is_some(),
            table = state.table.len(),
            "game started"
        );

        Ok(Self {
            config,
            deck,
            state,
            history: Vec::new(),
            to_act: PlayerId::new(0),
            hands_dealt: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Actions applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn to_act(&self) -> PlayerId {
        self.to_act
    }

    /// Turn number of the next action, counted from 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.history.len() as u32 + 1
    }

    /// Hands dealt so far.
    #[must_use]
    pub fn hands_dealt(&self) -> u32 {
        self.hands_dealt
    }

    /// Both hands are empty but the deck is not.
    #[must_use]
    pub fn needs_deal(&self) -> bool {
        self.state.hands_empty() && !self.state.deck.is_empty()
    }

    /// Every card has been dealt and played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.hands_empty() && self.state.deck.is_empty()
    }

    /// Deal the next hand. Returns the cards each seat received.
    pub fn deal(&mut self) -> PlayerMap<Vec<Card>> {
        let dealt = self.state.deal_hands();
        self.hands_dealt += 1;
        info!(
            hand = self.hands_dealt,
            remaining = self.state.deck.len(),
            "dealt hands"
        );
        dealt
    }

    /// Legal moves for the seat to act, as listed by `candidate_actions`.
    #[must_use]
    pub fn candidate_actions(&self) -> Vec<Action> {
        let player = self.to_act;
        candidate_actions(&self.state.table, player, self.state.hands[player].as_slice())
    }

    /// Validate and apply one action for `player`.
    ///
    /// A rejected action counts as a single failed attempt; retrying is up
    /// to the caller.
    pub fn step(&mut self, player: PlayerId, action: Action) -> Result<Resolution, GameError> {
        if player != self.to_act {
            return Err(GameError::OutOfTurn {
                expected: self.to_act,
                found: player,
            });
        }

        validate(
            &self.state.table,
            player,
            self.state.hands[player].as_slice(),
            &action,
        )
        .map_err(|error| GameError::IllegalAction {
            player,
            attempts: 1,
            error,
        })?;

        Ok(self.commit(player, action))
    }

    /// Apply an action that has already passed validation.
    fn commit(&mut self, player: PlayerId, action: Action) -> Resolution {
        let resolution = apply(&mut self.state, player, &action);
        let turn = self.turn();
        debug!(turn, %player, %action, "action applied");

        self.history.push(ActionRecord::new(player, action, turn));
        self.to_act = player.opponent();
        resolution
    }

    /// Sweep the table to the last capturer and score both keeps.
    ///
    /// Meant for a game that `is_over`; calling it earlier settles whatever
    /// has been captured so far.
    pub fn finish(&mut self) -> GameOutcome {
        let (receiver, swept) = sweep(&mut self.state);
        let outcome = GameOutcome::from_keeps(&self.state.keeps);
        info!(
            swept = swept.len(),
            receiver = %receiver,
            p0 = outcome.total(PlayerId::new(0)),
            p1 = outcome.total(PlayerId::new(1)),
            "game over"
        );
        outcome
    }

    /// Deck order and actions so far, enough to replay this game.
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord {
            deck: self.deck.clone(),
            actions: self.history.clone(),
        }
    }

    /// Play the game to the end with `seats[0]` and `seats[1]`.
    pub fn play(
        &mut self,
        seats: &mut [&mut dyn Participant; PLAYER_COUNT],
    ) -> Result<GameOutcome, GameError> {
        for player in PlayerId::all() {
            seats[player.index()].init(player, self.state.table.snapshot());
        }

        while !self.is_over() {
            if self.needs_deal() {
                let dealt = self.deal();
                for (player, cards) in dealt.iter() {
                    seats[player.index()].dealt_hand(cards);
                }
            }

            let player = self.to_act;
            let action = self.solicit(player, &mut *seats[player.index()])?;
            let card = action.card();
            let resolution = self.commit(player, action);
            seats[player.opponent().index()].note(card, resolution.captured());
        }

        Ok(self.finish())
    }

    /// Ask `seat` for an action until one validates or the rejection policy
    /// runs out of attempts.
    fn solicit(&self, player: PlayerId, seat: &mut dyn Participant) -> Result<Action, GameError> {
        let max_attempts = self.config.rejection.max_attempts();
        let hand = self.state.hands[player].as_slice();
        let mut attempts = 0;

        loop {
            attempts += 1;
            let action = seat.choose_action(self.state.table.snapshot());
            let error = match validate(&self.state.table, player, hand, &action) {
                Ok(()) => return Ok(action),
                Err(error) => error,
            };

            debug!(%player, %action, %error, attempts, "action rejected");
            if attempts >= max_attempts {
                return Err(GameError::IllegalAction {
                    player,
                    attempts,
                    error,
                });
            }
            seat.rejected(&action, &error);
        }
    }
}

/// Play one game from `config` with `seats[0]` moving first.
pub fn play_game(
    config: GameConfig,
    seats: &mut [&mut dyn Participant; PLAYER_COUNT],
) -> Result<GameOutcome, GameError> {
    Game::try_new(config)?.play(seats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PileId, RejectionPolicy, DECK_SIZE};
    use crate::rules::RuleError;
    use crate::table::TableSnapshot;

    const P0: PlayerId = PlayerId(0);
    const P1: PlayerId = PlayerId(1);

    /// Plays the first candidate action, after optionally proposing some
    /// illegal trails.
    #[derive(Default)]
    struct FirstCandidate {
        position: Option<PlayerId>,
        hand: Vec<Card>,
        bad_proposals: u32,
        hands_seen: u32,
        notes: Vec<(Card, Vec<Card>)>,
        rejections: Vec<RuleError>,
    }

    impl Participant for FirstCandidate {
        fn init(&mut self, position: PlayerId, _table: TableSnapshot) {
            self.position = Some(position);
        }

        fn dealt_hand(&mut self, cards: &[Card]) {
            self.hand.extend_from_slice(cards);
            self.hands_seen += 1;
        }

        fn choose_action(&mut self, table: TableSnapshot) -> Action {
            if self.bad_proposals > 0 {
                self.bad_proposals -= 1;
                let missing = Card::deck().find(|c| !self.hand.contains(c)).unwrap();
                return Action::trail(missing);
            }

            let player = self.position.unwrap();
            let actions = candidate_actions(&table, player, &self.hand);
            let action = actions
                .iter()
                .find(|a| !a.is_trail() && !a.is_build())
                .or_else(|| actions.iter().find(|a| a.is_trail()))
                .unwrap_or(&actions[0])
                .clone();
            self.hand.retain(|&c| c != action.card());
            action
        }

        fn note(&mut self, played: Card, captured: &[Card]) {
            self.notes.push((played, captured.to_vec()));
        }

        fn rejected(&mut self, _action: &Action, error: &RuleError) {
            self.rejections.push(error.clone());
        }
    }

    fn run(
        config: GameConfig,
        a: &mut FirstCandidate,
        b: &mut FirstCandidate,
    ) -> Result<(Game, GameOutcome), GameError> {
        let mut game = Game::new(config);
        let outcome = game.play(&mut [a, b])?;
        Ok((game, outcome))
    }

    #[test]
    fn test_new_deals_table() {
        let game = Game::new(GameConfig::default());

        assert_eq!(game.state().table.len(), 4);
        assert_eq!(game.state().deck.len(), 48);
        assert!(game.needs_deal());
        assert!(!game.is_over());
        assert_eq!(game.to_act(), P0);
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_preset_deck_is_used() {
        let deck: Vec<Card> = Card::deck().collect();
        let game = Game::new(GameConfig::default().with_deck(deck.clone()));

        let table: Vec<Card> = game.state().table.iter().map(|(_, p)| p.cards()[0]).collect();
        assert_eq!(table, deck[..4].to_vec());
        assert_eq!(game.record().deck, deck);
    }

    #[test]
    fn test_deserialized_bad_deck_is_rejected() {
        let mut deck: Vec<u8> = (0..52).collect();
        deck[1] = 0;
        let json = serde_json::json!({ "seed": 1, "deck": deck, "rejection": "Abort" });
        let config: GameConfig = serde_json::from_value(json).unwrap();

        assert!(matches!(Game::try_new(config.clone()), Err(GameError::InvalidDeck)));

        let mut a = FirstCandidate::default();
        let mut b = FirstCandidate::default();
        let err = play_game(config, &mut [&mut a, &mut b]).unwrap_err();
        assert!(matches!(err, GameError::InvalidDeck));
        assert!(a.position.is_none());
    }

    #[test]
    #[should_panic(expected = "deck must contain each of the 52 cards exactly once")]
    fn test_new_panics_on_short_deck() {
        let config = GameConfig {
            deck: Some(Card::deck().take(40).collect()),
            ..GameConfig::default()
        };
        let _ = Game::new(config);
    }

    #[test]
    fn test_step_rejects_out_of_turn() {
        let mut game = Game::new(GameConfig::default());
        game.deal();
        let card = game.state().hands[P1].as_slice()[0];

        let err = game.step(P1, Action::trail(card)).unwrap_err();
        assert!(matches!(err, GameError::OutOfTurn { expected: P0, found: P1 }));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_step_rejects_illegal_action() {
        let mut game = Game::new(GameConfig::default());
        game.deal();
        let held = game.state().hands[P1].as_slice()[0];

        let err = game.step(P0, Action::trail(held)).unwrap_err();
        assert_eq!(err.rule_error(), Some(&RuleError::InvalidCard { card: held }));
        assert_eq!(game.to_act(), P0);
    }

    #[test]
    fn test_step_alternates_and_records() {
        let mut game = Game::new(GameConfig::default());
        game.deal();

        for _ in 0..2 {
            let player = game.to_act();
            let action = game.candidate_actions().remove(0);
            game.step(player, action).unwrap();
        }

        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[0].player, P0);
        assert_eq!(game.history()[1].player, P1);
        assert_eq!(game.history()[1].turn, 2);
        assert_eq!(game.to_act(), P0);
        assert_eq!(game.state().card_count(), DECK_SIZE);
    }

    #[test]
    fn test_trail_gets_next_handle() {
        let mut game = Game::new(GameConfig::default().with_deck(Card::deck().collect()));
        game.deal();
        let card = game.state().hands[P0].as_slice()[0];

        let resolution = game.step(P0, Action::trail(card)).unwrap();
        assert_eq!(resolution, Resolution::Trailed { pile: PileId(4) });
    }

    #[test]
    fn test_full_game() {
        let mut a = FirstCandidate::default();
        let mut b = FirstCandidate::default();
        let (game, outcome) = run(GameConfig::default().with_seed(7), &mut a, &mut b).unwrap();

        assert!(game.is_over());
        assert!(game.state().table.is_empty());
        assert_eq!(game.hands_dealt(), 6);
        assert_eq!(game.history().len(), 48);
        assert_eq!(a.hands_seen, 6);
        assert_eq!(a.notes.len(), 24);
        assert_eq!(b.notes.len(), 24);

        let kept: usize = outcome.keeps.values().map(Vec::len).sum();
        assert_eq!(kept, DECK_SIZE);
        let bonuses: u32 = outcome
            .scores
            .values()
            .map(|s| s.big_cassino + s.little_cassino + s.aces)
            .sum();
        assert_eq!(bonuses, 7);
    }

    #[test]
    fn test_notes_report_captures() {
        let mut a = FirstCandidate::default();
        let mut b = FirstCandidate::default();
        let (game, _) = run(GameConfig::default().with_seed(11), &mut a, &mut b).unwrap();

        // Player 1 hears about every player 0 turn, in order
        let p0_cards: Vec<Card> = game
            .history()
            .iter()
            .filter(|r| r.player == P0)
            .map(|r| r.action.card())
            .collect();
        let noted: Vec<Card> = b.notes.iter().map(|(played, _)| *played).collect();
        assert_eq!(noted, p0_cards);

        let p0_records = game.history().iter().filter(|r| r.player == P0);
        for ((played, captured), record) in b.notes.iter().zip(p0_records) {
            if matches!(record.action, Action::Capture { .. }) {
                assert_eq!(captured.last(), Some(played));
            } else {
                assert!(captured.is_empty());
            }
        }
    }

    #[test]
    fn test_abort_policy_ends_game() {
        let mut a = FirstCandidate {
            bad_proposals: 1,
            ..Default::default()
        };
        let mut b = FirstCandidate::default();

        let err = run(GameConfig::default(), &mut a, &mut b).unwrap_err();
        match err {
            GameError::IllegalAction { player, attempts, error } => {
                assert_eq!(player, P0);
                assert_eq!(attempts, 1);
                assert!(matches!(error, RuleError::InvalidCard { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(a.rejections.is_empty());
    }

    #[test]
    fn test_retry_policy_resolicits() {
        let mut a = FirstCandidate {
            bad_proposals: 2,
            ..Default::default()
        };
        let mut b = FirstCandidate::default();
        let config =
            GameConfig::default().with_rejection(RejectionPolicy::Retry { max_attempts: 3 });

        let (game, _) = run(config, &mut a, &mut b).unwrap();
        assert!(game.is_over());
        assert_eq!(a.rejections.len(), 2);
    }

    #[test]
    fn test_retry_policy_gives_up() {
        let mut a = FirstCandidate::default();
        let mut b = FirstCandidate {
            bad_proposals: 5,
            ..Default::default()
        };
        let config =
            GameConfig::default().with_rejection(RejectionPolicy::Retry { max_attempts: 3 });

        let err = run(config, &mut a, &mut b).unwrap_err();
        assert!(matches!(err, GameError::IllegalAction { player: P1, attempts: 3, .. }));
        assert_eq!(b.rejections.len(), 2);
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = |seed| {
            let mut a = FirstCandidate::default();
            let mut b = FirstCandidate::default();
            run(GameConfig::default().with_seed(seed), &mut a, &mut b).unwrap()
        };

        let (first, outcome1) = play(99);
        let (second, outcome2) = play(99);
        assert_eq!(first.history(), second.history());
        assert_eq!(outcome1, outcome2);
    }
}
