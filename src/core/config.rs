//! Rule constants and game configuration.
//!
//! The ruleset is fixed; `GameConfig` only controls how a match is run:
//! the shuffle seed, an optional preset deck order, and what happens
//! when a participant proposes an illegal action.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Cards dealt to each player per hand.
pub const HAND_SIZE: usize = 4;

/// Cards dealt face-up to the table before the first hand.
pub const TABLE_DEAL: usize = 4;

/// Seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Whether `deck` holds each of the 52 cards exactly once.
#[must_use]
pub fn is_full_deck(deck: &[Card]) -> bool {
    let mut sorted = deck.to_vec();
    sorted.sort_unstable();
    sorted.into_iter().eq(Card::deck())
}

/// How the orchestrator treats an action the validator rejects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionPolicy {
    /// End the game on the first illegal action.
    #[default]
    Abort,
    /// Ask the same participant again, up to `max_attempts` proposals per turn.
    Retry { max_attempts: u32 },
}

impl RejectionPolicy {
    /// Proposals allowed per turn before the game is aborted.
    #[must_use]
    pub fn max_attempts(self) -> u32 {
        match self {
            RejectionPolicy::Abort => 1,
            RejectionPolicy::Retry { max_attempts } => max_attempts.max(1),
        }
    }
}

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shuffle seed. Same seed deals the same game.
    pub seed: u64,

    /// Deck order to deal from instead of shuffling, top card first.
    pub deck: Option<Vec<Card>>,

    /// Applied uniformly to every participant.
    pub rejection: RejectionPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            deck: None,
            rejection: RejectionPolicy::Abort,
        }
    }
}

impl GameConfig {
    /// Use a custom shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deal from a fixed deck order.
    ///
    /// Panics unless `deck` holds each of the 52 cards exactly once.
    #[must_use]
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        assert!(
            is_full_deck(&deck),
            "Deck must contain each of the 52 cards exactly once"
        );
        self.deck = Some(deck);
        self
    }

    /// Set the rejection policy.
    #[must_use]
    pub fn with_rejection(mut self, rejection: RejectionPolicy) -> Self {
        self.rejection = rejection;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert!(config.deck.is_none());
        assert_eq!(config.rejection, RejectionPolicy::Abort);
    }

    #[test]
    fn test_builder_pattern() {
        let deck: Vec<Card> = Card::deck().rev().collect();
        let config = GameConfig::default()
            .with_seed(123)
            .with_deck(deck.clone())
            .with_rejection(RejectionPolicy::Retry { max_attempts: 3 });

        assert_eq!(config.seed, 123);
        assert_eq!(config.deck, Some(deck));
        assert_eq!(config.rejection.max_attempts(), 3);
    }

    #[test]
    #[should_panic(expected = "Deck must contain each of the 52 cards exactly once")]
    fn test_with_deck_rejects_duplicates() {
        let mut deck: Vec<Card> = Card::deck().collect();
        deck[1] = deck[0];
        let _ = GameConfig::default().with_deck(deck);
    }

    #[test]
    fn test_is_full_deck() {
        let mut deck: Vec<Card> = Card::deck().rev().collect();
        assert!(is_full_deck(&deck));

        deck.pop();
        assert!(!is_full_deck(&deck));
        assert!(!is_full_deck(&[]));
    }

    #[test]
    fn test_max_attempts() {
        assert_eq!(RejectionPolicy::Abort.max_attempts(), 1);
        assert_eq!(RejectionPolicy::Retry { max_attempts: 0 }.max_attempts(), 1);
        assert_eq!(RejectionPolicy::Retry { max_attempts: 5 }.max_attempts(), 5);
    }

    #[test]
    fn test_deal_arithmetic() {
        assert_eq!((DECK_SIZE - TABLE_DEAL) % (HAND_SIZE * PLAYER_COUNT), 0);
    }

    #[test]
    fn test_serialization() {
        let config =
            GameConfig::default().with_rejection(RejectionPolicy::Retry { max_attempts: 2 });
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
