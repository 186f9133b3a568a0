//! Errors raised while running or replaying a game.

use thiserror::Error;

use crate::core::PlayerId;
use crate::rules::RuleError;

/// Why a game could not be completed.
#[derive(Debug, Error)]
pub enum GameError {
    /// A participant used up its proposals for a turn without a legal one.
    #[error("{player} made no legal action in {attempts} attempt(s): {error}")]
    IllegalAction {
        player: PlayerId,
        attempts: u32,
        #[source]
        error: RuleError,
    },

    #[error("expected {expected} to act, not {found}")]
    OutOfTurn { expected: PlayerId, found: PlayerId },

    #[error("deck must contain each of the 52 cards exactly once")]
    InvalidDeck,

    #[error("action at turn {turn} comes after the game ended")]
    ExtraActions { turn: u32 },

    #[error("record ends with {remaining} card(s) still to play")]
    IncompleteRecord { remaining: usize },

    #[error("record encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

impl GameError {
    /// The rule violation behind this error, if any.
    #[must_use]
    pub fn rule_error(&self) -> Option<&RuleError> {
        match self {
            GameError::IllegalAction { error, .. } => Some(error),
            _ => None,
        }
    }
}
