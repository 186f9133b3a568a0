//! Game records and replay.
//!
//! A `GameRecord` is the dealing order plus every applied action. That is
//! enough to rebuild the whole game, so records are what gets stored.
//!
//! ```
//! use cassino::core::GameConfig;
//! use cassino::game::{Game, GameRecord};
//!
//! let game = Game::new(GameConfig::default().with_seed(5));
//! let bytes = game.record().to_bytes().unwrap();
//! let record = GameRecord::from_bytes(&bytes).unwrap();
//! assert_eq!(record, game.record());
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::outcome::GameOutcome;
use super::runner::Game;
use crate::core::{ActionRecord, Card, GameConfig};

/// Everything needed to replay a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Dealing order, top card first.
    pub deck: Vec<Card>,

    /// Applied actions, oldest first.
    pub actions: Vec<ActionRecord>,
}

impl GameRecord {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Replay the record from the deal, checking every action again.
    pub fn replay(&self) -> Result<GameOutcome, GameError> {
        replay(self)
    }
}

/// Re-deal `record.deck` and re-apply each action in order.
///
/// Fails if any action is illegal or out of turn, if actions continue past
/// the end of the game, or if the record stops before the game is over.
pub fn replay(record: &GameRecord) -> Result<GameOutcome, GameError> {
    let config = GameConfig {
        deck: Some(record.deck.clone()),
        ..GameConfig::default()
    };
    let mut game = Game::try_new(config)?;
    for entry in &record.actions {
        if game.needs_deal() {
            game.deal();
        }
        if game.is_over() {
            return Err(GameError::ExtraActions { turn: entry.turn });
        }
        game.step(entry.player, entry.action.clone())?;
    }

    if !game.is_over() {
        let state = game.state();
        let remaining = state.deck.len() + state.hands.values().map(|h| h.len()).sum::<usize>();
        return Err(GameError::IncompleteRecord { remaining });
    }

    Ok(game.finish())
}
