//! Final result of a completed game.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Keep, PlayerId, PlayerMap};
use crate::rules::ScoreBreakdown;

/// Who won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Scores and keeps once the table has been swept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Points per category, per player.
    pub scores: PlayerMap<ScoreBreakdown>,

    /// Every card each player ended with, in capture order.
    pub keeps: PlayerMap<Vec<Card>>,

    pub result: GameResult,
}

impl GameOutcome {
    /// Score final keeps.
    #[must_use]
    pub fn from_keeps(keeps: &PlayerMap<Keep>) -> Self {
        let scores = keeps.map(|_, keep| ScoreBreakdown::of(keep.iter()));
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        let result = match scores[p0].total().cmp(&scores[p1].total()) {
            std::cmp::Ordering::Greater => GameResult::Winner(p0),
            std::cmp::Ordering::Less => GameResult::Winner(p1),
            std::cmp::Ordering::Equal => GameResult::Draw,
        };

        Self {
            scores,
            keeps: keeps.map(|_, keep| keep.to_vec()),
            result,
        }
    }

    /// Total points for `player`.
    #[must_use]
    pub fn total(&self, player: PlayerId) -> u32 {
        self.scores[player].total()
    }
}
