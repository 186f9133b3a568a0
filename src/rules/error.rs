//! Reasons an action can be rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Card, PileId};

/// Why the validator rejected an action.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RuleError {
    #[error("card {card} is not in hand")]
    InvalidCard { card: Card },

    #[error("cannot trail while controlling a build")]
    TrailWhileBuilding,

    #[error("a build or capture must name at least one pile")]
    NoPiles,

    #[error("no pile with handle {id}")]
    UnknownPileHandle { id: PileId },

    #[error("pile {id} is used more than once")]
    DuplicatePileHandle { id: PileId },

    #[error("face card {card} can only take single cards of the same rank, one per set")]
    IllegalFaceCapture { card: Card },

    #[error("cannot add to pile {id}: compound builds and face cards cannot be extended")]
    IllegalAddTarget { id: PileId },

    #[error("pile {id} has no numeric value")]
    ValuelessPile { id: PileId },

    #[error("set sums to {found}, expected {expected}")]
    SumMismatch { expected: u32, found: u32 },

    #[error("no card left in hand to capture a build of {target}")]
    UncapturableBuild { target: u32 },
}
