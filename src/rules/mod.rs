//! Cassino rules: validation, execution, move listing and scoring.
//!
//! The split mirrors a turn:
//! - `validate` decides whether an action is legal, without side effects
//! - `apply` performs a legal action on the game state
//! - `sweep` and `score` settle the game once the deck runs out
//!
//! The game runner calls into these functions but never interprets piles
//! or card values itself.

pub mod error;
pub mod validate;
pub mod execute;
pub mod moves;
pub mod score;

pub use error::RuleError;
pub use validate::{build_target, validate};
pub use execute::{apply, sweep, Resolution};
pub use moves::candidate_actions;
pub use score::{score, ScoreBreakdown, SPADES_NEEDED};
