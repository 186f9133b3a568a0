//! Running a game: participants, the turn loop, outcomes and records.
//!
//! - `Participant`: what a seat must implement
//! - `Game`: deals, solicits actions, applies them and settles the game
//! - `GameOutcome`: scores and keeps after the final sweep
//! - `GameRecord`: deck order plus action history, replayable and
//!   encodable with bincode

pub mod error;
pub mod participant;
pub mod outcome;
pub mod runner;
pub mod record;

pub use error::GameError;
pub use participant::Participant;
pub use outcome::{GameOutcome, GameResult};
pub use runner::{play_game, Game};
pub use record::{replay, GameRecord};
