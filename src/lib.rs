//! # cassino
//!
//! A rules engine for two-player Cassino.
//!
//! ## Design Principles
//!
//! 1. **Validate, then apply**: every action is checked by a pure validator
//!    before the executor touches any state. The executor never re-checks.
//!
//! 2. **Stable handles**: piles are addressed by handles that are issued in
//!    increasing order and never reused within a game.
//!
//! 3. **Snapshots at the boundary**: participants only ever receive deep
//!    copies of the table, so no seat can observe or change live state.
//!
//! ## Architecture
//!
//! - **Single writer**: seats alternate strictly, and only the executor,
//!   acting for the seat to move, mutates the table, hands and keeps.
//!
//! - **Persistent Data Structures**: table snapshots and keeps use `im-rs`
//!   so participants can clone them freely while searching.
//!
//! - **Deterministic**: a seeded ChaCha8 shuffle deals the same game every
//!   time, and a `GameRecord` replays it exactly.
//!
//! ## Modules
//!
//! - `core`: Cards, seats, pile handles, actions, RNG, configuration, state
//! - `table`: Piles and the table arena, plus participant snapshots
//! - `rules`: Validation, execution, move listing and scoring
//! - `game`: Participants, the turn loop, outcomes and replay

pub mod core;
pub mod table;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Card, Suit, PlayerId, PlayerMap, PileId,
    GameRng, GameConfig, RejectionPolicy,
    Action, ActionRecord, PileGroup,
    GameState, Hand, Keep,
};

pub use crate::table::{Pile, Table, TableSnapshot, TableView};

pub use crate::rules::{
    RuleError, Resolution, ScoreBreakdown,
    validate, apply, sweep, score, candidate_actions,
};

pub use crate::game::{
    Participant, Game, GameError, GameOutcome, GameResult, GameRecord,
    play_game, replay,
};
