//! Core engine types: cards, seats, pile handles, actions, RNG,
//! configuration and the game state they make up.
//!
//! Everything here is plain data shared by the rules and the game runner.

pub mod card;
pub mod player;
pub mod pile_id;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use card::{Card, InvalidCardIndex, Suit};
pub use player::{PlayerId, PlayerMap};
pub use pile_id::PileId;
pub use rng::GameRng;
pub use config::{
    is_full_deck, GameConfig, RejectionPolicy, DECK_SIZE, HAND_SIZE, PLAYER_COUNT, TABLE_DEAL,
};
pub use action::{Action, ActionRecord, PileGroup};
pub use state::{GameState, Hand, Keep};
