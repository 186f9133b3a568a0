//! The contract between the game runner and whoever is playing a seat.
//!
//! A participant only ever sees copies: the table arrives as a
//! `TableSnapshot` it owns outright, and hands arrive as slices copied out
//! of the engine's state. Nothing it does to those values reaches the game.
//!
//! Every call is synchronous. A participant that never returns from
//! `choose_action` stalls the game.

use crate::core::{Action, Card, PlayerId};
use crate::rules::RuleError;
use crate::table::TableSnapshot;

/// A seat at the table.
pub trait Participant {
    /// Called once per game, after the opening cards are laid out and before
    /// the first hand is dealt.
    fn init(&mut self, position: PlayerId, table: TableSnapshot);

    /// Called at the start of every hand with the four cards dealt.
    fn dealt_hand(&mut self, cards: &[Card]);

    /// Propose an action for the current turn.
    fn choose_action(&mut self, table: TableSnapshot) -> Action;

    /// Called after each of the opponent's turns. `captured` is empty for a
    /// trail or build; for a capture it holds every captured card, the
    /// played card last.
    fn note(&mut self, played: Card, captured: &[Card]) {
        let _ = (played, captured);
    }

    /// Called when a proposed action was rejected and the participant will
    /// be asked again. Only happens under `RejectionPolicy::Retry`.
    fn rejected(&mut self, action: &Action, error: &RuleError) {
        let _ = (action, error);
    }
}
