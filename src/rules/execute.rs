//! Action execution.
//!
//! `apply` performs a validated action on the game state. It does no
//! checking of its own: feeding it an action `validate` rejected leaves the
//! state consistent (unknown handles are skipped) but not meaningful.

use smallvec::SmallVec;
use tracing::trace;

use super::validate::build_target;
use crate::core::{Action, Card, GameState, PileId, PlayerId};
use crate::table::Pile;

/// What an applied action did to the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The card became a new single-card pile.
    Trailed { pile: PileId },

    /// A new build was placed on the table.
    Built { pile: PileId, value: u8, compound: bool },

    /// Cards moved to the player's keep, played card last.
    Captured { cards: Vec<Card> },
}

impl Resolution {
    /// Cards captured by this action; empty unless it was a capture.
    #[must_use]
    pub fn captured(&self) -> &[Card] {
        match self {
            Resolution::Captured { cards } => cards,
            _ => &[],
        }
    }
}

/// Apply a validated action for `player`.
pub fn apply(state: &mut GameState, player: PlayerId, action: &Action) -> Resolution {
    let card = action.card();
    let held = state.hands[player].remove(card);
    debug_assert!(held, "applied card {} not in hand", card);

    match action {
        Action::Trail { .. } => {
            let pile = state.table.insert(Pile::single(card));
            trace!(%player, %card, %pile, "trailed");
            Resolution::Trailed { pile }
        }
        Action::Build { sets, .. } => {
            // Validated targets never exceed ten
            let value = build_target(&state.table, action) as u8;
            let compound = !sets.is_empty();

            let mut cards: SmallVec<[Card; 4]> = SmallVec::new();
            for id in action.handles() {
                if let Some(pile) = state.table.remove(id) {
                    cards.extend(pile.into_cards());
                }
            }
            cards.push(card);

            let pile = state
                .table
                .insert(Pile::build(cards, value, player, compound));
            trace!(%player, %card, %pile, value, compound, "built");
            Resolution::Built {
                pile,
                value,
                compound,
            }
        }
        Action::Capture { sets, .. } => {
            let mut cards = Vec::new();
            for &id in sets.iter().flatten() {
                if let Some(pile) = state.table.remove(id) {
                    cards.extend(pile.into_cards());
                }
            }
            cards.push(card);

            state.keeps[player].extend(cards.iter().copied());
            state.last_capturer = Some(player);
            trace!(%player, %card, count = cards.len(), "captured");
            Resolution::Captured { cards }
        }
    }
}

/// Award every pile left on the table to the last capturer.
///
/// If nobody captured all game, the player who acted last (seat 1) takes
/// them. Returns the receiving player and the cards swept.
pub fn sweep(state: &mut GameState) -> (PlayerId, Vec<Card>) {
    let receiver = state
        .last_capturer
        .unwrap_or_else(|| PlayerId::all().last().unwrap_or(PlayerId(0)));

    let cards: Vec<Card> = state
        .table
        .drain()
        .into_iter()
        .flat_map(Pile::into_cards)
        .collect();
    state.keeps[receiver].extend(cards.iter().copied());
    trace!(player = %receiver, count = cards.len(), "swept table");
    (receiver, cards)
}
