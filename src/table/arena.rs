//! The table: every pile currently in play, keyed by handle.
//!
//! Piles live in a dense arena indexed by `PileId`. Removed piles leave an
//! empty slot behind and handles are never handed out twice, so there is no
//! need for generation counters.
//!
//! Participants never see the arena. They get a `TableSnapshot`, a deep
//! copy of the live piles in a persistent map, which they can keep, clone
//! and search over without touching the engine's state.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::pile::Pile;
use crate::core::{Card, PileId, PlayerId};

/// Read access to a set of piles.
///
/// Implemented by both the live `Table` and `TableSnapshot`, so the same
/// validation runs inside the engine and inside a participant's search.
pub trait TableView {
    /// Look up a pile by handle.
    fn pile(&self, id: PileId) -> Option<&Pile>;

    /// Iterate over live piles in handle order.
    fn piles(&self) -> Box<dyn Iterator<Item = (PileId, &Pile)> + '_>;

    /// Whether `player` controls at least one build.
    fn controls_build(&self, player: PlayerId) -> bool {
        self.piles().any(|(_, pile)| pile.is_controlled_by(player))
    }
}

/// Live table state, mutated only by the executor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    slots: Vec<Option<Pile>>,
    live: usize,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding `piles`, with handles issued from 0 in order.
    pub fn from_piles(piles: impl IntoIterator<Item = Pile>) -> Self {
        let mut table = Self::new();
        for pile in piles {
            table.insert(pile);
        }
        table
    }

    /// Create a table of single-card piles.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self::from_piles(cards.into_iter().map(Pile::single))
    }

    /// Place a pile on the table under a fresh handle.
    pub fn insert(&mut self, pile: Pile) -> PileId {
        let id = self.next_id();
        self.slots.push(Some(pile));
        self.live += 1;
        id
    }

    /// Take a pile off the table.
    pub fn remove(&mut self, id: PileId) -> Option<Pile> {
        let pile = self.slots.get_mut(id.index())?.take()?;
        self.live -= 1;
        Some(pile)
    }

    /// Take every pile off the table, in handle order.
    pub fn drain(&mut self) -> Vec<Pile> {
        self.live = 0;
        self.slots.iter_mut().filter_map(Option::take).collect()
    }

    #[must_use]
    pub fn get(&self, id: PileId) -> Option<&Pile> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn contains(&self, id: PileId) -> bool {
        self.get(id).is_some()
    }

    /// The handle the next inserted pile will receive.
    #[must_use]
    pub fn next_id(&self) -> PileId {
        PileId(self.slots.len() as u32)
    }

    /// Number of live piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.iter().map(|(_, pile)| pile.len()).sum()
    }

    /// Iterate over live piles in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (PileId, &Pile)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|pile| (PileId(i as u32), pile)))
    }

    /// Deep copy of the live piles for handing to a participant.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            piles: self.iter().map(|(id, pile)| (id, pile.clone())).collect(),
        }
    }
}

impl TableView for Table {
    fn pile(&self, id: PileId) -> Option<&Pile> {
        self.get(id)
    }

    fn piles(&self) -> Box<dyn Iterator<Item = (PileId, &Pile)> + '_> {
        Box::new(self.iter())
    }
}

/// Immutable copy of the table at one point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    piles: OrdMap<PileId, Pile>,
}

impl TableSnapshot {
    #[must_use]
    pub fn get(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Iterate over piles in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (PileId, &Pile)> {
        self.piles.iter().map(|(id, pile)| (*id, pile))
    }

    /// Handles in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = PileId> + '_ {
        self.piles.keys().copied()
    }
}

impl TableView for TableSnapshot {
    fn pile(&self, id: PileId) -> Option<&Pile> {
        self.get(id)
    }

    fn piles(&self) -> Box<dyn Iterator<Item = (PileId, &Pile)> + '_> {
        Box::new(self.iter())
    }
}
