//! Table piles: single cards and builds.
//!
//! A pile with one card is just that card lying on the table; its value is
//! the card's numeric value (0 for a face card) and nobody controls it.
//! A pile with two or more cards is a *build*: its value is the rank a card
//! must have to capture it, and its controller is whoever last built on it.
//!
//! A *compound* build was made by fusing several groups at once. Its value
//! is frozen: nothing can be added to it, it can only be captured.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{Card, PlayerId};

/// One pile on the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: SmallVec<[Card; 4]>,
    value: u8,
    compound: bool,
    controller: Option<PlayerId>,
}

impl Pile {
    /// A single card lying on the table.
    #[must_use]
    pub fn single(card: Card) -> Self {
        Self {
            cards: smallvec![card],
            value: card.value(),
            compound: false,
            controller: None,
        }
    }

    /// A build of two or more cards.
    ///
    /// Panics if fewer than two cards are given.
    pub fn build(
        cards: impl IntoIterator<Item = Card>,
        value: u8,
        controller: PlayerId,
        compound: bool,
    ) -> Self {
        let cards: SmallVec<[Card; 4]> = cards.into_iter().collect();
        assert!(cards.len() >= 2, "A build needs at least two cards");
        Self {
            cards,
            value,
            compound,
            controller: Some(controller),
        }
    }

    /// Cards in the order they were placed.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Numeric value: a single card's value, or a build's capture target.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Set once at creation; a compound build's value can never change.
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.compound
    }

    /// Player who last built on this pile. `None` for a single card.
    #[must_use]
    pub fn controller(&self) -> Option<PlayerId> {
        self.controller
    }

    #[must_use]
    pub fn is_build(&self) -> bool {
        self.cards.len() >= 2
    }

    /// Whether `player` controls this build.
    #[must_use]
    pub fn is_controlled_by(&self, player: PlayerId) -> bool {
        self.is_build() && self.controller == Some(player)
    }

    /// The lone card of a single-card pile.
    #[must_use]
    pub fn single_card(&self) -> Option<Card> {
        match self.cards.as_slice() {
            [card] => Some(*card),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false: piles are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn into_cards(self) -> SmallVec<[Card; 4]> {
        self.cards
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        match self.controller {
            Some(owner) if self.is_build() => {
                let kind = if self.compound { "compound build" } else { "build" };
                write!(f, "[{}] {} of {} ({})", cards, kind, self.value, owner)
            }
            _ => write!(f, "[{}]", cards),
        }
    }
}
