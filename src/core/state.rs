//! Game state: table, hands, keeps, and the undealt deck.
//!
//! ## GameState
//!
//! The single exclusively-owned state object of a match. The validator
//! reads it and the executor mutates it; nothing else writes to it.
//!
//! ## Hand / Keep
//!
//! - `Hand`: the up-to-four cards a player currently holds.
//! - `Keep`: every card a player has captured, append-only. Backed by an
//!   `im::Vector` so cloning a state for search stays cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::config::{HAND_SIZE, TABLE_DEAL};
use super::player::{PlayerId, PlayerMap};
use crate::table::{Pile, Table};

/// Cards held by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; HAND_SIZE]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove a card. Returns false if it was not held.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Cards captured by one player, in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keep {
    cards: Vector<Card>,
}

impl Keep {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.cards.push_back(card);
        }
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.iter().any(|&c| c == card)
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }
}

impl FromIterator<Card> for Keep {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Piles in play.
    pub table: Table,

    /// Cards held, per player.
    pub hands: PlayerMap<Hand>,

    /// Cards captured, per player.
    pub keeps: PlayerMap<Keep>,

    /// Undealt cards, next card first.
    pub deck: Vec<Card>,

    /// Most recent player to capture; claims the table at the end.
    pub last_capturer: Option<PlayerId>,
}

impl GameState {
    /// Create a state with `deck` undealt and an empty table.
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            table: Table::new(),
            hands: PlayerMap::with_default(),
            keeps: PlayerMap::with_default(),
            deck,
            last_capturer: None,
        }
    }

    /// Take up to `count` cards off the top of the deck.
    fn draw(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.deck.len());
        self.deck.drain(..count).collect()
    }

    /// Lay the opening cards face up, one pile each.
    pub fn deal_table(&mut self) {
        for card in self.draw(TABLE_DEAL) {
            self.table.insert(Pile::single(card));
        }
    }

    /// Deal a hand to each player in seat order. Returns what each received.
    pub fn deal_hands(&mut self) -> PlayerMap<Vec<Card>> {
        let mut dealt: PlayerMap<Vec<Card>> = PlayerMap::with_default();
        for player in PlayerId::all() {
            let cards = self.draw(HAND_SIZE);
            self.hands[player].extend(cards.iter().copied());
            dealt[player] = cards;
        }
        dealt
    }

    /// Whether both players have played out their hands.
    #[must_use]
    pub fn hands_empty(&self) -> bool {
        self.hands.values().all(Hand::is_empty)
    }

    /// Cards across deck, hands, keeps and table. Always 52 between turns.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hands.values().map(Hand::len).sum::<usize>()
            + self.keeps.values().map(Keep::len).sum::<usize>()
            + self.table.card_count()
    }
}
