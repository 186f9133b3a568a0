//! End-of-game scoring.
//!
//! | Category       | Points | Awarded for                          |
//! |----------------|--------|--------------------------------------|
//! | Cards          | 3      | more than half the deck (27+ cards)  |
//! | Spades         | 1      | 7 or more spades                     |
//! | Big cassino    | 2      | the ten of diamonds                  |
//! | Little cassino | 1      | the two of spades                    |
//! | Aces           | 1 each | every ace                            |
//!
//! The little cassino is a two, not an ace, so no card scores twice.
//! A player holding the whole deck scores 11.

use serde::{Deserialize, Serialize};

use crate::core::{Card, DECK_SIZE};

const MOST_CARDS: u32 = 3;
const MOST_SPADES: u32 = 1;
const BIG_CASSINO: u32 = 2;
const LITTLE_CASSINO: u32 = 1;
const ACE: u32 = 1;

/// Spades needed for the spade point.
pub const SPADES_NEEDED: usize = 7;

/// Points per category for one player's keep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub cards: u32,
    pub spades: u32,
    pub big_cassino: u32,
    pub little_cassino: u32,
    pub aces: u32,
}

impl ScoreBreakdown {
    /// Score a keep category by category.
    pub fn of(keep: impl IntoIterator<Item = Card>) -> Self {
        let mut count = 0;
        let mut spades = 0;
        let mut breakdown = Self::default();

        for card in keep {
            count += 1;
            if card.is_spade() {
                spades += 1;
            }
            if card.is_ace() {
                breakdown.aces += ACE;
            }
            if card == Card::BIG_CASSINO {
                breakdown.big_cassino = BIG_CASSINO;
            }
            if card == Card::LITTLE_CASSINO {
                breakdown.little_cassino = LITTLE_CASSINO;
            }
        }

        if count > DECK_SIZE / 2 {
            breakdown.cards = MOST_CARDS;
        }
        if spades >= SPADES_NEEDED {
            breakdown.spades = MOST_SPADES;
        }
        breakdown
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.cards + self.spades + self.big_cassino + self.little_cassino + self.aces
    }
}

/// Total points for one player's keep.
pub fn score(keep: impl IntoIterator<Item = Card>) -> u32 {
    ScoreBreakdown::of(keep).total()
}
