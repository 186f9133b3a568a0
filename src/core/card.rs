//! Playing card identity.
//!
//! A `Card` is one of the 52 cards of a standard deck, encoded as an index
//! ordered first by rank and then by suit (clubs, diamonds, hearts, spades):
//! the ace of clubs is 0 and the king of spades is 51.
//!
//! ```
//! use cassino::core::Card;
//!
//! let ace_of_spades = Card::new(3);
//! assert_eq!(ace_of_spades.rank(), 1);
//! assert!(ace_of_spades.is_ace());
//! assert!(ace_of_spades.is_spade());
//!
//! let jack = Card::new(40);
//! assert!(jack.is_face());
//! assert_eq!(jack.value(), 0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::DECK_SIZE;

/// Card suit, in deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// One of the 52 cards of a standard deck.
///
/// Serialized as its deck index; out-of-range indices fail to deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

/// A deck index that names no card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("card index {0} is not below 52")]
pub struct InvalidCardIndex(pub u8);

impl TryFrom<u8> for Card {
    type Error = InvalidCardIndex;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Card::try_new(index).ok_or(InvalidCardIndex(index))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl Card {
    /// The two of spades, worth one point.
    pub const LITTLE_CASSINO: Card = Card(7);

    /// The ten of diamonds, worth two points.
    pub const BIG_CASSINO: Card = Card(37);

    /// Create a card from its deck index.
    ///
    /// Panics if `index` is not below 52.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < DECK_SIZE, "Card index must be below 52");
        Self(index)
    }

    /// Create a card from its deck index, or `None` if out of range.
    #[must_use]
    pub const fn try_new(index: u8) -> Option<Self> {
        if (index as usize) < DECK_SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw deck index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Rank from 1 (ace) to 13 (king).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 4 + 1
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        match self.0 % 4 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Jacks, queens and kings have no numeric capture value.
    #[must_use]
    pub const fn is_face(self) -> bool {
        self.rank() > 10
    }

    /// Numeric capture value: the rank for ace through ten, 0 for face cards.
    #[must_use]
    pub const fn value(self) -> u8 {
        if self.is_face() {
            0
        } else {
            self.rank()
        }
    }

    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.0 < 4
    }

    #[must_use]
    pub const fn is_spade(self) -> bool {
        self.0 % 4 == 3
    }

    /// Iterate over the full deck in index order.
    pub fn deck() -> impl DoubleEndedIterator<Item = Card> {
        (0..DECK_SIZE as u8).map(Card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank() {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        };
        write!(f, "{}{}", rank, self.suit().symbol())
    }
}
