//! Deterministic deck shuffling.
//!
//! The same seed always produces the same deal, which makes games
//! reproducible for tests and replays.
//!
//! ```
//! use cassino::core::GameRng;
//!
//! let deck1 = GameRng::new(42).shuffled_deck();
//! let deck2 = GameRng::new(42).shuffled_deck();
//! assert_eq!(deck1, deck2);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::card::Card;

/// Deterministic RNG for dealing.
///
/// Uses ChaCha8 for speed while keeping the sequence stable across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// A full 52-card deck in shuffled order.
    #[must_use]
    pub fn shuffled_deck(&mut self) -> Vec<Card> {
        let mut deck: Vec<Card> = Card::deck().collect();
        self.shuffle(&mut deck);
        deck
    }
}
