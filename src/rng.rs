//! Randomness sources used to shuffle the deck.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// A capability that permutes a slice of cards.
///
/// Implementations must produce a uniformly random permutation. The deck never
/// inspects how the permutation was chosen, which lets tests substitute a
/// fixed ordering.
pub trait RandomSource {
    /// Shuffles the cards in place.
    fn shuffle(&mut self, cards: &mut [Card]);
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn shuffle(&mut self, cards: &mut [Card]) {
        (**self).shuffle(cards);
    }
}

/// Seeded `ChaCha8` generator shuffling with Fisher-Yates.
///
/// The same seed always yields the same sequence of decks.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    /// Creates a generator from a 64-bit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRng {
    fn shuffle(&mut self, cards: &mut [Card]) {
        // `SliceRandom::shuffle` walks from the last index down, swapping with
        // a uniform index in `0..=i`.
        cards.shuffle(&mut self.inner);
    }
}

/// Leaves the cards in the order they were given.
///
/// Useful for replays and for tests that stack the deck.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShuffle;

impl RandomSource for NoShuffle {
    fn shuffle(&mut self, _cards: &mut [Card]) {}
}
