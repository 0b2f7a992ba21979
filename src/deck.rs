//! A single 52-card deck that refills itself when exhausted.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::rng::{RandomSource, SeededRng};

/// Returns the 52 cards in canonical order: every rank of Clubs, then
/// Diamonds, Hearts and Spades, ranks running Two through Ace.
#[must_use]
pub fn canonical_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// The pool of cards available to deal from.
///
/// Cards are dealt from the back. When the deck runs dry it is repopulated
/// with a fresh shuffled set, so dealing never fails.
#[derive(Debug, Clone)]
pub struct Deck<R = SeededRng> {
    cards: Vec<Card>,
    rng: R,
}

impl Deck<SeededRng> {
    /// Creates a full, shuffled deck driven by a seeded generator.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededRng::new(seed))
    }
}

impl<R: RandomSource> Deck<R> {
    /// Creates a full deck shuffled with the given source.
    #[must_use]
    pub fn new(rng: R) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            rng,
        };
        deck.populate();
        deck
    }

    /// Creates a deck holding exactly `cards`, dealt from the back.
    ///
    /// The cards are not shuffled. Once they run out the deck refills with a
    /// regular 52-card set shuffled by `rng`.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>, rng: R) -> Self {
        Self { cards, rng }
    }

    /// Resets to the canonical 52 cards and shuffles them.
    pub fn populate(&mut self) {
        self.cards = canonical_cards();
        self.shuffle();
    }

    /// Shuffles the remaining cards.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
    }

    /// Removes and returns the top card, repopulating first if empty.
    pub fn deal(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.populate();
        }
    }

    /// Replaces the remaining cards so that `draws[0]` is dealt next.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards = draws.iter().rev().copied().collect();
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left before a refill.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the next deal will trigger a refill.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
