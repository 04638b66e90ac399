use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Source of randomness for building decks.
///
/// Implementations must leave `cards` a permutation of its input.
pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// ChaCha20-backed shuffler; the same seed always yields the same sequence of decks.
#[derive(Debug, Clone)]
pub struct SeededShuffler {
    rng: ChaCha20Rng,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Stacks the next cards to be dealt for scripted hands.
///
/// Each queued entry applies to one deck: its cards are dealt first, in
/// order, and the remainder of the deck follows in its unshuffled order.
/// Once the queue is empty decks come out unshuffled.
#[derive(Debug, Clone, Default)]
pub struct PresetShuffler {
    queued: VecDeque<Vec<Card>>,
}

impl PresetShuffler {
    pub fn new<I>(decks: I) -> Self
    where
        I: IntoIterator<Item = Vec<Card>>,
    {
        Self {
            queued: decks.into_iter().collect(),
        }
    }

    pub fn push(&mut self, top: Vec<Card>) {
        self.queued.push_back(top);
    }
}

impl Shuffler for PresetShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        let Some(top) = self.queued.pop_front() else {
            return;
        };
        // Dealing pops from the back, so the first stacked card goes last.
        let mut back = cards.len();
        for card in top {
            if back == 0 {
                break;
            }
            if let Some(pos) = cards[..back].iter().position(|c| *c == card) {
                back -= 1;
                cards.swap(pos, back);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds all 52 cards and lets `shuffler` order them.
    pub fn new<S: Shuffler + ?Sized>(shuffler: &mut S) -> Self {
        let mut cards = full_deck();
        shuffler.shuffle(&mut cards);
        Self { cards }
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
