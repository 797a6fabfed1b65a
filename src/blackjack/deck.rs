use rand_core::{RngCore, SeedableRng, impls};

use super::card::{Card, Face, Suit};
use super::error::DealError;

pub const DECK_SIZE: usize = 52;

/// The generator behind the cut: the textbook ANSI C `rand()`.
///
/// Each output is 15 bits. The same cut digit always yields the same deck,
/// on any target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutRng {
    state: u32,
}

impl CutRng {
    const MULTIPLIER: u32 = 1_103_515_245;
    const INCREMENT: u32 = 12_345;

    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl RngCore for CutRng {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        (self.state >> 16) & 0x7fff
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for CutRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Takes the low 32 bits as the state, like `srand`.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

/// 52 cards and the index of the next one to deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    next: usize,
}

impl Deck {
    /// Canonical order: hearts, diamonds, clubs, spades, each ace to king.
    pub fn populated() -> Self {
        let mut cards = [Card::new(Face::Ace, Suit::Hearts); DECK_SIZE];
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            for (j, face) in Face::ALL.into_iter().enumerate() {
                cards[i * Face::ALL.len() + j] = Card::new(face, suit);
            }
        }
        Self { cards, next: 0 }
    }

    /// A fresh deck shuffled with the player's cut digit.
    pub fn cut(seed: u8) -> Self {
        let mut deck = Self::populated();
        deck.shuffle(seed);
        deck
    }

    pub fn shuffle(&mut self, seed: u8) {
        self.shuffle_with(&mut CutRng::seed_from_u64(seed.into()));
    }

    /// One swap pass: every slot trades places with a random slot. Rewinds
    /// the deal cursor.
    pub fn shuffle_with<R: RngCore>(&mut self, rng: &mut R) {
        for i in 0..DECK_SIZE {
            let j = rng.next_u32() as usize % DECK_SIZE;
            self.cards.swap(i, j);
        }
        self.next = 0;
    }

    pub fn deal(&mut self) -> Result<Card, DealError> {
        let card = *self.cards.get(self.next).ok_or(DealError::DeckExhausted)?;
        self.next += 1;
        Ok(card)
    }

    /// Starts dealing from the top again without reordering.
    pub fn rewind(&mut self) {
        self.next = 0;
    }

    pub fn dealt(&self) -> usize {
        self.next
    }

    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.next
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::populated()
    }
}
