use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::DeckError;

pub const CARDS_PER_HAND: usize = 5;
/// Largest table a single 52-card deck can serve.
pub const MAX_HANDS: usize = 52 / CARDS_PER_HAND;

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Deals `count` five-card hands round-robin: the k-th card dealt goes
    /// to hand `k % count`.
    pub fn deal_hands(&mut self, count: usize) -> Result<Vec<[Card; 5]>, DeckError> {
        if count == 0 || count > MAX_HANDS {
            return Err(DeckError::InvalidHandCount {
                requested: count,
                max: MAX_HANDS,
            });
        }
        if self.remaining() < count * CARDS_PER_HAND {
            return Err(DeckError::Exhausted {
                dealt: self.position,
            });
        }
        let mut seats: Vec<Vec<Card>> = vec![Vec::with_capacity(CARDS_PER_HAND); count];
        for k in 0..count * CARDS_PER_HAND {
            let c = self.deal_card().ok_or(DeckError::Exhausted {
                dealt: self.position,
            })?;
            seats[k % count].push(c);
        }
        seats
            .into_iter()
            .map(|s| {
                <[Card; 5]>::try_from(s).map_err(|_| DeckError::Exhausted {
                    dealt: self.position,
                })
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    /// Current deck order, dealt cards included.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
