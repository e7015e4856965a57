use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

pub const DECK_SIZE: usize = 52;

/// The 52 distinct cards plus a cursor marking the next undealt position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    position: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new_ordered()
    }
}

impl Deck {
    /// Canonical suit-major, rank-minor order with the cursor at zero.
    pub fn new_ordered() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    /// Fresh ordered deck shuffled once with `rng`.
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new_ordered();
        deck.shuffle(rng);
        deck
    }

    /// Fisher-Yates: walk from the last index down to 1, swapping each slot
    /// with a uniformly chosen index in `[0, i]`. Resets the cursor.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        let c = *self
            .cards
            .get(self.position)
            .ok_or(GameError::DeckExhausted)?;
        self.position += 1;
        Ok(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use rand::SeedableRng;

    #[test]
    fn ordered_deck_starts_with_two_of_hearts_and_ends_with_ace_of_spades() {
        let deck = Deck::new_ordered();
        assert_eq!(deck.cards()[0], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(deck.cards()[12], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(deck.cards()[13], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(deck.position(), 0);
    }

    #[test]
    fn shuffle_rewinds_the_cursor() {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(3);
        let mut deck = Deck::new_ordered();
        deck.deal_card().unwrap();
        deck.shuffle(&mut rng);
        assert_eq!(deck.position(), 0);
        assert_eq!(deck.remaining(), DECK_SIZE);
    }
}
