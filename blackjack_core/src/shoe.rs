use crate::card::{Card, Rank, Suit};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Number of decks a shoe holds unless told otherwise.
pub const DEFAULT_NUM_DECKS: usize = 6;

/// When fewer cards than this remain before a draw, the shoe is rebuilt and
/// reshuffled before the draw is served.
pub const REFILL_THRESHOLD: usize = 20;

/// A shuffled multi-deck card source. The shoe owns its rng so a seeded shoe
/// deals a reproducible sequence of cards.
pub struct Shoe {
    cards: Vec<Card>,
    num_decks: usize,
    rng: StdRng,
}

impl Shoe {
    /// Associated function for creating a freshly shuffled shoe of `num_decks`
    /// standard decks.
    pub fn new(num_decks: usize) -> Shoe {
        Shoe::with_rng(num_decks, StdRng::from_entropy())
    }

    /// Associated function for creating a shoe with a deterministic shuffle.
    pub fn with_seed(num_decks: usize, seed: u64) -> Shoe {
        Shoe::with_rng(num_decks, StdRng::seed_from_u64(seed))
    }

    fn with_rng(num_decks: usize, rng: StdRng) -> Shoe {
        let mut shoe = Shoe {
            cards: Shoe::build(num_decks),
            num_decks,
            rng,
        };
        shoe.shuffle();
        shoe
    }

    /// Builds `num_decks` standard 52 card decks in order.
    fn build(num_decks: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(num_decks * 52);
        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards
    }

    /// Randomizes the order of the remaining cards in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card. If fewer than `REFILL_THRESHOLD`
    /// cards remain the shoe is first rebuilt and reshuffled, so this never
    /// observes an empty shoe.
    pub fn draw(&mut self) -> Card {
        if self.cards.len() < REFILL_THRESHOLD {
            self.cards = Shoe::build(self.num_decks);
            self.shuffle();
        }
        self.cards.pop().expect("refilled shoe cannot be empty")
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Shoe::new(DEFAULT_NUM_DECKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn card_counts(cards: &[Card]) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn fresh_shoe_holds_six_full_decks() {
        let shoe = Shoe::with_seed(6, 42);
        assert_eq!(shoe.len(), 312);
        let counts = card_counts(&shoe.cards);
        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|&n| n == 6));
    }

    #[test]
    fn shuffle_preserves_the_multiset_of_cards() {
        let mut shoe = Shoe::with_seed(6, 7);
        let before = card_counts(&shoe.cards);
        shoe.shuffle();
        let after = card_counts(&shoe.cards);
        assert_eq!(before, after);
    }

    #[test]
    fn draw_refills_below_threshold() {
        let mut shoe = Shoe::with_seed(6, 1);
        // Draw down to 19 cards; the pre-draw length never goes below the
        // threshold on the way there.
        for _ in 0..293 {
            shoe.draw();
        }
        assert_eq!(shoe.len(), 19);
        // The next draw sees 19 < 20, rebuilds 312 cards and pops one.
        shoe.draw();
        assert_eq!(shoe.len(), 311);
    }

    #[test]
    fn seeded_shoes_deal_identical_sequences() {
        let mut a = Shoe::with_seed(6, 99);
        let mut b = Shoe::with_seed(6, 99);
        for _ in 0..50 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
