use crate::card::Card;
use std::fmt::Display;

/// An ordered sequence of cards belonging to exactly one player. Cards are
/// only ever appended; the score is always derived from the current contents.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand { cards: Vec::new() }
    }

    /// Method for appending a drawn card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns true if the hand is exactly two cards of identical rank,
    /// the precondition for splitting.
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Computes the blackjack score of the hand. Every ace starts at 11, then
    /// aces are reduced to 1 one at a time while the total exceeds 21. This
    /// yields the maximal legal score <= 21 when one exists. An empty hand
    /// scores 0.
    pub fn score(&self) -> u8 {
        let mut total: u32 = self.cards.iter().map(|c| c.value() as u32).sum();
        let mut aces = self.cards.iter().filter(|c| c.rank.is_ace()).count();
        while total > 21 && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        total as u8
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "[{}]", cards)
    }
}
