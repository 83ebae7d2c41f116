use crate::action::{Action, ACTIONS};
use crate::adaptive::AdaptiveStrategy;
use crate::hand::Hand;
use crate::strategy::{BasicStrategy, Recommender, BASIC_STRATEGY};

/// The single recommendation entry point consumed by the turn loop.
///
/// Delegates entirely to the shared `BasicStrategy`; the adaptive recommender
/// is constructed and carried for future composition with a learned policy,
/// but it is not consulted when recommending.
pub struct Advisor {
    policy: &'static BasicStrategy,
    adaptive: AdaptiveStrategy,
}

impl Advisor {
    /// Associated function for creating a new `Advisor` backed by the shared
    /// policy table.
    pub fn new() -> Advisor {
        Advisor {
            policy: &BASIC_STRATEGY,
            adaptive: AdaptiveStrategy::new(ACTIONS.len()),
        }
    }

    /// Recommends an action for the given score and hand.
    pub fn recommend(&self, score: u8, hand: &Hand) -> Action {
        self.policy.recommend(score, hand)
    }

    /// Access to the estimated-policy seam.
    pub fn adaptive(&mut self) -> &mut AdaptiveStrategy {
        &mut self.adaptive
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Advisor::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn hand(cards: &[(Rank, Suit)]) -> Hand {
        let mut hand = Hand::new();
        for (rank, suit) in cards {
            hand.push(Card::new(*rank, *suit));
        }
        hand
    }

    #[test]
    fn advisor_delegates_to_the_policy_table() {
        let advisor = Advisor::new();
        let h = hand(&[(Rank::Ten, Suit::Clubs), (Rank::Eight, Suit::Diamonds)]);
        assert_eq!(advisor.recommend(18, &h), Action::Stand);
        let h = hand(&[(Rank::Nine, Suit::Clubs), (Rank::Seven, Suit::Diamonds)]);
        assert_eq!(advisor.recommend(16, &h), Action::Surrender);
        let h = hand(&[(Rank::Ten, Suit::Clubs), (Rank::Ten, Suit::Diamonds)]);
        assert_eq!(advisor.recommend(20, &h), Action::Split);
    }

    #[test]
    fn adaptive_seam_covers_the_same_action_space() {
        let mut advisor = Advisor::new();
        assert_eq!(advisor.adaptive().action_size(), ACTIONS.len());
        let index = advisor.adaptive().recommend(16);
        assert!(Action::from_index(index).is_some());
    }
}
