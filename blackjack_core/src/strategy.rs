use crate::action::Action;
use crate::hand::Hand;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Trait for anything that can recommend a play from the player's score and
/// hand. Two implementations exist: the static `BasicStrategy` table, which is
/// authoritative, and the estimated policy in the `adaptive` module, which is
/// kept as an extension seam for a learned recommender.
pub trait Recommender {
    fn recommend(&self, score: u8, hand: &Hand) -> Action;
}

/// A simplified basic strategy table keyed by score alone. The mapping is
/// built once at construction and never changes.
pub struct BasicStrategy {
    policy: HashMap<u8, Action>,
}

impl BasicStrategy {
    /// Lowest score two cards can make (2 + 2).
    const MIN_SCORE: u8 = 4;
    const MAX_SCORE: u8 = 21;

    /// Associated method for populating the score lookup table.
    ///
    /// The surrender rows are a known simplification: surrendering 16 is only
    /// correct when the dealer shows 9, 10 or an ace, and surrendering 15 only
    /// against a 10, but the table never inspects the dealer's up card. That
    /// behavior is preserved deliberately rather than silently corrected.
    fn build_lookup_table() -> HashMap<u8, Action> {
        let mut policy = HashMap::new();
        for score in Self::MIN_SCORE..=Self::MAX_SCORE {
            let action = match score {
                17..=21 => Action::Stand,
                4..=11 => Action::Hit,
                16 => Action::Surrender,
                15 => Action::Surrender,
                // 12 through 14.
                _ => Action::Hit,
            };
            policy.insert(score, action);
        }
        policy
    }

    /// Associated method for creating a new `BasicStrategy` struct.
    pub fn new() -> BasicStrategy {
        BasicStrategy {
            policy: BasicStrategy::build_lookup_table(),
        }
    }
}

impl Default for BasicStrategy {
    fn default() -> Self {
        BasicStrategy::new()
    }
}

impl Recommender for BasicStrategy {
    /// The pair check precedes the score lookup: any two card hand of
    /// identical ranks recommends `Split`. Scores outside the table's domain
    /// default to `Stand`.
    fn recommend(&self, score: u8, hand: &Hand) -> Action {
        if hand.is_pair() {
            return Action::Split;
        }
        self.policy.get(&score).copied().unwrap_or(Action::Stand)
    }
}

lazy_static! {
    /// Process-wide immutable policy instance. The table is pure and cheap,
    /// but there is no reason to rebuild it per decision.
    pub static ref BASIC_STRATEGY: BasicStrategy = BasicStrategy::new();
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
    fn stands_on_seventeen_or_more() {
        let strategy = BasicStrategy::new();
        let h = hand(&[(Rank::Ten, Suit::Clubs), (Rank::Eight, Suit::Diamonds)]);
        assert_eq!(strategy.recommend(18, &h), Action::Stand);
        for score in 17..=21 {
            let h = hand(&[
                (Rank::Ten, Suit::Clubs),
                (Rank::Five, Suit::Diamonds),
                (Rank::Two, Suit::Hearts),
            ]);
            assert_eq!(strategy.recommend(score, &h), Action::Stand);
        }
    }

    #[test]
    fn hits_eleven_or_less() {
        let strategy = BasicStrategy::new();
        let h = hand(&[(Rank::Four, Suit::Spades), (Rank::Five, Suit::Diamonds)]);
        assert_eq!(strategy.recommend(9, &h), Action::Hit);
        for score in 4..=11 {
            let h = hand(&[
                (Rank::Two, Suit::Clubs),
                (Rank::Three, Suit::Diamonds),
                (Rank::Four, Suit::Hearts),
            ]);
            assert_eq!(strategy.recommend(score, &h), Action::Hit);
        }
    }

    #[test]
    fn surrenders_fifteen_and_sixteen() {
        let strategy = BasicStrategy::new();
        let h = hand(&[(Rank::Nine, Suit::Clubs), (Rank::Seven, Suit::Diamonds)]);
        assert_eq!(strategy.recommend(16, &h), Action::Surrender);
        let h = hand(&[(Rank::Eight, Suit::Clubs), (Rank::Seven, Suit::Diamonds)]);
        assert_eq!(strategy.recommend(15, &h), Action::Surrender);
    }

    #[test]
    fn hits_twelve_through_fourteen() {
        let strategy = BasicStrategy::new();
        for score in 12..=14 {
            let h = hand(&[
                (Rank::Five, Suit::Clubs),
                (Rank::Four, Suit::Diamonds),
                (Rank::Three, Suit::Hearts),
            ]);
            assert_eq!(strategy.recommend(score, &h), Action::Hit);
        }
    }

    #[test]
    fn pair_check_precedes_score_lookup() {
        let strategy = BasicStrategy::new();
        // A score of 20 would stand, but the pair wins.
        let h = hand(&[(Rank::Ten, Suit::Clubs), (Rank::Ten, Suit::Diamonds)]);
        assert_eq!(strategy.recommend(20, &h), Action::Split);
        let h = hand(&[(Rank::Ace, Suit::Spades), (Rank::Ace, Suit::Hearts)]);
        assert_eq!(strategy.recommend(12, &h), Action::Split);
        // Same value, different rank: falls through to the table.
        let h = hand(&[(Rank::Ten, Suit::Clubs), (Rank::King, Suit::Diamonds)]);
        assert_eq!(strategy.recommend(20, &h), Action::Stand);
    }

    #[test]
    fn out_of_domain_scores_stand() {
        let strategy = BasicStrategy::new();
        let h = hand(&[
            (Rank::Ten, Suit::Clubs),
            (Rank::Six, Suit::Diamonds),
            (Rank::Six, Suit::Hearts),
        ]);
        assert_eq!(strategy.recommend(22, &h), Action::Stand);
        assert_eq!(strategy.recommend(0, &h), Action::Stand);
    }

    #[test]
    fn shared_instance_matches_a_fresh_table() {
        let strategy = BasicStrategy::new();
        for score in 4..=21 {
            let h = hand(&[
                (Rank::Two, Suit::Clubs),
                (Rank::Three, Suit::Diamonds),
                (Rank::Four, Suit::Hearts),
            ]);
            assert_eq!(
                strategy.recommend(score, &h),
                BASIC_STRATEGY.recommend(score, &h)
            );
        }
    }
}
