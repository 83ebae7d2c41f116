pub mod player;
pub mod table;

use blackjack_core::card::Card;
use serde::Serialize;
use std::fmt::Display;

/// How a player's round ended relative to the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Bust,
    DealerBust,
    Win,
    Lose,
    Push,
}

impl Outcome {
    /// Resolves a player's final score against the dealer's. A busted player
    /// loses outright; otherwise a busted dealer loses to any standing score.
    pub fn resolve(player_score: u8, dealer_score: u8) -> Outcome {
        if player_score > 21 {
            Outcome::Bust
        } else if dealer_score > 21 {
            Outcome::DealerBust
        } else if player_score > dealer_score {
            Outcome::Win
        } else if player_score < dealer_score {
            Outcome::Lose
        } else {
            Outcome::Push
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = match self {
            Outcome::Bust => "Busts. Dealer Wins.",
            Outcome::DealerBust => "Wins! Dealer Busts.",
            Outcome::Win => "Wins.",
            Outcome::Lose => "Loses.",
            Outcome::Push => "Push (Tie).",
        };
        write!(f, "{}", line)
    }
}

/// One player's share of the round summary.
#[derive(Debug, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub cards: Vec<Card>,
    pub score: u8,
    pub bet: u32,
    pub outcome: Outcome,
}

/// Everything worth reporting once a round has resolved. Serialized to JSON
/// by the binary when requested.
#[derive(Debug, Serialize)]
pub struct RoundSummary {
    pub dealer_cards: Vec<Card>,
    pub dealer_score: u8,
    pub players: Vec<PlayerSummary>,
}
