pub mod action;
pub mod adaptive;
pub mod advisor;
pub mod card;
pub mod hand;
pub mod shoe;
pub mod strategy;

use std::error::Error;
use std::fmt::Display;

pub mod prelude {
    pub use super::{
        action::{Action, ACTIONS},
        adaptive::AdaptiveStrategy,
        advisor::Advisor,
        card::{Card, Rank, Suit},
        hand::Hand,
        shoe::Shoe,
        strategy::{BasicStrategy, Recommender, BASIC_STRATEGY},
        BlackjackGameError,
    };
}

pub use prelude::*;

/// The errors a game of blackjack can surface. Bad player input is handled by
/// re-prompting, never by crashing, so the first two variants carry the message
/// shown to the player.
#[derive(Debug)]
pub enum BlackjackGameError {
    /// The input line did not match any recognized action name.
    InvalidActionInput(String),
    /// Split was requested without a two card hand of matching ranks.
    IllegalSplit,
    /// Reading from or writing to the console failed.
    Io(std::io::Error),
}

impl Display for BlackjackGameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlackjackGameError::InvalidActionInput(s) => {
                write!(f, "{:?} is not a recognized action", s)
            }
            BlackjackGameError::IllegalSplit => {
                write!(f, "Split not allowed. Choose another action.")
            }
            BlackjackGameError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl Error for BlackjackGameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BlackjackGameError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BlackjackGameError {
    fn from(e: std::io::Error) -> Self {
        BlackjackGameError::Io(e)
    }
}
