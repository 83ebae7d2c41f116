use crate::BlackjackGameError;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// The closed set of plays a player can make. Replaces the free text action
/// strings at the input boundary; unrecognized text becomes an
/// `InvalidActionInput` error rather than a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    Hit,
    Stand,
    DoubleDown,
    Split,
    Surrender,
}

/// The fixed ordered action space, indexed by the adaptive recommender.
pub const ACTIONS: [Action; 5] = [
    Action::Hit,
    Action::Stand,
    Action::DoubleDown,
    Action::Split,
    Action::Surrender,
];

impl Action {
    /// Position of the action in the fixed action space.
    pub fn index(self) -> usize {
        match self {
            Action::Hit => 0,
            Action::Stand => 1,
            Action::DoubleDown => 2,
            Action::Split => 3,
            Action::Surrender => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Action> {
        ACTIONS.get(index).copied()
    }

    /// Returns true if the action ends the player's turn regardless of score.
    pub fn is_terminal(self) -> bool {
        matches!(self, Action::Stand | Action::DoubleDown | Action::Surrender)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Hit => "Hit",
            Action::Stand => "Stand",
            Action::DoubleDown => "Double Down",
            Action::Split => "Split",
            Action::Surrender => "Surrender",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Action {
    type Err = BlackjackGameError;

    /// Exact, case sensitive match against the canonical action names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hit" => Ok(Action::Hit),
            "Stand" => Ok(Action::Stand),
            "Double Down" => Ok(Action::DoubleDown),
            "Split" => Ok(Action::Split),
            "Surrender" => Ok(Action::Surrender),
            _ => Err(BlackjackGameError::InvalidActionInput(s.to_string())),
        }
    }
}
