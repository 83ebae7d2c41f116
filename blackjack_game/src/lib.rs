pub mod game;

pub mod prelude {
    pub use super::game::{
        player::{DealerPolicy, PlayPolicy, Player, DEALER_STAND_SCORE},
        table::{GameTable, PromptPolicy},
        Outcome, PlayerSummary, RoundSummary,
    };
    pub use blackjack_core::prelude::*;
}

pub use prelude::*;
