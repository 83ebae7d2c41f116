use blackjack_core::{BlackjackGameError, Card, Hand, Shoe};
use std::fmt::Display;

pub const DEALER_NAME: &str = "Dealer";

/// The dealer stops drawing once this score is reached.
pub const DEALER_STAND_SCORE: u8 = 17;

/// A seat at the table: a name, one owned hand, the derived score and a bet.
/// The bet is tracked but no money changes hands. The dealer is an ordinary
/// `Player` driven by a different `PlayPolicy`, not a subtype.
pub struct Player {
    name: String,
    hand: Hand,
    score: u8,
    bet: u32,
}

impl Player {
    /// Associated function for creating a new `Player` with an empty hand.
    pub fn new<S: Into<String>>(name: S) -> Player {
        Player {
            name: name.into(),
            hand: Hand::new(),
            score: 0,
            bet: 0,
        }
    }

    /// Associated function for creating the dealer's seat.
    pub fn dealer() -> Player {
        Player::new(DEALER_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn place_bet(&mut self, bet: u32) {
        self.bet = bet;
    }

    /// Method for receiving a drawn card; the score is recomputed from the
    /// hand on every addition.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
        self.score = self.hand.score();
    }

    pub fn busted(&self) -> bool {
        self.score > 21
    }

    /// Returns true if the hand may legally be split.
    pub fn can_split(&self) -> bool {
        self.hand.is_pair()
    }

    /// The one place the score diverges from the hand: surrendering forces it
    /// to 0 and ends the turn.
    pub fn surrender(&mut self) {
        self.score = 0;
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}'s Hand: {} - Score: {}", self.name, self.hand, self.score)
    }
}

/// How a seat plays out its turn once the cards are dealt. Selected per role:
/// players get the prompted policy in the table module, the dealer gets
/// `DealerPolicy`.
pub trait PlayPolicy {
    fn play(&mut self, seat: &mut Player, shoe: &mut Shoe) -> Result<(), BlackjackGameError>;
}

/// The house rule: draw until the score reaches 17.
pub struct DealerPolicy;

impl PlayPolicy for DealerPolicy {
    fn play(&mut self, seat: &mut Player, shoe: &mut Shoe) -> Result<(), BlackjackGameError> {
        while seat.score() < DEALER_STAND_SCORE {
            seat.receive_card(shoe.draw());
        }
        Ok(())
    }
}
