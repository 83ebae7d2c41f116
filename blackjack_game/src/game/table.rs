use crate::game::player::{DealerPolicy, PlayPolicy, Player};
use crate::game::{Outcome, PlayerSummary, RoundSummary};
use blackjack_core::shoe::DEFAULT_NUM_DECKS;
use blackjack_core::{Action, Advisor, BlackjackGameError, Card, Shoe};
use std::io::{BufRead, Write};

/// The prompted play policy: prints the decision context and one
/// recommendation, then loops reading actions until the score reaches 21 or a
/// terminal action is chosen. Generic over the line source and sink so the
/// loop can be driven by a script in tests.
pub struct PromptPolicy<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    advisor: &'a Advisor,
    up_card: Card,
}

impl<'a, R: BufRead, W: Write> PromptPolicy<'a, R, W> {
    pub fn new(
        input: &'a mut R,
        output: &'a mut W,
        advisor: &'a Advisor,
        up_card: Card,
    ) -> PromptPolicy<'a, R, W> {
        PromptPolicy {
            input,
            output,
            advisor,
            up_card,
        }
    }
}

impl<'a, R: BufRead, W: Write> PlayPolicy for PromptPolicy<'a, R, W> {
    fn play(&mut self, seat: &mut Player, shoe: &mut Shoe) -> Result<(), BlackjackGameError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", seat)?;
        writeln!(self.output, "Dealer's Visible Card: {}", self.up_card)?;

        let recommended = self.advisor.recommend(seat.score(), seat.hand());
        writeln!(self.output, "Recommended Action: {}", recommended)?;

        while seat.score() < 21 {
            write!(
                self.output,
                "{}, choose an action (Hit, Stand, Double Down, Split, Surrender): ",
                seat.name()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // Input closed; default to a stand rather than block forever.
                writeln!(self.output, "{} Stands at {}.", seat.name(), seat.score())?;
                break;
            }
            let line = line.trim_end_matches('\n').trim_end_matches('\r');

            let action = match line.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            match action {
                Action::Hit => {
                    seat.receive_card(shoe.draw());
                    writeln!(self.output, "{}", seat)?;
                }
                Action::Stand => {
                    writeln!(self.output, "{} Stands at {}.", seat.name(), seat.score())?;
                    break;
                }
                Action::DoubleDown => {
                    seat.receive_card(shoe.draw());
                    writeln!(self.output, "{}", seat)?;
                    writeln!(
                        self.output,
                        "{} Doubles Down. Final Score: {}",
                        seat.name(),
                        seat.score()
                    )?;
                    break;
                }
                Action::Split => {
                    // Pre-check only; the reference acknowledges the split
                    // without actually playing two hands, and a rejected
                    // split leaves the hand untouched and re-prompts.
                    if seat.can_split() {
                        writeln!(self.output, "{} Splits the hand.", seat.name())?;
                    } else {
                        writeln!(self.output, "{}", BlackjackGameError::IllegalSplit)?;
                    }
                }
                Action::Surrender => {
                    writeln!(
                        self.output,
                        "{} Surrenders. You lose half your bet.",
                        seat.name()
                    )?;
                    seat.surrender();
                    break;
                }
            }
        }

        Ok(())
    }
}

/// The round controller: owns the shoe, the seats and the advisor, and drives
/// dealing, turn order and resolution for a single round.
pub struct GameTable {
    shoe: Shoe,
    players: Vec<Player>,
    dealer: Player,
    advisor: Advisor,
}

impl GameTable {
    /// Associated function for creating a table with one seat per name.
    pub fn new(names: Vec<String>) -> GameTable {
        GameTable::from_shoe(names, Shoe::new(DEFAULT_NUM_DECKS))
    }

    /// Associated function for creating a table whose shoe deals a
    /// reproducible sequence.
    pub fn with_seed(names: Vec<String>, seed: u64) -> GameTable {
        GameTable::from_shoe(names, Shoe::with_seed(DEFAULT_NUM_DECKS, seed))
    }

    fn from_shoe(names: Vec<String>, shoe: Shoe) -> GameTable {
        GameTable {
            shoe,
            players: names.into_iter().map(Player::new).collect(),
            dealer: Player::dealer(),
            advisor: Advisor::new(),
        }
    }

    /// Deals two cards to each player, then two to the dealer.
    fn deal(&mut self) {
        for player in self.players.iter_mut() {
            player.receive_card(self.shoe.draw());
            player.receive_card(self.shoe.draw());
        }
        self.dealer.receive_card(self.shoe.draw());
        self.dealer.receive_card(self.shoe.draw());
    }

    /// Plays one full round over the given console: deal, every player's
    /// prompted turn, the dealer's auto-play, then resolution. Returns the
    /// round summary for reporting.
    pub fn play_round<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<RoundSummary, BlackjackGameError> {
        self.deal();

        // Only the dealer's first card is visible during player turns.
        let up_card = self.dealer.hand().cards()[0];
        for player in self.players.iter_mut() {
            let mut policy = PromptPolicy::new(&mut *input, &mut *output, &self.advisor, up_card);
            policy.play(player, &mut self.shoe)?;
        }

        DealerPolicy.play(&mut self.dealer, &mut self.shoe)?;
        writeln!(output)?;
        writeln!(output, "{}", self.dealer)?;

        writeln!(output)?;
        writeln!(output, "=== Result ===")?;
        let mut summaries = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let outcome = Outcome::resolve(player.score(), self.dealer.score());
            writeln!(output, "{} {}", player.name(), outcome)?;
            summaries.push(PlayerSummary {
                name: player.name().to_string(),
                cards: player.hand().cards().to_vec(),
                score: player.score(),
                bet: player.bet(),
                outcome,
            });
        }

        Ok(RoundSummary {
            dealer_cards: self.dealer.hand().cards().to_vec(),
            dealer_score: self.dealer.score(),
            players: summaries,
        })
    }
}
