use blackjack_game::game::table::GameTable;
use clap::Parser;

/// Plays one interactive round of multi-player blackjack, printing a
/// recommended action for every player before they act.
#[derive(Parser)]
#[command(name = "blackjack_game")]
struct Cli {
    /// Number of player seats at the table.
    #[arg(short, long, default_value_t = 3)]
    players: usize,

    /// Seed for the shoe shuffle; a random shuffle when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the round summary as JSON after the results.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let names = (1..=cli.players)
        .map(|i| format!("Player {}", i))
        .collect::<Vec<String>>();
    let mut table = match cli.seed {
        Some(seed) => GameTable::with_seed(names, seed),
        None => GameTable::new(names),
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let summary = match table.play_round(&mut input, &mut output) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
