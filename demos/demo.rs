//! Walkthrough of the deck operations.
//!
//! Usage: `cargo run --example demo -- [--seed <u64>]`. Without a seed the deck
//! is seeded from OS entropy. Set `RUST_LOG=debug` to see the deck's trace
//! output.

use colordeck::{Card, Color, DeckOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Values run 10 down to 1 within each color, so the sort has work to do.
    let mut options = DeckOptions::default();
    if let Some(seed) = parse_seed() {
        options = options.with_seed(seed);
    }

    let mut deck = match options.build() {
        Ok(deck) => deck,
        Err(err) => {
            eprintln!("Deck error: {err}");
            return;
        }
    };

    print_sorted(&deck.sort_cards(&[Color::Yellow, Color::Green]));
    println!("===============");
    print_sorted(&deck.sort_cards(&[Color::Red, Color::Yellow, Color::Green]));

    deck.shuffle();

    match deck.play_game() {
        Ok(result) => println!(
            "Player 1 cards {}, player2 cards {}, winner {}",
            result.player1, result.player2, result.winner
        ),
        Err(err) => eprintln!("Game error: {err}"),
    }
}

fn parse_seed() -> Option<u64> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            return args.next().and_then(|value| value.parse().ok());
        }
    }
    None
}

fn print_sorted(sorted: &Result<Vec<Card>, colordeck::SortError>) {
    match sorted {
        Ok(cards) => {
            for card in cards {
                println!("{card}");
            }
        }
        Err(err) => eprintln!("Sort error: {err}"),
    }
}
