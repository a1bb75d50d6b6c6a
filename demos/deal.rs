//! Deals a round of Uno hands and prints their scores.
//!
//! Usage: `cargo run --example deal -- [hands] [seed]`

use core::str::FromStr;
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use unodeck::{Card, Hand, create_deck_seeded, deal_hands};

fn parse_arg<T: FromStr>(value: Option<String>, name: &str, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Ignoring invalid {name} {raw:?}.");
            default
        }),
    }
}

fn format_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    cards
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_hand(index: usize, hand: &Hand, top: Option<&Card>) {
    println!(
        "Hand {index:>2}: [{}] ({} cards, {} points)",
        format_cards(hand.cards()),
        hand.len(),
        hand.score()
    );
    if let Some(top) = top {
        println!("         playable: [{}]", format_cards(hand.playable_on(top)));
    }
}

fn main() {
    let mut args = env::args().skip(1);
    let num_hands: usize = parse_arg(args.next(), "hand count", 4);
    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let seed: u64 = parse_arg(args.next(), "seed", clock_seed);

    let mut deck = create_deck_seeded(seed);
    println!("Seed {seed}: dealing {num_hands} hands from {} cards", deck.len());

    let hands = deal_hands(&mut deck, num_hands);
    let top = deck.draw();
    match &top {
        Some(card) => println!("Top of discard pile: {card} ({card:?})"),
        None => println!("Deck exhausted, no discard pile."),
    }

    for (index, hand) in hands.iter().enumerate() {
        print_hand(index, hand, top.as_ref());
    }

    println!("{} cards left in the deck", deck.len());
}
