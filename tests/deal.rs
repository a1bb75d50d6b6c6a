//! Deck building, dealing and scoring integration tests.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use unodeck::{
    Card, Color, DECK_SIZE, DealOptions, Deck, Hand, Rank, create_deck, create_deck_seeded,
    create_deck_with_rng, deal_hands, deal_hands_with, hand_score, unshuffled_deck,
};

fn card(code: &str) -> Card {
    code.parse().unwrap()
}

fn counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

#[test]
fn deck_composition() {
    let deck = create_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.iter().filter(|card| card.color.is_wild()).count(), 8);

    let counts = counts(&deck);
    for color in Color::PLAY {
        assert_eq!(counts[&Card::new(color, Rank::Zero)], 1);
        for rank in Rank::COLORED {
            assert_eq!(counts[&Card::new(color, rank)], 2);
        }
    }
    for rank in Rank::WILD {
        assert_eq!(counts[&Card::new(Color::Wild, rank)], 4);
    }
    assert_eq!(counts.len(), 4 * 13 + 2);
}

#[test]
fn shuffled_deck_matches_unshuffled_multiset() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let deck = create_deck_with_rng(&mut rng);
    assert_eq!(counts(&deck), counts(&unshuffled_deck()));
}

#[test]
fn shuffle_changes_order() {
    assert_ne!(create_deck(), create_deck());
    assert_ne!(create_deck_seeded(1), create_deck_seeded(2));
    assert_ne!(create_deck_seeded(1), unshuffled_deck());
}

#[test]
fn seeded_deck_is_reproducible() {
    assert_eq!(create_deck_seeded(99), create_deck_seeded(99));
}

#[test]
fn deal_two_hands() {
    let mut deck = create_deck();
    let hands = deal_hands(&mut deck, 2);
    assert_eq!(hands.len(), 2);
    assert_eq!(hands[0].len(), 7);
    assert_eq!(hands[1].len(), 7);
    assert_eq!(deck.len(), 94);
}

#[test]
fn deal_sixteen_hands_after_two_exhausts_deck() {
    let mut deck = create_deck();
    let first = deal_hands(&mut deck, 2);
    assert_eq!(deck.len(), 94);

    let hands = deal_hands(&mut deck, 16);
    assert_eq!(hands.len(), 16);
    for hand in &hands[..14] {
        assert_eq!(hand.len(), 6);
    }
    for hand in &hands[14..] {
        assert_eq!(hand.len(), 5);
    }
    assert!(deck.is_empty());

    let dealt: usize = first.iter().chain(&hands).map(Hand::len).sum();
    assert_eq!(dealt, DECK_SIZE);
}

#[test]
fn deal_sixteen_hands_from_full_deck() {
    let mut deck = create_deck();
    let hands = deal_hands(&mut deck, 16);
    for hand in &hands[..12] {
        assert_eq!(hand.len(), 7);
    }
    for hand in &hands[12..] {
        assert_eq!(hand.len(), 6);
    }
    assert!(deck.is_empty());
}

#[test]
fn deal_zero_hands_leaves_deck_untouched() {
    let mut deck = create_deck_seeded(5);
    let before = deck.clone();
    let hands = deal_hands(&mut deck, 0);
    assert!(hands.is_empty());
    assert_eq!(deck, before);
}

#[test]
fn dealt_cards_are_conserved() {
    for num_hands in 0..=40 {
        let original = create_deck_seeded(num_hands as u64);
        let mut deck = original.clone();
        let hands = deal_hands(&mut deck, num_hands);

        let dealt: usize = hands.iter().map(Hand::len).sum();
        assert_eq!(dealt + deck.len(), DECK_SIZE, "num_hands = {num_hands}");
        assert!(hands.iter().all(|hand| hand.len() <= 7));

        let mut seen: Vec<&Card> = hands.iter().flat_map(Hand::cards).collect();
        seen.extend(deck.iter());
        assert_eq!(counts(seen), counts(&original), "num_hands = {num_hands}");
    }
}

#[test]
fn deal_takes_cards_from_front_round_robin() {
    let original = create_deck_seeded(8);
    let order: Vec<Card> = original.iter().copied().collect();
    let mut deck = original;

    let hands = deal_hands(&mut deck, 3);

    for (slot, hand) in hands.iter().enumerate() {
        let expected: Vec<Card> = (0..7).map(|round| order[round * 3 + slot]).collect();
        assert_eq!(hand.cards(), expected.as_slice());
    }
    assert_eq!(deck.into_vec(), order[21..].to_vec());
}

#[test]
fn custom_hand_size() {
    let mut deck = create_deck_seeded(3);
    let options = DealOptions::default().with_hand_size(10);
    let hands = deal_hands_with(&mut deck, 4, &options);
    assert!(hands.iter().all(|hand| hand.len() == 10));
    assert_eq!(deck.len(), DECK_SIZE - 40);
}

#[test]
fn short_deck_favors_earlier_slots() {
    let mut deck: Deck = ["R1", "R2", "R3", "R4", "R5"].iter().map(|c| card(c)).collect();
    let hands = deal_hands(&mut deck, 3);
    let sizes: Vec<usize> = hands.iter().map(Hand::len).collect();
    assert_eq!(sizes, [2, 2, 1]);
    assert!(deck.is_empty());
}

#[test]
fn hand_scores() {
    let hand: Hand = ["R5", "BS", "KW"].iter().map(|c| card(c)).collect();
    assert_eq!(hand.score(), 75);
    assert_eq!(hand_score(hand.cards()), 75);

    let hand: Vec<Card> = ["R0", "Y9", "GD"].iter().map(|c| card(c)).collect();
    assert_eq!(hand_score(&hand), 29);

    assert_eq!(hand_score(&[]), 0);
    assert_eq!(Hand::new().score(), 0);
}

#[test]
fn playable_cards_in_hand() {
    let hand = Hand::from(vec![card("R5"), card("B7"), card("KF"), card("G5"), card("YS")]);
    let top = card("R9");
    let playable: Vec<Card> = hand.playable_on(&top).copied().collect();
    assert_eq!(playable, [card("R5"), card("KF")]);

    let top = card("KW");
    assert_eq!(hand.playable_on(&top).count(), hand.len());
}

#[test]
fn deck_draw_and_push() {
    let mut deck = Deck::new();
    assert!(deck.draw().is_none());
    deck.push(card("R1"));
    deck.push(card("G2"));
    assert_eq!(deck.peek(), Some(&card("R1")));
    assert_eq!(deck.draw(), Some(card("R1")));
    assert_eq!(deck.len(), 1);
}
