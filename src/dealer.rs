//! Round-robin dealing.

extern crate alloc;

use alloc::vec::Vec;

use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::DealOptions;

/// Deals up to seven cards to each of `num_hands` hands.
///
/// See [`deal_hands_with`].
///
/// # Example
///
/// ```
/// use unodeck::{create_deck_seeded, deal_hands};
///
/// let mut deck = create_deck_seeded(1);
/// let hands = deal_hands(&mut deck, 2);
/// assert_eq!(hands[0].len(), 7);
/// assert_eq!(deck.len(), 94);
/// ```
pub fn deal_hands(deck: &mut Deck, num_hands: usize) -> Vec<Hand> {
    deal_hands_with(deck, num_hands, &DealOptions::default())
}

/// Deals cards from the front of `deck` to `num_hands` hands.
///
/// Each of `options.hand_size` rounds gives one card to every hand in slot
/// order. Once the deck runs out the remaining slots get nothing, so earlier
/// hands may end up one card ahead of later ones. Dealt cards are removed
/// from the deck.
pub fn deal_hands_with(deck: &mut Deck, num_hands: usize, options: &DealOptions) -> Vec<Hand> {
    let mut hands: Vec<Hand> = (0..num_hands).map(|_| Hand::new()).collect();

    'rounds: for _ in 0..options.hand_size {
        for hand in &mut hands {
            let Some(card) = deck.draw() else {
                break 'rounds;
            };
            hand.add_card(card);
        }
    }

    hands
}
