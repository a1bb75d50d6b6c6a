//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Sums the point values of `cards`.
///
/// An empty hand scores 0.
///
/// # Example
///
/// ```
/// use unodeck::{Card, hand_score};
///
/// let hand: Vec<Card> = ["R5", "BS", "KW"].iter().map(|c| c.parse().unwrap()).collect();
/// assert_eq!(hand_score(&hand), 75);
/// ```
#[must_use]
pub fn hand_score(cards: &[Card]) -> u32 {
    cards.iter().map(Card::score_value).sum()
}

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the point value of the hand.
    #[must_use]
    pub fn score(&self) -> u32 {
        hand_score(&self.cards)
    }

    /// Returns the cards that may be placed on `top`, in hand order.
    pub fn playable_on<'a>(&'a self, top: &'a Card) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.iter().filter(move |card| card.can_be_played_on(top))
    }

    /// Consumes the hand, returning its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
