//! Deck construction and shuffling.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Color, Rank};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 108;

/// Copies of each wild rank in a full deck.
const WILD_COPIES: usize = 4;

/// An ordered supply of cards. The front is the next card to be dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the front card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Appends a card to the back of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Iterates over the cards from front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Randomizes the order of the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Consumes the deck, returning its cards from front to back.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        self.cards.into()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Builds a full deck in construction order, without shuffling.
///
/// One zero per play color, then two of every other colored rank per color,
/// then the wild and wild draw four cards.
#[must_use]
pub fn unshuffled_deck() -> Deck {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for color in Color::PLAY {
        cards.push(Card::new(color, Rank::Zero));
    }

    for color in Color::PLAY {
        for rank in Rank::COLORED {
            cards.push(Card::new(color, rank));
            cards.push(Card::new(color, rank));
        }
    }

    for _ in 0..WILD_COPIES {
        for rank in Rank::WILD {
            cards.push(Card::new(Color::Wild, rank));
        }
    }

    cards.into()
}

/// Creates a full deck shuffled with the given random source.
pub fn create_deck_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    let mut deck = unshuffled_deck();
    deck.shuffle(rng);
    deck
}

/// Creates a full deck shuffled deterministically from `seed`.
///
/// # Example
///
/// ```
/// use unodeck::create_deck_seeded;
///
/// assert_eq!(create_deck_seeded(7), create_deck_seeded(7));
/// ```
#[must_use]
pub fn create_deck_seeded(seed: u64) -> Deck {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    create_deck_with_rng(&mut rng)
}

/// Creates a full deck shuffled with the thread-local random source.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn create_deck() -> Deck {
    create_deck_with_rng(&mut rand::rng())
}
