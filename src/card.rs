//! Card types and their textual forms.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card color.
///
/// The four play colors plus the black marker carried by wild cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red (`R`).
    Red,
    /// Yellow (`Y`).
    Yellow,
    /// Green (`G`).
    Green,
    /// Blue (`B`).
    Blue,
    /// Black wild marker (`K`).
    Wild,
}

impl Color {
    /// The four play colors, in deck construction order.
    pub const PLAY: [Self; 4] = [Self::Red, Self::Yellow, Self::Green, Self::Blue];

    /// Returns the single-character code of the color.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Wild => 'K',
        }
    }

    /// Parses a color from its single-character code.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidColor`] if `code` names no color.
    pub const fn from_code(code: char) -> Result<Self, CardError> {
        match code {
            'R' => Ok(Self::Red),
            'Y' => Ok(Self::Yellow),
            'G' => Ok(Self::Green),
            'B' => Ok(Self::Blue),
            'K' => Ok(Self::Wild),
            _ => Err(CardError::InvalidColor(code)),
        }
    }

    /// Returns whether this is the wild marker.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Self::Wild)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Scoring category of a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankKind {
    /// A number card with its face value.
    Digit(u8),
    /// Skip, draw two or reverse.
    Action,
    /// Wild or wild draw four.
    Wild,
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// `0`.
    Zero,
    /// `1`.
    One,
    /// `2`.
    Two,
    /// `3`.
    Three,
    /// `4`.
    Four,
    /// `5`.
    Five,
    /// `6`.
    Six,
    /// `7`.
    Seven,
    /// `8`.
    Eight,
    /// `9`.
    Nine,
    /// Skip (`S`).
    Skip,
    /// Draw two (`D`).
    DrawTwo,
    /// Reverse (`R`).
    Reverse,
    /// Wild (`W`).
    Wild,
    /// Wild draw four (`F`).
    WildDrawFour,
}

impl Rank {
    /// Ranks dealt twice per play color, in deck construction order.
    pub const COLORED: [Self; 12] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Skip,
        Self::DrawTwo,
        Self::Reverse,
    ];

    /// Ranks carried by wild-colored cards.
    pub const WILD: [Self; 2] = [Self::Wild, Self::WildDrawFour];

    const DIGITS: [Self; 10] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
    ];

    /// Returns the scoring category of the rank.
    #[must_use]
    pub const fn kind(self) -> RankKind {
        match self {
            Self::Zero => RankKind::Digit(0),
            Self::One => RankKind::Digit(1),
            Self::Two => RankKind::Digit(2),
            Self::Three => RankKind::Digit(3),
            Self::Four => RankKind::Digit(4),
            Self::Five => RankKind::Digit(5),
            Self::Six => RankKind::Digit(6),
            Self::Seven => RankKind::Digit(7),
            Self::Eight => RankKind::Digit(8),
            Self::Nine => RankKind::Digit(9),
            Self::Skip | Self::DrawTwo | Self::Reverse => RankKind::Action,
            Self::Wild | Self::WildDrawFour => RankKind::Wild,
        }
    }

    /// Returns the single-character code of the rank.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Skip => 'S',
            Self::DrawTwo => 'D',
            Self::Reverse => 'R',
            Self::Wild => 'W',
            Self::WildDrawFour => 'F',
        }
    }

    /// Parses a rank from its single-character code.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `code` names no rank.
    pub const fn from_code(code: char) -> Result<Self, CardError> {
        match code {
            '0'..='9' => Ok(Self::DIGITS[code as usize - '0' as usize]),
            'S' => Ok(Self::Skip),
            'D' => Ok(Self::DrawTwo),
            'R' => Ok(Self::Reverse),
            'W' => Ok(Self::Wild),
            'F' => Ok(Self::WildDrawFour),
            _ => Err(CardError::InvalidRank(code)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Points scored by an action card.
pub const ACTION_POINTS: u32 = 20;

/// Points scored by a wild card.
pub const WILD_POINTS: u32 = 50;

/// An Uno card.
///
/// Cards carry no identity beyond their color and rank; two cards with the
/// same pair compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The color of the card.
    pub color: Color,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not check the pairing against the deck
    /// composition. A wild rank with a play color (or the reverse) is
    /// accepted; play compatibility follows the color and scoring follows
    /// the rank.
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// Creates a card from its color and rank codes.
    ///
    /// # Example
    ///
    /// ```
    /// use unodeck::{Card, Color, Rank};
    ///
    /// let card = Card::from_codes('G', 'S').unwrap();
    /// assert_eq!(card, Card::new(Color::Green, Rank::Skip));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if either code is unknown.
    pub const fn from_codes(color: char, rank: char) -> Result<Self, CardError> {
        let color = match Color::from_code(color) {
            Ok(color) => color,
            Err(err) => return Err(err),
        };
        match Rank::from_code(rank) {
            Ok(rank) => Ok(Self::new(color, rank)),
            Err(err) => Err(err),
        }
    }

    /// Returns whether this card may be placed on `other`.
    ///
    /// A wild card goes on anything, anything goes on a wild card, and
    /// otherwise the colors or the ranks must match.
    ///
    /// # Example
    ///
    /// ```
    /// use unodeck::Card;
    ///
    /// let top: Card = "Y8".parse().unwrap();
    /// assert!("YD".parse::<Card>().unwrap().can_be_played_on(&top));
    /// assert!(!"BD".parse::<Card>().unwrap().can_be_played_on(&top));
    /// ```
    #[must_use]
    pub fn can_be_played_on(&self, other: &Self) -> bool {
        if self.color.is_wild() || other.color.is_wild() {
            return true;
        }
        self.color == other.color || self.rank == other.rank
    }

    /// Returns the number of points the card is worth at the end of a round.
    ///
    /// Number cards score their face value, action cards 20 and wild cards 50.
    #[must_use]
    pub const fn score_value(&self) -> u32 {
        match self.rank.kind() {
            RankKind::Digit(value) => value as u32,
            RankKind::Action => ACTION_POINTS,
            RankKind::Wild => WILD_POINTS,
        }
    }
}

/// Short form: color code followed by rank code, e.g. `R5`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, self.rank)
    }
}

/// Debug form shaped like a constructor call, e.g. `Card('R', '5')`.
impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card('{}', '{}')", self.color, self.rank)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(color), Some(rank), None) => Self::from_codes(color, rank),
            _ => Err(CardError::InvalidLength(s.chars().count())),
        }
    }
}
