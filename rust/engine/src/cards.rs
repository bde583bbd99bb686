use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CardError, HandError};

/// Represents one of the four suits in a standard 52-card deck.
/// Declared weakest to strongest under the tie-break convention, so the
/// derived `Ord` agrees with [`Suit::tie_rank`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit (D)
    Diamonds,
    /// Clubs suit (C)
    Clubs,
    /// Hearts suit (H)
    Hearts,
    /// Spades suit (S)
    Spades,
}

/// Fixed suit ordering used when breaking ties, weakest first.
/// This is a house convention (D < C < H < S), not bridge ordering.
pub const SUIT_TIE_ORDER: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

impl Suit {
    /// Ordinal of the suit in [`SUIT_TIE_ORDER`], starting at 1.
    pub fn tie_rank(self) -> u8 {
        match self {
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Hearts => 3,
            Suit::Spades => 4,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn from_symbol(c: char) -> Result<Suit, CardError> {
        match c {
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            'd' | 'c' | 'h' | 's' => Err(CardError::LowercaseSuit(c)),
            _ => Err(CardError::InvalidSuit(c)),
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        let r = match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => return None,
        };
        Some(r)
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn from_label(face: &str) -> Result<Rank, CardError> {
        let r = match face {
            "A" => Rank::Ace,
            "K" => Rank::King,
            "Q" => Rank::Queen,
            "J" => Rank::Jack,
            "10" => Rank::Ten,
            "9" => Rank::Nine,
            "8" => Rank::Eight,
            "7" => Rank::Seven,
            "6" => Rank::Six,
            "5" => Rank::Five,
            "4" => Rank::Four,
            "3" => Rank::Three,
            "2" => Rank::Two,
            _ => return Err(CardError::InvalidFace(face.to_string())),
        };
        Ok(r)
    }
}

/// Represents a single playing card with a suit and rank.
/// Text form is the face label immediately followed by the suit symbol, e.g. `10H`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let suit_char = token.chars().last().ok_or(CardError::Empty)?;
        let face = &token[..token.len() - suit_char.len_utf8()];
        if face.is_empty() {
            return Err(CardError::MissingFace(token.to_string()));
        }
        let suit = Suit::from_symbol(suit_char)?;
        let rank = Rank::from_label(face)?;
        Ok(Card { rank, suit })
    }
}

pub fn all_suits() -> [Suit; 4] {
    SUIT_TIE_ORDER
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

/// Parses a whitespace separated hand such as `"10H JH QH KH AH"`.
///
/// # Errors
///
/// - [`HandError::Card`] when a token is not a valid card
/// - [`HandError::WrongCardCount`] unless exactly five tokens are present
/// - [`HandError::DuplicateCard`] when the same card appears twice
///
/// # Examples
///
/// ```
/// use stud_engine::cards::{parse_hand, Rank, Suit};
///
/// let cards = parse_hand("10H JH QH KH AH").unwrap();
/// assert_eq!(cards[0].rank, Rank::Ten);
/// assert_eq!(cards[4].suit, Suit::Hearts);
/// ```
pub fn parse_hand(s: &str) -> Result<[Card; 5], HandError> {
    let cards = s
        .split_whitespace()
        .map(|t| t.parse::<Card>().map_err(|e| HandError::Card(t.to_string(), e)))
        .collect::<Result<Vec<_>, _>>()?;
    hand_from_cards(&cards)
}

/// Checks count and uniqueness of already parsed cards.
pub fn hand_from_cards(cards: &[Card]) -> Result<[Card; 5], HandError> {
    let hand: [Card; 5] = cards
        .try_into()
        .map_err(|_| HandError::WrongCardCount(cards.len()))?;
    for (i, c) in hand.iter().enumerate() {
        if hand[..i].contains(c) {
            return Err(HandError::DuplicateCard(c.to_string()));
        }
    }
    Ok(hand)
}
