use serde::Serialize;

use crate::cards::{all_ranks, Card, Rank, Suit};

/// Five-card hand categories, strongest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Category {
    RoyalStraightFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    Pair,
    HighCard,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::RoyalStraightFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    /// Primary sort key: 5 for the strongest category up to 14 for the weakest.
    pub fn rank_order(self) -> u8 {
        match self {
            Category::RoyalStraightFlush => 5,
            Category::StraightFlush => 6,
            Category::FourOfAKind => 7,
            Category::FullHouse => 8,
            Category::Flush => 9,
            Category::Straight => 10,
            Category::ThreeOfAKind => 11,
            Category::TwoPair => 12,
            Category::Pair => 13,
            Category::HighCard => 14,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::RoyalStraightFlush => "Royal Straight Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::Pair => "Pair",
            Category::HighCard => "High Card",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A hand together with the facts extracted while classifying it.
/// Built only by [`classify`]; the category never changes afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ClassifiedHand {
    cards: [Card; 5],
    category: Category,
    #[serde(skip)]
    rank_counts: [u8; 15], // 2..14 used
    #[serde(skip)]
    suit_counts: [u8; 4],
    #[serde(skip)]
    straight_high: Option<Rank>,
}

impl ClassifiedHand {
    /// Cards in the order they were dealt or read.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rank_order(&self) -> u8 {
        self.category.rank_order()
    }

    pub fn rank_count(&self, rank: Rank) -> u8 {
        self.rank_counts[rank.value() as usize]
    }

    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suit_counts[suit_index(suit)]
    }

    pub fn is_flush(&self) -> bool {
        self.suit_counts.contains(&5)
    }

    pub fn is_straight(&self) -> bool {
        self.straight_high.is_some()
    }

    /// Top card of the run; the wheel (A-2-3-4-5) reports Five.
    pub fn straight_high(&self) -> Option<Rank> {
        self.straight_high
    }

    /// Ranks held exactly `n` times, highest first.
    pub fn ranks_with_count(&self, n: u8) -> Vec<Rank> {
        all_ranks()
            .into_iter()
            .rev()
            .filter(|&r| self.rank_count(r) == n)
            .collect()
    }

    /// Highest card whose face is not repeated in the hand.
    pub fn highest_single(&self) -> Option<Card> {
        self.cards
            .iter()
            .filter(|c| self.rank_count(c.rank) == 1)
            .max_by_key(|c| c.rank)
            .copied()
    }
}

/// Classifies five cards into exactly one [`Category`], the strongest that applies.
///
/// # Examples
///
/// ```
/// use stud_engine::cards::parse_hand;
/// use stud_engine::hand::{classify, Category};
///
/// let hand = classify(&parse_hand("10H JH QH KH AH").unwrap());
/// assert_eq!(hand.category(), Category::RoyalStraightFlush);
/// assert_eq!(hand.category().label(), "Royal Straight Flush");
/// ```
pub fn classify(cards: &[Card; 5]) -> ClassifiedHand {
    let mut rank_counts = [0u8; 15];
    let mut suit_counts = [0u8; 4];
    for c in cards {
        rank_counts[c.rank.value() as usize] += 1;
        suit_counts[suit_index(c.suit)] += 1;
    }

    let flush = suit_counts.contains(&5);
    let straight_high = detect_straight_high(&rank_counts);
    let royal = (10..=14).all(|r| rank_counts[r] == 1);

    let mut trips = 0;
    let mut pairs = 0;
    let mut quads = 0;
    for &n in &rank_counts {
        match n {
            4 => quads += 1,
            3 => trips += 1,
            2 => pairs += 1,
            _ => {}
        }
    }

    let category = match (flush, straight_high.is_some()) {
        (true, true) if royal => Category::RoyalStraightFlush,
        (true, true) => Category::StraightFlush,
        _ if quads == 1 => Category::FourOfAKind,
        _ if trips == 1 && pairs == 1 => Category::FullHouse,
        (true, false) => Category::Flush,
        (false, true) => Category::Straight,
        _ if trips == 1 => Category::ThreeOfAKind,
        _ if pairs == 2 => Category::TwoPair,
        _ if pairs == 1 => Category::Pair,
        _ => Category::HighCard,
    };

    let hand = ClassifiedHand {
        cards: *cards,
        category,
        rank_counts,
        suit_counts,
        straight_high,
    };
    tracing::debug!(
        hand = %format_cards(cards),
        category = category.label(),
        "classified hand"
    );
    hand
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn suit_index(s: Suit) -> usize {
    (s.tie_rank() - 1) as usize
}

// Five distinct consecutive faces, or the wheel {2,3,4,5,A}.
fn detect_straight_high(rank_counts: &[u8; 15]) -> Option<Rank> {
    let faces: Vec<u8> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect();
    if faces.len() != 5 {
        return None;
    }
    if faces == [2, 3, 4, 5, 14] {
        return Some(Rank::Five);
    }
    if faces[4] - faces[0] == 4 {
        return Rank::from_value(faces[4]);
    }
    None
}
