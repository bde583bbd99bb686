//! Total ordering of classified hands.
//!
//! Hands sort by [`Category::rank_order`] first. Hands sharing a category are
//! then ordered by a category specific tie-break, stronger hand first. The
//! whole ordering is one stable sort, so hands whose keys are fully equal keep
//! their input order and re-ranking a ranked list changes nothing.

use std::cmp::Ordering;

use serde::Serialize;

use crate::cards::{Card, Rank};
use crate::hand::{classify, Category, ClassifiedHand};

/// Hands in final order, strongest first.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    hands: Vec<ClassifiedHand>,
}

impl RankedResult {
    pub fn hands(&self) -> &[ClassifiedHand] {
        &self.hands
    }

    pub fn winner(&self) -> Option<&ClassifiedHand> {
        self.hands.first()
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn into_inner(self) -> Vec<ClassifiedHand> {
        self.hands
    }
}

/// Orders `hands` strongest first. The output is a permutation of the input.
///
/// # Examples
///
/// ```
/// use stud_engine::cards::parse_hand;
/// use stud_engine::hand::classify;
/// use stud_engine::ranking::rank;
///
/// let hands = ["KD KC 2H 5S 9D", "KD KC 2H 5S 9S"]
///     .iter()
///     .map(|s| classify(&parse_hand(s).unwrap()))
///     .collect();
/// let ranked = rank(hands);
/// assert_eq!(ranked.winner().unwrap().cards()[4].to_string(), "9S");
/// ```
pub fn rank(mut hands: Vec<ClassifiedHand>) -> RankedResult {
    hands.sort_by(compare);
    tracing::trace!(count = hands.len(), "ranked hands");
    RankedResult { hands }
}

/// Classifies and ranks raw hands in one step.
pub fn rank_cards(hands: &[[Card; 5]]) -> RankedResult {
    rank(hands.iter().map(classify).collect())
}

/// `Ordering::Less` means `a` ranks ahead of `b`.
pub fn compare(a: &ClassifiedHand, b: &ClassifiedHand) -> Ordering {
    a.rank_order()
        .cmp(&b.rank_order())
        .then_with(|| tie_break(b, a))
}

/// Strength of `a` against `b` within one category; `Greater` means `a` wins.
fn tie_break(a: &ClassifiedHand, b: &ClassifiedHand) -> Ordering {
    match a.category() {
        Category::RoyalStraightFlush | Category::StraightFlush => {
            straight_flush_key(a).cmp(&straight_flush_key(b))
        }
        Category::Flush | Category::Pair | Category::HighCard => {
            single_key(a).cmp(&single_key(b))
        }
        Category::Straight => a.straight_high().cmp(&b.straight_high()),
        Category::ThreeOfAKind => multiple(a, 3)
            .cmp(&multiple(b, 3))
            .then_with(|| a.ranks_with_count(1).cmp(&b.ranks_with_count(1)))
            .then_with(|| single_suit(a).cmp(&single_suit(b))),
        Category::FourOfAKind => multiple(a, 4)
            .cmp(&multiple(b, 4))
            .then_with(|| multiple(a, 1).cmp(&multiple(b, 1))),
        Category::FullHouse => multiple(a, 3)
            .cmp(&multiple(b, 3))
            .then_with(|| kickers(a, 3).cmp(&kickers(b, 3))),
        Category::TwoPair => two_pair_key(a).cmp(&two_pair_key(b)),
    }
}

// (suit rank, face) of the highest non-repeated card.
fn single_key(h: &ClassifiedHand) -> Option<(u8, Rank)> {
    h.highest_single().map(|c| (c.suit.tie_rank(), c.rank))
}

fn single_suit(h: &ClassifiedHand) -> Option<u8> {
    h.highest_single().map(|c| c.suit.tie_rank())
}

// Suit shared by all five cards, then the straight's high card (a wheel is five high).
fn straight_flush_key(h: &ClassifiedHand) -> (u8, Option<Rank>) {
    (h.cards()[0].suit.tie_rank(), h.straight_high())
}

fn multiple(h: &ClassifiedHand, n: u8) -> Option<Rank> {
    h.ranks_with_count(n).first().copied()
}

// Faces outside the `n`-of-a-kind, highest first.
fn kickers(h: &ClassifiedHand, n: u8) -> Vec<Rank> {
    let mut k: Vec<Rank> = h
        .cards()
        .iter()
        .map(|c| c.rank)
        .filter(|&r| h.rank_count(r) != n)
        .collect();
    k.sort_unstable_by(|x, y| y.cmp(x));
    k
}

// First card of the higher pair in hand order: (suit rank, card text).
fn two_pair_key(h: &ClassifiedHand) -> Option<(u8, String)> {
    let high_pair = multiple(h, 2)?;
    h.cards()
        .iter()
        .find(|c| c.rank == high_pair)
        .map(|c| (c.suit.tie_rank(), c.to_string()))
}
