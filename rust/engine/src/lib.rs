//! # stud-engine: Five-Card Hand Evaluation Core
//!
//! Classifies five-card poker hands into one of ten categories and orders a
//! table of hands into a single winning order, breaking ties inside a
//! category with fixed, deterministic rules.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and the suit tie-break order
//! - [`deck`] - Seeded 52-card deck with round-robin dealing
//! - [`hand`] - Hand classification (HandClassifier)
//! - [`ranking`] - Ordering of classified hands (HandRanker)
//! - [`errors`] - Error types for parsing and dealing
//!
//! ## Quick Start
//!
//! ```rust
//! use stud_engine::cards::parse_hand;
//! use stud_engine::hand::classify;
//! use stud_engine::ranking::rank;
//!
//! let hands = ["2D 2C 2H 5S 5D", "10H JH QH KH AH", "2D 5C 9H JS KD"]
//!     .iter()
//!     .map(|s| parse_hand(s).map(|cards| classify(&cards)))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let ranked = rank(hands);
//! let labels: Vec<&str> = ranked.hands().iter().map(|h| h.category().label()).collect();
//! assert_eq!(labels, ["Royal Straight Flush", "Full House", "High Card"]);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use stud_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! d1.shuffle();
//! d2.shuffle();
//! assert_eq!(d1.deal_hands(6).unwrap(), d2.deal_hands(6).unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod ranking;
