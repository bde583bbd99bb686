use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CardError {
    #[error("Empty card token")]
    Empty,
    #[error("Card {0} has no face value")]
    MissingFace(String),
    #[error("Invalid face value: {0}")]
    InvalidFace(String),
    #[error("Invalid suit: {0}")]
    InvalidSuit(char),
    #[error("Suits must be uppercase: {0}")]
    LowercaseSuit(char),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum HandError {
    #[error("Invalid card {0}: {1}")]
    Card(String, CardError),
    #[error("A hand needs exactly 5 cards, got {0}")]
    WrongCardCount(usize),
    #[error("Duplicate card: {0}")]
    DuplicateCard(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DeckError {
    #[error("Cannot deal {requested} hands (allowed: 1..={max})")]
    InvalidHandCount { requested: usize, max: usize },
    #[error("Deck exhausted after {dealt} cards")]
    Exhausted { dealt: usize },
}
