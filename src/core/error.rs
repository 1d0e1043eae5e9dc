use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// poker equity library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EquityError {
    #[error("Invalid card {0:?}: expected a rank in 23456789TJQKA followed by a suit in shdc")]
    InvalidCard(String),
    #[error("The player's hand must contain exactly 2 cards, got {0}")]
    InvalidHoleHandSize(usize),
    #[error("The board must contain 0, 3, 4 or 5 cards, got {0}")]
    InvalidBoardSize(usize),
    #[error("Duplicate card detected: {0}")]
    DuplicateCard(Card),
    #[error("Card {0} is not in the deck")]
    UnknownCardNotInDeck(Card),
    #[error("At least 2 players are required, got {0}")]
    InvalidPlayerCount(usize),
    #[error("Not enough cards left in the deck: needed {needed}, only {available} available")]
    InsufficientDeck { needed: usize, available: usize },
}
