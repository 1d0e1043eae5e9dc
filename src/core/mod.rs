//! This is the core module. It exports the non-holdem
//! related code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// All the ways validating cards and simulation inputs can fail.
mod error;
/// Export the error taxonomy
pub use self::error::EquityError;

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Flattened deck
mod flat_deck;
/// Export the flat deck used as the sampling population.
pub use self::flat_deck::FlatDeck;

/// 5 to 7 card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{HandCategory, Rank, Rankable};
