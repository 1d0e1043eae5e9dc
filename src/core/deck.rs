use crate::core::card::{Card, Suit, Value};
use crate::core::EquityError;
use std::slice::Iter;
use std::vec::IntoIter;

/// Deck struct holding the cards that have not been seen yet.
///
/// Cards are kept in a fixed canonical order: values from two to ace and,
/// within a value, spades, hearts, diamonds then clubs. The only mutation
/// allowed is removing cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage, in canonical order.
    cards: Vec<Card>,
}

impl Deck {
    /// Create the full 52 card deck
    ///
    /// ```
    /// use poker_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for v in Value::values() {
            for s in Suit::suits() {
                cards.push(Card::new(v, s));
            }
        }
        Self { cards }
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        match self.cards.iter().position(|x| x == c) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove every known card from the deck.
    ///
    /// Fails on the first card that isn't in the deck. That happens when
    /// the same card is listed twice, or was already removed. Cards removed
    /// before the failing one stay removed.
    ///
    /// ```
    /// use poker_equity::core::{Card, Deck, EquityError};
    ///
    /// let ace: Card = "As".parse().unwrap();
    /// let mut deck = Deck::new();
    /// deck.remove_known(&[ace]).unwrap();
    /// assert_eq!(51, deck.len());
    /// assert_eq!(
    ///     Err(EquityError::UnknownCardNotInDeck(ace)),
    ///     deck.remove_known(&[ace])
    /// );
    /// ```
    pub fn remove_known(&mut self, cards: &[Card]) -> Result<(), EquityError> {
        for c in cards {
            if !self.remove(c) {
                return Err(EquityError::UnknownCardNotInDeck(*c));
            }
        }
        Ok(())
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator from this deck, in canonical order.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}
