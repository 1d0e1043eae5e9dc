use std::ops::{Index, RangeFull};
use std::slice::Iter;

use super::{Card, EquityError};

/// An ordered collection of distinct cards.
///
/// Used for hole cards, for the board and for the combination of the two
/// when ranking.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_equity::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Create a hand from cards without checking them for duplicates.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse a string of concatenated card tokens like `"AdKh2c"`.
    ///
    /// ```
    /// use poker_equity::core::{EquityError, Hand};
    ///
    /// let hand = Hand::new_from_str("AsKs").unwrap();
    /// assert_eq!(2, hand.len());
    ///
    /// assert!(matches!(
    ///     Hand::new_from_str("AsAs"),
    ///     Err(EquityError::DuplicateCard(_))
    /// ));
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, EquityError> {
        let chars: Vec<char> = hand_string.chars().collect();
        let mut hand = Self::new();
        for pair in chars.chunks(2) {
            let card = match pair {
                [value, suit] => Card::from_chars(*value, *suit)?,
                _ => return Err(EquityError::InvalidCard(pair.iter().collect())),
            };
            if !hand.push(card) {
                return Err(EquityError::DuplicateCard(card));
            }
        }
        Ok(hand)
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Add a card to the end of the hand.
    ///
    /// Returns false, leaving the hand untouched, when the card is already
    /// there.
    pub fn push(&mut self, c: Card) -> bool {
        if self.contains(&c) {
            return false;
        }
        self.cards.push(c);
        true
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.cards {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Index<RangeFull> for Hand {
    type Output = [Card];
    fn index(&self, range: RangeFull) -> &[Card] {
        &self.cards[range]
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.push(card);
        }
    }
}

impl<'a> Extend<&'a Card> for Hand {
    fn extend<T: IntoIterator<Item = &'a Card>>(&mut self, iter: T) {
        self.extend(iter.into_iter().copied());
    }
}

impl From<Hand> for Vec<Card> {
    fn from(val: Hand) -> Self {
        val.cards
    }
}
