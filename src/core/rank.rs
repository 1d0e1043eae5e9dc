use std::fmt;

use crate::core::card::{Card, Value};
use crate::core::hand::Hand;

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
///
/// Ranks are ordered so that a stronger hand compares greater.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all of the same suit.
    StraightFlush(u32),
}

/// The category of a hand, without any kicker information.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandCategory {
    /// Human readable name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Rank {
    /// Drop the tie breaking information and keep only the category.
    pub fn category(&self) -> HandCategory {
        match self {
            Rank::HighCard(_) => HandCategory::HighCard,
            Rank::OnePair(_) => HandCategory::Pair,
            Rank::TwoPair(_) => HandCategory::TwoPair,
            Rank::ThreeOfAKind(_) => HandCategory::ThreeOfAKind,
            Rank::Straight(_) => HandCategory::Straight,
            Rank::Flush(_) => HandCategory::Flush,
            Rank::FullHouse(_) => HandCategory::FullHouse,
            Rank::FourOfAKind(_) => HandCategory::FourOfAKind,
            Rank::StraightFlush(_) => HandCategory::StraightFlush,
        }
    }
}

/// Big ugly constant for all the straights, lowest first.
/// The index of a straight in here is its strength.
const STRAIGHTS: [u32; 10] = [
    // Wheel.
    1 << (Value::Ace as u32)
        | 1 << (Value::Two as u32)
        | 1 << (Value::Three as u32)
        | 1 << (Value::Four as u32)
        | 1 << (Value::Five as u32),
    // Two to Six
    0b11111,
    // Three to Seven
    0b11111 << 1,
    // Four to Eight
    0b11111 << 2,
    // Five to Nine
    0b11111 << 3,
    // Six to Ten
    0b11111 << 4,
    // Seven to Jack
    0b11111 << 5,
    // Eight to Queen
    0b11111 << 6,
    // Nine to King
    0b11111 << 7,
    // Royal straight
    0b11111 << 8,
];

/// Find the highest straight contained in a value bitset.
fn rank_straight(value_set: u32) -> Option<u32> {
    STRAIGHTS
        .iter()
        .rposition(|s| value_set & s == *s)
        .map(|idx| idx as u32)
}

/// Keep only the `n` highest bits of a value set.
fn keep_highest(mut value_set: u32, n: u32) -> u32 {
    while value_set.count_ones() > n {
        value_set &= value_set - 1;
    }
    value_set
}

/// The highest set bit of a value set, as a bitset of its own.
fn highest_bit(value_set: u32) -> u32 {
    if value_set == 0 {
        0
    } else {
        1 << (31 - value_set.leading_zeros())
    }
}

/// Can this turn into a hand rank?
///
/// Ranking looks for the best five card hand so any collection of five to
/// seven distinct cards works.
pub trait Rankable {
    /// The cards that will be ranked.
    fn cards(&self) -> &[Card];

    /// Rank the cards. It doesn't do any caching so it's left up to the user
    /// to understand that duplicate work will be done if this is called more
    /// than once.
    fn rank(&self) -> Rank {
        // One value bitset per suit, and one for everything.
        let mut suit_value_sets = [0u32; 4];
        let mut value_set: u32 = 0;
        let mut value_to_count = [0u8; 13];

        for c in self.cards() {
            let v = c.value as u32;
            suit_value_sets[c.suit as usize] |= 1 << v;
            value_set |= 1 << v;
            value_to_count[c.value as usize] += 1;
        }

        // Value bitsets of everything there's at least n of.
        let mut quads: u32 = 0;
        let mut trips: u32 = 0;
        let mut pairs: u32 = 0;
        for (v, count) in value_to_count.iter().enumerate() {
            match count {
                4 => quads |= 1 << v,
                3 => trips |= 1 << v,
                2 => pairs |= 1 << v,
                _ => {}
            }
        }

        let flush_set = suit_value_sets
            .iter()
            .copied()
            .find(|s| s.count_ones() >= 5);

        if let Some(flush_set) = flush_set {
            if let Some(rank) = rank_straight(flush_set) {
                return Rank::StraightFlush(rank);
            }
        }

        if quads != 0 {
            let major_rank = highest_bit(quads);
            let minor_rank = highest_bit(value_set ^ major_rank);
            return Rank::FourOfAKind(major_rank << 13 | minor_rank);
        }

        if trips != 0 {
            let major_rank = highest_bit(trips);
            // A second set of trips plays as the pair.
            let minor_rank = highest_bit((trips ^ major_rank) | pairs);
            if minor_rank != 0 {
                return Rank::FullHouse(major_rank << 13 | minor_rank);
            }
        }

        if let Some(flush_set) = flush_set {
            return Rank::Flush(keep_highest(flush_set, 5));
        }

        if let Some(rank) = rank_straight(value_set) {
            return Rank::Straight(rank);
        }

        if trips != 0 {
            let major_rank = highest_bit(trips);
            let minor_rank = keep_highest(value_set ^ major_rank, 2);
            return Rank::ThreeOfAKind(major_rank << 13 | minor_rank);
        }

        if pairs.count_ones() >= 2 {
            let major_rank = keep_highest(pairs, 2);
            let minor_rank = keep_highest(value_set ^ major_rank, 1);
            return Rank::TwoPair(major_rank << 13 | minor_rank);
        }

        if pairs != 0 {
            let major_rank = pairs;
            let minor_rank = keep_highest(value_set ^ major_rank, 3);
            return Rank::OnePair(major_rank << 13 | minor_rank);
        }

        Rank::HighCard(keep_highest(value_set, 5))
    }
}

impl Rankable for Hand {
    fn cards(&self) -> &[Card] {
        &self[..]
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }
}
