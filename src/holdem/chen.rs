use crate::core::{Card, Value};

/// Score a two card starting hand with the Chen formula.
///
/// The higher card sets the base score, pairs are doubled, suited cards
/// get a bonus and the distance between the two values costs points. Values
/// below ten score their position in `Value::values()` plus two.
///
/// ```
/// use poker_equity::core::Hand;
/// use poker_equity::holdem::chen_score;
///
/// let aces = Hand::new_from_str("AsAh").unwrap();
/// assert_eq!(20, chen_score(aces[0], aces[1]));
///
/// let ak_suited = Hand::new_from_str("AsKs").unwrap();
/// assert_eq!(12, chen_score(ak_suited[0], ak_suited[1]));
/// ```
pub fn chen_score(first: Card, second: Card) -> i32 {
    let (high, low) = if first.value >= second.value {
        (first.value, second.value)
    } else {
        (second.value, first.value)
    };

    let mut score = match high {
        Value::Ace => 10,
        Value::King => 8,
        Value::Queen => 7,
        Value::Jack => 6,
        Value::Ten => 5,
        v => v as i32 + 2,
    };

    let is_pair = high == low;
    if is_pair {
        score = (score * 2).max(5);
    }

    // Can't trigger for a pair of distinct cards.
    if first.suit == second.suit {
        score += 2;
    }

    if !is_pair {
        let gap = high as i32 - low as i32;
        score += match gap {
            1 => 0,
            2 => -1,
            3 => -2,
            4 => -4,
            _ => -5,
        };

        if gap < 3 && high < Value::Queen {
            score += 1;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, Hand};

    fn score(s: &str) -> i32 {
        let hand = Hand::new_from_str(s).unwrap();
        chen_score(hand[0], hand[1])
    }

    #[test]
    fn test_pocket_aces() {
        assert_eq!(20, score("AsAh"));
    }

    #[test]
    fn test_suited_ace_king() {
        assert_eq!(12, score("AsKs"));
        assert_eq!(10, score("AsKd"));
    }

    #[test]
    fn test_order_does_not_matter() {
        assert_eq!(score("AsKs"), score("KsAs"));
        assert_eq!(score("7c2d"), score("2d7c"));
    }

    #[test]
    fn test_low_pairs_floor_at_five() {
        // Base 2, doubled to 4, floor of 5.
        assert_eq!(5, score("2c2d"));
        // Base 4, doubled to 8.
        assert_eq!(8, score("4c4d"));
        assert_eq!(16, score("KcKd"));
    }

    #[test]
    fn test_low_cards_use_position_plus_two() {
        // Nine is position 7, plus two, plus one for the connector.
        assert_eq!(10, score("9c8d"));
        // Suited as well.
        assert_eq!(12, score("9h8h"));
    }

    #[test]
    fn test_gap_penalties() {
        assert_eq!(7, score("JcTd"));
        assert_eq!(6, score("Jc9d"));
        assert_eq!(4, score("Jc8d"));
        assert_eq!(2, score("Jc7d"));
        assert_eq!(1, score("Jc6d"));
        assert_eq!(1, score("Jc2d"));
    }

    #[test]
    fn test_no_connector_bonus_for_queen_high() {
        assert_eq!(7, score("QcJd"));
        assert_eq!(8, score("KcQd"));
        assert_eq!(2, score("7c2d"));
    }

    #[test]
    fn test_deterministic_over_all_hands() {
        let cards: Vec<Card> = Deck::new().into_iter().collect();
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                let s = chen_score(*a, *b);
                assert_eq!(s, chen_score(*b, *a));
                assert!((-3..=20).contains(&s), "{a}{b} scored {s}");
            }
        }
    }
}
