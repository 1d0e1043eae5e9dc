use std::fmt;
use std::str::FromStr;

use super::EquityError;

/// Card rank or value.
/// This is basically the face value - 2
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// Look up a value from its position in `Value::values()`.
    ///
    /// ```
    /// use poker_equity::core::Value;
    ///
    /// assert_eq!(Some(Value::Two), Value::from_u8(0));
    /// assert_eq!(Some(Value::Ace), Value::from_u8(12));
    /// assert_eq!(None, Value::from_u8(13));
    /// ```
    pub fn from_u8(v: u8) -> Option<Value> {
        VALUES.get(usize::from(v)).copied()
    }

    /// Parse the rank character. Lower case letters are accepted.
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The canonical upper case rank character.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse the suit character. Upper case letters are accepted.
    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_lowercase() {
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    /// The canonical lower case suit character.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Build a card from a rank and a suit character.
    ///
    /// ```
    /// use poker_equity::core::{Card, Suit, Value};
    ///
    /// let card = Card::from_chars('t', 'D').unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Diamond), card);
    /// assert!(Card::from_chars('1', 's').is_err());
    /// ```
    pub fn from_chars(value: char, suit: char) -> Result<Self, EquityError> {
        match (Value::from_char(value), Suit::from_char(suit)) {
            (Some(value), Some(suit)) => Ok(Self { value, suit }),
            _ => Err(EquityError::InvalidCard(format!("{value}{suit}"))),
        }
    }

    /// Parse a two character token like `"As"` or `"td"`.
    ///
    /// ```
    /// use poker_equity::core::Card;
    ///
    /// let card = Card::from_token("kH").unwrap();
    /// assert_eq!("Kh", card.to_string());
    /// assert!(Card::from_token("Khh").is_err());
    /// ```
    pub fn from_token(token: &str) -> Result<Self, EquityError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(value), Some(suit), None) => Self::from_chars(value, suit)
                .map_err(|_| EquityError::InvalidCard(token.to_string())),
            _ => Err(EquityError::InvalidCard(token.to_string())),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        assert!(c1 == c1);
        // Values are compared before suits.
        assert!(c1 < c2);
        assert!(c2 > c1);
        assert!(c3 > c2);
    }

    #[test]
    fn test_value_cmp() {
        assert!(Value::Two < Value::Ace);
        assert!(Value::King < Value::Ace);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_token_round_trip() {
        for v in Value::values() {
            for s in Suit::suits() {
                let token = format!("{}{}", v.to_char(), s.to_char());
                let card: Card = token.parse().unwrap();
                assert_eq!(Card::new(v, s), card);
                assert_eq!(token, card.to_string());
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Card::from_token("as"), Card::from_token("AS"));
        assert_eq!(
            Card::new(Value::Ace, Suit::Spade),
            Card::from_token("aS").unwrap()
        );
    }

    #[test]
    fn test_invalid_tokens() {
        for token in ["", "A", "10h", "Ax", "1s", "Asd", "ss"] {
            assert_eq!(
                Err(EquityError::InvalidCard(token.to_string())),
                Card::from_token(token),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }
}
