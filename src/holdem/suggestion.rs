use std::fmt;

use crate::core::EquityError;

/// Which betting round the board size puts us in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Only 0, 3, 4 and 5 community cards are valid.
    ///
    /// ```
    /// use poker_equity::core::EquityError;
    /// use poker_equity::holdem::Street;
    ///
    /// assert_eq!(Ok(Street::Turn), Street::from_board_len(4));
    /// assert_eq!(Err(EquityError::InvalidBoardSize(2)), Street::from_board_len(2));
    /// ```
    pub fn from_board_len(len: usize) -> Result<Self, EquityError> {
        match len {
            0 => Ok(Street::Preflop),
            3 => Ok(Street::Flop),
            4 => Ok(Street::Turn),
            5 => Ok(Street::River),
            _ => Err(EquityError::InvalidBoardSize(len)),
        }
    }

    pub fn is_preflop(&self) -> bool {
        *self == Street::Preflop
    }
}

/// The action suggested to the player.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suggestion {
    Fold,
    Call,
    #[cfg_attr(feature = "serde", serde(rename = "Raise Low"))]
    RaiseLow,
    Raise,
    #[cfg_attr(feature = "serde", serde(rename = "Raise High"))]
    RaiseHigh,
}

impl Suggestion {
    /// Before the flop only the Chen score matters.
    pub fn preflop(chen_score: i32) -> Self {
        if chen_score >= 10 {
            Suggestion::Raise
        } else if chen_score >= 8 {
            Suggestion::Call
        } else {
            Suggestion::Fold
        }
    }

    /// After the flop compare equity, as a percentage, with an even share
    /// of the pot. Every threshold has to be strictly exceeded.
    ///
    /// ```
    /// use poker_equity::holdem::Suggestion;
    ///
    /// assert_eq!(Suggestion::RaiseHigh, Suggestion::postflop(75.0, 2));
    /// assert_eq!(Suggestion::Fold, Suggestion::postflop(50.0, 2));
    /// ```
    pub fn postflop(equity: f64, players: usize) -> Self {
        let fair_share = 100.0 / players as f64;
        if equity > fair_share + 20.0 {
            Suggestion::RaiseHigh
        } else if equity > fair_share + 10.0 {
            Suggestion::RaiseLow
        } else if equity > fair_share {
            Suggestion::Call
        } else {
            Suggestion::Fold
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suggestion::Fold => "Fold",
            Suggestion::Call => "Call",
            Suggestion::RaiseLow => "Raise Low",
            Suggestion::Raise => "Raise",
            Suggestion::RaiseHigh => "Raise High",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
