use rand::Rng;
use tracing::{Level, event};

use crate::core::{Card, EquityError, Hand, Rankable};

use super::{MonteCarloEquity, Street, Suggestion, chen_score};

/// Prefix of `Evaluation::hand_strength` before the flop. Front ends match
/// on this exact text.
pub const PREFLOP_STRENGTH_LABEL: &str = "Força Pré-Flop (Chen)";

/// How many trials to simulate on each street.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Trials used when the board is empty.
    pub preflop_trials: usize,
    /// Trials used once there is a flop.
    pub postflop_trials: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            preflop_trials: 2_000,
            postflop_trials: 1_000,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_preflop_trials(mut self, trials: usize) -> Self {
        self.preflop_trials = trials;
        self
    }

    pub fn with_postflop_trials(mut self, trials: usize) -> Self {
        self.postflop_trials = trials;
        self
    }
}

fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, EquityError> {
    tokens
        .iter()
        .map(|token| Card::from_token(token.as_ref()))
        .collect()
}

/// Everything known about a hand when asking for advice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityRequest {
    pub hole: Vec<Card>,
    pub board: Vec<Card>,
    /// Players at the table, the evaluated player included.
    pub players: usize,
}

impl EquityRequest {
    pub fn new(hole: Vec<Card>, board: Vec<Card>, players: usize) -> Self {
        Self {
            hole,
            board,
            players,
        }
    }

    /// Parse card tokens like `"As"`.
    ///
    /// The number of hole tokens is checked before any token is parsed.
    /// Board size and duplicates are checked by `EquityEvaluator::evaluate`.
    pub fn from_tokens<H, B>(hole: &[H], board: &[B], players: usize) -> Result<Self, EquityError>
    where
        H: AsRef<str>,
        B: AsRef<str>,
    {
        if hole.len() != 2 {
            return Err(EquityError::InvalidHoleHandSize(hole.len()));
        }
        Ok(Self {
            hole: parse_tokens(hole)?,
            board: parse_tokens(board)?,
            players,
        })
    }

    /// Check the sizes and that no card shows up twice.
    ///
    /// Hole size is checked first, then duplicates, then the board size,
    /// then the number of players.
    pub fn validate(&self) -> Result<([Card; 2], Street), EquityError> {
        let hole: [Card; 2] = self
            .hole
            .as_slice()
            .try_into()
            .map_err(|_| EquityError::InvalidHoleHandSize(self.hole.len()))?;

        let mut seen = Hand::new();
        for card in self.hole.iter().chain(self.board.iter()) {
            if !seen.push(*card) {
                return Err(EquityError::DuplicateCard(*card));
            }
        }

        let street = Street::from_board_len(self.board.len())?;
        if self.players < 2 {
            return Err(EquityError::InvalidPlayerCount(self.players));
        }
        Ok((hole, street))
    }
}

/// The answer for one request.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Expected share of the pot as an unrounded percentage.
    pub equity: f64,
    pub suggestion: Suggestion,
    /// Chen score before the flop, hand category after it.
    pub hand_strength: String,
    pub street: Street,
    /// Only computed before the flop.
    pub chen_score: Option<i32>,
}

/// Runs validation, the Chen score, the simulation and the suggestion
/// policy for a request.
#[derive(Debug, Clone, Default)]
pub struct EquityEvaluator {
    config: EvaluatorConfig,
}

impl EquityEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Evaluate a request. No simulation runs unless the request is valid.
    pub fn evaluate<R: Rng>(
        &self,
        request: &EquityRequest,
        rng: &mut R,
    ) -> Result<Evaluation, EquityError> {
        let (hole, street) = request.validate()?;
        let simulation = MonteCarloEquity::new(hole, &request.board, request.players - 1)?;

        let evaluation = if street.is_preflop() {
            let score = chen_score(hole[0], hole[1]);
            Evaluation {
                equity: Self::estimate(&simulation, self.config.preflop_trials, rng),
                suggestion: Suggestion::preflop(score),
                hand_strength: format!("{PREFLOP_STRENGTH_LABEL}: {score}"),
                street,
                chen_score: Some(score),
            }
        } else {
            let equity = Self::estimate(&simulation, self.config.postflop_trials, rng);
            let mut made = Hand::new_with_cards(request.hole.clone());
            made.extend(request.board.iter());
            Evaluation {
                equity,
                suggestion: Suggestion::postflop(equity, request.players),
                hand_strength: made.rank().category().to_string(),
                street,
                chen_score: None,
            }
        };

        event!(
            Level::DEBUG,
            ?street,
            players = request.players,
            equity = evaluation.equity,
            suggestion = %evaluation.suggestion,
            "evaluated"
        );
        Ok(evaluation)
    }

    #[cfg(not(feature = "parallel"))]
    fn estimate<R: Rng>(simulation: &MonteCarloEquity, trials: usize, rng: &mut R) -> f64 {
        simulation.estimate_equity(trials, rng)
    }

    #[cfg(feature = "parallel")]
    fn estimate<R: Rng>(simulation: &MonteCarloEquity, trials: usize, rng: &mut R) -> f64 {
        simulation.estimate_equity_parallel(trials, rng)
    }
}
