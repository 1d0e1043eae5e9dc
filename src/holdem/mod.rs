/// The Chen formula for scoring starting hands.
mod chen;
/// Export `chen_score`
pub use self::chen::chen_score;

/// Module for `MonteCarloEquity` that samples the unseen cards to estimate
/// equity.
mod monte_carlo_equity;
/// Export `MonteCarloEquity`
pub use self::monte_carlo_equity::{MonteCarloEquity, TrialOutcome};

/// Turning scores and equity into a suggested action.
mod suggestion;
/// Export `Suggestion` and `Street`
pub use self::suggestion::{Street, Suggestion};

/// Ties validation, scoring, simulation and suggestions together for a
/// single request.
mod evaluator;
/// Export the request, the result and the evaluator.
pub use self::evaluator::{
    EquityEvaluator, EquityRequest, Evaluation, EvaluatorConfig, PREFLOP_STRENGTH_LABEL,
};
