//! Texas Hold'em equity estimation.
//!
//! Given a player's hole cards, the community cards seen so far and the
//! number of players at the table this crate estimates how much of the pot
//! the player can expect at showdown, and turns that into a suggested action.
//!
//! ```
//! use poker_equity::holdem::{EquityEvaluator, EquityRequest, Suggestion};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let request = EquityRequest::from_tokens(&["As", "Ks"], &[] as &[&str], 2).unwrap();
//! let evaluation = EquityEvaluator::default()
//!     .evaluate(&request, &mut StdRng::seed_from_u64(1))
//!     .unwrap();
//!
//! assert_eq!(Suggestion::Raise, evaluation.suggestion);
//! assert_eq!(Some(12), evaluation.chen_score);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
