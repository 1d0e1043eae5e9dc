use rand::Rng;
use tracing::{Level, debug_span, event};

use crate::core::{Card, Deck, EquityError, FlatDeck, Hand, Rank, Rankable};

/// Trials handed to each worker when simulating in parallel.
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 250;

/// The ranks of everyone still in the hand once a deal is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Rank of the player being evaluated.
    pub player: Rank,
    /// Rank of every opponent, in dealing order.
    pub opponents: Vec<Rank>,
}

impl TrialOutcome {
    /// The share of the pot the player wins.
    ///
    /// Zero if anyone beats the player, otherwise the pot is split evenly
    /// between everyone holding the best rank.
    pub fn credit(&self) -> f64 {
        let best = self
            .opponents
            .iter()
            .fold(self.player, |best, rank| best.max(*rank));
        if self.player != best {
            return 0.0;
        }
        let tied = 1 + self.opponents.iter().filter(|r| **r == best).count();
        1.0 / tied as f64
    }
}

/// Monte Carlo estimate of how much of the pot one hand wins against a
/// number of random opponent hands.
///
/// The unseen cards are computed once. Every trial shuffles its own copy of
/// them, deals two cards to each opponent from the front and then completes
/// the board with the cards that follow.
#[derive(Debug, Clone)]
pub struct MonteCarloEquity {
    /// The evaluated player's hole cards.
    hole: [Card; 2],
    /// Community cards already known.
    board: Hand,
    /// How many random hands the player is up against.
    opponents: usize,
    /// Every card not in `hole` or `board`, in canonical order.
    deck: FlatDeck,
}

impl MonteCarloEquity {
    /// Set up a simulation.
    ///
    /// # Errors
    ///
    /// - `InvalidBoardSize` if more than five community cards are given.
    /// - `InvalidPlayerCount` if there are no opponents.
    /// - `UnknownCardNotInDeck` if a card is repeated across hole and board.
    /// - `InsufficientDeck` if the unseen cards can't cover every opponent's
    ///   hole cards plus the rest of the board.
    pub fn new(hole: [Card; 2], board: &[Card], opponents: usize) -> Result<Self, EquityError> {
        if board.len() > 5 {
            return Err(EquityError::InvalidBoardSize(board.len()));
        }
        if opponents == 0 {
            return Err(EquityError::InvalidPlayerCount(1));
        }

        let mut deck = Deck::new();
        deck.remove_known(&hole)?;
        deck.remove_known(board)?;

        let needed = opponents
            .checked_mul(2)
            .and_then(|hole_cards| hole_cards.checked_add(5 - board.len()))
            .unwrap_or(usize::MAX);
        if needed > deck.len() {
            return Err(EquityError::InsufficientDeck {
                needed,
                available: deck.len(),
            });
        }

        Ok(Self {
            hole,
            board: Hand::new_with_cards(board.to_vec()),
            opponents,
            deck: deck.into(),
        })
    }

    /// The unseen cards every trial samples from.
    pub fn remaining(&self) -> &FlatDeck {
        &self.deck
    }

    /// How many unseen cards a single trial consumes.
    pub fn cards_per_trial(&self) -> usize {
        2 * self.opponents + 5 - self.board.len()
    }

    /// Rank everyone for one specific deal of the unseen cards.
    ///
    /// `dealt` holds the opponents' hole cards, two per opponent, followed
    /// by the cards that complete the board. Extra cards are ignored.
    ///
    /// # Errors
    ///
    /// `InsufficientDeck` if `dealt` is shorter than `cards_per_trial()`.
    pub fn outcome(&self, dealt: &[Card]) -> Result<TrialOutcome, EquityError> {
        let needed = self.cards_per_trial();
        if dealt.len() < needed {
            return Err(EquityError::InsufficientDeck {
                needed,
                available: dealt.len(),
            });
        }

        Ok(self.deal(&dealt[..needed]))
    }

    /// Rank everyone for a deal of exactly `cards_per_trial()` cards.
    fn deal(&self, dealt: &[Card]) -> TrialOutcome {
        let (opponent_cards, runout) = dealt.split_at(2 * self.opponents);
        let mut board: Vec<Card> = Vec::with_capacity(5);
        board.extend(self.board.iter());
        board.extend_from_slice(runout);

        let rank_with = |first: Card, second: Card| {
            [
                first, second, board[0], board[1], board[2], board[3], board[4],
            ][..]
                .rank()
        };

        TrialOutcome {
            player: rank_with(self.hole[0], self.hole[1]),
            opponents: opponent_cards
                .chunks_exact(2)
                .map(|cards| rank_with(cards[0], cards[1]))
                .collect(),
        }
    }

    /// Run a single trial and return the player's share of the pot.
    pub fn simulate<R: Rng>(&self, rng: &mut R) -> f64 {
        let mut deck = self.deck.clone();
        deck.shuffle(rng);
        // The constructor checked the deck is large enough for a deal.
        self.deal(&deck[0..self.cards_per_trial()]).credit()
    }

    /// Estimate the player's equity as a percentage in `[0, 100]`.
    ///
    /// Ties count as a split pot. Nothing is rounded. Zero trials gives
    /// zero equity.
    pub fn estimate_equity<R: Rng>(&self, trials: usize, rng: &mut R) -> f64 {
        let _span = debug_span!(
            "estimate_equity",
            trials,
            opponents = self.opponents,
            board = self.board.len()
        )
        .entered();

        let credits: f64 = (0..trials).map(|_| self.simulate(rng)).sum();
        event!(Level::TRACE, credits, "simulation_finished");
        Self::to_percentage(credits, trials)
    }

    /// Same as `estimate_equity` but fans the trials out with rayon.
    ///
    /// Every chunk of trials gets its own generator seeded from `rng`
    /// before any work starts, so a seeded run gives the same answer no
    /// matter how the chunks are scheduled.
    #[cfg(feature = "parallel")]
    pub fn estimate_equity_parallel<R: Rng>(&self, trials: usize, rng: &mut R) -> f64 {
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use rayon::prelude::*;

        let _span = debug_span!(
            "estimate_equity_parallel",
            trials,
            opponents = self.opponents,
            board = self.board.len()
        )
        .entered();

        let chunks: Vec<(usize, u64)> = (0..trials)
            .step_by(PARALLEL_CHUNK)
            .map(|start| ((trials - start).min(PARALLEL_CHUNK), rng.random()))
            .collect();

        let per_chunk: Vec<f64> = chunks
            .into_par_iter()
            .map(|(len, seed)| {
                let mut chunk_rng = StdRng::seed_from_u64(seed);
                (0..len).map(|_| self.simulate(&mut chunk_rng)).sum::<f64>()
            })
            .collect();

        let credits: f64 = per_chunk.iter().sum();
        event!(Level::TRACE, credits, "simulation_finished");
        Self::to_percentage(credits, trials)
    }

    fn to_percentage(credits: f64, trials: usize) -> f64 {
        if trials == 0 {
            return 0.0;
        }
        100.0 * credits / trials as f64
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        Hand::new_from_str(s).unwrap().into()
    }

    fn hole(s: &str) -> [Card; 2] {
        let c = cards(s);
        [c[0], c[1]]
    }

    #[test]
    fn test_credit_outright_win() {
        let outcome = TrialOutcome {
            player: Rank::Flush(10),
            opponents: vec![Rank::Straight(9), Rank::OnePair(3)],
        };
        assert_abs_diff_eq!(1.0, outcome.credit());
    }

    #[test]
    fn test_credit_split() {
        let outcome = TrialOutcome {
            player: Rank::Straight(4),
            opponents: vec![Rank::Straight(4), Rank::OnePair(3), Rank::Straight(4)],
        };
        assert_abs_diff_eq!(1.0 / 3.0, outcome.credit());
    }

    #[test]
    fn test_credit_loss() {
        let outcome = TrialOutcome {
            player: Rank::Straight(4),
            opponents: vec![Rank::Straight(4), Rank::Flush(1)],
        };
        assert_abs_diff_eq!(0.0, outcome.credit());
    }

    #[test]
    fn test_remaining_deck() {
        let sim = MonteCarloEquity::new(hole("AsKs"), &cards("QsJsTs"), 1).unwrap();
        assert_eq!(47, sim.remaining().len());
        assert_eq!(4, sim.cards_per_trial());
        for c in cards("AsKsQsJsTs") {
            assert!(!sim.remaining()[..].contains(&c));
        }
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let err = MonteCarloEquity::new(hole("AsKs"), &cards("AsJsTs"), 1).unwrap_err();
        assert_eq!(EquityError::UnknownCardNotInDeck(cards("As")[0]), err);
    }

    #[test]
    fn test_no_opponents_rejected() {
        assert_eq!(
            EquityError::InvalidPlayerCount(1),
            MonteCarloEquity::new(hole("AsKs"), &[], 0).unwrap_err()
        );
    }

    #[test]
    fn test_too_many_opponents() {
        // 50 cards left, 22 opponents need 44 plus 5 for the board.
        assert!(MonteCarloEquity::new(hole("AsKs"), &[], 22).is_ok());
        assert_eq!(
            EquityError::InsufficientDeck {
                needed: 51,
                available: 50
            },
            MonteCarloEquity::new(hole("AsKs"), &[], 23).unwrap_err()
        );
        // A full board leaves 45 cards, so 22 opponents is the limit.
        let board = cards("2c3c4c5d7h");
        assert!(MonteCarloEquity::new(hole("AsKs"), &board, 22).is_ok());
        assert!(matches!(
            MonteCarloEquity::new(hole("AsKs"), &board, 23),
            Err(EquityError::InsufficientDeck { .. })
        ));
        assert!(matches!(
            MonteCarloEquity::new(hole("AsKs"), &board, usize::MAX),
            Err(EquityError::InsufficientDeck { .. })
        ));
    }

    #[test]
    fn test_outcome_deals_opponents_first() {
        let sim = MonteCarloEquity::new(hole("2c3d"), &cards("AhKhQh"), 2).unwrap();
        // First opponent gets the royal flush, second opponent gets a pair.
        let dealt = cards("JhTh9s9c4d6d");
        let outcome = sim.outcome(&dealt).unwrap();
        assert_eq!(Rank::StraightFlush(9), outcome.opponents[0]);
        assert_eq!(
            crate::core::HandCategory::Pair,
            outcome.opponents[1].category()
        );
        assert_eq!(
            crate::core::HandCategory::HighCard,
            outcome.player.category()
        );
        assert_abs_diff_eq!(0.0, outcome.credit());
    }

    #[test]
    fn test_outcome_short_deal() {
        let sim = MonteCarloEquity::new(hole("2c3d"), &cards("AhKhQh"), 2).unwrap();
        assert_eq!(
            Err(EquityError::InsufficientDeck {
                needed: 6,
                available: 3
            }),
            sim.outcome(&cards("JhTh9s"))
        );
    }

    #[test]
    fn test_simulate_scores_the_shuffled_deal() {
        let sim = MonteCarloEquity::new(hole("8s7s"), &cards("6s5d2c"), 3).unwrap();
        for seed in 0..50 {
            let mut shuffled = sim.remaining().clone();
            shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
            let expected = sim.outcome(&shuffled[..]).unwrap().credit();
            assert_eq!(expected, sim.simulate(&mut StdRng::seed_from_u64(seed)));
        }
    }

    #[test]
    fn test_unbeatable_hand() {
        // Royal flush in spades that nobody else can share.
        let sim = MonteCarloEquity::new(hole("AsKs"), &cards("QsJsTs2h3d"), 3).unwrap();
        let equity = sim.estimate_equity(500, &mut StdRng::seed_from_u64(42));
        assert_abs_diff_eq!(100.0, equity, epsilon = 1e-9);
    }

    #[test]
    fn test_board_plays_for_everyone() {
        // The royal flush is on the board so every trial is a three way chop.
        let sim = MonteCarloEquity::new(hole("2c3d"), &cards("AhKhQhJhTh"), 2).unwrap();
        let equity = sim.estimate_equity(1_000, &mut StdRng::seed_from_u64(7));
        assert_abs_diff_eq!(100.0 / 3.0, equity, epsilon = 1e-6);
    }

    #[test]
    fn test_equity_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for opponents in 1..6 {
            let sim = MonteCarloEquity::new(hole("7c2d"), &cards("Kh9s4c"), opponents).unwrap();
            let equity = sim.estimate_equity(200, &mut rng);
            assert!((0.0..=100.0).contains(&equity), "equity {equity}");
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let sim = MonteCarloEquity::new(hole("QdJd"), &cards("Td9c2h"), 2).unwrap();
        let one = sim.estimate_equity(300, &mut StdRng::seed_from_u64(11));
        let two = sim.estimate_equity(300, &mut StdRng::seed_from_u64(11));
        assert_eq!(one, two);
    }

    #[test]
    fn test_zero_trials() {
        let sim = MonteCarloEquity::new(hole("AsAh"), &[], 1).unwrap();
        assert_eq!(0.0, sim.estimate_equity(0, &mut StdRng::seed_from_u64(1)));
    }

    #[test_log::test]
    fn test_pocket_aces_heads_up() {
        let sim = MonteCarloEquity::new(hole("AsAh"), &[], 1).unwrap();
        let equity = sim.estimate_equity(10_000, &mut StdRng::seed_from_u64(2024));
        assert_abs_diff_eq!(85.2, equity, epsilon = 2.5);
    }

    #[test_log::test]
    fn test_ace_king_suited_heads_up() {
        let sim = MonteCarloEquity::new(hole("AsKs"), &[], 1).unwrap();
        let equity = sim.estimate_equity(10_000, &mut StdRng::seed_from_u64(99));
        assert_abs_diff_eq!(67.0, equity, epsilon = 2.5);
    }

    #[test]
    fn test_more_opponents_less_equity() {
        let mut rng = StdRng::seed_from_u64(5);
        let heads_up = MonteCarloEquity::new(hole("KdKc"), &[], 1)
            .unwrap()
            .estimate_equity(4_000, &mut rng);
        let five_way = MonteCarloEquity::new(hole("KdKc"), &[], 4)
            .unwrap()
            .estimate_equity(4_000, &mut rng);
        assert!(heads_up > five_way + 20.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_expectation() {
        let sim = MonteCarloEquity::new(hole("AsAh"), &[], 1).unwrap();
        let one = sim.estimate_equity_parallel(8_000, &mut StdRng::seed_from_u64(8));
        let two = sim.estimate_equity_parallel(8_000, &mut StdRng::seed_from_u64(8));
        assert_eq!(one, two);
        assert_abs_diff_eq!(85.2, one, epsilon = 2.5);

        let chop = MonteCarloEquity::new(hole("2c3d"), &cards("AhKhQhJhTh"), 2).unwrap();
        let equity = chop.estimate_equity_parallel(1_001, &mut StdRng::seed_from_u64(8));
        assert_abs_diff_eq!(100.0 / 3.0, equity, epsilon = 1e-6);
    }
}
