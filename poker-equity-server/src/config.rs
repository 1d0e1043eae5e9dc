use std::path::PathBuf;

use clap::Parser;
use poker_equity::holdem::EvaluatorConfig;

/// Command line and environment configuration for the equity server.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
#[command(name = "run-server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "POKER_EQUITY_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: String,

    /// Monte carlo trials when the board is empty
    #[arg(long, env = "POKER_EQUITY_PREFLOP_TRIALS", default_value_t = 2_000)]
    pub preflop_trials: usize,

    /// Monte carlo trials once the flop is out
    #[arg(long, env = "POKER_EQUITY_POSTFLOP_TRIALS", default_value_t = 1_000)]
    pub postflop_trials: usize,

    /// Directory holding index.html
    #[arg(long, env = "POKER_EQUITY_STATIC_DIR", default_value = ".")]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn evaluator_config(&self) -> EvaluatorConfig {
        EvaluatorConfig::default()
            .with_preflop_trials(self.preflop_trials)
            .with_postflop_trials(self.postflop_trials)
    }
}
