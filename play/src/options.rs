use std::str::FromStr;

use anyhow::{anyhow, Result};
use common::Config;
use serde::{Deserialize, Serialize};

/// Which decision procedure answers a move request.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum SearchStrategy {
    Minimax,
    AlphaBeta,
    Mcts,
}

impl FromStr for SearchStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "minimax" => Ok(SearchStrategy::Minimax),
            "alphabeta" | "alpha_beta" => Ok(SearchStrategy::AlphaBeta),
            "mcts" => Ok(SearchStrategy::Mcts),
            other => Err(anyhow!("unknown search strategy: {}", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PlayOptions {
    pub strategy: SearchStrategy,
    pub depth: usize,
    pub iterations: usize,
    pub exploration: f32,
    pub seed: Option<u64>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::AlphaBeta,
            depth: 3,
            iterations: 60,
            exploration: std::f32::consts::SQRT_2,
            seed: None,
        }
    }
}

impl Config for PlayOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        Ok(Self {
            strategy: config
                .get("strategy")
                .and_then(|v| v.as_string())
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or(SearchStrategy::AlphaBeta),
            depth: config.get("depth").and_then(|v| v.as_usize()).unwrap_or(3),
            iterations: config
                .get("iterations")
                .and_then(|v| v.as_usize())
                .unwrap_or(60),
            exploration: config
                .get("exploration")
                .and_then(|v| v.as_f32())
                .unwrap_or(std::f32::consts::SQRT_2),
            seed: config.get("seed").and_then(|v| v.as_u64()),
        })
    }
}
