use anyhow::{anyhow, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use common::create_rng;
use engine::engine::GameEngine;
use engine::game_state::GameState;
use mcts::{MCTSOptions, MCTS};
use minimax::{IterativeDeepening, LibertyDifference, Minimax};

use super::options::{PlayOptions, SearchStrategy};
use super::slot::MoveSlot;

/// Answers move requests for whichever side is to move, publishing every
/// candidate to the move slot as the search refines it.
pub struct Player<'a, E>
where
    E: GameEngine,
{
    game_engine: &'a E,
    options: PlayOptions,
    slot: MoveSlot<E::Action>,
    rng: StdRng,
}

impl<'a, E> Player<'a, E>
where
    E: GameEngine,
    E::State: GameState,
{
    pub fn new(game_engine: &'a E, options: PlayOptions) -> Self {
        let rng = create_rng(options.seed);

        Self {
            game_engine,
            options,
            slot: MoveSlot::new(),
            rng,
        }
    }

    /// The most recently published candidate, if the caller has not already
    /// taken it.
    pub fn latest_published(&self) -> Option<E::Action> {
        self.slot.latest()
    }

    /// Chooses an action for the player to move. The first two plies are
    /// played uniformly at random without searching; afterwards the
    /// configured strategy decides. The returned action is always the last
    /// one published.
    pub fn choose_action(&mut self, game_state: &E::State) -> Result<E::Action> {
        if self.game_engine.ply_count(game_state) < 2 {
            let actions = self.game_engine.actions(game_state);
            let action = actions
                .choose(&mut self.rng)
                .cloned()
                .ok_or_else(|| anyhow!("no legal opening action"))?;

            self.slot.publish(action.clone());
            return Ok(action);
        }

        let player_id = self.game_engine.player_to_move(game_state);
        let heuristic = LibertyDifference::new();

        let action = match self.options.strategy {
            SearchStrategy::Minimax => {
                Minimax::new(self.game_engine, &heuristic, player_id)
                    .choose_action(game_state, self.options.depth)
                    .ok_or_else(|| anyhow!("no decision available for player {}", player_id))?
            }
            SearchStrategy::AlphaBeta => {
                let deepening = IterativeDeepening::new(
                    self.game_engine,
                    &heuristic,
                    player_id,
                    self.options.depth,
                );
                let slot = &self.slot;

                deepening
                    .run(game_state, |action| slot.publish(action))
                    .ok_or_else(|| anyhow!("no decision available for player {}", player_id))?
            }
            SearchStrategy::Mcts => {
                let mcts_options =
                    MCTSOptions::new(self.options.iterations, self.options.exploration);
                let mut mcts = MCTS::new(
                    game_state.clone(),
                    self.game_engine,
                    mcts_options,
                    &mut self.rng,
                );

                mcts.run()?
            }
        };

        debug!(
            "player {} chose {:?} via {:?}",
            player_id, action, self.options.strategy
        );
        self.slot.publish(action.clone());
        Ok(action)
    }
}
