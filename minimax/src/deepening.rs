use engine::engine::GameEngine;
use log::debug;

use super::alpha_beta::AlphaBeta;
use super::heuristic::Heuristic;

/// Re-searches with alpha-beta at depths 1, 2, ... up to a fixed ceiling,
/// handing the chosen action to `publish` after every completed depth. If
/// the caller stops consuming early, the last publication is the best move
/// found with the deepest completed lookahead.
pub struct IterativeDeepening<'a, E, H> {
    alpha_beta: AlphaBeta<'a, E, H>,
    max_depth: usize,
}

impl<'a, E, H> IterativeDeepening<'a, E, H>
where
    E: GameEngine,
    H: Heuristic<E>,
{
    pub fn new(game_engine: &'a E, heuristic: &'a H, player_id: usize, max_depth: usize) -> Self {
        Self {
            alpha_beta: AlphaBeta::new(game_engine, heuristic, player_id),
            max_depth,
        }
    }

    /// Runs every depth in order, never skipping one; each publication fully
    /// replaces the previous. Returns the deepest search's action, or `None`
    /// when the state has no legal actions.
    pub fn run(&self, game_state: &E::State, mut publish: impl FnMut(E::Action)) -> Option<E::Action> {
        let mut chosen = None;

        for depth in 1..=self.max_depth {
            match self.alpha_beta.choose_action(game_state, depth) {
                Some(action) => {
                    debug!("depth {} search chose {:?}", depth, action);
                    publish(action.clone());
                    chosen = Some(action);
                }
                None => break,
            }
        }

        chosen
    }
}
