use std::cell::Cell;

use engine::engine::GameEngine;

use super::heuristic::Heuristic;

/// Minimax with alpha-beta pruning. `alpha` carries the best value the
/// maximizer can already guarantee and `beta` the minimizer's counterpart;
/// a node stops examining children once `beta <= alpha`. Values match plain
/// minimax at equal depth while visiting no more nodes.
pub struct AlphaBeta<'a, E, H> {
    game_engine: &'a E,
    heuristic: &'a H,
    player_id: usize,
    nodes_visited: Cell<usize>,
}

impl<'a, E, H> AlphaBeta<'a, E, H>
where
    E: GameEngine,
    H: Heuristic<E>,
{
    pub fn new(game_engine: &'a E, heuristic: &'a H, player_id: usize) -> Self {
        Self {
            game_engine,
            heuristic,
            player_id,
            nodes_visited: Cell::new(0),
        }
    }

    /// Top-level decision. Each root branch starts from fresh bounds;
    /// nothing learned in one branch prunes its siblings. Ties break to the
    /// first maximal action in enumeration order.
    pub fn choose_action(&self, game_state: &E::State, depth: usize) -> Option<E::Action> {
        let mut best: Option<(E::Action, f32)> = None;

        for action in self.game_engine.actions(game_state) {
            let successor = self.game_engine.take_action(game_state, &action);
            let value = self.min_value(
                &successor,
                depth.saturating_sub(1),
                f32::NEG_INFINITY,
                f32::INFINITY,
            );

            match &best {
                Some((_, best_value)) if value <= *best_value => {}
                _ => best = Some((action, value)),
            }
        }

        best.map(|(action, _)| action)
    }

    /// The search value of `game_state` with the agent to move, pruning
    /// throughout.
    pub fn value_of(&self, game_state: &E::State, depth: usize) -> f32 {
        self.max_value(game_state, depth, f32::NEG_INFINITY, f32::INFINITY)
    }

    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited.get()
    }

    pub fn reset_nodes_visited(&self) {
        self.nodes_visited.set(0);
    }

    fn max_value(&self, game_state: &E::State, depth: usize, mut alpha: f32, beta: f32) -> f32 {
        self.nodes_visited.set(self.nodes_visited.get() + 1);

        if self.game_engine.is_terminal(game_state) {
            return self.game_engine.utility(game_state, self.player_id);
        }
        if depth == 0 {
            return self
                .heuristic
                .score(self.game_engine, game_state, self.player_id);
        }

        let mut value = f32::NEG_INFINITY;
        for action in self.game_engine.actions(game_state) {
            let successor = self.game_engine.take_action(game_state, &action);
            value = value.max(self.min_value(&successor, depth - 1, alpha, beta));
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        value
    }

    fn min_value(&self, game_state: &E::State, depth: usize, alpha: f32, mut beta: f32) -> f32 {
        self.nodes_visited.set(self.nodes_visited.get() + 1);

        if self.game_engine.is_terminal(game_state) {
            return self.game_engine.utility(game_state, self.player_id);
        }
        if depth == 0 {
            return self
                .heuristic
                .score(self.game_engine, game_state, self.player_id);
        }

        let mut value = f32::INFINITY;
        for action in self.game_engine.actions(game_state) {
            let successor = self.game_engine.take_action(game_state, &action);
            value = value.min(self.max_value(&successor, depth - 1, alpha, beta));
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        value
    }
}
