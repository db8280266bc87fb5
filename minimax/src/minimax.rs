use std::cell::Cell;

use engine::engine::GameEngine;

use super::heuristic::Heuristic;

/// Depth-limited minimax without pruning. Every node reachable within the
/// depth budget is visited, which makes this the reference point the pruned
/// search is checked against.
pub struct Minimax<'a, E, H> {
    game_engine: &'a E,
    heuristic: &'a H,
    player_id: usize,
    nodes_visited: Cell<usize>,
}

impl<'a, E, H> Minimax<'a, E, H>
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

    /// The action maximizing the minimizer's best reply at the given depth.
    /// Ties break to the first maximal action in enumeration order. `None`
    /// when the state has no legal actions.
    pub fn choose_action(&self, game_state: &E::State, depth: usize) -> Option<E::Action> {
        let mut best: Option<(E::Action, f32)> = None;

        for action in self.game_engine.actions(game_state) {
            let successor = self.game_engine.take_action(game_state, &action);
            let value = self.min_value(&successor, depth.saturating_sub(1));

            match &best {
                Some((_, best_value)) if value <= *best_value => {}
                _ => best = Some((action, value)),
            }
        }

        best.map(|(action, _)| action)
    }

    /// The minimax value of `game_state` with the agent to move.
    pub fn value_of(&self, game_state: &E::State, depth: usize) -> f32 {
        self.max_value(game_state, depth)
    }

    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited.get()
    }

    pub fn reset_nodes_visited(&self) {
        self.nodes_visited.set(0);
    }

    fn max_value(&self, game_state: &E::State, depth: usize) -> f32 {
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
            value = value.max(self.min_value(&successor, depth - 1));
        }
        value
    }

    fn min_value(&self, game_state: &E::State, depth: usize) -> f32 {
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
            value = value.min(self.max_value(&successor, depth - 1));
        }
        value
    }
}
