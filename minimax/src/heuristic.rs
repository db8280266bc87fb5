use engine::engine::GameEngine;

/// Static evaluation of a non-terminal state from one player's perspective.
/// Higher is better for that player; callers assume no bounds.
pub trait Heuristic<E: GameEngine> {
    fn score(&self, game_engine: &E, game_state: &E::State, player_id: usize) -> f32;
}

/// Mobility score: own liberty count minus the opponent's. A player without
/// a placed piece contributes zero liberties.
#[derive(Default)]
pub struct LibertyDifference;

impl LibertyDifference {
    pub fn new() -> Self {
        Self {}
    }

    fn liberty_count<E: GameEngine>(game_engine: &E, game_state: &E::State, player_id: usize) -> usize {
        game_engine
            .player_location(game_state, player_id)
            .map_or(0, |loc| game_engine.liberties(game_state, &loc).len())
    }
}

impl<E: GameEngine> Heuristic<E> for LibertyDifference {
    fn score(&self, game_engine: &E, game_state: &E::State, player_id: usize) -> f32 {
        let own = Self::liberty_count(game_engine, game_state, player_id);
        let opp = Self::liberty_count(game_engine, game_state, 1 - player_id);

        own as f32 - opp as f32
    }
}
