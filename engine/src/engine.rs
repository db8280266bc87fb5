use std::fmt::Debug;

/// Read-only contract over a two-player, zero-sum, perfect-information game.
///
/// States are immutable values: `take_action` produces a successor rather
/// than mutating in place, so the states reachable from any root form an
/// acyclic game tree.
pub trait GameEngine {
    type State;
    type Action: Clone + Eq + Debug;
    type Location: Clone + Eq + Debug;

    /// Legal actions in a stable enumeration order. Empty iff the state is
    /// terminal.
    fn actions(&self, game_state: &Self::State) -> Vec<Self::Action>;

    /// Deterministic successor of `game_state` under `action`.
    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State;

    fn is_terminal(&self, game_state: &Self::State) -> bool;

    /// Terminal utility from `player_id`'s perspective. Only defined when
    /// `is_terminal` holds.
    fn utility(&self, game_state: &Self::State, player_id: usize) -> f32;

    /// The player whose turn it is, 0 or 1.
    fn player_to_move(&self, game_state: &Self::State) -> usize;

    /// Number of half-moves played so far.
    fn ply_count(&self, game_state: &Self::State) -> usize;

    /// Where `player_id`'s piece currently sits, if it has been placed.
    fn player_location(&self, game_state: &Self::State, player_id: usize)
        -> Option<Self::Location>;

    /// The locations reachable from `location` under the game's movement
    /// rule.
    fn liberties(&self, game_state: &Self::State, location: &Self::Location)
        -> Vec<Self::Location>;

    fn has_liberties(&self, game_state: &Self::State, player_id: usize) -> bool {
        self.player_location(game_state, player_id)
            .map_or(false, |loc| !self.liberties(game_state, &loc).is_empty())
    }
}
