use anyhow::{anyhow, Result};
use generational_arena::{Arena, Index};
use itertools::Itertools;
use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use engine::engine::GameEngine;
use engine::game_state::GameState;

use super::node::MCTSNode;
use super::options::MCTSOptions;

/// Monte Carlo Tree Search over one action-selection request. The tree is
/// built, queried and discarded within a single `run`; nothing is reused
/// across requests.
pub struct MCTS<'a, E, R>
where
    E: GameEngine,
{
    options: MCTSOptions,
    game_engine: &'a E,
    root: Index,
    arena: Arena<MCTSNode<E::State, E::Action>>,
    rng: R,
}

/// Visit and reward statistics of the root's children, for inspection and
/// tests.
#[derive(Debug)]
pub struct NodeMetrics<A> {
    pub visits: usize,
    pub children: Vec<(A, f32, usize)>,
}

impl<'a, E, R> MCTS<'a, E, R>
where
    E: GameEngine,
    E::State: GameState,
    R: Rng,
{
    pub fn new(game_state: E::State, game_engine: &'a E, options: MCTSOptions, rng: R) -> Self {
        let legal_actions = game_engine.actions(&game_state);
        let mut arena = Arena::new();
        let root = arena.insert(MCTSNode::new(game_state, None, None, legal_actions));

        MCTS {
            options,
            game_engine,
            root,
            arena,
            rng,
        }
    }

    /// Runs the full cycle and extracts an action. A root that is already
    /// terminal skips the cycle and answers with a uniformly random legal
    /// action. A recoverable fault mid-cycle abandons the remaining
    /// iterations and extraction proceeds on whatever tree exists.
    pub fn run(&mut self) -> Result<E::Action> {
        if self.game_engine.is_terminal(self.arena[self.root].game_state()) {
            let actions = self.game_engine.actions(self.arena[self.root].game_state());
            return actions
                .choose(&mut self.rng)
                .cloned()
                .ok_or_else(|| anyhow!("no decision available: terminal root offers no actions"));
        }

        for iteration in 0..self.options.iterations {
            if let Err(err) = self.iterate() {
                warn!(
                    "abandoning search after {} of {} iterations: {}",
                    iteration, self.options.iterations, err
                );
                break;
            }
        }

        self.best_action()
    }

    /// One selection / expansion / simulation / backpropagation pass.
    fn iterate(&mut self) -> Result<()> {
        let leaf = self.select()?;
        let reward = self.simulate(leaf)?;
        self.backpropagate(leaf, reward);
        Ok(())
    }

    /// Descends from the root along best children until reaching a node
    /// that is terminal (returned as-is) or not fully explored (expanded).
    fn select(&mut self) -> Result<Index> {
        let mut index = self.root;

        loop {
            if self.game_engine.is_terminal(self.arena[index].game_state()) {
                return Ok(index);
            }
            if !self.arena[index].is_fully_explored() {
                return self.expand(index);
            }
            index = self
                .best_child(index)
                .ok_or_else(|| anyhow!("fully explored interior node has no children"))?;
        }
    }

    /// Expands the parent's first untried action into a new child node.
    fn expand(&mut self, parent: Index) -> Result<Index> {
        let action = self.arena[parent]
            .next_untried_action()
            .cloned()
            .ok_or_else(|| anyhow!("expansion requested on a fully explored node"))?;

        let child_state = self
            .game_engine
            .take_action(self.arena[parent].game_state(), &action);
        let legal_actions = self.game_engine.actions(&child_state);

        let child = self.arena.insert(MCTSNode::new(
            child_state,
            Some(parent),
            Some(action),
            legal_actions,
        ));
        self.arena[parent].push_child(child);

        Ok(child)
    }

    /// Random playout to a terminal state. The outcome is scored against
    /// the player to move at the start of the rollout: -1 if that player
    /// still has liberties when the game ends, +1 otherwise.
    fn simulate(&mut self, index: Index) -> Result<f32> {
        let mut game_state = self.arena[index].game_state().clone();
        let mover = self.game_engine.player_to_move(&game_state);

        while !self.game_engine.is_terminal(&game_state) {
            let actions = self.game_engine.actions(&game_state);
            let action = actions
                .choose(&mut self.rng)
                .ok_or_else(|| anyhow!("rollout reached a dead non-terminal state"))?;
            game_state = self.game_engine.take_action(&game_state, action);
        }

        if self.game_engine.has_liberties(&game_state, mover) {
            Ok(-1.0)
        } else {
            Ok(1.0)
        }
    }

    /// Walks from the simulated node up to and including the root, folding
    /// the reward in and negating it at every step; one player's gain is
    /// the other's loss one ply up.
    fn backpropagate(&mut self, index: Index, reward: f32) {
        let mut current = Some(index);
        let mut reward = reward;

        while let Some(index) = current {
            let node = &mut self.arena[index];
            node.record_reward(reward);
            reward = -reward;
            current = node.parent();
        }
    }

    /// UCB1 best child. All children tied at the maximal score are
    /// collected and one is chosen uniformly; `None` for a childless node.
    fn best_child(&mut self, index: Index) -> Option<Index> {
        let parent_visits = self.arena[index].visits() as f32;
        let exploration_constant = self.options.exploration_constant;

        let scored: Vec<(Index, f32)> = self.arena[index]
            .children()
            .iter()
            .map(|&child| {
                let node = &self.arena[child];
                let exploitation = node.cumulative_reward() / node.visits() as f32;
                let exploration =
                    exploration_constant * (parent_visits.ln() / node.visits() as f32).sqrt();
                (child, exploitation + exploration)
            })
            .collect();

        let tied = scored
            .into_iter()
            .max_set_by(|(_, a), (_, b)| a.total_cmp(b));

        tied.choose(&mut self.rng).map(|(child, _)| *child)
    }

    /// Extracts the final answer: the root's best child by the same UCB1
    /// scoring the tree policy uses.
    fn best_action(&mut self) -> Result<E::Action> {
        let best = self
            .best_child(self.root)
            .ok_or_else(|| anyhow!("no decision available: root has no children"))?;

        self.arena[best]
            .parent_action()
            .cloned()
            .ok_or_else(|| anyhow!("non-root node is missing its parent action"))
    }

    pub fn root_metrics(&self) -> NodeMetrics<E::Action> {
        let root = &self.arena[self.root];

        NodeMetrics {
            visits: root.visits(),
            children: root
                .children()
                .iter()
                .filter_map(|&child| {
                    let node = &self.arena[child];
                    node.parent_action()
                        .cloned()
                        .map(|action| (action, node.cumulative_reward(), node.visits()))
                })
                .collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    #[cfg(test)]
    pub(crate) fn nodes(&self) -> impl Iterator<Item = &MCTSNode<E::State, E::Action>> {
        self.arena.iter().map(|(_, node)| node)
    }

    #[cfg(test)]
    pub(crate) fn node(&self, index: Index) -> &MCTSNode<E::State, E::Action> {
        &self.arena[index]
    }

    #[cfg(test)]
    pub(crate) fn root_index(&self) -> Index {
        self.root
    }
}
