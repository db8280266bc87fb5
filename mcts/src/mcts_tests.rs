use common::create_rng;
use engine::game_state::GameState as GameStateTrait;
use isolation::{Action, Engine, GameState, Square, NUM_SQUARES};
use rand::rngs::StdRng;

use crate::counting_game::{CountingGameEngine, CountingGameState};
use crate::mcts::MCTS;
use crate::options::MCTSOptions;

/// A deterministic midgame position with both pieces placed.
fn midgame_state() -> GameState {
    GameState::initial()
        .apply(&Action::Place(Square::from_coords(2, 2).unwrap()))
        .apply(&Action::Place(Square::from_coords(7, 5).unwrap()))
        .apply(&Action::Move(Square::from_coords(3, 4).unwrap()))
        .apply(&Action::Move(Square::from_coords(5, 4).unwrap()))
}

fn search(
    game_engine: &Engine,
    game_state: GameState,
    iterations: usize,
    seed: u64,
) -> MCTS<'_, Engine, StdRng> {
    MCTS::new(
        game_state,
        game_engine,
        MCTSOptions::new(iterations, std::f32::consts::SQRT_2),
        create_rng(Some(seed)),
    )
}

#[test]
fn test_every_iteration_visits_the_root() {
    let game_engine = Engine::new();
    let mut mcts = search(&game_engine, midgame_state(), 60, 42);

    mcts.run().unwrap();

    // The root starts at one visit and every iteration backpropagates
    // through it exactly once.
    assert_eq!(mcts.root_metrics().visits, 61);
}

#[test]
fn test_rewards_stay_within_visit_bounds() {
    let game_engine = Engine::new();
    let mut mcts = search(&game_engine, midgame_state(), 60, 42);

    mcts.run().unwrap();

    for node in mcts.nodes() {
        assert!(node.cumulative_reward().abs() <= node.visits() as f32);
        assert!(node.visits() >= 1);
    }
}

#[test]
fn test_children_expand_in_enumeration_order() {
    let game_engine = Engine::new();
    let state = midgame_state();
    let legal = state.legal_actions();
    let mut mcts = search(&game_engine, state, 60, 42);

    mcts.run().unwrap();

    let children: Vec<_> = mcts
        .root_metrics()
        .children
        .iter()
        .map(|(action, _, _)| action.clone())
        .collect();
    assert_eq!(children, legal[..children.len()]);
}

#[test]
fn test_same_seed_same_action() {
    let game_engine = Engine::new();

    let first = search(&game_engine, midgame_state(), 60, 9).run().unwrap();
    let second = search(&game_engine, midgame_state(), 60, 9).run().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_single_escape_square_is_found() {
    // Player 0 is cornered with one remaining knight destination.
    let corner = Square::from_coords(0, 0).unwrap();
    let blocked = Square::from_coords(2, 1).unwrap();
    let opponent = Square::from_coords(7, 5).unwrap();
    let state = GameState {
        open: ((1u128 << NUM_SQUARES) - 1) & !corner.bit() & !blocked.bit() & !opponent.bit(),
        locs: [Some(corner), Some(opponent)],
        ply: 4,
    };

    let game_engine = Engine::new();
    let action = search(&game_engine, state, 60, 42).run().unwrap();

    assert_eq!(action, Action::Move(Square::from_coords(1, 2).unwrap()));
}

#[test]
fn test_terminal_root_with_actions_skips_the_cycle() {
    // The counting game keeps offering actions even at a boundary count.
    let game_engine = CountingGameEngine {};
    let mut mcts = MCTS::new(
        CountingGameState::from_starting_count(true, 100),
        &game_engine,
        MCTSOptions::default(),
        create_rng(Some(42)),
    );

    mcts.run().unwrap();

    assert_eq!(mcts.node_count(), 1);
    assert_eq!(mcts.root_metrics().visits, 1);
}

#[test]
fn test_terminal_root_without_actions_is_an_error() {
    // Confine player 0's piece to the corner with every knight
    // destination closed.
    let corner = Square::from_coords(0, 0).unwrap();
    let mut open = ((1u128 << NUM_SQUARES) - 1) & !corner.bit();
    for dest in corner.knight_destinations() {
        open &= !dest.bit();
    }
    let state = GameState {
        open,
        locs: [Some(corner), Some(Square::from_coords(5, 4).unwrap())],
        ply: 4,
    };

    let game_engine = Engine::new();
    assert!(search(&game_engine, state, 60, 42).run().is_err());
}
