use std::collections::HashSet;

use grid_snake::config::{FASTEST_INTERVAL_MS, INITIAL_SNAKE_LENGTH};
use grid_snake::game::{GamePhase, GameState, TickOutcome};
use grid_snake::grid::{Cell, GridSize};
use grid_snake::input::Direction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn assert_invariants(state: &GameState) {
    assert_eq!(
        state.snake.len(),
        INITIAL_SNAKE_LENGTH + state.score as usize,
        "length must equal initial length plus score"
    );

    let unique: HashSet<Cell> = state.snake.segments().copied().collect();
    assert_eq!(unique.len(), state.snake.len(), "snake overlaps itself");

    for segment in state.snake.segments() {
        assert!(!state.grid().is_out_of_bounds(*segment));
    }

    if state.phase != GamePhase::GameOver {
        let food = state.food.expect("running game always has food");
        assert!(!state.snake.occupies(food), "food placed on the snake");
    }

    assert!(state.speed().as_millis() >= u128::from(FASTEST_INTERVAL_MS));
}

/// Steers toward the food, falling back to any safe neighbour.
fn greedy_direction(state: &GameState) -> Direction {
    let head = state.snake.head();
    let safe = |direction: Direction| {
        let next = head.step(direction);
        !state.grid().is_out_of_bounds(next)
            && !state.snake.occupies(next)
            && direction != state.direction().opposite()
    };

    let toward_food = state.food.and_then(|food| {
        let preferred = [
            (food.row < head.row, Direction::Up),
            (food.row > head.row, Direction::Down),
            (food.col < head.col, Direction::Left),
            (food.col > head.col, Direction::Right),
        ];
        preferred
            .into_iter()
            .find(|&(wanted, direction)| wanted && safe(direction))
            .map(|(_, direction)| direction)
    });

    toward_food
        .or_else(|| DIRECTIONS.into_iter().find(|&direction| safe(direction)))
        .unwrap_or(state.direction())
}

#[test]
fn random_input_never_breaks_invariants() {
    let grid = GridSize::new(8, 8).expect("8x8 grid is valid");

    for seed in 0..20 {
        let mut input_rng = StdRng::seed_from_u64(seed + 1000);
        let mut state = GameState::new_with_seed(grid, seed);
        state.start();
        assert_invariants(&state);

        for _ in 0..500 {
            for _ in 0..input_rng.gen_range(0..3) {
                state.enqueue_direction(DIRECTIONS[input_rng.gen_range(0..4)]);
            }

            let outcome = state.tick();
            assert_invariants(&state);

            if matches!(outcome, TickOutcome::GameOver(_)) {
                state.restart();
                state.start();
            }
        }
    }
}

#[test]
fn greedy_play_scores_and_respects_the_speed_floor() {
    let grid = GridSize::new(10, 10).expect("10x10 grid is valid");
    let mut state = GameState::new_with_seed(grid, 99);
    state.start();

    // Drain the starting Right so each later tick uses the fresh choice.
    let mut ate = usize::from(state.tick() == TickOutcome::Ate);
    for _ in 0..2_000 {
        let direction = greedy_direction(&state);
        state.enqueue_direction(direction);

        match state.tick() {
            TickOutcome::Ate => ate += 1,
            TickOutcome::GameOver(_) => break,
            TickOutcome::Moved | TickOutcome::Skipped => {}
        }
        assert_invariants(&state);
    }

    assert!(ate > 0, "greedy play should reach at least one food");
    assert_eq!(state.score as usize, state.snake.len() - INITIAL_SNAKE_LENGTH);
}
