use rand::Rng;

use crate::grid::{Cell, GridSize};
use crate::snake::Snake;

/// Returns every grid cell the snake does not occupy, row-major.
#[must_use]
pub fn vacant_cells(grid: GridSize, snake: &Snake) -> Vec<Cell> {
    grid.cells().filter(|cell| !snake.occupies(*cell)).collect()
}

/// Picks a food cell uniformly among the vacant cells.
///
/// Returns `None` when the snake fills the grid. The previous food cell never
/// needs excluding: it is either the new head or still vacant at initial placement.
#[must_use]
pub fn spawn_food<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Option<Cell> {
    let candidates = vacant_cells(grid, snake);
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{spawn_food, vacant_cells};
    use crate::grid::{Cell, GridSize};
    use crate::input::Direction;
    use crate::snake::Snake;

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridSize::new(6, 8).expect("6x8 grid is valid");
        let snake = Snake::initial();

        for _ in 0..100 {
            let food = spawn_food(&mut rng, grid, &snake).expect("grid has free cells");
            assert!(!snake.occupies(food));
            assert!(!grid.is_out_of_bounds(food));
        }
    }

    #[test]
    fn last_vacant_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = GridSize::new(2, 3).expect("2x3 grid is valid");
        let snake = Snake::from_segments(
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(1, 1),
            ],
            Direction::Left,
        )
        .expect("segments are unique");

        assert_eq!(vacant_cells(grid, &snake), vec![Cell::new(1, 0)]);
        for _ in 0..10 {
            assert_eq!(spawn_food(&mut rng, grid, &snake), Some(Cell::new(1, 0)));
        }
    }

    #[test]
    fn full_grid_has_no_food() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = GridSize::new(2, 3).expect("2x3 grid is valid");
        let snake = Snake::from_segments(
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(1, 1),
                Cell::new(1, 0),
            ],
            Direction::Left,
        )
        .expect("segments are unique");

        assert!(vacant_cells(grid, &snake).is_empty());
        assert_eq!(spawn_food(&mut rng, grid, &snake), None);
    }
}
