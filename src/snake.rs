use std::collections::{HashSet, VecDeque};

use thiserror::Error;

use crate::config::INITIAL_SNAKE_LENGTH;
use crate::grid::Cell;
use crate::input::Direction;

/// Segment lists that cannot form a snake.
#[derive(Debug, Clone, Copy, Error, Eq, PartialEq)]
pub enum SnakeError {
    #[error("snake needs at least one segment")]
    Empty,
    #[error("snake segment {0} appears more than once")]
    DuplicateSegment(Cell),
}

/// Snake body plus its current heading.
///
/// `body` is ordered oldest-first: the front is the tail, the back is the
/// head. `occupied` mirrors `body` for constant-time collision checks and is
/// only ever touched together with it.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    occupied: HashSet<Cell>,
    direction: Direction,
}

impl Snake {
    /// Creates the starting snake: row 0, cols `0..INITIAL_SNAKE_LENGTH`, heading right.
    #[must_use]
    pub fn initial() -> Self {
        let body: VecDeque<Cell> = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|col| Cell::new(0, col))
            .collect();
        let occupied = body.iter().copied().collect();

        Self {
            body,
            occupied,
            direction: Direction::Right,
        }
    }

    /// Creates a snake from explicit segments, tail first and head last.
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Result<Self, SnakeError> {
        if segments.is_empty() {
            return Err(SnakeError::Empty);
        }

        let mut occupied = HashSet::with_capacity(segments.len());
        for segment in &segments {
            if !occupied.insert(*segment) {
                return Err(SnakeError::DuplicateSegment(*segment));
            }
        }

        Ok(Self {
            body: VecDeque::from(segments),
            occupied,
            direction,
        })
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    /// Appends a new head. The caller guarantees `cell` is not already occupied.
    pub fn push_head(&mut self, cell: Cell) {
        let inserted = self.occupied.insert(cell);
        debug_assert!(inserted, "new head {cell} overlaps the body");
        self.body.push_back(cell);
    }

    /// Drops the oldest segment and returns it.
    pub fn pop_tail(&mut self) -> Option<Cell> {
        let tail = self.body.pop_front()?;
        self.occupied.remove(&tail);
        Some(tail)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Iterates over body segments from tail to head.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Snake, SnakeError};
    use crate::grid::Cell;
    use crate::input::Direction;

    #[test]
    fn initial_snake_lies_in_row_zero_heading_right() {
        let snake = Snake::initial();

        let segments: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
        );
        assert_eq!(snake.tail(), Cell::new(0, 0));
        assert_eq!(snake.head(), Cell::new(0, 2));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn push_and_pop_keep_membership_in_sync() {
        let mut snake = Snake::initial();

        snake.push_head(Cell::new(0, 3));
        assert!(snake.occupies(Cell::new(0, 3)));
        assert_eq!(snake.len(), 4);

        assert_eq!(snake.pop_tail(), Some(Cell::new(0, 0)));
        assert!(!snake.occupies(Cell::new(0, 0)));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(0, 3));
    }

    #[test]
    fn from_segments_rejects_duplicates_and_empty_bodies() {
        assert_eq!(
            Snake::from_segments(Vec::new(), Direction::Up).unwrap_err(),
            SnakeError::Empty
        );

        let err = Snake::from_segments(
            vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 1)],
            Direction::Right,
        )
        .unwrap_err();
        assert_eq!(err, SnakeError::DuplicateSegment(Cell::new(1, 1)));
    }
}
