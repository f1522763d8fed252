use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::INITIAL_SNAKE_LENGTH;

/// One grid cell, addressed as (row, col).
///
/// Coordinates are signed so that the neighbour of an edge cell can be
/// represented and then rejected by [`GridSize::is_out_of_bounds`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Renders the `"row-col"` identifier used at the rendering boundary.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Failure to parse a `"row-col"` identifier.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum CellParseError {
    #[error("cell id `{0}` is missing the `-` separator")]
    MissingSeparator(String),
    #[error("cell id `{id}` has a non-numeric {part}")]
    InvalidNumber { id: String, part: &'static str },
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        // A leading `-` belongs to a negative row, so split after the first char.
        let split_at = id
            .char_indices()
            .skip(1)
            .find(|(_, ch)| *ch == '-')
            .map(|(index, _)| index)
            .ok_or_else(|| CellParseError::MissingSeparator(id.to_owned()))?;

        let (row, col) = (&id[..split_at], &id[split_at + 1..]);
        let row = row.parse().map_err(|_| CellParseError::InvalidNumber {
            id: id.to_owned(),
            part: "row",
        })?;
        let col = col.parse().map_err(|_| CellParseError::InvalidNumber {
            id: id.to_owned(),
            part: "column",
        })?;

        Ok(Self { row, col })
    }
}

/// Grid dimensions that cannot host a game.
#[derive(Debug, Clone, Copy, Error, Eq, PartialEq)]
pub enum GridError {
    #[error("grid needs at least {min} columns for the starting snake, got {cols}")]
    TooNarrow { cols: u16, min: usize },
    #[error("grid {rows}x{cols} leaves no free cell for the first food")]
    NoRoomForFood { rows: u16, cols: u16 },
}

/// Fixed R x C grid dimensions. Purely structural, no mutable state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    rows: u16,
    cols: u16,
}

impl GridSize {
    /// Validates that the grid can hold the starting snake plus one food.
    pub fn new(rows: u16, cols: u16) -> Result<Self, GridError> {
        if usize::from(cols) < INITIAL_SNAKE_LENGTH {
            return Err(GridError::TooNarrow {
                cols,
                min: INITIAL_SNAKE_LENGTH,
            });
        }

        let grid = Self { rows, cols };
        if grid.total_cells() <= INITIAL_SNAKE_LENGTH {
            return Err(GridError::NoRoomForFood { rows, cols });
        }

        Ok(grid)
    }

    #[must_use]
    pub fn rows(self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(self) -> u16 {
        self.cols
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    /// Builds a cell from raw coordinates. Total; bounds are checked separately.
    #[must_use]
    pub fn to_id(self, row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Parses a boundary identifier back into a cell.
    pub fn from_id(self, id: &str) -> Result<Cell, CellParseError> {
        id.parse()
    }

    /// Returns true iff row is outside `[0, rows)` or col is outside `[0, cols)`.
    #[must_use]
    pub fn is_out_of_bounds(self, cell: Cell) -> bool {
        cell.row < 0
            || cell.col < 0
            || cell.row >= i32::from(self.rows)
            || cell.col >= i32::from(self.cols)
    }

    /// Iterates every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let cols = i32::from(self.cols);
        (0..i32::from(self.rows)).flat_map(move |row| (0..cols).map(move |col| Cell { row, col }))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            rows: crate::config::DEFAULT_NUM_ROWS,
            cols: crate::config::DEFAULT_NUM_COLS,
        }
    }
}
