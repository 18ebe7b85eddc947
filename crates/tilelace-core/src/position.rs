//! Grid coordinates and slot indices for the 3×3 board.
//!
//! This module provides [`CellIndex`], a validated linear slot index in
//! row-major order, and [`Position`], the corresponding `(row, col)`
//! coordinate pair. The two are in bijection via `index = row * 3 + col`
//! and its div/mod inverse; the presentation layer uses the same mapping
//! for rendering and click-hit-testing.
//!
//! # Examples
//!
//! ```
//! use tilelace_core::{CellIndex, Position};
//!
//! let index = CellIndex::new(5);
//! assert_eq!(index.position(), Position::new(1, 2));
//! assert_eq!(Position::new(1, 2).cell_index(), index);
//! ```

use std::fmt::{self, Display};

/// Number of rows and columns on the board.
pub const GRID_SIZE: u8 = 3;

/// Number of board slots (`GRID_SIZE` squared).
pub const CELL_COUNT: u8 = GRID_SIZE * GRID_SIZE;

/// A linear board slot index in the range 0-8, row-major.
///
/// This type ensures at construction time that the index is within the
/// valid range, so downstream board lookups never bounds-fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    index: u8,
}

impl CellIndex {
    /// Creates a new slot index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < CELL_COUNT, "Cell index must be 0-8");
        Self { index }
    }

    /// Returns the underlying index value (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the `(row, col)` position of this slot.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tilelace_core::{CellIndex, Position};
    /// assert_eq!(CellIndex::new(0).position(), Position::new(0, 0));
    /// assert_eq!(CellIndex::new(8).position(), Position::new(2, 2));
    /// ```
    #[must_use]
    pub const fn position(self) -> Position {
        Position::new(self.index / GRID_SIZE, self.index % GRID_SIZE)
    }

    /// Returns an iterator over all 9 valid slot indices, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tilelace_core::CellIndex;
    /// let indices: Vec<_> = CellIndex::all().collect();
    /// assert_eq!(indices.len(), 9);
    /// assert_eq!(indices[0].index(), 0);
    /// assert_eq!(indices[8].index(), 8);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT).map(CellIndex::new)
    }
}

impl Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.index, f)
    }
}

impl From<Position> for CellIndex {
    fn from(pos: Position) -> Self {
        pos.cell_index()
    }
}

/// A `(row, col)` coordinate on the board, each component in the range 0-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-2.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < GRID_SIZE, "Row must be 0-2");
        assert!(col < GRID_SIZE, "Column must be 0-2");
        Self { row, col }
    }

    /// Returns the row component (0-2).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column component (0-2).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the linear slot index of this position (`row * 3 + col`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use tilelace_core::{CellIndex, Position};
    /// assert_eq!(Position::new(2, 1).cell_index(), CellIndex::new(7));
    /// ```
    #[must_use]
    pub const fn cell_index(self) -> CellIndex {
        CellIndex::new(self.row * GRID_SIZE + self.col)
    }

    /// Returns `true` if `other` is orthogonally adjacent to this position.
    ///
    /// Orthogonal adjacency means exactly one of row or column differs, by
    /// exactly one: Manhattan distance 1. Diagonal neighbours and the
    /// position itself are not adjacent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tilelace_core::Position;
    /// let center = Position::new(1, 1);
    /// assert!(center.is_adjacent(Position::new(0, 1)));
    /// assert!(center.is_adjacent(Position::new(1, 2)));
    /// assert!(!center.is_adjacent(Position::new(0, 0))); // diagonal
    /// assert!(!center.is_adjacent(center)); // self
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);
        row_diff + col_diff == 1
    }

    /// Returns an iterator over the orthogonal neighbours of this position.
    ///
    /// Corner positions have 2 neighbours, edge positions 3, and the center 4.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tilelace_core::Position;
    /// assert_eq!(Position::new(0, 0).orthogonal_neighbors().count(), 2);
    /// assert_eq!(Position::new(0, 1).orthogonal_neighbors().count(), 3);
    /// assert_eq!(Position::new(1, 1).orthogonal_neighbors().count(), 4);
    /// ```
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Self> {
        const OFFSETS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            (row < GRID_SIZE && col < GRID_SIZE).then(|| Self::new(row, col))
        })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<CellIndex> for Position {
    fn from(index: CellIndex) -> Self {
        index.position()
    }
}
