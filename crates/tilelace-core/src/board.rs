//! The puzzle board: a permutation of the nine cell values.
//!
//! A [`Board`] assigns one [`Tile`] to each of the nine slots in row-major
//! order. The permutation invariant (every tile present exactly once) is
//! established at construction and preserved by every operation: a move is
//! a single swap of the blank with an orthogonally adjacent tile, and
//! [`Board::apply_move`] returns a new board value rather than mutating in
//! place, so the host can replace its state wholesale on each move.
//!
//! # Examples
//!
//! ```
//! use tilelace_core::{Board, CellIndex};
//!
//! let board = Board::SOLVED;
//! assert!(board.is_solved());
//! assert_eq!(board.blank_index(), CellIndex::new(8));
//!
//! // Slide the tile above the blank down into it.
//! let board = board.apply_move(CellIndex::new(5)).unwrap();
//! assert!(!board.is_solved());
//! assert!(board.is_solvable());
//! ```

use std::fmt::{self, Display};

use crate::{
    position::{CELL_COUNT, GRID_SIZE},
    CellIndex, Position, Tile,
};

/// An illegal move request.
///
/// Non-fatal: the board is left unchanged and the caller may ignore the
/// request or surface it as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The selected slot is not orthogonally adjacent to the blank.
    #[display("slot {target} is not adjacent to the blank at slot {blank}")]
    NotAdjacent {
        /// The slot the caller selected.
        target: CellIndex,
        /// The slot currently holding the blank.
        blank: CellIndex,
    },
}

/// A board value that violates the permutation invariant.
///
/// This indicates a contract violation by the integrating host, not a
/// user-facing condition; the recommended recovery is to discard the board
/// and generate a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The value sequence does not have exactly 9 elements.
    #[display("expected 9 tile values, got {len}")]
    WrongLength {
        /// Number of values supplied.
        len: usize,
    },
    /// A value falls outside the range 0-8.
    #[display("tile value out of range: {value}")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
    },
    /// A value appears more than once.
    #[display("duplicate tile value: {value}")]
    DuplicateValue {
        /// The duplicated value.
        value: u8,
    },
}

/// A 3×3 sliding puzzle board.
///
/// Slots are indexed 0-8 in row-major order; the tile at a slot is the one
/// currently occupying that grid cell. The board is always a permutation of
/// all nine [`Tile`] values.
///
/// # Examples
///
/// ```
/// use tilelace_core::{Board, Tile};
///
/// let board = Board::from_values(&[8, 3, 1, 2, 5, 4, 7, 0, 6]).unwrap();
/// assert_eq!(board.tile(tilelace_core::CellIndex::new(1)), Tile::T3);
/// assert!(board.is_solvable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [Tile; 9],
}

impl Board {
    /// The canonical solved board: tile *k* in slot *k*, blank last.
    pub const SOLVED: Self = Self { tiles: Tile::ALL };

    /// Creates a board from a sequence of tile values.
    ///
    /// The sequence must contain each value 0-8 exactly once (value 8 is
    /// the blank).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongLength`] if `values` does not have exactly
    /// 9 elements, [`BoardError::ValueOutOfRange`] if a value exceeds 8, and
    /// [`BoardError::DuplicateValue`] if a value appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilelace_core::{Board, BoardError};
    ///
    /// assert!(Board::from_values(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).is_ok());
    /// assert_eq!(
    ///     Board::from_values(&[0, 1, 2]),
    ///     Err(BoardError::WrongLength { len: 3 })
    /// );
    /// assert_eq!(
    ///     Board::from_values(&[0, 1, 2, 3, 4, 5, 6, 7, 7]),
    ///     Err(BoardError::DuplicateValue { value: 7 })
    /// );
    /// ```
    pub fn from_values(values: &[u8]) -> Result<Self, BoardError> {
        if values.len() != usize::from(CELL_COUNT) {
            return Err(BoardError::WrongLength { len: values.len() });
        }
        let mut seen = [false; 9];
        let mut tiles = [Tile::Blank; 9];
        for (slot, &value) in values.iter().enumerate() {
            if value >= CELL_COUNT {
                return Err(BoardError::ValueOutOfRange { value });
            }
            if seen[usize::from(value)] {
                return Err(BoardError::DuplicateValue { value });
            }
            seen[usize::from(value)] = true;
            tiles[slot] = Tile::from_value(value);
        }
        Ok(Self { tiles })
    }

    /// Returns the tile at the given slot.
    #[must_use]
    pub fn tile(&self, index: CellIndex) -> Tile {
        self.tiles[usize::from(index.index())]
    }

    /// Returns the tiles in slot order.
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; 9] {
        &self.tiles
    }

    /// Returns the slot currently holding the blank.
    #[must_use]
    pub fn blank_index(&self) -> CellIndex {
        CellIndex::all()
            .find(|index| self.tile(*index).is_blank())
            .expect("board invariant: blank tile present")
    }

    /// Returns the slots that may legally be moved into the blank.
    ///
    /// These are the slots orthogonally adjacent to the blank's position;
    /// the presentation layer renders them as clickable.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilelace_core::Board;
    ///
    /// // Blank in the bottom-right corner: two movable tiles.
    /// assert_eq!(Board::SOLVED.legal_targets().count(), 2);
    /// ```
    pub fn legal_targets(&self) -> impl Iterator<Item = CellIndex> {
        self.blank_index()
            .position()
            .orthogonal_neighbors()
            .map(CellIndex::from)
    }

    /// Applies a move: swaps the tile at `target` with the blank.
    ///
    /// The move is legal iff `target` is orthogonally adjacent to the
    /// blank's slot. On success the returned board differs from `self` by
    /// exactly that one swap; `self` is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotAdjacent`] if `target` is not orthogonally
    /// adjacent to the blank (including `target` being the blank's own
    /// slot).
    ///
    /// # Examples
    ///
    /// ```
    /// use tilelace_core::{Board, CellIndex};
    ///
    /// let board = Board::SOLVED;
    /// let moved = board.apply_move(CellIndex::new(7)).unwrap();
    /// assert_eq!(moved.blank_index(), CellIndex::new(7));
    ///
    /// // Diagonal slot: illegal, board unchanged.
    /// assert!(board.apply_move(CellIndex::new(4)).is_err());
    /// ```
    pub fn apply_move(&self, target: CellIndex) -> Result<Self, MoveError> {
        let blank = self.blank_index();
        if !target.position().is_adjacent(blank.position()) {
            return Err(MoveError::NotAdjacent { target, blank });
        }
        let mut tiles = self.tiles;
        tiles.swap(usize::from(target.index()), usize::from(blank.index()));
        Ok(Self { tiles })
    }

    /// Returns `true` if the board is in the solved state.
    ///
    /// Checks that the tile values are non-decreasing in slot order, which
    /// under the permutation invariant is equivalent to tile *k* sitting in
    /// slot *k* with the blank last. This is a pure, re-evaluable
    /// predicate; callers polling it every render must track their own
    /// notified flag to report the solved transition exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Counts inversions among the numbered tiles, ignoring the blank.
    ///
    /// An inversion is a pair of slots `i < j` where the tile at `i` has a
    /// larger value than the tile at `j`.
    #[must_use]
    pub fn count_inversions(&self) -> u32 {
        let mut inversions = 0;
        for i in 0..self.tiles.len() {
            for j in (i + 1)..self.tiles.len() {
                if !self.tiles[i].is_blank()
                    && !self.tiles[j].is_blank()
                    && self.tiles[i] > self.tiles[j]
                {
                    inversions += 1;
                }
            }
        }
        inversions
    }

    /// Returns `true` if the board is reachable from the solved state.
    ///
    /// For an odd-width board the parity of the inversion count is
    /// invariant under legal moves, so a board is solvable iff its
    /// inversion count is even (the solved state has zero inversions).
    ///
    /// # Examples
    ///
    /// ```
    /// use tilelace_core::Board;
    ///
    /// assert!(Board::SOLVED.is_solvable());
    ///
    /// // Swapping two numbered tiles flips parity: unsolvable.
    /// let board = Board::from_values(&[1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    /// assert!(!board.is_solvable());
    /// ```
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.count_inversions() % 2 == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if col > 0 {
                    write!(f, " ")?;
                }
                let index = Position::new(row, col).cell_index();
                write!(f, "{}", self.tile(index))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board(values: [u8; 9]) -> Board {
        Board::from_values(&values).expect("valid board")
    }

    /// A random permutation of 0-8, derived from a proptest-chosen seed so
    /// shrinking stays deterministic.
    fn permutation(seed: u64) -> [u8; 9] {
        let mut values = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        let mut state = seed | 1;
        for i in (1..values.len()).rev() {
            // xorshift64 is plenty for test-case generation
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            #[expect(clippy::cast_possible_truncation)]
            let j = (state % (i as u64 + 1)) as usize;
            values.swap(i, j);
        }
        values
    }

    #[test]
    fn test_from_values_validation() {
        assert!(Board::from_values(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).is_ok());
        assert_eq!(
            Board::from_values(&[]),
            Err(BoardError::WrongLength { len: 0 })
        );
        assert_eq!(
            Board::from_values(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 8]),
            Err(BoardError::WrongLength { len: 10 })
        );
        assert_eq!(
            Board::from_values(&[0, 1, 2, 3, 4, 5, 6, 7, 9]),
            Err(BoardError::ValueOutOfRange { value: 9 })
        );
        assert_eq!(
            Board::from_values(&[0, 0, 2, 3, 4, 5, 6, 7, 8]),
            Err(BoardError::DuplicateValue { value: 0 })
        );
    }

    #[test]
    fn test_solved_board_layout() {
        assert!(Board::SOLVED.is_solved());
        assert!(Board::SOLVED.is_solvable());
        assert_eq!(Board::SOLVED.count_inversions(), 0);
        assert_eq!(Board::SOLVED.blank_index(), CellIndex::new(8));
        assert_eq!(Board::default(), Board::SOLVED);
        for index in CellIndex::all() {
            assert_eq!(Board::SOLVED.tile(index).value(), index.index());
        }
    }

    #[test]
    fn test_is_solved_rejects_inverted_permutations() {
        // Any single swap of numbered tiles introduces an inversion
        assert!(!board([1, 0, 2, 3, 4, 5, 6, 7, 8]).is_solved());
        assert!(!board([0, 1, 2, 3, 4, 5, 7, 6, 8]).is_solved());
        // Blank not in the last slot is also unsolved
        assert!(!board([0, 1, 2, 3, 4, 8, 6, 7, 5]).is_solved());
    }

    #[test]
    fn test_apply_move_swaps_exactly_one_pair() {
        let before = Board::SOLVED;
        let target = CellIndex::new(5);
        let after = before.apply_move(target).expect("adjacent to blank");

        assert_eq!(after.tile(target), Tile::Blank);
        assert_eq!(after.tile(CellIndex::new(8)), before.tile(target));
        for index in CellIndex::all() {
            if index != target && index != CellIndex::new(8) {
                assert_eq!(after.tile(index), before.tile(index));
            }
        }
    }

    #[test]
    fn test_apply_move_rejects_non_adjacent_targets() {
        let board = Board::SOLVED; // blank at slot 8, position (2, 2)

        // Diagonal
        let err = board.apply_move(CellIndex::new(4)).unwrap_err();
        assert_eq!(
            err,
            MoveError::NotAdjacent {
                target: CellIndex::new(4),
                blank: CellIndex::new(8),
            }
        );

        // Distant
        assert!(board.apply_move(CellIndex::new(0)).is_err());
        // The blank's own slot
        assert!(board.apply_move(CellIndex::new(8)).is_err());
    }

    #[test]
    fn test_legal_targets_follow_blank_position() {
        // Blank in a corner
        let corner: Vec<_> = Board::SOLVED.legal_targets().collect();
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&CellIndex::new(5)));
        assert!(corner.contains(&CellIndex::new(7)));

        // Blank in the center
        let center_board = board([0, 1, 2, 3, 8, 5, 6, 7, 4]);
        assert_eq!(center_board.legal_targets().count(), 4);

        // Every legal target is accepted by apply_move
        for target in center_board.legal_targets() {
            assert!(center_board.apply_move(target).is_ok());
        }
    }

    #[test]
    fn test_inversion_count_of_pool_sample() {
        // Regression check from the precomputed shuffle pool
        let sample = board([8, 3, 1, 2, 5, 4, 7, 0, 6]);
        assert_eq!(sample.count_inversions() % 2, 0);
        assert!(sample.is_solvable());
    }

    #[test]
    fn test_single_numbered_swap_is_unsolvable() {
        assert!(!board([1, 0, 2, 3, 4, 5, 6, 7, 8]).is_solvable());
        assert!(!board([0, 1, 2, 3, 4, 5, 7, 6, 8]).is_solvable());
    }

    #[test]
    fn test_end_to_end_single_move_solve() {
        // Blank at slot 5 (row 1, col 2), tile 5 displaced to slot 8.
        let start = board([0, 1, 2, 3, 4, 8, 6, 7, 5]);
        assert!(start.is_solvable());
        assert!(!start.is_solved());

        // Clicking slot 8 (row 2, col 2) is adjacent; one move wins.
        let next = start.apply_move(CellIndex::new(8)).expect("adjacent");
        assert_eq!(next, Board::SOLVED);
        assert!(next.is_solved());
    }

    #[test]
    fn test_display_renders_grid_rows() {
        let rendered = Board::SOLVED.to_string();
        assert_eq!(rendered, "0 1 2\n3 4 5\n6 7 .\n");
    }

    proptest! {
        #[test]
        fn prop_from_values_accepts_any_permutation(seed in any::<u64>()) {
            let values = permutation(seed);
            let board = Board::from_values(&values).expect("permutation is valid");
            for (slot, value) in values.iter().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let index = CellIndex::new(slot as u8);
                prop_assert_eq!(board.tile(index).value(), *value);
            }
        }

        #[test]
        fn prop_moves_preserve_permutation_and_solvability(seed in any::<u64>()) {
            let board = Board::from_values(&permutation(seed)).expect("valid board");
            for target in board.legal_targets() {
                let moved = board.apply_move(target).expect("legal target");
                let mut values: Vec<u8> =
                    moved.tiles().iter().map(|tile| tile.value()).collect();
                values.sort_unstable();
                prop_assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
                prop_assert_eq!(moved.is_solvable(), board.is_solvable());
            }
        }

        #[test]
        fn prop_move_is_its_own_inverse(seed in any::<u64>()) {
            let board = Board::from_values(&permutation(seed)).expect("valid board");
            let old_blank = board.blank_index();
            for target in board.legal_targets() {
                let moved = board.apply_move(target).expect("legal target");
                // The displaced tile now sits where the blank was; moving it
                // back restores the original board.
                let restored = moved.apply_move(old_blank).expect("legal target");
                prop_assert_eq!(restored, board);
            }
        }

        #[test]
        fn prop_illegal_move_leaves_board_unchanged(seed in any::<u64>(), target in 0u8..9) {
            let board = Board::from_values(&permutation(seed)).expect("valid board");
            let target = CellIndex::new(target);
            let blank = board.blank_index();
            let snapshot = board;
            if !target.position().is_adjacent(blank.position()) {
                prop_assert_eq!(
                    board.apply_move(target),
                    Err(MoveError::NotAdjacent { target, blank })
                );
            }
            prop_assert_eq!(board, snapshot);
        }

        #[test]
        fn prop_is_solved_only_for_canonical_layout(seed in any::<u64>()) {
            let board = Board::from_values(&permutation(seed)).expect("valid board");
            prop_assert_eq!(board.is_solved(), board == Board::SOLVED);
        }
    }
}
