//! Core board model for the tilelace sliding puzzle.
//!
//! This crate provides the pure data model of a 3×3 sliding puzzle: eight
//! numbered tiles and one blank cell arranged on a nine-slot board. It is
//! free of randomness, I/O, and session state; board generation lives in
//! `tilelace-generator` and the host-facing game session in `tilelace-game`.
//!
//! # Overview
//!
//! - [`tile`]: Type-safe representation of the nine cell values, including
//!   the blank.
//! - [`position`]: Grid coordinates, linear slot indices, and the bijection
//!   between them, plus orthogonal adjacency.
//! - [`board`]: The [`Board`] permutation with move application, inversion
//!   counting, and the solvability and solved predicates.
//!
//! # Examples
//!
//! ```
//! use tilelace_core::{Board, CellIndex};
//!
//! // A solvable scramble: blank in slot 0, tile 1 displaced to slot 8.
//! let board = Board::from_values(&[8, 0, 2, 3, 4, 5, 6, 7, 1]).unwrap();
//! assert!(board.is_solvable());
//! assert!(!board.is_solved());
//!
//! // Slide the tile in slot 1 into the blank.
//! let board = board.apply_move(CellIndex::new(1)).unwrap();
//! assert_eq!(board.blank_index(), CellIndex::new(1));
//! ```

pub use self::{
    board::{Board, BoardError, MoveError},
    position::{CellIndex, Position},
    tile::Tile,
};

pub mod board;
pub mod position;
pub mod tile;
