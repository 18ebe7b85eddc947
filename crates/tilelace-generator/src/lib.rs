//! Solvable board generation for the tilelace sliding puzzle.
//!
//! Only half of all permutations of the nine cell values are reachable from
//! the solved layout, so a starting board must never be drawn uniformly
//! from all permutations. This crate provides a [`Shuffler`] with two
//! strategies that both guarantee solvability:
//!
//! - [`Shuffler::from_pool`] samples from a fixed pool of precomputed
//!   solvable permutations: O(1), zero retries, lower variety.
//! - [`Shuffler::random_solvable`] Fisher-Yates shuffles and retries until
//!   the result is solvable (and not already solved): full variety, a
//!   handful of expected retries.
//!
//! The shuffler is seedable for reproducible sequences.
//!
//! # Examples
//!
//! ```
//! use tilelace_generator::Shuffler;
//!
//! let mut shuffler = Shuffler::with_seed(42);
//! let board = shuffler.from_pool();
//! assert!(board.is_solvable());
//!
//! let board = shuffler.random_solvable();
//! assert!(board.is_solvable());
//! assert!(!board.is_solved());
//! ```

use rand::{
    seq::{IndexedRandom as _, SliceRandom as _},
    SeedableRng as _,
};
use rand_pcg::Pcg64Mcg;
use tilelace_core::Board;

/// Precomputed solvable starting permutations.
///
/// Each entry is a permutation of 0-8 (value 8 = blank) with an even
/// inversion count, verified by the crate's regression tests.
pub const SHUFFLE_POOL: [[u8; 9]; 8] = [
    [8, 3, 1, 2, 5, 4, 7, 0, 6],
    [4, 1, 8, 6, 0, 5, 7, 3, 2],
    [7, 8, 2, 5, 6, 3, 0, 4, 1],
    [5, 3, 0, 8, 2, 6, 4, 1, 7],
    [4, 5, 3, 7, 2, 1, 0, 8, 6],
    [6, 4, 8, 2, 3, 0, 5, 7, 1],
    [0, 7, 2, 8, 3, 6, 5, 4, 1],
    [4, 1, 7, 0, 6, 5, 3, 8, 2],
];

/// A source of shuffled-but-solvable starting boards.
///
/// Owns a small PCG generator; construct with [`Shuffler::new`] for an
/// entropy seed or [`Shuffler::with_seed`] for a reproducible sequence.
#[derive(Debug, Clone)]
pub struct Shuffler {
    rng: Pcg64Mcg,
}

impl Shuffler {
    /// Creates a shuffler seeded from the thread-local entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a shuffler with a fixed seed.
    ///
    /// Two shufflers with the same seed produce the same board sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilelace_generator::Shuffler;
    ///
    /// let a = Shuffler::with_seed(7).from_pool();
    /// let b = Shuffler::with_seed(7).from_pool();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Returns a board drawn uniformly from [`SHUFFLE_POOL`].
    ///
    /// Constant cost and deterministic solvability at the price of low
    /// entropy; this is the default strategy of the game session.
    #[must_use]
    #[expect(clippy::missing_panics_doc)]
    pub fn from_pool(&mut self) -> Board {
        let values = SHUFFLE_POOL
            .choose(&mut self.rng)
            .expect("shuffle pool is non-empty");
        Board::from_values(values).expect("pool entries are valid permutations")
    }

    /// Returns a uniformly random solvable board.
    ///
    /// Shuffles a permutation and retries until it passes the solvability
    /// check; an already-solved result is also rejected so a fresh shuffle
    /// is always playable. Half of all permutations are solvable, so the
    /// expected number of iterations is just over two.
    #[must_use]
    #[expect(clippy::missing_panics_doc)]
    pub fn random_solvable(&mut self) -> Board {
        let mut values: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        loop {
            values.shuffle(&mut self.rng);
            let board =
                Board::from_values(&values).expect("shuffled values stay a permutation");
            if board.is_solvable() && !board.is_solved() {
                return board;
            }
        }
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new()
    }
}
