//! The puzzle game session.

use log::{debug, info};
use tilelace_core::{Board, BoardError, CellIndex, MoveError};
use tilelace_generator::Shuffler;

use crate::{ImageId, Notification, PuzzleEvent};

/// Errors reported by the game session.
///
/// All variants are caller-contract violations; none are fatal and none
/// leave the session in an inconsistent state. For non-move errors the
/// recommended recovery is to discard the offending board and reshuffle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The requested move was not legal; the board is unchanged.
    #[display("illegal move: {_0}")]
    Move(MoveError),
    /// An externally supplied board violates the permutation invariant.
    #[display("invalid board: {_0}")]
    Board(BoardError),
    /// An externally supplied board is a valid permutation but cannot
    /// reach the solved state.
    #[display("board is not solvable")]
    #[from(ignore)]
    Unsolvable,
}

/// A single-player sliding puzzle session.
///
/// Owns the current [`Board`], the optional presentation [`ImageId`], and
/// the solved-notification latch. The board is the sole mutable entity:
/// every mutation replaces it wholesale (one move, one shuffle, or one
/// instant-win jump), and each replacement opens a new solved episode for
/// notification purposes.
///
/// # Examples
///
/// ```
/// use tilelace_game::Game;
/// use tilelace_generator::Shuffler;
///
/// let mut shuffler = Shuffler::with_seed(1);
/// let game = Game::new(&mut shuffler);
///
/// // A fresh session always starts on a solvable, unsolved board.
/// assert!(game.board().is_solvable());
/// assert!(!game.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    image: Option<ImageId>,
    solved_notified: bool,
}

impl Game {
    /// Creates a session on a fresh board from the shuffler's fixed pool.
    ///
    /// No image is assigned yet; the session is not
    /// [ready](Self::is_ready) to display until the host provides one.
    #[must_use]
    pub fn new(shuffler: &mut Shuffler) -> Self {
        Self {
            board: shuffler.from_pool(),
            image: None,
            solved_notified: false,
        }
    }

    /// Creates a session from an externally supplied board.
    ///
    /// Injected state is validated before it is accepted into play: it
    /// must satisfy the permutation invariant (guaranteed by the [`Board`]
    /// type) and be solvable.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Unsolvable`] if the board cannot reach the
    /// solved state.
    pub fn from_board(board: Board) -> Result<Self, GameError> {
        if !board.is_solvable() {
            return Err(GameError::Unsolvable);
        }
        Ok(Self {
            board,
            image: None,
            solved_notified: false,
        })
    }

    /// Creates a session from raw tile values supplied by the host.
    ///
    /// This is the injection point for persisted or synchronized state:
    /// the values must be a permutation of 0-8 and form a solvable board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Board`] if the values violate the permutation
    /// invariant and [`GameError::Unsolvable`] if the board cannot reach
    /// the solved state.
    pub fn from_values(values: &[u8]) -> Result<Self, GameError> {
        let board = Board::from_values(values)?;
        Self::from_board(board)
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the assigned image identifier, if any.
    #[must_use]
    pub fn image(&self) -> Option<&ImageId> {
        self.image.as_ref()
    }

    /// Assigns the presentation image identifier.
    ///
    /// The identifier is opaque to the engine; assigning one does not
    /// touch the board.
    pub fn set_image(&mut self, image: ImageId) {
        self.image = Some(image);
    }

    /// Returns `true` once the session can be displayed.
    ///
    /// The board always exists, so readiness reduces to an image having
    /// been assigned.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.image.is_some()
    }

    /// Returns `true` if the current board is solved.
    ///
    /// Pure and re-evaluable; use [`Self::check_solved`] when the caller
    /// needs the once-per-episode notification instead.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Applies the user's tile click at the given slot.
    ///
    /// On success the board is replaced with the post-move value. An
    /// illegal click leaves the session untouched so the host may ignore
    /// it or surface a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Move`] if the slot is not orthogonally
    /// adjacent to the blank.
    pub fn select_tile(&mut self, target: CellIndex) -> Result<(), GameError> {
        let board = self.board.apply_move(target)?;
        debug!(
            "moved tile {} from slot {target} into the blank",
            board.tile(self.board.blank_index())
        );
        self.replace_board(board);
        Ok(())
    }

    /// Replaces the board with a fresh shuffle from the fixed pool.
    pub fn shuffle(&mut self, shuffler: &mut Shuffler) {
        let board = shuffler.from_pool();
        debug!("shuffled to a fresh board");
        self.replace_board(board);
    }

    /// Jumps the board straight to the solved state.
    ///
    /// This is an instant-win administrative shortcut for the action
    /// menu's "solve" trigger; it discards the current layout and does not
    /// compute a move sequence.
    pub fn force_solve(&mut self) {
        debug!("instant win requested");
        self.replace_board(Board::SOLVED);
    }

    /// Re-evaluates the solved state, reporting the transition once.
    ///
    /// Intended to be called on every render tick: the first call that
    /// observes a solved board returns [`Notification::Solved`], and
    /// further calls return `None` until the board is next replaced.
    pub fn check_solved(&mut self) -> Option<Notification> {
        if !self.board.is_solved() || self.solved_notified {
            return None;
        }
        self.solved_notified = true;
        info!("puzzle solved");
        Some(Notification::Solved)
    }

    /// Handles one host event and re-runs the solved check.
    ///
    /// This is the single entry point of the host contract: forward each
    /// interaction or refresh tick here and surface the returned
    /// notification, if any. `ChangeImage` also reshuffles so the new
    /// picture starts scrambled.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Move`] for an illegal tile selection; the
    /// session is unchanged in that case.
    pub fn handle(
        &mut self,
        event: PuzzleEvent,
        shuffler: &mut Shuffler,
    ) -> Result<Option<Notification>, GameError> {
        match event {
            PuzzleEvent::TileSelected(target) => self.select_tile(target)?,
            PuzzleEvent::Shuffle => self.shuffle(shuffler),
            PuzzleEvent::ChangeImage(image) => {
                self.shuffle(shuffler);
                self.set_image(image);
            }
            PuzzleEvent::Solve => self.force_solve(),
            PuzzleEvent::Refresh => {}
        }
        Ok(self.check_solved())
    }

    /// Replaces the board wholesale and opens a new solved episode.
    fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.solved_notified = false;
    }
}
