//! Game session and host contract for the tilelace sliding puzzle.
//!
//! This crate wraps the pure board model of `tilelace-core` in the stateful
//! session a host embeds: the current board, the opaque image identifier
//! the presentation layer slices tiles from, and the one-bit latch that
//! turns the pure solved predicate into an exactly-once-per-episode
//! notification.
//!
//! # Overview
//!
//! - [`game`]: The [`Game`] session with move application, shuffling, the
//!   instant-win shortcut, and solved-notification latching.
//! - [`event`]: The [`PuzzleEvent`] vocabulary the host forwards (tile
//!   clicks, action-menu triggers, render refreshes) and the
//!   [`Notification`] it receives back.
//!
//! The engine stays loop-free: the host invokes [`Game::handle`] once per
//! interaction or refresh tick and re-renders from the returned state.
//!
//! # Examples
//!
//! ```
//! use tilelace_game::{Game, Notification, PuzzleEvent};
//! use tilelace_generator::Shuffler;
//!
//! let mut shuffler = Shuffler::with_seed(42);
//! let mut game = Game::new(&mut shuffler);
//! assert!(game.board().is_solvable());
//!
//! // The action menu's "solve" trigger jumps straight to the goal,
//! // and the solved notification fires exactly once.
//! let note = game.handle(PuzzleEvent::Solve, &mut shuffler).unwrap();
//! assert_eq!(note, Some(Notification::Solved));
//! let note = game.handle(PuzzleEvent::Refresh, &mut shuffler).unwrap();
//! assert_eq!(note, None);
//! ```

pub use self::{
    event::{ImageId, Notification, PuzzleEvent},
    game::{Game, GameError},
};

pub mod event;
pub mod game;
