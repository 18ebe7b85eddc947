//! Host-facing event and notification vocabulary.
//!
//! The host (a widget shell, TUI, or test harness) translates user input
//! into [`PuzzleEvent`] values and forwards them to
//! [`Game::handle`](crate::Game::handle); the session answers with an
//! optional [`Notification`] to surface. The engine never renders or
//! schedules anything itself.

use tilelace_core::CellIndex;

/// An opaque presentation-layer image identifier.
///
/// The engine stores and returns it unchanged; only the presentation layer
/// knows how to slice the referenced image into tiles. A board is
/// considered ready to display once an image has been assigned.
///
/// # Examples
///
/// ```
/// use tilelace_game::ImageId;
///
/// let id = ImageId::new("uploads/57566c40");
/// assert_eq!(id.to_string(), "uploads/57566c40");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub struct ImageId(String);

impl ImageId {
    /// Creates an image identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// An interaction or refresh tick forwarded by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleEvent {
    /// The user clicked the tile at the given slot.
    TileSelected(CellIndex),
    /// The action menu's "shuffle" trigger: replace the board with a fresh
    /// solvable one.
    Shuffle,
    /// The action menu's "change image" trigger: assign a new image and
    /// reshuffle so the fresh picture starts scrambled.
    ChangeImage(ImageId),
    /// The action menu's "solve" trigger: jump straight to the solved
    /// board (instant win, not a solving algorithm).
    Solve,
    /// A render tick with no user input; re-evaluates the solved check.
    Refresh,
}

/// A message the session asks the host to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Notification {
    /// The board reached the solved state. Emitted once per solved
    /// episode, no matter how many refresh ticks follow.
    Solved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_id_is_opaque_round_trip() {
        let id = ImageId::new("uploads/abc123");
        assert_eq!(id.as_str(), "uploads/abc123");
        assert_eq!(id.to_string(), "uploads/abc123");
        assert_eq!(ImageId::from("uploads/abc123"), id);
        assert_eq!(ImageId::from(String::from("uploads/abc123")), id);
    }

    #[test]
    fn test_notification_variant_queries() {
        assert!(Notification::Solved.is_solved());
    }
}
