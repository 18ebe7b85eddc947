//! Sliding puzzle tile representation.

use std::fmt::{self, Display};

/// A cell value on the puzzle board: one of the eight numbered tiles or the
/// blank.
///
/// This enum provides type-safe representation of the nine cell values,
/// preventing out-of-range tiles at compile time. Numbered tiles carry the
/// values 0-7; the blank carries the value 8, matching its slot in the
/// solved layout (blank last).
///
/// # Examples
///
/// ```
/// use tilelace_core::Tile;
///
/// let tile = Tile::T3;
/// assert_eq!(tile.value(), 3);
/// assert!(!tile.is_blank());
///
/// // Create from a u8 value
/// let tile = Tile::from_value(8);
/// assert_eq!(tile, Tile::Blank);
///
/// // Iterate over all tiles in value order
/// assert_eq!(Tile::ALL.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tile {
    /// The tile numbered 0.
    T0 = 0,
    /// The tile numbered 1.
    T1 = 1,
    /// The tile numbered 2.
    T2 = 2,
    /// The tile numbered 3.
    T3 = 3,
    /// The tile numbered 4.
    T4 = 4,
    /// The tile numbered 5.
    T5 = 5,
    /// The tile numbered 6.
    T6 = 6,
    /// The tile numbered 7.
    T7 = 7,
    /// The blank cell (value 8).
    Blank = 8,
}

impl Tile {
    /// Array containing all nine cell values in value order, blank last.
    ///
    /// This is the solved board layout: tile *k* in slot *k*.
    pub const ALL: [Self; 9] = [
        Self::T0,
        Self::T1,
        Self::T2,
        Self::T3,
        Self::T4,
        Self::T5,
        Self::T6,
        Self::T7,
        Self::Blank,
    ];

    /// Creates a tile from a u8 value in the range 0-8.
    ///
    /// Value 8 is the blank.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilelace_core::Tile;
    ///
    /// assert_eq!(Tile::from_value(0), Tile::T0);
    /// assert_eq!(Tile::from_value(7), Tile::T7);
    /// assert_eq!(Tile::from_value(8), Tile::Blank);
    /// ```
    ///
    /// ```should_panic
    /// use tilelace_core::Tile;
    ///
    /// // This will panic
    /// let _ = Tile::from_value(9);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            0 => Self::T0,
            1 => Self::T1,
            2 => Self::T2,
            3 => Self::T3,
            4 => Self::T4,
            5 => Self::T5,
            6 => Self::T6,
            7 => Self::T7,
            8 => Self::Blank,
            _ => panic!("Invalid tile value: {value}"),
        }
    }

    /// Returns the numeric value of this tile (0-8, blank = 8).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns `true` if this is the blank cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilelace_core::Tile;
    ///
    /// assert!(Tile::Blank.is_blank());
    /// assert!(!Tile::T0.is_blank());
    /// ```
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            Display::fmt(&'.', f)
        } else {
            Display::fmt(&self.value(), f)
        }
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        // from_value and value() round-trip for boundary values
        assert_eq!(Tile::from_value(0), Tile::T0);
        assert_eq!(Tile::from_value(8), Tile::Blank);
        assert_eq!(Tile::T0.value(), 0);
        assert_eq!(Tile::Blank.value(), 8);

        // ALL constant is the solved layout, blank last
        assert_eq!(Tile::ALL.len(), 9);
        assert_eq!(Tile::ALL[0], Tile::T0);
        assert_eq!(Tile::ALL[8], Tile::Blank);

        // from_value/value round-trip for all tiles
        for tile in Tile::ALL {
            assert_eq!(Tile::from_value(tile.value()), tile);
        }

        // Only the blank is blank
        assert_eq!(Tile::ALL.iter().filter(|t| t.is_blank()).count(), 1);

        // Display trait
        assert_eq!(format!("{}", Tile::T7), "7");
        assert_eq!(format!("{}", Tile::Blank), ".");

        // From<Tile> for u8
        let value: u8 = Tile::T5.into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_value_order_matches_solved_layout() {
        for (slot, tile) in Tile::ALL.iter().enumerate() {
            assert_eq!(usize::from(tile.value()), slot);
        }
    }

    #[test]
    #[should_panic(expected = "Invalid tile value: 9")]
    fn test_from_value_nine_panics() {
        let _ = Tile::from_value(9);
    }
}
