//! Cell facing.
//!
//! Every cell points in one of four directions. The direction decides
//! which neighbor the cell attacks (direct infection) and whether the cell
//! is pulled in by a neighbor that points back at it (indirect infection).

use serde::{Deserialize, Serialize};

/// One of the four compass directions a cell can face.
///
/// The cyclic order used for rotation is North → East → South → West → North.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in rotation order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction a cell faces after one clockwise rotation.
    ///
    /// ```
    /// use bio_battle::core::Direction;
    ///
    /// assert_eq!(Direction::North.next(), Direction::East);
    /// assert_eq!(Direction::West.next(), Direction::North);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Row and column delta of the neighbor in this direction.
    ///
    /// Rows grow downward, so North is one row up.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all() {
        let mut dir = Direction::North;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(dir);
            dir = dir.next();
        }
        assert_eq!(dir, Direction::North);
        assert_eq!(seen, Direction::ALL.to_vec());
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
    }

    #[test]
    fn test_offsets_cancel_with_opposite() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            let (or, oc) = dir.opposite().offset();
            assert_eq!(dr + or, 0);
            assert_eq!(dc + oc, 0);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Direction::South), "South");
    }
}
