//! Grid cells and their coordinates.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::player::Player;

/// Zero-based grid coordinate. Rows grow downward, columns grow rightward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub column: usize,
}

impl CellPos {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The position one step in `direction`, if it does not go below zero.
    ///
    /// Upper bounds are the grid's concern; see `Grid::neighbor`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            column: self.column.checked_add_signed(dc)?,
        })
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// One grid position holding a direction and an owner.
///
/// The position is the cell's identity and never changes. Only the board
/// mutates `direction` and `owner`, which is why neither is public.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pos: CellPos,
    direction: Direction,
    owner: Option<Player>,
}

impl Cell {
    /// Create an unowned cell.
    #[must_use]
    pub const fn new(pos: CellPos, direction: Direction) -> Self {
        Self {
            pos,
            direction,
            owner: None,
        }
    }

    #[must_use]
    pub const fn pos(&self) -> CellPos {
        self.pos
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.pos.row
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.pos.column
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// `None` for unowned cells.
    #[must_use]
    pub const fn owner(&self) -> Option<Player> {
        self.owner
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub(crate) fn set_owner(&mut self, owner: Option<Player>) {
        self.owner = owner;
    }
}
