//! Read-only copy of all observable board state.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, CellPos, Player, PlayerPair};

use super::grid::Grid;

/// Everything a host can observe, captured at one instant.
///
/// Cheap to take: the grid is a persistent vector shared with the board
/// until either side mutates it. Two snapshots compare equal exactly when
/// the observable state is identical.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub grid: Grid,
    pub current_player: Player,
    pub scores: PlayerPair<u32>,
    pub winner: Option<Player>,
    pub pending_infections: u32,
}

impl BoardSnapshot {
    /// The cell at `pos`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, pos: CellPos) -> Option<&Cell> {
        self.grid.get(pos)
    }

    /// Cached score of `player`.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Number of cells nobody owns.
    #[must_use]
    pub fn unowned(&self) -> u32 {
        self.grid.count_unowned()
    }
}
