//! Board event types.
//!
//! Each event describes one externally visible state change. Events carry
//! enough data for a renderer to update incrementally, but hosts may also
//! treat any event as "redraw from `Board::snapshot`".

use serde::{Deserialize, Serialize};

use crate::core::{CellPos, Direction, Player, PlayerPair};

/// Something that changed on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// The board was rebuilt from scratch.
    Reset,

    /// A player rotated one of their cells.
    Rotated { pos: CellPos, direction: Direction },

    /// A cell changed hands during a cascade.
    Infected { pos: CellPos, owner: Player },

    /// Cached scores were recomputed and differ from before.
    ScoresChanged { scores: PlayerPair<u32> },

    /// The cascade settled without a winner; `player` moves next.
    TurnPassed { player: Player },

    /// The game ended. No further rotations are accepted.
    GameWon { winner: Player },
}
