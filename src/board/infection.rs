//! Infection target selection.
//!
//! A spreading cell attacks:
//!
//! 1. **Direct**: the neighbor it faces.
//! 2. **Indirect**: every neighbor (above, below, left, right) that faces it.
//!
//! A neighbor can qualify both ways and then appears twice; each entry is
//! processed independently. Off-board positions are skipped.

use smallvec::SmallVec;

use crate::core::{CellPos, Direction};

use super::grid::Grid;

/// Up to one direct plus four indirect targets.
pub type InfectionTargets = SmallVec<[CellPos; 5]>;

/// Neighbor scan order for indirect targets.
const INDIRECT_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

/// Candidate targets of `from`, in processing order.
///
/// Returns nothing for positions off the board.
#[must_use]
pub fn infection_targets(grid: &Grid, from: CellPos) -> InfectionTargets {
    let mut targets = InfectionTargets::new();
    let Some(source) = grid.get(from) else {
        return targets;
    };

    if let Some(direct) = grid.neighbor(from, source.direction()) {
        targets.push(direct);
    }

    for side in INDIRECT_ORDER {
        let Some(pos) = grid.neighbor(from, side) else {
            continue;
        };
        let faces_back = grid
            .get(pos)
            .is_some_and(|cell| cell.direction() == side.opposite());
        if faces_back {
            targets.push(pos);
        }
    }

    targets
}
