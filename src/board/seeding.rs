//! Initial board layout.
//!
//! The upper half (rows `0..=R/2`) is random apart from three fixed anchors
//! next to Player A's seed. Every lower-half cell faces the opposite way of
//! its point reflection, so neither side starts with a better neighborhood.

use crate::core::{Cell, CellPos, Direction, GameRng, Player};

use super::grid::Grid;

/// Fixed directions around the top-left seed.
const ANCHORS: [(CellPos, Direction); 3] = [
    (CellPos::new(0, 0), Direction::North),
    (CellPos::new(0, 1), Direction::East),
    (CellPos::new(1, 0), Direction::South),
];

/// Where each player starts.
#[must_use]
pub(crate) fn seed_position(player: Player, rows: usize, columns: usize) -> CellPos {
    match player {
        Player::A => CellPos::new(0, 0),
        Player::B => CellPos::new(rows - 1, columns - 1),
    }
}

/// Check if `row` belongs to the randomly seeded upper half.
#[must_use]
pub fn is_upper_half(row: usize, rows: usize) -> bool {
    row <= rows / 2
}

/// The point reflection of `pos` through the board center.
#[must_use]
pub fn mirror(pos: CellPos, rows: usize, columns: usize) -> CellPos {
    CellPos::new(rows - 1 - pos.row, columns - 1 - pos.column)
}

/// Build a freshly seeded grid.
///
/// Random draws happen in row-major order over the non-anchor upper cells,
/// so a given RNG state always yields the same board. Dimensions must have
/// passed `BoardConfig::validate`.
pub(crate) fn seed_grid(rows: usize, columns: usize, rng: &mut GameRng) -> Grid {
    let mut grid = Grid::build(rows, columns, |pos, built: &[Cell]| {
        if is_upper_half(pos.row, rows) {
            match ANCHORS.iter().find(|(anchor, _)| *anchor == pos) {
                Some((_, direction)) => *direction,
                None => rng.gen_direction(),
            }
        } else {
            let twin = mirror(pos, rows, columns);
            built[twin.row * columns + twin.column].direction().opposite()
        }
    });

    place_seeds(&mut grid);
    grid
}

/// Give each player their starting cell.
pub(crate) fn place_seeds(grid: &mut Grid) {
    let (rows, columns) = (grid.rows(), grid.columns());
    for player in Player::ALL {
        if let Some(cell) = grid.get_mut(seed_position(player, rows, columns)) {
            cell.set_owner(Some(player));
        }
    }
}
