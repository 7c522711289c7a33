//! Fixed-size cell grid.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a grid for a
//! snapshot is O(1) and later mutations only copy the touched chunk.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, CellPos, Direction, Player};

/// R × C grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vector<Cell>,
}

impl Grid {
    /// Build a grid, asking `direction_at` for each cell in row-major order.
    ///
    /// The callback may read back cells that were already built through the
    /// partially built slice, which seeding uses to mirror the upper half.
    pub(crate) fn build(
        rows: usize,
        columns: usize,
        mut direction_at: impl FnMut(CellPos, &[Cell]) -> Direction,
    ) -> Self {
        let mut built: Vec<Cell> = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                let pos = CellPos::new(row, column);
                let direction = direction_at(pos, &built);
                built.push(Cell::new(pos, direction));
            }
        }
        Self {
            rows,
            columns,
            cells: built.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows && pos.column < self.columns
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.columns + pos.column)
    }

    /// The cell at `pos`, or `None` off the board.
    #[must_use]
    pub fn get(&self, pos: CellPos) -> Option<&Cell> {
        self.cells.get(self.index(pos)?)
    }

    pub(crate) fn get_mut(&mut self, pos: CellPos) -> Option<&mut Cell> {
        let index = self.index(pos)?;
        self.cells.get_mut(index)
    }

    pub(crate) fn clear_owners(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_owner(None);
        }
    }

    /// The on-board neighbor of `pos` in `direction`.
    #[must_use]
    pub fn neighbor(&self, pos: CellPos, direction: Direction) -> Option<CellPos> {
        pos.step(direction).filter(|next| self.contains(*next))
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over the cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> {
        let start = if row < self.rows {
            row * self.columns
        } else {
            self.cells.len()
        };
        let end = (start + self.columns).min(self.cells.len());
        self.cells.iter().skip(start).take(end - start)
    }

    /// Copy the grid out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.rows).map(|r| self.row(r).copied().collect()).collect()
    }

    /// Number of cells owned by `player`.
    #[must_use]
    pub fn count_owned(&self, player: Player) -> u32 {
        self.iter().filter(|c| c.owner() == Some(player)).count() as u32
    }

    /// Number of cells nobody owns.
    #[must_use]
    pub fn count_unowned(&self) -> u32 {
        self.iter().filter(|c| c.owner().is_none()).count() as u32
    }
}
