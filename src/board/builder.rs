//! Board construction with explicit layouts.
//!
//! `Board::new` always starts from a freshly seeded grid. The builder lets a
//! host (or a test) place directions and owners by hand, for puzzles,
//! tutorials and reproducible scenarios. `reset` on a built board returns to
//! normal seeding.

use log::debug;

use crate::core::{BoardConfig, CellPos, ConfigError, Direction, GameRng, Player};
use crate::schedule::{InfectionScheduler, TimerQueue};

use super::game::Board;
use super::grid::Grid;
use super::seeding::{place_seeds, seed_grid};

/// Builder for boards with a hand-placed layout.
///
/// ## Example
///
/// ```
/// use bio_battle::{BoardBuilder, BoardConfig, CellPos, Player};
/// use bio_battle::Direction::{East as E, North as N, West as W};
///
/// let board = BoardBuilder::new(BoardConfig::new().with_dimensions(2, 2))
///     .directions(&[&[W, E], &[N, N]])
///     .owner(CellPos::new(0, 0), Player::A)
///     .owner(CellPos::new(1, 1), Player::B)
///     .build()
///     .unwrap();
///
/// assert_eq!(board.score(Player::A), 1);
/// assert_eq!(board.cell(CellPos::new(0, 1)).unwrap().direction(), E);
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    config: BoardConfig,
    directions: Option<Vec<Vec<Direction>>>,
    owners: Option<Vec<(CellPos, Player)>>,
    current_player: Player,
}

impl BoardBuilder {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            directions: None,
            owners: None,
            current_player: Player::A,
        }
    }

    /// Set every cell's direction, one slice per row.
    ///
    /// Without this the directions come from normal seeding. Owners still
    /// default to the two seed cells.
    #[must_use]
    pub fn directions(mut self, rows: &[&[Direction]]) -> Self {
        self.directions = Some(rows.iter().map(|row| row.to_vec()).collect());
        self
    }

    /// Give `pos` to `player`.
    ///
    /// The first call replaces the seeded owners: only explicitly placed
    /// cells are owned on the built board. If one side ends up with no
    /// cells, the built board is already won by the other.
    #[must_use]
    pub fn owner(mut self, pos: CellPos, player: Player) -> Self {
        self.owners.get_or_insert_with(Vec::new).push((pos, player));
        self
    }

    /// Player to move first.
    #[must_use]
    pub fn current_player(mut self, player: Player) -> Self {
        self.current_player = player;
        self
    }

    /// Build a board paced by the configured infection delay.
    pub fn build(self) -> Result<Board<TimerQueue>, ConfigError> {
        let scheduler = TimerQueue::new(self.config.infection_delay_ms);
        self.build_with(scheduler)
    }

    /// Build a board driven by a custom scheduler.
    pub fn build_with<S: InfectionScheduler>(self, scheduler: S) -> Result<Board<S>, ConfigError> {
        self.config.validate()?;
        let (rows, columns) = (self.config.rows, self.config.columns);
        let mut rng = self
            .config
            .seed
            .map_or_else(GameRng::from_entropy, GameRng::new);

        let mut grid = match &self.directions {
            Some(layout) => {
                let width = layout.first().map_or(0, Vec::len);
                if layout.len() != rows || layout.iter().any(|row| row.len() != columns) {
                    return Err(ConfigError::LayoutMismatch {
                        rows: layout.len(),
                        columns: width,
                        expected_rows: rows,
                        expected_columns: columns,
                    });
                }
                let mut grid = Grid::build(rows, columns, |pos, _| layout[pos.row][pos.column]);
                place_seeds(&mut grid);
                grid
            }
            None => seed_grid(rows, columns, &mut rng),
        };

        if let Some(owners) = &self.owners {
            grid.clear_owners();
            for &(pos, player) in owners {
                let cell = grid.get_mut(pos).ok_or(ConfigError::OutOfBounds {
                    row: pos.row,
                    column: pos.column,
                })?;
                cell.set_owner(Some(player));
            }
        }

        debug!("built {rows}x{columns} board from layout");
        let mut board = Board::from_parts(self.config, grid, scheduler, rng);
        board.set_current_player(self.current_player);
        board.resolve_if_decided();
        Ok(board)
    }
}
