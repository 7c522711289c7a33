//! The board controller.
//!
//! `Board` owns the grid, turn state, cached scores, the winner and the
//! queue of delayed infections. All mutation goes through `reset`, `rotate`
//! and the clock methods (`advance`, `settle`), which run on one control
//! timeline.
//!
//! ## Cascade Timing
//!
//! Converting a cell increments `pending_infections` and schedules the
//! converted cell to spread once its delay elapses. When that continuation
//! fires the counter is decremented first, then the cell infects its own
//! neighbors. Scores are recomputed after every infect step, but the turn
//! only passes (or the game only ends) on a recompute that sees zero
//! pending infections.

use std::time::Duration;

use log::{debug, info, trace};

use crate::core::{
    BoardConfig, Cell, CellPos, ConfigError, Direction, GameRng, Player, PlayerPair,
};
use crate::events::{BoardEvent, BoardObserver, ObserverId, ObserverRegistry};
use crate::schedule::{InfectionScheduler, ScheduledInfection, TimerQueue};

use super::grid::Grid;
use super::infection::infection_targets;
use super::seeding::seed_grid;
use super::snapshot::BoardSnapshot;

/// Two-player territorial grid game.
///
/// ## Example
///
/// ```
/// use bio_battle::{Board, BoardConfig, CellPos, Player};
///
/// let mut board = Board::new(BoardConfig::new().with_seed(42)).unwrap();
/// assert_eq!(board.current_player(), Player::A);
/// assert_eq!(board.score(Player::A), 1);
///
/// board.rotate(CellPos::new(0, 0));
/// board.settle();
///
/// assert_eq!(board.pending_infections(), 0);
/// assert!(board.score(Player::A) >= 1);
/// ```
#[derive(Debug)]
pub struct Board<S = TimerQueue> {
    config: BoardConfig,
    grid: Grid,
    current_player: Player,
    scores: PlayerPair<u32>,
    winner: Option<Player>,
    pending_infections: u32,
    clock_ms: u64,
    scheduler: S,
    rng: GameRng,
    observers: ObserverRegistry,
}

impl Board<TimerQueue> {
    /// Create a seeded board that paces cascades with the configured delay.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        let scheduler = TimerQueue::new(config.infection_delay_ms);
        Self::with_scheduler(config, scheduler)
    }
}

impl<S: InfectionScheduler> Board<S> {
    /// Create a seeded board driven by a custom scheduler.
    pub fn with_scheduler(config: BoardConfig, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let grid = seed_grid(config.rows, config.columns, &mut rng);
        info!(
            "new {}x{} board (seed {})",
            config.rows,
            config.columns,
            rng.seed()
        );
        Ok(Self::from_parts(config, grid, scheduler, rng))
    }

    /// Assemble a board around an existing grid.
    pub(crate) fn from_parts(
        config: BoardConfig,
        grid: Grid,
        mut scheduler: S,
        rng: GameRng,
    ) -> Self {
        scheduler.clear();
        let mut board = Self {
            config,
            grid,
            current_player: Player::A,
            scores: PlayerPair::default(),
            winner: None,
            pending_infections: 0,
            clock_ms: 0,
            scheduler,
            rng,
            observers: ObserverRegistry::new(),
        };
        board.scores = board.count_scores();
        board
    }

    // === Lifecycle ===

    /// Rebuild the board using its own RNG.
    ///
    /// Outstanding continuations are discarded, so nothing from the previous
    /// game can touch the new grid.
    pub fn reset(&mut self) {
        let grid = seed_grid(self.config.rows, self.config.columns, &mut self.rng);
        self.install(grid);
    }

    /// Rebuild the board drawing random directions from `rng`.
    pub fn reset_with(&mut self, rng: &mut GameRng) {
        let grid = seed_grid(self.config.rows, self.config.columns, rng);
        self.install(grid);
    }

    fn install(&mut self, grid: Grid) {
        if self.pending_infections > 0 {
            debug!(
                "reset discards {} pending infection(s)",
                self.pending_infections
            );
        }
        self.scheduler.clear();
        self.pending_infections = 0;
        self.grid = grid;
        self.current_player = Player::A;
        self.winner = None;
        self.scores = self.count_scores();
        info!("board reset");
        self.notify(BoardEvent::Reset);
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    // === Input ===

    /// Rotate the cell at `pos` one step clockwise and start a cascade.
    ///
    /// Silently ignored unless the cell exists, belongs to the current
    /// player, no cascade is in flight and the game is not over.
    pub fn rotate(&mut self, pos: CellPos) {
        let Some(cell) = self.grid.get(pos) else {
            debug!("rotate {pos} ignored: off the board");
            return;
        };
        if cell.owner() != Some(self.current_player) {
            debug!("rotate {pos} ignored: not owned by {}", self.current_player);
            return;
        }
        if self.pending_infections > 0 {
            debug!("rotate {pos} ignored: cascade in flight");
            return;
        }
        if let Some(winner) = self.winner {
            debug!("rotate {pos} ignored: {winner} already won");
            return;
        }

        let direction = cell.direction().next();
        if let Some(cell) = self.grid.get_mut(pos) {
            cell.set_direction(direction);
        }
        debug!("{} rotates {pos} to {direction}", self.current_player);
        self.notify(BoardEvent::Rotated { pos, direction });
        self.infect(pos);
    }

    // === Cascade ===

    fn infect(&mut self, from: CellPos) {
        let owner = self.grid.get(from).and_then(Cell::owner);
        if let Some(owner) = owner {
            for target in infection_targets(&self.grid, from) {
                let Some(cell) = self.grid.get_mut(target) else {
                    continue;
                };
                if cell.owner() == Some(owner) {
                    continue;
                }
                cell.set_owner(Some(owner));
                self.pending_infections += 1;
                self.scheduler.schedule(self.clock_ms, target);
                trace!("{from} infects {target} for {owner}");
                self.notify(BoardEvent::Infected { pos: target, owner });
            }
        }
        self.update_scores();
    }

    fn resume(&mut self, item: ScheduledInfection) {
        assert!(
            self.pending_infections > 0,
            "infection counter underflow at {}",
            item.target
        );
        self.pending_infections -= 1;
        debug_assert_eq!(self.pending_infections as usize, self.scheduler.len());
        trace!("continuation fires at {} ms for {}", self.clock_ms, item.target);
        self.infect(item.target);
    }

    fn count_scores(&self) -> PlayerPair<u32> {
        PlayerPair::new(|player| self.grid.count_owned(player))
    }

    fn update_scores(&mut self) {
        let scores = self.count_scores();
        if scores != self.scores {
            self.scores = scores;
            self.notify(BoardEvent::ScoresChanged { scores });
        }

        if self.pending_infections > 0 {
            return;
        }

        if let Some(winner) = self.decided_winner() {
            self.declare_winner(winner);
        } else {
            self.current_player = self.current_player.other();
            debug!("turn passes to {}", self.current_player);
            self.notify(BoardEvent::TurnPassed {
                player: self.current_player,
            });
        }
    }

    /// The side left standing, if the other has no cells.
    fn decided_winner(&self) -> Option<Player> {
        if self.scores[Player::B] == 0 {
            Some(Player::A)
        } else if self.scores[Player::A] == 0 {
            Some(Player::B)
        } else {
            None
        }
    }

    /// Apply the settled-board win check without passing the turn.
    pub(crate) fn resolve_if_decided(&mut self) {
        if self.pending_infections == 0 && self.winner.is_none() {
            if let Some(winner) = self.decided_winner() {
                self.declare_winner(winner);
            }
        }
    }

    fn declare_winner(&mut self, winner: Player) {
        self.winner = Some(winner);
        info!(
            "{winner} wins ({} to {})",
            self.scores[winner],
            self.scores[winner.other()]
        );
        self.notify(BoardEvent::GameWon { winner });
    }

    // === Clock ===

    /// Move the virtual clock forward, firing every continuation that
    /// becomes due on the way in due order. Returns how many fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let until = self.clock_ms.saturating_add(elapsed_ms);
        let mut fired = 0;
        while let Some(due) = self.scheduler.next_due().filter(|due| *due <= until) {
            self.clock_ms = self.clock_ms.max(due);
            let Some(item) = self.scheduler.pop_due(self.clock_ms) else {
                break;
            };
            self.resume(item);
            fired += 1;
        }
        self.clock_ms = until;
        fired
    }

    /// Run the clock until no continuation remains. Returns how many fired.
    ///
    /// Cascades always terminate: every conversion in one cascade is to the
    /// same owner, so each cell converts at most once.
    pub fn settle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.scheduler.next_due() {
            self.clock_ms = self.clock_ms.max(due);
            let Some(item) = self.scheduler.pop_due(self.clock_ms) else {
                break;
            };
            self.resume(item);
            fired += 1;
        }
        fired
    }

    /// Time until the next continuation is due, or `None` when idle.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.scheduler
            .next_due()
            .map(|due| Duration::from_millis(due.saturating_sub(self.clock_ms)))
    }

    /// Virtual time elapsed since the board was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.clock_ms)
    }

    // === Observers ===

    /// Register an observer for every subsequent state change.
    pub fn subscribe(&mut self, observer: Box<dyn BoardObserver>) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Remove an observer. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&mut self, event: BoardEvent) {
        self.observers.notify(&event);
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The cell at `pos`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, pos: CellPos) -> Option<&Cell> {
        self.grid.get(pos)
    }

    /// Shorthand for the direction of the cell at `pos`.
    #[must_use]
    pub fn direction_at(&self, pos: CellPos) -> Option<Direction> {
        self.cell(pos).map(Cell::direction)
    }

    /// Shorthand for the owner of the cell at `pos`.
    #[must_use]
    pub fn owner_at(&self, pos: CellPos) -> Option<Player> {
        self.cell(pos).and_then(Cell::owner)
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Cached cell count of `player`.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    #[must_use]
    pub fn scores(&self) -> PlayerPair<u32> {
        self.scores
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Scheduled continuations that have not fired yet.
    #[must_use]
    pub fn pending_infections(&self) -> u32 {
        self.pending_infections
    }

    /// Check if a rotation could currently be accepted.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.pending_infections == 0 && self.winner.is_none()
    }

    /// Cells the current player may rotate right now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<CellPos> {
        if !self.accepts_input() {
            return Vec::new();
        }
        self.grid
            .iter()
            .filter(|cell| cell.owner() == Some(self.current_player))
            .map(Cell::pos)
            .collect()
    }

    /// Copy of all observable state.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid: self.grid.clone(),
            current_player: self.current_player,
            scores: self.scores,
            winner: self.winner,
            pending_infections: self.pending_infections,
        }
    }
}
