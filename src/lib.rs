//! # bio-battle
//!
//! Engine for a two-player territorial grid game. Every cell faces one of
//! four directions; rotating a cell you own makes it attack its neighbors,
//! and each cell it converts spreads again after a short pause, so one move
//! can cascade across the board.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, layout or input wiring. Hosts drive the
//!    board through `reset`/`rotate` and learn about changes via observers.
//!
//! 2. **Illegal input is a no-op**: Rotating the wrong cell, mid-cascade or
//!    after the game ended never errors and never changes state.
//!
//! 3. **Deterministic**: A seeded `GameRng` fixes the board, and a virtual
//!    clock fixes cascade timing, so whole games replay exactly.
//!
//! ## Architecture
//!
//! - **Single timeline**: The board owns all state. Delayed continuations
//!   are queued work items, not threads or timers, and fire when the host
//!   advances the clock.
//!
//! - **Counter discipline**: `pending_infections` rises once per conversion
//!   and falls once per fired continuation. Turns pass and winners are
//!   declared only when it is back at zero.
//!
//! ## Modules
//!
//! - `core`: Directions, players, cells, configuration, RNG, errors
//! - `board`: Board controller, grid, seeding, infection targeting, snapshots
//! - `schedule`: Continuation queues (timed and instant)
//! - `events`: Board events and observer registration

pub mod board;
pub mod core;
pub mod events;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Cell, CellPos, ConfigError, Direction, GameRng, GameRngState, Player,
    PlayerPair,
};

pub use crate::board::{Board, BoardBuilder, BoardSnapshot, Grid};

pub use crate::events::{BoardEvent, BoardObserver, EventLog, ObserverId};

pub use crate::schedule::{InfectionScheduler, InstantQueue, TimerQueue};
