//! The game board and its rules.
//!
//! - [`Board`]: the controller hosts talk to (reset, rotate, clock, queries)
//! - [`BoardBuilder`]: boards with hand-placed layouts
//! - [`Grid`]: the fixed R × C cell storage
//! - [`BoardSnapshot`]: an immutable copy of observable state
//!
//! Seeding and infection targeting live in their own submodules so they can
//! be tested without a full board.

mod builder;
mod game;
mod grid;
pub mod infection;
pub mod seeding;
mod snapshot;

pub use builder::BoardBuilder;
pub use game::Board;
pub use grid::Grid;
pub use infection::{infection_targets, InfectionTargets};
pub use snapshot::BoardSnapshot;
