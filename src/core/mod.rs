//! Core value types: directions, players, cells, configuration, RNG, errors.
//!
//! Nothing here knows about turns or cascades; the board module builds the
//! game on top of these.

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod player;
pub mod rng;

pub use cell::{Cell, CellPos};
pub use config::BoardConfig;
pub use direction::Direction;
pub use error::ConfigError;
pub use player::{Player, PlayerPair};
pub use rng::{GameRng, GameRngState};
