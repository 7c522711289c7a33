//! Board configuration.
//!
//! A board's dimensions, pacing and seed are fixed when it is created.
//! The defaults reproduce the reference game: 11 rows by 22 columns with a
//! 50 ms pause between cascade steps.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Reference row count.
pub const DEFAULT_ROWS: usize = 11;

/// Reference column count.
pub const DEFAULT_COLUMNS: usize = 22;

/// Pause before a converted cell spreads further, in milliseconds.
pub const DEFAULT_INFECTION_DELAY_MS: u64 = 50;

/// Smallest legal side length. The two seed cells and the three direction
/// anchors at (0,0), (0,1), (1,0) must all exist.
pub const MIN_SIDE: usize = 2;

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (R).
    pub rows: usize,

    /// Number of columns (C).
    pub columns: usize,

    /// Delay between a conversion and the converted cell's own spread.
    pub infection_delay_ms: u64,

    /// RNG seed for resets. `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            infection_delay_ms: DEFAULT_INFECTION_DELAY_MS,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Create the reference configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the cascade step delay.
    #[must_use]
    pub fn with_infection_delay_ms(mut self, delay_ms: u64) -> Self {
        self.infection_delay_ms = delay_ms;
        self
    }

    /// Seed the reset RNG for reproducible boards.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of cells (R·C).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Check that a board can be built from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_SIDE {
            return Err(ConfigError::TooFewRows {
                rows: self.rows,
                min: MIN_SIDE,
            });
        }
        if self.columns < MIN_SIDE {
            return Err(ConfigError::TooFewColumns {
                columns: self.columns,
                min: MIN_SIDE,
            });
        }
        match self.rows.checked_mul(self.columns) {
            Some(count) if u32::try_from(count).is_ok() => Ok(()),
            _ => Err(ConfigError::TooManyCells {
                rows: self.rows,
                columns: self.columns,
            }),
        }
    }
}
