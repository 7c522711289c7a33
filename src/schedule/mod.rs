//! Delayed infection continuations.
//!
//! Every conversion during a cascade schedules the converted cell to spread
//! again after a short pause. This module owns those pending work items.
//!
//! ## Design Philosophy
//!
//! The board never sleeps or spawns timers. It keeps a virtual clock in
//! milliseconds and asks its scheduler which items are due. Hosts choose the
//! pacing by picking an implementation:
//!
//! - [`TimerQueue`]: items become due a fixed delay after they were scheduled
//!   (the observable step-by-step cascade)
//! - [`InstantQueue`]: items are due immediately (headless simulation)
//!
//! ## Example Usage
//!
//! ```
//! use bio_battle::core::CellPos;
//! use bio_battle::schedule::{InfectionScheduler, TimerQueue};
//!
//! let mut queue = TimerQueue::new(50);
//! queue.schedule(0, CellPos::new(0, 1));
//!
//! assert!(queue.pop_due(49).is_none());
//! let item = queue.pop_due(50).unwrap();
//! assert_eq!(item.target, CellPos::new(0, 1));
//! ```

mod instant;
mod timer;

pub use instant::InstantQueue;
pub use timer::TimerQueue;

use serde::{Deserialize, Serialize};

use crate::core::CellPos;

/// A converted cell waiting to spread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledInfection {
    /// Virtual time (ms) at which the item becomes due.
    pub due_at: u64,

    /// Scheduling order, unique per queue. Breaks ties between equal due times.
    pub sequence: u64,

    /// The newly converted cell that will infect its neighbors.
    pub target: CellPos,
}

/// Trait for continuation queues.
///
/// The board owns exactly one scheduler and drives it from a single control
/// timeline, so implementations need no locking.
pub trait InfectionScheduler {
    /// Queue a continuation for `target`, scheduled at virtual time `now`.
    fn schedule(&mut self, now: u64, target: CellPos);

    /// Remove and return the earliest item due at or before `now`.
    fn pop_due(&mut self, now: u64) -> Option<ScheduledInfection>;

    /// Due time of the earliest queued item.
    fn next_due(&self) -> Option<u64>;

    /// Number of queued items.
    fn len(&self) -> usize;

    /// Check if nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every queued item.
    fn clear(&mut self);
}
