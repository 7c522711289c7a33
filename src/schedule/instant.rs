//! Zero-delay FIFO queue.
//!
//! Continuations are due the moment they are scheduled, so a whole cascade
//! resolves within a single `Board::advance` call. Useful for simulations,
//! property tests and benches where pacing is irrelevant.

use std::collections::VecDeque;

use crate::core::CellPos;

use super::{InfectionScheduler, ScheduledInfection};

/// FIFO of continuations with no delay.
#[derive(Clone, Debug, Default)]
pub struct InstantQueue {
    pending: VecDeque<ScheduledInfection>,
    next_sequence: u64,
}

impl InstantQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl InfectionScheduler for InstantQueue {
    fn schedule(&mut self, now: u64, target: CellPos) {
        self.pending.push_back(ScheduledInfection {
            due_at: now,
            sequence: self.next_sequence,
            target,
        });
        self.next_sequence += 1;
    }

    fn pop_due(&mut self, now: u64) -> Option<ScheduledInfection> {
        match self.pending.front() {
            Some(item) if item.due_at <= now => self.pending.pop_front(),
            _ => None,
        }
    }

    fn next_due(&self) -> Option<u64> {
        self.pending.front().map(|item| item.due_at)
    }

    fn len(&self) -> usize {
        self.pending.len()
    }

    fn clear(&mut self) {
        self.pending.clear();
    }
}
