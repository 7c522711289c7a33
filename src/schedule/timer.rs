//! Fixed-delay timer queue.
//!
//! Items become due `delay_ms` after they are scheduled. With a single fixed
//! delay the queue behaves FIFO, but a heap keyed on (due time, sequence)
//! keeps ordering correct even when scheduling times interleave.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::core::CellPos;

use super::{InfectionScheduler, ScheduledInfection};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    due_at: u64,
    sequence: u64,
    target: CellPos,
}

/// Min-heap of continuations with a fixed delay.
#[derive(Clone, Debug)]
pub struct TimerQueue {
    delay_ms: u64,
    heap: BinaryHeap<Reverse<Entry>>,
    next_sequence: u64,
}

impl TimerQueue {
    /// Create a queue that delays every item by `delay_ms`.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// The fixed delay applied to each item.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

impl InfectionScheduler for TimerQueue {
    fn schedule(&mut self, now: u64, target: CellPos) {
        let entry = Entry {
            due_at: now.saturating_add(self.delay_ms),
            sequence: self.next_sequence,
            target,
        };
        self.next_sequence += 1;
        self.heap.push(Reverse(entry));
    }

    fn pop_due(&mut self, now: u64) -> Option<ScheduledInfection> {
        if self.heap.peek()?.0.due_at > now {
            return None;
        }
        let Reverse(entry) = self.heap.pop()?;
        Some(ScheduledInfection {
            due_at: entry.due_at,
            sequence: entry.sequence,
            target: entry.target,
        })
    }

    fn next_due(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(entry)| entry.due_at)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
