use std::collections::VecDeque;

use crate::client::models::book::{Book, ShelfKind};

#[derive(Debug, Clone, PartialEq)]
pub struct ShelfJob {
    pub book: Book,
    pub shelf: ShelfKind,
}

/// Serializes shelf mutations for the session: one request in flight, the
/// rest wait in submission order, so the last submitted move is the one
/// that lands last.
#[derive(Debug, Clone, Default)]
pub struct ShelfQueue {
    in_flight: Option<ShelfJob>,
    waiting: VecDeque<ShelfJob>,
}

impl ShelfQueue {
    /// Queues `job`. Returns it back when it can start immediately.
    pub fn enqueue(&mut self, job: ShelfJob) -> Option<ShelfJob> {
        if self.in_flight.is_some() {
            self.waiting.push_back(job);
            return None;
        }
        self.in_flight = Some(job.clone());
        Some(job)
    }

    /// Marks the in-flight job as done and hands out the next one.
    pub fn complete(&mut self) -> Option<ShelfJob> {
        self.in_flight = self.waiting.pop_front();
        self.in_flight.clone()
    }

    pub fn in_flight(&self) -> Option<&ShelfJob> {
        self.in_flight.as_ref()
    }

    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }

    pub fn clear(&mut self) {
        self.in_flight = None;
        self.waiting.clear();
    }
}
