use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;

use crate::models::{Interaction, InteractionTarget};

/// Bounded, oldest-first history of a user's clicks
///
/// Appending beyond `capacity` evicts from the front, so the log always
/// holds the most recent interactions in the order they happened.
#[derive(Debug, Clone)]
pub struct InteractionLog {
    entries: VecDeque<Interaction>,
    capacity: usize,
    last_id: Option<i64>,
}

impl InteractionLog {
    /// Creates an empty log; a capacity of zero is treated as one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            last_id: None,
        }
    }

    /// Appends a click timestamped with the current wall clock, returning its id
    pub fn record(&mut self, target: InteractionTarget) -> i64 {
        self.record_at(target, Utc::now())
    }

    /// Appends a click observed at `now`
    ///
    /// Ids are millisecond timestamps; when the clock has not advanced past
    /// the previous entry the id is bumped so ids stay strictly increasing.
    pub fn record_at(&mut self, target: InteractionTarget, now: DateTime<Utc>) -> i64 {
        let millis = now.timestamp_millis();
        let id = match self.last_id {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        let timestamp = Utc.timestamp_millis_opt(id).single().unwrap_or(now);

        self.last_id = Some(id);
        self.entries.push_back(Interaction {
            id,
            target,
            timestamp,
        });

        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::debug!(interaction_id = evicted.id, "Evicted oldest interaction");
            }
        }

        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All retained interactions, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Interaction> + ExactSizeIterator {
        self.entries.iter()
    }

    /// The `count` most recent interactions, oldest first
    pub fn recent(&self, count: usize) -> impl ExactSizeIterator<Item = &Interaction> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries.iter().skip(skip)
    }
}
