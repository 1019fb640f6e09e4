//! Deferred tasks keyed by the resource they act on.
//!
//! A slot holds at most one pending task per key. Scheduling into an occupied
//! slot drops the previous handle, and every handle type used here cancels on
//! drop (`gloo_timers::callback::Timeout` clears its timer). A reopened modal
//! therefore never sees a stale "clear the frame" task from its last close.
//!
//! Handles are kept after they fire and released on the next replace or when
//! the owner is dropped; a timer must not drop its own closure while running.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::collections::HashMap;
use std::hash::Hash;

use gloo_timers::callback::Timeout;

#[derive(Debug)]
pub struct PendingTasks<K, H> {
    slots: HashMap<K, H>,
}

impl<K, H> Default for PendingTasks<K, H> {
    fn default() -> Self {
        Self { slots: HashMap::new() }
    }
}

impl<K: Eq + Hash, H> PendingTasks<K, H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle` for `key`, cancelling whatever was there.
    /// Returns `true` if an earlier handle was replaced.
    pub fn replace(&mut self, key: K, handle: H) -> bool {
        self.slots.insert(key, handle).is_some()
    }

    /// Cancel the task for `key`. Returns `true` if one was held.
    pub fn cancel(&mut self, key: &K) -> bool {
        self.slots.remove(key).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.slots.clear();
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Timer slots used by the behaviors.
pub type TimerSlots<K> = PendingTasks<K, Timeout>;
