//! Bounded deduplicated window of recent integers
//!
//! The window holds at most `capacity` distinct values in first-inserted
//! order. Merging a batch appends each value not already present, then
//! evicts from the front until the capacity bound holds again. Eviction is
//! positional only: a large batch can push out values it just inserted.

use std::collections::{HashSet, VecDeque};

use crate::errors::WindowError;
use crate::numeric;

/// Capacity used when none is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Outcome of a single merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    /// Window contents immediately before the merge.
    pub prev_state: Vec<i64>,
    /// The batch as supplied, duplicates included.
    pub numbers: Vec<i64>,
    /// Window contents immediately after the merge.
    pub curr_state: Vec<i64>,
}

/// Fixed-capacity, insertion-ordered set of integers.
#[derive(Debug, Clone)]
pub struct NumberWindow {
    capacity: usize,
    /// Retained values, oldest at the front.
    values: VecDeque<i64>,
    /// Membership index over `values`.
    members: HashSet<i64>,
}

impl NumberWindow {
    /// Create an empty window holding at most `capacity` values.
    pub fn new(capacity: usize) -> Result<Self, WindowError> {
        if capacity == 0 {
            return Err(WindowError::ZeroCapacity);
        }

        Ok(Self {
            capacity,
            values: VecDeque::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
        })
    }

    /// Create an empty window with [`DEFAULT_WINDOW_SIZE`].
    pub fn with_default_capacity() -> Self {
        Self {
            capacity: DEFAULT_WINDOW_SIZE,
            values: VecDeque::with_capacity(DEFAULT_WINDOW_SIZE),
            members: HashSet::with_capacity(DEFAULT_WINDOW_SIZE),
        }
    }

    /// Merge a batch of numbers into the window.
    ///
    /// Values already present (in the window or earlier in the batch) are
    /// skipped without reordering. The returned states are copies and do
    /// not alias the live window.
    pub fn merge(&mut self, numbers: Vec<i64>) -> MergeResult {
        let prev_state = self.snapshot();

        for &value in &numbers {
            if self.members.insert(value) {
                self.values.push_back(value);
            }
        }

        while self.values.len() > self.capacity {
            if let Some(evicted) = self.values.pop_front() {
                self.members.remove(&evicted);
            }
        }

        MergeResult {
            prev_state,
            numbers,
            curr_state: self.snapshot(),
        }
    }

    /// Mean of the current contents, 0.0 when empty.
    pub fn average(&self) -> f64 {
        numeric::mean(&self.values)
    }

    /// Owned copy of the contents, oldest first.
    pub fn snapshot(&self) -> Vec<i64> {
        self.values.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &i64> {
        self.values.iter()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.members.contains(&value)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for NumberWindow {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
