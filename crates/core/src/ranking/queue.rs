//! Ranked task queue
//!
//! A binary heap of tasks that always reports them in rank order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::key::RankKey;
use crate::task::Task;
use crate::{Error, Result};

#[derive(Debug, Clone)]
struct Entry {
    key: RankKey,
    task: Task,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority-ordered multiset of tasks
///
/// The top is the task with the smallest [`RankKey`]. Duplicate ids are
/// allowed and kept as distinct entries.
#[derive(Debug, Clone, Default)]
pub struct RankedTaskQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl RankedTaskQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Add a task
    pub fn insert(&mut self, task: Task) {
        let key = RankKey::for_task(&task, self.next_seq);
        self.next_seq += 1;
        tracing::debug!(
            "Queued task {} ({}), {} queued",
            task.id(),
            task.priority,
            self.heap.len() + 1
        );
        self.heap.push(Reverse(Entry { key, task }));
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Get the highest-ranked task without removing it
    pub fn peek_top(&self) -> Result<&Task> {
        self.heap
            .peek()
            .map(|Reverse(entry)| &entry.task)
            .ok_or_else(|| Error::InvalidState("peek on empty task queue".to_string()))
    }

    /// Remove and return the highest-ranked task
    pub fn pop_top(&mut self) -> Result<Task> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.task)
            .ok_or_else(|| Error::InvalidState("pop on empty task queue".to_string()))
    }

    /// All tasks from highest to lowest rank
    ///
    /// Extracts from a copy of the heap, so the queue itself is left as is
    /// and repeated calls return the same sequence.
    pub fn drain_all_sorted(&self) -> Vec<Task> {
        let mut scratch = self.heap.clone();
        let mut sorted = Vec::with_capacity(scratch.len());
        while let Some(Reverse(entry)) = scratch.pop() {
            sorted.push(entry.task);
        }
        tracing::trace!("Ranked snapshot of {} tasks", sorted.len());
        sorted
    }

    /// Remove all tasks and restart insertion order
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    /// Replace the contents with `tasks`, ranked afresh
    pub fn rebuild(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.clear();
        self.extend(tasks);
        tracing::debug!("Rebuilt task queue with {} tasks", self.heap.len());
    }
}

impl Extend<Task> for RankedTaskQueue {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        for task in iter {
            self.insert(task);
        }
    }
}

impl FromIterator<Task> for RankedTaskQueue {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
