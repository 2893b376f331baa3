//! Composite ranking key

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::task::Task;

/// Sort key of a queued task; smaller keys rank first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankKey {
    pub tier: u8,
    pub due_date: Option<DateTime<Utc>>,
    /// Insertion sequence within the owning queue
    pub seq: u64,
}

impl RankKey {
    pub fn for_task(task: &Task, seq: u64) -> Self {
        Self {
            tier: task.priority.tier_rank(),
            due_date: task.due_date,
            seq,
        }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| cmp_due_dates(self.due_date, other.due_date))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two tasks by tier and due date only
///
/// Returns `Equal` for tasks that only insertion order can separate.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.priority
        .tier_rank()
        .cmp(&b.priority.tier_rank())
        .then_with(|| cmp_due_dates(a.due_date, b.due_date))
}

// A missing due date sorts after every present one.
fn cmp_due_dates(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
