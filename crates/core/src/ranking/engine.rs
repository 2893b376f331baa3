//! Ranking engine
//!
//! [`RankingEngine`] is the explicit context that produces ranked queues.
//! [`EngineSlot`] holds one for callers that must gate on initialization.

use super::queue::RankedTaskQueue;
use crate::config::RankConfig;
use crate::task::{Task, TaskRecord};
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    config: RankConfig,
}

impl RankingEngine {
    pub fn new(config: RankConfig) -> Self {
        tracing::debug!("Ranking engine created: {:?}", config);
        Self { config }
    }

    /// Create an engine configured from the environment
    pub fn from_env() -> Self {
        Self::new(RankConfig::from_env())
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Get a fresh, empty queue
    pub fn create_queue(&self) -> RankedTaskQueue {
        RankedTaskQueue::new()
    }

    /// Return `tasks` in rank order, leaving the input untouched
    pub fn sort_tasks(&self, tasks: &[Task]) -> Vec<Task> {
        let mut queue = RankedTaskQueue::with_capacity(tasks.len());
        queue.extend(tasks.iter().cloned());
        queue.drain_all_sorted()
    }

    /// Normalize a boundary record into a task
    pub fn task_from_record(&self, record: TaskRecord) -> Result<Task> {
        record.into_task(self.config.zero_due_date_is_none)
    }

    /// Normalize boundary records and return them in rank order
    pub fn sort_records(&self, records: impl IntoIterator<Item = TaskRecord>) -> Result<Vec<Task>> {
        let mut queue = self.create_queue();
        for record in records {
            queue.insert(self.task_from_record(record)?);
        }
        Ok(queue.drain_all_sorted())
    }
}

/// Owned holder for an engine that is set up once before first use
#[derive(Debug, Default)]
pub struct EngineSlot {
    engine: Option<RankingEngine>,
}

impl EngineSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the engine; later calls keep the first one
    pub fn initialize(&mut self, config: RankConfig) -> &RankingEngine {
        if self.engine.is_some() {
            tracing::debug!("Ranking engine already initialized");
        }
        self.engine.get_or_insert_with(|| RankingEngine::new(config))
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Result<&RankingEngine> {
        self.engine.as_ref().ok_or_else(|| {
            tracing::error!("Ranking engine not initialized. Call initialize first.");
            Error::UninitializedEngine
        })
    }

    pub fn create_queue(&self) -> Result<RankedTaskQueue> {
        Ok(self.engine()?.create_queue())
    }

    pub fn sort_tasks(&self, tasks: &[Task]) -> Result<Vec<Task>> {
        Ok(self.engine()?.sort_tasks(tasks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskId, TaskPriority};

    fn record(id: TaskId, priority: &str, due_date: i64) -> TaskRecord {
        TaskRecord {
            id,
            text: format!("Task {id}"),
            completed: false,
            priority: priority.to_string(),
            due_date,
        }
    }

    #[test]
    fn test_uninitialized_slot() {
        let slot = EngineSlot::new();
        assert!(!slot.is_initialized());
        assert!(matches!(slot.engine(), Err(Error::UninitializedEngine)));
        assert!(matches!(slot.create_queue(), Err(Error::UninitializedEngine)));
        assert!(matches!(slot.sort_tasks(&[]), Err(Error::UninitializedEngine)));
    }

    #[test]
    fn test_initialized_slot_creates_empty_queue() {
        let mut slot = EngineSlot::new();
        slot.initialize(RankConfig::default());
        assert!(slot.is_initialized());

        let queue = slot.create_queue().unwrap();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_initialize_keeps_first_engine() {
        let mut slot = EngineSlot::new();
        slot.initialize(RankConfig::default().with_zero_due_date_is_none(false));
        let engine = slot.initialize(RankConfig::default());
        assert!(!engine.config().zero_due_date_is_none);
    }

    #[test]
    fn test_sort_tasks_leaves_input_untouched() {
        let engine = RankingEngine::default();
        let tasks = vec![
            Task::new(1, "low").with_priority(TaskPriority::Low),
            Task::new(2, "high").with_priority(TaskPriority::High),
            Task::new(3, "medium"),
        ];

        let sorted = engine.sort_tasks(&tasks);
        let sorted_ids: Vec<TaskId> = sorted.iter().map(Task::id).collect();
        assert_eq!(sorted_ids, vec![2, 3, 1]);
        assert_eq!(tasks[0].id(), 1);
    }

    #[test]
    fn test_sort_records_treats_zero_as_undated() {
        let engine = RankingEngine::default();
        let sorted = engine
            .sort_records(vec![record(1, "high", 0), record(2, "high", 1_700_000_000_000)])
            .unwrap();
        let ids: Vec<TaskId> = sorted.iter().map(Task::id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(sorted[1].due_date.is_none());
    }

    #[test]
    fn test_sort_records_with_literal_epoch() {
        let engine = RankingEngine::new(RankConfig::default().with_zero_due_date_is_none(false));
        let sorted = engine
            .sort_records(vec![record(1, "high", 1_700_000_000_000), record(2, "high", 0)])
            .unwrap();
        let ids: Vec<TaskId> = sorted.iter().map(Task::id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_sort_records_rejects_bad_priority() {
        let engine = RankingEngine::default();
        let result = engine.sort_records(vec![record(1, "high", 0), record(2, "soon", 0)]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
