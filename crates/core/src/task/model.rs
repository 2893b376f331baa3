//! Task model definitions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Caller-assigned task identity
pub type TaskId = i64;

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl TaskPriority {
    /// Rank of the tier, lower ranks first (high = 0, medium = 1, low = 2)
    pub fn tier_rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(Error::InvalidInput(format!("Unknown priority: {other:?}"))),
        }
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: TaskPriority,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new open task with default priority and no due date
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            priority: TaskPriority::default(),
            due_date: None,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the completed flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_task() {
        let task = Task::new(7, "Test task");
        assert_eq!(task.id(), 7);
        assert_eq!(task.text, "Test task");
        assert!(!task.completed);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_task_builders() {
        let due = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let task = Task::new(1, "Test task")
            .with_priority(TaskPriority::High)
            .with_due_date(due)
            .with_completed(true);

        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.due_date, Some(due));
        assert!(task.completed);
    }

    #[test]
    fn test_tier_rank_orders_high_first() {
        assert!(TaskPriority::High.tier_rank() < TaskPriority::Medium.tier_rank());
        assert!(TaskPriority::Medium.tier_rank() < TaskPriority::Low.tier_rank());
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("HIGH".parse::<TaskPriority>().unwrap(), TaskPriority::High);
        assert_eq!(" low".parse::<TaskPriority>().unwrap(), TaskPriority::Low);
        match "urgent".parse::<TaskPriority>() {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains("urgent")),
            other => panic!("Expected InvalidInput error, got: {:?}", other),
        }
    }

    #[test]
    fn test_task_wire_format() {
        let due = Utc.timestamp_millis_opt(1_704_067_200_000).unwrap();
        let task = Task::new(3, "Ship it")
            .with_priority(TaskPriority::Low)
            .with_due_date(due);

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "text": "Ship it",
                "completed": false,
                "priority": "low",
                "dueDate": 1_704_067_200_000i64,
            })
        );

        let undated: Task =
            serde_json::from_str(r#"{"id":4,"text":"x","completed":true,"priority":"high","dueDate":null}"#)
                .unwrap();
        assert_eq!(undated.id(), 4);
        assert!(undated.due_date.is_none());
    }
}
