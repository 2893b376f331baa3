//! Boundary record for tasks crossing a foreign interface
//!
//! Callers on the other side of the boundary cannot express an optional
//! timestamp, so "no due date" travels as the millisecond value `0`.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::model::{Task, TaskId};
use crate::{Error, Result};

/// Due date value meaning "no due date" on the boundary
pub const NO_DUE_DATE: i64 = 0;

/// Flat task record as pushed by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: String,
    /// Milliseconds since the Unix epoch, or `NO_DUE_DATE`
    #[serde(default)]
    pub due_date: i64,
}

impl TaskRecord {
    /// Parse a JSON array of records
    pub fn from_json_array(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into a task
    ///
    /// With `zero_is_none` set, a due date of `NO_DUE_DATE` becomes `None`;
    /// otherwise it is taken literally as the Unix epoch.
    pub fn into_task(self, zero_is_none: bool) -> Result<Task> {
        let priority = self.priority.parse()?;
        let mut task = Task::new(self.id, self.text)
            .with_priority(priority)
            .with_completed(self.completed);

        if self.due_date == NO_DUE_DATE && zero_is_none {
            tracing::trace!("Task {} has no due date", self.id);
            return Ok(task);
        }
        if self.due_date == NO_DUE_DATE {
            tracing::warn!("Task {} due date 0 taken as the Unix epoch", self.id);
        }

        let due = Utc
            .timestamp_millis_opt(self.due_date)
            .single()
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Due date out of range for task {}: {}",
                    self.id, self.due_date
                ))
            })?;
        task = task.with_due_date(due);
        Ok(task)
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            text: task.text.clone(),
            completed: task.completed,
            priority: task.priority.to_string(),
            due_date: task
                .due_date
                .map(|d| d.timestamp_millis())
                .unwrap_or(NO_DUE_DATE),
        }
    }
}
