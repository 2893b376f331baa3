//! To-do list model definitions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RankConfig;
use crate::ranking::RankingEngine;
use crate::task::{Task, TaskId, TaskPriority};
use crate::{Error, Result};

/// Which tasks a ranked view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    All,
    Active,
    Completed,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self::All
    }
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        })
    }
}

impl FromStr for TaskFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(Error::InvalidInput(format!("Unknown filter: {other:?}"))),
        }
    }
}

/// The current set of tasks, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    config: RankConfig,
    tasks: Vec<Task>,
}

impl TodoList {
    /// Create an empty list with the default config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RankConfig) -> Self {
        Self {
            config,
            tasks: Vec::new(),
        }
    }

    /// Create a task with the configured default priority and add it
    pub fn create(&mut self, id: TaskId, text: impl Into<String>) -> Result<&Task> {
        let task = Task::new(id, text).with_priority(self.config.default_priority);
        self.add(task)
    }

    /// Add a task
    pub fn add(&mut self, task: Task) -> Result<&Task> {
        if task.text.trim().is_empty() {
            return Err(Error::InvalidInput("Task text must not be blank".to_string()));
        }
        if self.position(task.id()).is_some() {
            return Err(Error::InvalidInput(format!(
                "Task with ID {} already exists",
                task.id()
            )));
        }
        tracing::debug!("Added task {} to list", task.id());
        self.tasks.push(task);
        let index = self.tasks.len() - 1;
        Ok(&self.tasks[index])
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Flip the completed flag
    pub fn toggle(&mut self, id: TaskId) -> Result<&Task> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Ok(task)
    }

    pub fn update_priority(&mut self, id: TaskId, priority: TaskPriority) -> Result<&Task> {
        let task = self.get_mut(id)?;
        task.priority = priority;
        Ok(task)
    }

    pub fn update_due_date(&mut self, id: TaskId, due_date: Option<DateTime<Utc>>) -> Result<&Task> {
        let task = self.get_mut(id)?;
        task.due_date = due_date;
        Ok(task)
    }

    /// Remove a task by ID
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.tasks.remove(index))
    }

    /// Remove all completed tasks, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        tracing::debug!("Cleared {} completed tasks", removed);
        removed
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Rank the whole list, then keep what `filter` accepts
    pub fn ranked(&self, engine: &RankingEngine, filter: TaskFilter) -> Vec<Task> {
        let mut ranked = engine.sort_tasks(&self.tasks);
        ranked.retain(|t| filter.matches(t));
        ranked
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(Error::TaskNotFound(id))
    }
}
