//! Error types for the core library

use thiserror::Error;

use crate::task::TaskId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Ranking engine not initialized")]
    UninitializedEngine,

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
