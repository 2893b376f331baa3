//! Core library for todo-rank
//!
//! This crate contains the task ordering logic behind the to-do list, including:
//! - Task model and the foreign boundary record
//! - Ranked task queue and the ranking engine
//! - To-do list state with filtering

pub mod config;
pub mod error;
pub mod list;
pub mod ranking;
pub mod task;

pub use config::RankConfig;
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
