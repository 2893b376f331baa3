//! Task ranking
//!
//! Orders tasks by priority tier, then due date (undated last), then
//! insertion order.

mod engine;
mod key;
mod queue;

pub use engine::{EngineSlot, RankingEngine};
pub use key::{compare_tasks, RankKey};
pub use queue::RankedTaskQueue;
