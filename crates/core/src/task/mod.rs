//! Task module
//!
//! This module contains the task model and its foreign boundary form.

mod model;
mod record;

pub use model::*;
pub use record::TaskRecord;
