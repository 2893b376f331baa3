//! To-do list state
//!
//! This module provides the source-of-truth task collection that the
//! presentation layer edits and re-ranks on every render.

mod model;

pub use model::*;
