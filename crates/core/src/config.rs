//! Ranking configuration
//!
//! Values are plain data with sensible defaults and can be overridden
//! through environment variables.

use serde::{Deserialize, Serialize};

use crate::task::TaskPriority;

pub const ZERO_DUE_IS_NONE_VAR: &str = "TODO_RANK_ZERO_DUE_IS_NONE";
pub const DEFAULT_PRIORITY_VAR: &str = "TODO_RANK_DEFAULT_PRIORITY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankConfig {
    /// Treat a boundary due date of `0` as "no due date"
    pub zero_due_date_is_none: bool,
    /// Priority given to tasks created through `TodoList::create`
    pub default_priority: TaskPriority,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            zero_due_date_is_none: true,
            default_priority: TaskPriority::default(),
        }
    }
}

impl RankConfig {
    /// Build a config from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let zero_due_date_is_none = lookup(ZERO_DUE_IS_NONE_VAR)
            .and_then(|raw| parse_flag(&raw))
            .unwrap_or(defaults.zero_due_date_is_none);
        let default_priority = match lookup(DEFAULT_PRIORITY_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring invalid {}={:?}, using {}",
                    DEFAULT_PRIORITY_VAR,
                    raw,
                    defaults.default_priority
                );
                defaults.default_priority
            }),
            None => defaults.default_priority,
        };

        Self {
            zero_due_date_is_none,
            default_priority,
        }
    }

    pub fn with_zero_due_date_is_none(mut self, enabled: bool) -> Self {
        self.zero_due_date_is_none = enabled;
        self
    }

    pub fn with_default_priority(mut self, priority: TaskPriority) -> Self {
        self.default_priority = priority;
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
