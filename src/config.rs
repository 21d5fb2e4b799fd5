use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::{env, str::FromStr};

/// How positional moves treat indices outside the current column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexPolicy {
    /// Insert positions past the end append; a missing source slot is a no-op
    #[default]
    Clamp,
    /// Any out-of-range index fails the move and leaves the board untouched
    Reject,
}

impl FromStr for IndexPolicy {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "reject" => Ok(Self::Reject),
            _ => Err(KanbanError::ConfigError(format!(
                "Invalid index policy '{}'. Valid policies: clamp, reject",
                s
            ))),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub index_policy: IndexPolicy,
    /// Trim submitted titles before the non-empty check
    pub trim_titles: bool,
    /// Capacity of the session event queue
    pub event_buffer: usize,
}

impl BoardConfig {
    const INDEX_POLICY_VAR: &'static str = "KANBAN_INDEX_POLICY";
    const TRIM_TITLES_VAR: &'static str = "KANBAN_TRIM_TITLES";
    const EVENT_BUFFER_VAR: &'static str = "KANBAN_EVENT_BUFFER";

    /// Checks values the field types alone cannot rule out
    pub fn validate(&self) -> Result<()> {
        if self.event_buffer == 0 {
            return Err(KanbanError::ConfigError(
                "event_buffer must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds a configuration from the environment, defaulting unset values
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(Self::INDEX_POLICY_VAR) {
            config.index_policy = value.parse()?;
        }

        if let Some(value) = lookup(Self::TRIM_TITLES_VAR) {
            config.trim_titles = value.parse().map_err(|_| {
                KanbanError::ConfigError(format!(
                    "{} must be true or false, got '{}'",
                    Self::TRIM_TITLES_VAR,
                    value
                ))
            })?;
        }

        if let Some(value) = lookup(Self::EVENT_BUFFER_VAR) {
            config.event_buffer = value.parse().map_err(|_| {
                KanbanError::ConfigError(format!(
                    "{} must be a positive integer, got '{}'",
                    Self::EVENT_BUFFER_VAR,
                    value
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            index_policy: IndexPolicy::Clamp,
            trim_titles: true,
            event_buffer: 64,
        }
    }
}
