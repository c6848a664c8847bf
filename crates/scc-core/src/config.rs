//! Channel configuration, loadable from TOML.
//!
//! ```toml
//! omitted_description = "clear"
//! initial_description = "not started"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SccError, SccResult};

/// Convert any `Display` error into an `SccError` variant via a closure factory.
macro_rules! map_err {
    ($variant:ident) => {
        |e| SccError::$variant(e.to_string())
    };
}

/// What a report without a description does to the stored description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OmittedDescription {
    /// Keep whatever the previous report said.
    #[default]
    Retain,
    /// Reset the description to empty.
    Clear,
}

/// Settings for a single channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub omitted_description: OmittedDescription,
    /// Description a fresh channel starts with.
    pub initial_description: String,
}

impl ChannelConfig {
    pub fn from_file(path: &Path) -> SccResult<Self> {
        let content = std::fs::read_to_string(path).map_err(map_err!(Read))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> SccResult<Self> {
        toml::from_str(content).map_err(map_err!(Parse))
    }

    pub fn to_toml_string(&self) -> SccResult<String> {
        toml::to_string_pretty(self).map_err(map_err!(Serialize))
    }

    /// Set the omitted-description policy.
    pub fn with_omitted_description(mut self, policy: OmittedDescription) -> Self {
        self.omitted_description = policy;
        self
    }

    /// Set the description a fresh channel starts with.
    pub fn with_initial_description(mut self, description: impl Into<String>) -> Self {
        self.initial_description = description.into();
        self
    }
}
