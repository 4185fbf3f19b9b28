use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::preferences::PreferencesPatch;
use crate::ui::profile::{UserDataOptions, DEFAULT_LOAD_DELAY, DEFAULT_SUBJECT_ID};

/// Greeting shown before the subject name when none is configured.
pub const DEFAULT_GREETING: &str = "Hey!";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    /// Custom default preferences; also the target of a preferences reset.
    #[serde(default)]
    pub preferences: PreferencesPatch,
}

/// Settings of the profile view and its data-fetch unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Subject loaded at startup (default: 1).
    #[serde(default = "default_initial_id")]
    pub initial_id: u32,
    /// Simulated latency of each load in milliseconds (default: 1000).
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
    /// Text placed before the subject name (default: "Hey!").
    #[serde(default)]
    pub greeting: Option<String>,
}

fn default_initial_id() -> u32 {
    DEFAULT_SUBJECT_ID
}

fn default_load_delay_ms() -> u64 {
    DEFAULT_LOAD_DELAY.as_millis() as u64
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            initial_id: default_initial_id(),
            load_delay_ms: default_load_delay_ms(),
            greeting: None,
        }
    }
}

impl ProfileConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    /// Greeting to render, falling back to [`DEFAULT_GREETING`] when unset
    /// or empty.
    pub fn greeting(&self) -> &str {
        match self.greeting.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => DEFAULT_GREETING,
        }
    }

    pub fn user_data_options(&self) -> UserDataOptions {
        UserDataOptions {
            initial_id: self.initial_id,
            load_delay: self.load_delay(),
        }
    }
}
