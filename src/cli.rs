use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::preferences::{PreferencesPatch, Theme};

/// Terminal viewer for mock user profiles.
#[derive(Debug, Default, Parser)]
#[command(name = "userview", version, about)]
pub struct Cli {
    /// User id to load at startup
    #[arg(long, value_name = "ID")]
    pub user_id: Option<u32>,

    /// Simulated load latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Greeting shown before the user's name
    #[arg(long, value_name = "TEXT")]
    pub greeting: Option<String>,

    /// Initial colour theme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Initial language code
    #[arg(long, value_name = "CODE")]
    pub language: Option<String>,

    /// Path to the config file (default: ~/.config/userview/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Overrides config values with the flags given on the command line.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(id) = self.user_id {
            config.profile.initial_id = id;
        }
        if let Some(delay) = self.delay_ms {
            config.profile.load_delay_ms = delay;
        }
        if let Some(greeting) = &self.greeting {
            config.profile.greeting = Some(greeting.clone());
        }

        let overrides = PreferencesPatch {
            theme: self.theme,
            notifications: None,
            language: self.language.clone(),
        };
        if !overrides.is_empty() {
            config.preferences = std::mem::take(&mut config.preferences).overlay(overrides);
        }
    }
}
