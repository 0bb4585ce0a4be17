// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitsim.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitsim.toml (cwd, optional)
//! 3. --config (repeatable)
//! 4. GITSIM_* env vars
//! 5. --set KEY=VALUE
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITSIM_USER__NAME=Ada                 → user.name = "Ada"
//! GITSIM_SIMULATOR__SEED=42             → simulator.seed = 42
//! GITSIM_GLOBAL__OUTPUT_LOG_LEVEL=4     → global.output_log_level = 4
//! GITSIM_REMOTES__UPSTREAM=https://...  → remotes.upstream = "https://..."
//! ```
//!
//! # Example
//!
//! ```toml
//! [simulator]
//! initial_branch = "trunk"
//! seed = 7
//!
//! [user]
//! name = "Ada Lovelace"
//! email = "ada@example.com"
//!
//! [remotes]
//! origin = "https://example.com/course.git"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::git::state::UserConfig;
use crate::git::{SimulatorSettings, default_remotes};

use loader::ConfigLoader;
use types::{GlobalConfig, Remotes, SimulatorConfig, TerminalConfig};

/// Local configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "gitsim.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "GITSIM";

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Initial repository state.
    pub simulator: SimulatorConfig,
    /// Initial `user.name` / `user.email`.
    pub user: UserConfig,
    /// Remotes known to `pull` / `push`. Replaces the default `origin` when set.
    pub remotes: Remotes,
    /// Interactive terminal appearance.
    pub terminal: TerminalConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            simulator: SimulatorConfig::default(),
            user: UserConfig::default(),
            remotes: default_remotes(),
            terminal: TerminalConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitsim::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitsim.toml")
    ///     .with_env_prefix("GITSIM")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that deserialize fine but make no sense.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.simulator.validate()?;
        if let Some((name, _)) = self.remotes.iter().find(|(_, url)| url.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                section: "remotes".to_string(),
                key: name.clone(),
                message: "remote URL must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Settings for a new [`crate::git::Simulator`] session.
    #[must_use]
    pub fn simulator_settings(&self) -> SimulatorSettings {
        let sim = &self.simulator;
        SimulatorSettings::builder()
            .with_initial_branch(sim.initial_branch.clone())
            .with_seed_hash(sim.seed_hash.clone())
            .with_seed_message(sim.seed_message.clone())
            .with_seed_author(sim.seed_author.clone())
            .with_git_version(sim.git_version.clone())
            .with_workspace(sim.workspace.clone())
            .with_user(self.user.clone())
            .with_remotes(self.remotes.clone())
            .maybe_with_rng_seed(sim.seed)
            .build()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_simulator_options(&mut options);
        self.format_user_options(&mut options);
        self.format_remote_options(&mut options);
        self.format_terminal_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_simulator_options(&self, options: &mut BTreeMap<String, String>) {
        let sim = &self.simulator;
        options.insert(
            "simulator.initial_branch".into(),
            sim.initial_branch.clone(),
        );
        options.insert("simulator.seed_hash".into(), sim.seed_hash.clone());
        options.insert("simulator.seed_message".into(), sim.seed_message.clone());
        options.insert("simulator.seed_author".into(), sim.seed_author.clone());
        options.insert("simulator.git_version".into(), sim.git_version.clone());
        options.insert("simulator.workspace".into(), sim.workspace.clone());
        if let Some(seed) = sim.seed {
            options.insert("simulator.seed".into(), seed.to_string());
        }
    }

    fn format_user_options(&self, options: &mut BTreeMap<String, String>) {
        if !self.user.name.is_empty() {
            options.insert("user.name".into(), self.user.name.clone());
        }
        if !self.user.email.is_empty() {
            options.insert("user.email".into(), self.user.email.clone());
        }
    }

    fn format_remote_options(&self, options: &mut BTreeMap<String, String>) {
        for (name, url) in &self.remotes {
            options.insert(format!("remotes.{name}"), url.clone());
        }
    }

    fn format_terminal_options(&self, options: &mut BTreeMap<String, String>) {
        let term = &self.terminal;
        options.insert("terminal.prompt_user".into(), term.prompt_user.clone());
        options.insert("terminal.prompt_host".into(), term.prompt_host.clone());
        options.insert("terminal.prompt_path".into(), term.prompt_path.clone());
        options.insert("terminal.color".into(), term.color.to_string());
    }
}
