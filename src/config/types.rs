// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]     output_log_level, file_log_level, log_file
//! [simulator]  initial_branch, seed_hash, seed_message, seed_author,
//!              git_version, workspace, seed
//! [user]       name, email                  (git::state::UserConfig)
//! [remotes]    <name> = <url>
//! [terminal]   prompt_user, prompt_host, prompt_path, color
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::git::entropy::is_short_hash;
use crate::git::{
    DEFAULT_BRANCH, DEFAULT_GIT_VERSION, DEFAULT_SEED_AUTHOR, DEFAULT_SEED_HASH,
    DEFAULT_SEED_MESSAGE, DEFAULT_WORKSPACE,
};
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Initial repository state and fixed output strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Branch checked out at session start.
    pub initial_branch: String,
    /// Hash of the seed commit.
    pub seed_hash: String,
    pub seed_message: String,
    pub seed_author: String,
    /// Reported by `git --version`.
    pub git_version: String,
    /// Directory reported by `git init`.
    pub workspace: String,
    /// RNG seed for reproducible hashes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            initial_branch: DEFAULT_BRANCH.to_string(),
            seed_hash: DEFAULT_SEED_HASH.to_string(),
            seed_message: DEFAULT_SEED_MESSAGE.to_string(),
            seed_author: DEFAULT_SEED_AUTHOR.to_string(),
            git_version: DEFAULT_GIT_VERSION.to_string(),
            workspace: DEFAULT_WORKSPACE.to_string(),
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Validate simulator settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty or whitespace-containing
    /// branch name, or a seed hash that is not 7 lowercase base36 characters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_branch.is_empty() || self.initial_branch.contains(char::is_whitespace) {
            return Err(invalid(
                "simulator",
                "initial_branch",
                format!("'{}' is not a valid branch name", self.initial_branch),
            ));
        }
        if !is_short_hash(&self.seed_hash) {
            return Err(invalid(
                "simulator",
                "seed_hash",
                format!(
                    "expected 7 characters of [0-9a-z], got '{}'",
                    self.seed_hash
                ),
            ));
        }
        Ok(())
    }
}

/// Remote name to URL; used by `pull`, `push` and `config --list`.
pub type Remotes = BTreeMap<String, String>;

/// Interactive terminal appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    pub prompt_user: String,
    pub prompt_host: String,
    pub prompt_path: String,
    /// Colorize prompt and error output.
    pub color: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt_user: "user".to_string(),
            prompt_host: "simulator".to_string(),
            prompt_path: "~/workspace".to_string(),
            color: true,
        }
    }
}

impl TerminalConfig {
    /// `user@simulator:~/workspace$ `
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$ ",
            self.prompt_user, self.prompt_host, self.prompt_path
        )
    }
}

fn invalid(section: &str, key: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message,
    }
}
