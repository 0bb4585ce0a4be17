// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   SimError (reported, never propagated past Simulator::execute)
//!     UnrecognizedCommand     CommandNotFound
//!     UnrecognizedSubcommand  MissingSubcommand, UnknownSubcommand
//!     InvalidArgument         Missing*, UnknownOption, InvalidLogLimit, ...
//!     Referential             BranchNotFound, PathspecNotFound, NoStashEntries
//!     Conflict                BranchExists, CannotDeleteCurrent
//!
//!   GitsimError (~24 bytes, front end only)
//!     Bailed    Script
//!     Box<str>  Box<ScriptError>
//! ```
//!
//! The `Display` text of every [`SimError`] is exactly what the transcript
//! shows for that failure.

use thiserror::Error;

use crate::git::cmd::SUBCOMMANDS;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GitsimError`].
pub type GitsimResult<T> = std::result::Result<T, GitsimError>;

/// Result type used by the command interpreter.
pub type SimResult<T> = std::result::Result<T, SimError>;

/// Errors raised by the front end before or after a session runs.
///
/// Sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum GitsimError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Script loading error.
    #[error("script error: {0}")]
    Script(#[from] Box<ScriptError>),
}

/// Create a fatal [`GitsimError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> GitsimError {
    GitsimError::Bailed(message.into().into_boxed_str())
}

impl From<ScriptError> for GitsimError {
    fn from(err: ScriptError) -> Self {
        Self::Script(Box::new(err))
    }
}

// --- Simulator Errors ---

/// Broad classification of a [`SimError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// First token is not `git`.
    UnrecognizedCommand,
    /// Second token is missing or not in the dispatch table.
    UnrecognizedSubcommand,
    /// Missing required argument or malformed argument.
    InvalidArgument,
    /// Named branch, path or stash entry does not exist.
    Referential,
    /// Operation conflicts with the current state.
    Conflict,
}

/// Errors reported by the command interpreter.
///
/// None of these abort a session: each one becomes a single transcript entry
/// flagged as an error, and the repository state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error(
        "Command not found: {command}. This is a Git simulator - only git commands are supported."
    )]
    CommandNotFound { command: String },

    #[error("usage: git <command> [<args>]\n\nsupported commands: {}", SUBCOMMANDS.join(", "))]
    MissingSubcommand,

    #[error(
        "git: '{name}' is not a git command. Try: status, branch, checkout, add, commit, log, merge, pull, push, stash, rebase, cherry-pick"
    )]
    UnknownSubcommand { name: String },

    #[error("error: unknown option `{option}'")]
    UnknownOption { option: String },

    #[error("error: unsupported config key '{key}' (supported: user.name, user.email)")]
    UnsupportedConfigKey { key: String },

    #[error("error: missing config key")]
    MissingConfigKey,

    #[error("error: Please use -m to specify a commit message")]
    MissingCommitMessage,

    #[error("error: switch `m' requires a value")]
    EmptyCommitMessage,

    #[error("error: branch name required")]
    MissingBranchName,

    #[error("error: repository URL required")]
    MissingUrl,

    #[error("error: commit hash required")]
    MissingCommitHash,

    #[error("Nothing specified, nothing added.")]
    NothingSpecified,

    #[error("fatal: '{value}': not a valid commit limit")]
    InvalidLogLimit { value: String },

    #[error("fatal: invalid pathspec '{pattern}'")]
    InvalidPathspec { pattern: String },

    #[error("error: unknown subcommand: {name}\nusage: git stash [push|save|list|apply|pop|drop|clear]")]
    UnknownStashCommand { name: String },

    #[error("error: branch '{name}' not found")]
    BranchNotFound { name: String },

    #[error("error: pathspec '{name}' did not match any file(s) known to git")]
    PathspecNotFound { name: String },

    #[error("fatal: pathspec '{pattern}' did not match any files")]
    PathspecNoMatch { pattern: String },

    #[error("No stash entries found.")]
    NoStashEntries,

    #[error("fatal: A branch named '{name}' already exists.")]
    BranchExists { name: String },

    #[error("error: Cannot delete branch '{name}' checked out")]
    CannotDeleteCurrent { name: String },
}

impl SimError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CommandNotFound { .. } => ErrorKind::UnrecognizedCommand,
            Self::MissingSubcommand | Self::UnknownSubcommand { .. } => {
                ErrorKind::UnrecognizedSubcommand
            }
            Self::UnknownOption { .. }
            | Self::UnsupportedConfigKey { .. }
            | Self::MissingConfigKey
            | Self::MissingCommitMessage
            | Self::EmptyCommitMessage
            | Self::MissingBranchName
            | Self::MissingUrl
            | Self::MissingCommitHash
            | Self::NothingSpecified
            | Self::InvalidLogLimit { .. }
            | Self::InvalidPathspec { .. }
            | Self::UnknownStashCommand { .. } => ErrorKind::InvalidArgument,
            Self::BranchNotFound { .. }
            | Self::PathspecNotFound { .. }
            | Self::PathspecNoMatch { .. }
            | Self::NoStashEntries => ErrorKind::Referential,
            Self::BranchExists { .. } | Self::CannotDeleteCurrent { .. } => ErrorKind::Conflict,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Malformed `--set KEY=VALUE` override.
    #[error("invalid override '{0}', expected KEY=VALUE")]
    InvalidOverride(String),

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Script Errors ---

/// Errors raised while loading a command script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Script file could not be read.
    #[error("failed to read script '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Script contained no commands.
    #[error("script '{0}' contains no commands")]
    Empty(String),
}
