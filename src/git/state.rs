// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory repository model.
//!
//! ```text
//! RepositoryState
//!   current_branch ──> must be in branches
//!   branches         creation order, listing order
//!   commits          branch -> Vec<Commit>  (copied on fork, never shared)
//!   staged_files     next commit
//!   modified_files   working tree changes
//!   stash            Vec<StashEntry>, last = newest
//!   remotes          name -> url (cosmetic)
//!   user             user.name / user.email
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::SimulatorSettings;

/// A single commit record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub files: Vec<String>,
}

/// A shelved set of uncommitted changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StashEntry {
    pub message: String,
    pub files: Vec<String>,
    /// Branch that was checked out when the entry was created.
    pub branch: String,
}

/// Identity used as commit author. Also the `[user]` config section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    pub name: String,
    pub email: String,
}

/// The whole simulated repository.
///
/// Only the handlers in `git::ops` mutate this; everything outside the `git`
/// module gets read-only accessors.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryState {
    pub(crate) current_branch: String,
    pub(crate) branches: Vec<String>,
    pub(crate) commits: BTreeMap<String, Vec<Commit>>,
    pub(crate) staged_files: Vec<String>,
    pub(crate) modified_files: Vec<String>,
    pub(crate) stash: Vec<StashEntry>,
    pub(crate) remotes: BTreeMap<String, String>,
    pub(crate) user: UserConfig,
}

impl RepositoryState {
    /// Fresh state: one branch holding the seed commit.
    #[must_use]
    pub fn new(settings: &SimulatorSettings) -> Self {
        let branch = settings.initial_branch().to_string();
        let seed = Commit {
            hash: settings.seed_hash().to_string(),
            message: settings.seed_message().to_string(),
            author: settings.seed_author().to_string(),
            files: Vec::new(),
        };

        let mut commits = BTreeMap::new();
        commits.insert(branch.clone(), vec![seed]);

        Self {
            current_branch: branch.clone(),
            branches: vec![branch],
            commits,
            staged_files: Vec::new(),
            modified_files: Vec::new(),
            stash: Vec::new(),
            remotes: settings.remotes().clone(),
            user: settings.user().clone(),
        }
    }

    #[must_use]
    pub fn current_branch(&self) -> &str {
        &self.current_branch
    }

    #[must_use]
    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    #[must_use]
    pub fn has_branch(&self, name: &str) -> bool {
        self.branches.iter().any(|b| b == name)
    }

    /// Commit log of a branch, oldest first. Empty for unknown branches.
    #[must_use]
    pub fn log(&self, branch: &str) -> &[Commit] {
        self.commits.get(branch).map_or(&[], Vec::as_slice)
    }

    /// Every commit reachable from any branch, each hash once.
    ///
    /// Branches are walked in creation order and each log oldest first, so
    /// the last element is the newest commit of the most recently created
    /// branch that has commits of its own.
    #[must_use]
    pub fn all_commits(&self) -> Vec<&Commit> {
        let mut seen = HashSet::new();
        self.branches
            .iter()
            .flat_map(|branch| self.log(branch))
            .filter(|commit| seen.insert(commit.hash.as_str()))
            .collect()
    }

    /// Commit log of the checked-out branch, oldest first.
    #[must_use]
    pub fn current_log(&self) -> &[Commit] {
        self.log(&self.current_branch)
    }

    #[must_use]
    pub fn staged_files(&self) -> &[String] {
        &self.staged_files
    }

    #[must_use]
    pub fn modified_files(&self) -> &[String] {
        &self.modified_files
    }

    /// Stash entries, oldest first.
    #[must_use]
    pub fn stash(&self) -> &[StashEntry] {
        &self.stash
    }

    #[must_use]
    pub const fn remotes(&self) -> &BTreeMap<String, String> {
        &self.remotes
    }

    #[must_use]
    pub const fn user(&self) -> &UserConfig {
        &self.user
    }

    /// Author recorded on new commits.
    #[must_use]
    pub fn author(&self) -> &str {
        if self.user.name.is_empty() {
            "Unknown"
        } else {
            &self.user.name
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.staged_files.is_empty() && self.modified_files.is_empty()
    }

    /// Creates `name` with a snapshot copy of the current branch's log.
    ///
    /// Callers check that `name` does not exist yet.
    pub(crate) fn fork_branch(&mut self, name: &str) {
        let snapshot = self.current_log().to_vec();
        self.branches.push(name.to_string());
        self.commits.insert(name.to_string(), snapshot);
    }

    pub(crate) fn current_log_mut(&mut self) -> &mut Vec<Commit> {
        self.commits
            .entry(self.current_branch.clone())
            .or_default()
    }
}

/// Pushes `file` unless it is already present.
pub(crate) fn push_unique(files: &mut Vec<String>, file: &str) {
    if !files.iter().any(|f| f == file) {
        files.push(file.to_string());
    }
}
