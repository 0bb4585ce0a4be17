// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! State transitions.
//!
//! ```text
//! set_config     user.name / user.email
//! create_branch  fork current log, stay
//! delete_branch  drop name, keep its log
//! checkout_new   fork current log, switch
//! checkout       switch
//! add            modified -> staged
//! commit         staged -> new Commit on current branch
//! merge          append positional suffix of other branch's log
//! stash_*        push / apply / pop / drop / clear
//! cherry_pick    append synthetic Commit
//! ```
//!
//! Each handler validates its input first and only then mutates, so an
//! `Err` always means the state is unchanged.

use tracing::trace;
use wax::{Glob, Program as _};

use crate::error::{SimError, SimResult};

use super::cmd::{AddArgs, CommitArgs, ConfigKey};
use super::entropy::Entropy;
use super::state::{Commit, RepositoryState, StashEntry, push_unique};

const DEFAULT_STASH_MESSAGE: &str = "WIP";

/// Sets a user config value. Prints nothing.
pub fn set_config(state: &mut RepositoryState, key: ConfigKey, value: String) -> String {
    trace!(key = key.as_str(), value = %value, "set config");
    match key {
        ConfigKey::UserName => state.user.name = value,
        ConfigKey::UserEmail => state.user.email = value,
    }
    String::new()
}

fn ensure_new_branch(state: &RepositoryState, name: &str) -> SimResult<()> {
    if state.has_branch(name) {
        return Err(SimError::BranchExists {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// `git branch <name>`: new branch holding a copy of the current log.
///
/// # Errors
///
/// Returns `SimError::BranchExists` if `name` is taken.
pub fn create_branch(state: &mut RepositoryState, name: &str) -> SimResult<String> {
    ensure_new_branch(state, name)?;
    state.fork_branch(name);
    trace!(branch = name, from = %state.current_branch, "created branch");
    Ok(String::new())
}

/// `git branch -d <name>`.
///
/// Only the name is removed; the branch's commit log stays in
/// `commits` and simply becomes unreachable.
///
/// # Errors
///
/// Returns `SimError::CannotDeleteCurrent` for the checked-out branch and
/// `SimError::BranchNotFound` for unknown names.
pub fn delete_branch(state: &mut RepositoryState, name: &str) -> SimResult<String> {
    if name == state.current_branch {
        return Err(SimError::CannotDeleteCurrent {
            name: name.to_string(),
        });
    }
    let Some(index) = state.branches.iter().position(|b| b == name) else {
        return Err(SimError::BranchNotFound {
            name: name.to_string(),
        });
    };
    state.branches.remove(index);
    trace!(branch = name, "deleted branch");
    Ok(format!("Deleted branch {name}"))
}

/// `git checkout -b <name>`.
///
/// # Errors
///
/// Returns `SimError::BranchExists` if `name` is taken.
pub fn checkout_new(state: &mut RepositoryState, name: &str) -> SimResult<String> {
    ensure_new_branch(state, name)?;
    state.fork_branch(name);
    state.current_branch = name.to_string();
    trace!(branch = name, "switched to new branch");
    Ok(format!("Switched to a new branch '{name}'"))
}

/// `git checkout <name>`.
///
/// # Errors
///
/// Returns `SimError::PathspecNotFound` if no such branch exists.
pub fn checkout(state: &mut RepositoryState, name: &str) -> SimResult<String> {
    if !state.has_branch(name) {
        return Err(SimError::PathspecNotFound {
            name: name.to_string(),
        });
    }
    if name == state.current_branch {
        return Ok(format!("Already on '{name}'"));
    }
    state.current_branch = name.to_string();
    trace!(branch = name, "switched branch");
    Ok(format!("Switched to branch '{name}'"))
}

fn is_glob(path: &str) -> bool {
    path.contains(['*', '?', '['])
}

/// Files a pathspec stands for: glob patterns expand against the modified
/// files, plain paths stand for themselves.
fn resolve_pathspec(state: &RepositoryState, path: &str) -> SimResult<Vec<String>> {
    if !is_glob(path) {
        return Ok(vec![path.to_string()]);
    }

    let glob = Glob::new(path).map_err(|_| SimError::InvalidPathspec {
        pattern: path.to_string(),
    })?;
    let matched: Vec<String> = state
        .modified_files
        .iter()
        .filter(|file| glob.is_match(file.as_str()))
        .cloned()
        .collect();

    if matched.is_empty() {
        return Err(SimError::PathspecNoMatch {
            pattern: path.to_string(),
        });
    }
    Ok(matched)
}

fn stage(state: &mut RepositoryState, file: &str) {
    state.modified_files.retain(|f| f != file);
    push_unique(&mut state.staged_files, file);
}

/// `git add`.
///
/// `git add .` replaces the staged set with the modified set. Paths are
/// staged whether or not they were recorded as modified.
///
/// # Errors
///
/// Returns `SimError::InvalidPathspec` or `SimError::PathspecNoMatch` for glob
/// patterns that are malformed or match nothing.
pub fn add(state: &mut RepositoryState, args: &AddArgs) -> SimResult<String> {
    match args {
        AddArgs::All => {
            state.staged_files = std::mem::take(&mut state.modified_files);
        }
        AddArgs::Paths(paths) => {
            let mut files = Vec::new();
            for path in paths {
                files.extend(resolve_pathspec(state, path)?);
            }
            for file in &files {
                stage(state, file);
            }
        }
    }
    trace!(staged = state.staged_files.len(), "updated index");
    Ok(String::new())
}

/// `git commit -m <message>`.
///
/// With nothing staged this is an informational no-op, not an error.
pub fn commit(state: &mut RepositoryState, args: &CommitArgs, entropy: &mut dyn Entropy) -> String {
    if state.staged_files.is_empty() && !(args.all && !state.modified_files.is_empty()) {
        return "nothing to commit, working tree clean".to_string();
    }

    if args.all {
        for file in std::mem::take(&mut state.modified_files) {
            push_unique(&mut state.staged_files, &file);
        }
    }

    let files = std::mem::take(&mut state.staged_files);
    let changed = files.len();
    let commit = Commit {
        hash: entropy.short_hash(),
        message: args.message.clone(),
        author: state.author().to_string(),
        files,
    };
    let output = format!(
        "[{} {}] {}\n {changed} file(s) changed",
        state.current_branch, commit.hash, commit.message
    );
    trace!(hash = %commit.hash, branch = %state.current_branch, "created commit");
    state.current_log_mut().push(commit);
    output
}

/// `git merge <branch>`.
///
/// Appends the commits of `branch` that lie beyond the current branch's log
/// length. This is a positional comparison, not a content-aware merge.
///
/// # Errors
///
/// Returns `SimError::BranchNotFound` if `branch` does not exist.
pub fn merge(state: &mut RepositoryState, branch: &str) -> SimResult<String> {
    if !state.has_branch(branch) {
        return Err(SimError::BranchNotFound {
            name: branch.to_string(),
        });
    }
    if branch == state.current_branch {
        return Ok("Already up to date.".to_string());
    }

    let current_len = state.current_log().len();
    let incoming: Vec<Commit> = state
        .log(branch)
        .get(current_len..)
        .unwrap_or_default()
        .to_vec();
    if incoming.is_empty() {
        return Ok("Already up to date.".to_string());
    }

    let merged = incoming.len();
    state.current_log_mut().extend(incoming);
    trace!(from = branch, into = %state.current_branch, merged, "merged branch");
    Ok(format!(
        "Merge made by the 'recursive' strategy.\n {merged} commit(s) merged"
    ))
}

/// `git stash`, `git stash save|push [message]`.
pub fn stash_push(state: &mut RepositoryState, message: Option<&str>) -> String {
    if state.is_clean() {
        return "No local changes to save".to_string();
    }

    let message = message.unwrap_or(DEFAULT_STASH_MESSAGE).to_string();
    let mut files = std::mem::take(&mut state.modified_files);
    for file in std::mem::take(&mut state.staged_files) {
        push_unique(&mut files, &file);
    }

    let output = format!(
        "Saved working directory and index state On {}: {message}",
        state.current_branch
    );
    state.stash.push(StashEntry {
        message,
        files,
        branch: state.current_branch.clone(),
    });
    trace!(entries = state.stash.len(), "stashed changes");
    output
}

/// `git stash apply` / `git stash pop`: restores the newest entry's files
/// into the working tree. Only `pop` removes the entry.
///
/// # Errors
///
/// Returns `SimError::NoStashEntries` if the stash is empty.
pub fn stash_apply(state: &mut RepositoryState, pop: bool) -> SimResult<String> {
    let Some(entry) = state.stash.last().cloned() else {
        return Err(SimError::NoStashEntries);
    };

    for file in &entry.files {
        push_unique(&mut state.modified_files, file);
    }

    let mut output = format!(
        "On branch {}\nChanges not staged for commit:\n  {}",
        state.current_branch,
        entry.files.join("\n  ")
    );
    if pop {
        state.stash.pop();
        output.push_str("\nDropped stash@{0}");
    }
    trace!(pop, entries = state.stash.len(), "restored stash");
    Ok(output)
}

/// `git stash drop`: discards the newest entry.
///
/// # Errors
///
/// Returns `SimError::NoStashEntries` if the stash is empty.
pub fn stash_drop(state: &mut RepositoryState) -> SimResult<String> {
    if state.stash.pop().is_none() {
        return Err(SimError::NoStashEntries);
    }
    Ok("Dropped stash@{0}".to_string())
}

pub fn stash_clear(state: &mut RepositoryState) -> String {
    state.stash.clear();
    String::new()
}

/// `git cherry-pick <hash>`: the hash is not looked up; a synthetic commit
/// referencing it is appended to the current branch.
pub fn cherry_pick(state: &mut RepositoryState, hash: &str, entropy: &mut dyn Entropy) -> String {
    let commit = Commit {
        hash: entropy.short_hash(),
        message: format!("Cherry-picked commit {hash}"),
        author: state.author().to_string(),
        files: Vec::new(),
    };
    let output = format!(
        "[{} {}] {}",
        state.current_branch, commit.hash, commit.message
    );
    trace!(source = hash, hash = %commit.hash, "cherry-picked commit");
    state.current_log_mut().push(commit);
    output
}

/// Puts `file` into the working tree as a modified file.
pub fn add_mock_file(state: &mut RepositoryState, file: &str) -> String {
    push_unique(&mut state.modified_files, file);
    format!("Created {file} (use 'git status' to see it)")
}
