// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only handlers.
//!
//! ```text
//! version  init  config(show|list|get)  status  branch(list)
//! log      pull  push  clone  stash(list)  rebase
//! ```
//!
//! None of these take `&mut RepositoryState`. `pull`, `push`, `clone` and
//! `rebase` only print what the real command would have printed.

use std::fmt::Write as _;

use crate::error::{SimError, SimResult};

use super::SimulatorSettings;
use super::cmd::{ConfigArgs, ConfigKey, LogArgs, LogFlags, RemoteArgs};
use super::entropy::Entropy;
use super::state::{Commit, RepositoryState};

const ONELINE_DEFAULT_LIMIT: usize = usize::MAX;
const GRAPH_DEFAULT_LIMIT: usize = 5;
const FULL_DEFAULT_LIMIT: usize = 3;

#[must_use]
pub fn version(settings: &SimulatorSettings) -> String {
    format!("git version {}", settings.git_version())
}

#[must_use]
pub fn init(settings: &SimulatorSettings) -> String {
    format!(
        "Initialized empty Git repository in {}/.git/",
        settings.workspace().trim_end_matches('/')
    )
}

/// `git config`, `git config --list` and `git config <key>`.
///
/// `ConfigArgs::Set` is a write and lives in `ops::set_config`; passing it
/// here prints the current value of its key.
#[must_use]
pub fn config(state: &RepositoryState, args: &ConfigArgs) -> String {
    let user = state.user();
    match args {
        ConfigArgs::Show => {
            let lines: Vec<String> = [
                (ConfigKey::UserName, &user.name),
                (ConfigKey::UserEmail, &user.email),
            ]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}={value}", key.as_str()))
            .collect();

            if lines.is_empty() {
                "No configuration set".to_string()
            } else {
                lines.join("\n")
            }
        }
        ConfigArgs::List => {
            let or_unset = |v: &str| {
                if v.is_empty() {
                    "(not set)".to_string()
                } else {
                    v.to_string()
                }
            };
            let mut lines = vec![
                format!("user.name={}", or_unset(&user.name)),
                format!("user.email={}", or_unset(&user.email)),
            ];
            lines.extend(
                state
                    .remotes()
                    .iter()
                    .map(|(name, url)| format!("remote.{name}.url={url}")),
            );
            lines.join("\n")
        }
        ConfigArgs::Get(key) | ConfigArgs::Set(key, _) => match key {
            ConfigKey::UserName => user.name.clone(),
            ConfigKey::UserEmail => user.email.clone(),
        },
    }
}

#[must_use]
pub fn status(state: &RepositoryState) -> String {
    let mut output = format!("On branch {}\n", state.current_branch());

    if state.is_clean() {
        output.push_str("nothing to commit, working tree clean");
        return output;
    }

    if !state.staged_files().is_empty() {
        output.push_str("\nChanges to be committed:\n");
        for file in state.staged_files() {
            let _ = writeln!(output, "  modified:   {file}");
        }
    }
    if !state.modified_files().is_empty() {
        output.push_str("\nChanges not staged for commit:\n");
        for file in state.modified_files() {
            let _ = writeln!(output, "  modified:   {file}");
        }
    }

    output.trim_end().to_string()
}

/// Branch list in creation order, current branch marked with `*`.
#[must_use]
pub fn branch_list(state: &RepositoryState) -> String {
    state
        .branches()
        .iter()
        .map(|b| {
            if b == state.current_branch() {
                format!("* {b}")
            } else {
                format!("  {b}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Newest `limit` commits of `log`, newest first.
fn newest<'a>(log: &[&'a Commit], limit: usize) -> impl Iterator<Item = &'a Commit> {
    log.iter().rev().take(limit).copied()
}

/// `git log` in one of three layouts.
///
/// ```text
/// --oneline   hash message             default limit: all
/// --graph     * hash message           default limit: 5
/// (default)   commit/Author/message    default limit: 3
/// ```
///
/// `--oneline` takes precedence over `--graph`. `--all` draws from every
/// branch log (see [`RepositoryState::all_commits`]) instead of one.
///
/// # Errors
///
/// Returns `SimError::BranchNotFound` if a branch argument names a branch that
/// does not exist.
pub fn log(state: &RepositoryState, args: &LogArgs) -> SimResult<String> {
    let branch = args.branch.as_deref().unwrap_or(state.current_branch());
    if !state.has_branch(branch) {
        return Err(SimError::BranchNotFound {
            name: branch.to_string(),
        });
    }
    let commits: Vec<&Commit> = if args.flags.contains(LogFlags::ALL) {
        state.all_commits()
    } else {
        state.log(branch).iter().collect()
    };
    let commits = commits.as_slice();

    let output = if args.flags.contains(LogFlags::ONELINE) {
        newest(commits, args.limit.unwrap_or(ONELINE_DEFAULT_LIMIT))
            .map(|c| format!("{} {}", c.hash, c.message))
            .collect::<Vec<_>>()
            .join("\n")
    } else if args.flags.contains(LogFlags::GRAPH) {
        newest(commits, args.limit.unwrap_or(GRAPH_DEFAULT_LIMIT))
            .map(|c| format!("* {} {}", c.hash, c.message))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        newest(commits, args.limit.unwrap_or(FULL_DEFAULT_LIMIT))
            .map(|c| format!("commit {}\nAuthor: {}\n\n    {}\n", c.hash, c.author, c.message))
            .collect::<Vec<_>>()
            .join("\n")
            .trim_end()
            .to_string()
    };

    Ok(output)
}

fn remote_target<'a>(state: &'a RepositoryState, args: &'a RemoteArgs) -> (&'a str, &'a str) {
    let remote = args.remote.as_deref().unwrap_or("origin");
    let branch = args.branch.as_deref().unwrap_or(state.current_branch());
    let url = state.remotes().get(remote).map_or("unknown", String::as_str);
    (url, branch)
}

#[must_use]
pub fn pull(state: &RepositoryState, args: &RemoteArgs) -> String {
    let (url, branch) = remote_target(state, args);
    format!("Already up to date.\nFrom {url}\n * branch            {branch} -> FETCH_HEAD")
}

/// Push output quotes two fresh hashes; nothing is recorded.
#[must_use]
pub fn push(state: &RepositoryState, args: &RemoteArgs, entropy: &mut dyn Entropy) -> String {
    let (url, branch) = remote_target(state, args);
    let from = entropy.short_hash();
    let to = entropy.short_hash();
    format!("To {url}\n   {from}..{to}  {branch} -> {branch}")
}

/// Directory name `git clone` would create for `url`.
#[must_use]
pub fn repo_name(url: &str) -> &str {
    let last = url
        .trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(url);
    last.strip_suffix(".git").unwrap_or(last)
}

#[must_use]
pub fn clone(url: &str) -> String {
    format!(
        "Cloning into '{}'...\n\
         remote: Counting objects: 100, done.\n\
         remote: Compressing objects: 100% (80/80), done.\n\
         Receiving objects: 100% (100/100), done.",
        repo_name(url)
    )
}

/// Stash entries, newest first as `stash@{0}`.
#[must_use]
pub fn stash_list(state: &RepositoryState) -> String {
    if state.stash().is_empty() {
        return "No stash entries".to_string();
    }
    state
        .stash()
        .iter()
        .rev()
        .enumerate()
        .map(|(i, entry)| format!("stash@{{{i}}}: On {}: {}", entry.branch, entry.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cosmetic rebase: validates the target, rewrites nothing.
///
/// # Errors
///
/// Returns `SimError::BranchNotFound` if `branch` does not exist.
pub fn rebase(state: &RepositoryState, branch: &str) -> SimResult<String> {
    if !state.has_branch(branch) {
        return Err(SimError::BranchNotFound {
            name: branch.to_string(),
        });
    }
    if branch == state.current_branch() {
        return Ok(format!("Current branch {branch} is up to date."));
    }
    Ok(format!(
        "Successfully rebased and updated refs/heads/{}.",
        state.current_branch()
    ))
}
