// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command line parsing.
//!
//! ```text
//! "git commit -am \"fix typo\""
//!   tokenize   ["git", "commit", "-am", "\"fix", "typo\""]
//!   parse      Invocation::Commit(CommitArgs { message: "fix typo", all: true })
//! ```
//!
//! Every subcommand gets its own argument shape so handlers never index into
//! raw token arrays. Missing or malformed arguments are reported here, before
//! any handler can touch repository state.

use bitflags::bitflags;

use crate::error::{SimError, SimResult};

/// The dispatch table. Subcommands match by exact string equality only.
pub const SUBCOMMANDS: [&str; 15] = [
    "config",
    "init",
    "status",
    "branch",
    "checkout",
    "add",
    "commit",
    "log",
    "merge",
    "pull",
    "push",
    "clone",
    "stash",
    "rebase",
    "cherry-pick",
];

/// A fully parsed `git` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Version,
    Config(ConfigArgs),
    Init,
    Status,
    Branch(BranchArgs),
    Checkout(CheckoutArgs),
    Add(AddArgs),
    Commit(CommitArgs),
    Log(LogArgs),
    Merge { branch: String },
    Pull(RemoteArgs),
    Push(RemoteArgs),
    Clone { url: String },
    Stash(StashArgs),
    Rebase { branch: String },
    CherryPick { hash: String },
}

/// Config keys the simulator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    UserName,
    UserEmail,
}

impl ConfigKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserName => "user.name",
            Self::UserEmail => "user.email",
        }
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user.name" => Ok(Self::UserName),
            "user.email" => Ok(Self::UserEmail),
            _ => Err(SimError::UnsupportedConfigKey { key: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigArgs {
    /// `git config`: values that are set.
    Show,
    /// `git config --list`: every key, placeholders for unset ones.
    List,
    Get(ConfigKey),
    Set(ConfigKey, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchArgs {
    List,
    Create(String),
    Delete(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutArgs {
    Create(String),
    Switch(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddArgs {
    /// `git add .`, `-A`, `--all`
    All,
    Paths(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitArgs {
    pub message: String,
    /// `-a`: stage every modified file first.
    pub all: bool,
}

bitflags! {
    /// Output switches for `git log`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LogFlags: u8 {
        const ONELINE = 1;
        const GRAPH = 1 << 1;
        const ALL = 1 << 2;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogArgs {
    pub flags: LogFlags,
    /// `-<N>`, `-n <N>`, `--max-count=<N>`
    pub limit: Option<usize>,
    /// Branch to show instead of the current one.
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteArgs {
    pub remote: Option<String>,
    pub branch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StashArgs {
    /// `save`, `push`, or bare `git stash`.
    Push { message: Option<String> },
    List,
    Apply,
    Pop,
    Drop,
    Clear,
}

/// Splits a line on whitespace runs.
#[must_use]
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Joins words and strips double quotes: `"fix`, `typo"` → `fix typo`.
#[must_use]
pub fn free_text(words: &[&str]) -> String {
    words.join(" ").replace('"', "")
}

/// Parses one input line.
///
/// # Errors
///
/// Returns the [`SimError`] to report when the line is not a supported `git`
/// invocation or its arguments are missing or malformed.
pub fn parse(line: &str) -> SimResult<Invocation> {
    let tokens = tokenize(line);
    let command = tokens.first().copied().unwrap_or_default();
    if command != "git" {
        return Err(SimError::CommandNotFound {
            command: command.to_string(),
        });
    }

    let Some(&subcommand) = tokens.get(1) else {
        return Err(SimError::MissingSubcommand);
    };
    let args = &tokens[2..];

    match subcommand {
        "--version" => Ok(Invocation::Version),
        "config" => parse_config(args).map(Invocation::Config),
        "init" => Ok(Invocation::Init),
        "status" => Ok(Invocation::Status),
        "branch" => parse_branch(args).map(Invocation::Branch),
        "checkout" => parse_checkout(args).map(Invocation::Checkout),
        "add" => parse_add(args).map(Invocation::Add),
        "commit" => parse_commit(args).map(Invocation::Commit),
        "log" => parse_log(args).map(Invocation::Log),
        "merge" => required_target(args, SimError::MissingBranchName)
            .map(|branch| Invocation::Merge { branch }),
        "pull" => Ok(Invocation::Pull(parse_remote(args))),
        "push" => Ok(Invocation::Push(parse_remote(args))),
        "clone" => parse_clone(args).map(|url| Invocation::Clone { url }),
        "stash" => parse_stash(args).map(Invocation::Stash),
        "rebase" => required_target(args, SimError::MissingBranchName)
            .map(|branch| Invocation::Rebase { branch }),
        "cherry-pick" => required_target(args, SimError::MissingCommitHash)
            .map(|hash| Invocation::CherryPick { hash }),
        other => Err(SimError::UnknownSubcommand {
            name: other.to_string(),
        }),
    }
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-') && token.len() > 1
}

fn unknown_option(token: &str) -> SimError {
    SimError::UnknownOption {
        option: token.to_string(),
    }
}

/// First argument as a branch/hash target; flags are rejected.
fn required_target(args: &[&str], missing: SimError) -> SimResult<String> {
    match args.first() {
        None => Err(missing),
        Some(token) if is_flag(token) => Err(unknown_option(token)),
        Some(token) => Ok((*token).to_string()),
    }
}

fn parse_config(args: &[&str]) -> SimResult<ConfigArgs> {
    match args {
        [] => return Ok(ConfigArgs::Show),
        ["--list" | "-l", ..] => return Ok(ConfigArgs::List),
        _ => {}
    }

    let rest = match args {
        ["--global" | "--local", rest @ ..] => rest,
        rest => rest,
    };
    let Some((key, values)) = rest.split_first() else {
        return Err(SimError::MissingConfigKey);
    };
    if is_flag(key) {
        return Err(unknown_option(key));
    }

    let key: ConfigKey = key.parse()?;
    if values.is_empty() {
        return Ok(ConfigArgs::Get(key));
    }

    let value = match key {
        ConfigKey::UserName => free_text(values),
        ConfigKey::UserEmail => free_text(&values[..1]),
    };
    Ok(ConfigArgs::Set(key, value))
}

fn parse_branch(args: &[&str]) -> SimResult<BranchArgs> {
    match args {
        [] | ["--list" | "-l" | "-a" | "--all", ..] => Ok(BranchArgs::List),
        ["-d" | "-D" | "--delete"] => Err(SimError::MissingBranchName),
        ["-d" | "-D" | "--delete", name, ..] => Ok(BranchArgs::Delete((*name).to_string())),
        [flag, ..] if is_flag(flag) => Err(unknown_option(flag)),
        [name, ..] => Ok(BranchArgs::Create((*name).to_string())),
    }
}

fn parse_checkout(args: &[&str]) -> SimResult<CheckoutArgs> {
    match args {
        [] | ["-b"] => Err(SimError::MissingBranchName),
        ["-b", name, ..] => Ok(CheckoutArgs::Create((*name).to_string())),
        [flag, ..] if is_flag(flag) => Err(unknown_option(flag)),
        [name, ..] => Ok(CheckoutArgs::Switch((*name).to_string())),
    }
}

fn parse_add(args: &[&str]) -> SimResult<AddArgs> {
    match args {
        [] => Err(SimError::NothingSpecified),
        ["." | "-A" | "--all", ..] => Ok(AddArgs::All),
        paths => {
            if let Some(flag) = paths.iter().find(|p| is_flag(p)) {
                return Err(unknown_option(flag));
            }
            Ok(AddArgs::Paths(
                paths.iter().map(|p| (*p).to_string()).collect(),
            ))
        }
    }
}

fn parse_commit(args: &[&str]) -> SimResult<CommitArgs> {
    let mut all = false;
    for (index, token) in args.iter().enumerate() {
        match *token {
            "-a" | "--all" => all = true,
            "-m" | "--message" | "-am" => {
                let message = free_text(&args[index + 1..]);
                if message.trim().is_empty() {
                    return Err(SimError::EmptyCommitMessage);
                }
                return Ok(CommitArgs {
                    message,
                    all: all || *token == "-am",
                });
            }
            _ => {}
        }
    }
    Err(SimError::MissingCommitMessage)
}

fn parse_limit(value: &str) -> SimResult<usize> {
    value.parse().map_err(|_| SimError::InvalidLogLimit {
        value: value.to_string(),
    })
}

fn parse_log(args: &[&str]) -> SimResult<LogArgs> {
    let mut parsed = LogArgs::default();
    let mut tokens = args.iter();

    while let Some(&token) = tokens.next() {
        match token {
            "--oneline" => parsed.flags |= LogFlags::ONELINE,
            "--graph" => parsed.flags |= LogFlags::GRAPH,
            "--all" => parsed.flags |= LogFlags::ALL,
            "-n" => {
                let value = tokens.next().ok_or_else(|| SimError::InvalidLogLimit {
                    value: String::new(),
                })?;
                parsed.limit = Some(parse_limit(value)?);
            }
            _ => {
                if let Some(value) = token.strip_prefix("--max-count=") {
                    parsed.limit = Some(parse_limit(value)?);
                } else if let Some(value) = token.strip_prefix("-n") {
                    parsed.limit = Some(parse_limit(value)?);
                } else if let Some(value) = token.strip_prefix('-')
                    && value.bytes().all(|b| b.is_ascii_digit())
                    && !value.is_empty()
                {
                    parsed.limit = Some(parse_limit(value)?);
                } else if is_flag(token) {
                    return Err(unknown_option(token));
                } else {
                    parsed.branch = Some(token.to_string());
                }
            }
        }
    }

    Ok(parsed)
}

/// `[remote [branch]]`; flags such as `-u` or `--force` are accepted and
/// ignored since network operations are cosmetic.
fn parse_remote(args: &[&str]) -> RemoteArgs {
    let mut positional = args.iter().filter(|t| !is_flag(t));
    RemoteArgs {
        remote: positional.next().map(|s| (*s).to_string()),
        branch: positional.next().map(|s| (*s).to_string()),
    }
}

fn parse_clone(args: &[&str]) -> SimResult<String> {
    let mut tokens = args.iter();
    while let Some(&token) = tokens.next() {
        match token {
            // Options that take a value
            "--depth" | "--branch" | "-b" | "--origin" | "-o" => {
                tokens.next();
            }
            t if is_flag(t) => {}
            url => return Ok(url.to_string()),
        }
    }
    Err(SimError::MissingUrl)
}

fn parse_stash(args: &[&str]) -> SimResult<StashArgs> {
    match args {
        [] => Ok(StashArgs::Push { message: None }),
        ["save" | "push", rest @ ..] => {
            let words = match rest {
                ["-m" | "--message", words @ ..] => words,
                words => words,
            };
            let message = free_text(words);
            Ok(StashArgs::Push {
                message: (!message.trim().is_empty()).then_some(message),
            })
        }
        ["list", ..] => Ok(StashArgs::List),
        ["apply", ..] => Ok(StashArgs::Apply),
        ["pop", ..] => Ok(StashArgs::Pop),
        ["drop", ..] => Ok(StashArgs::Drop),
        ["clear", ..] => Ok(StashArgs::Clear),
        [other, ..] => Err(SimError::UnknownStashCommand {
            name: (*other).to_string(),
        }),
    }
}
