// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The Git command simulator.
//!
//! ```text
//!   Simulator::execute(line)
//!          |
//!          v
//!   cmd::parse ──Err──────────────┐
//!          | Invocation            |
//!          v                       |
//!   query.rs (read)  ops.rs (write)|
//!          \            /          |
//!           v          v           v
//!      TerminalEntry { command, output, is_error }
//!                  |
//!                  v
//!             Transcript
//! ```
//!
//! One call to [`Simulator::execute`] appends exactly one transcript entry.
//! Errors are reported through that entry, never returned, and a failing
//! command leaves [`RepositoryState`] exactly as it was.

pub mod cmd;
pub mod entropy;
pub mod ops;
pub mod query;
pub mod state;
pub mod transcript;

#[cfg(test)]
mod tests;

use bon::Builder;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::SimResult;

use cmd::{BranchArgs, CheckoutArgs, ConfigArgs, Invocation, StashArgs};
use entropy::{Entropy, RngEntropy};
use state::{RepositoryState, UserConfig};
use transcript::{TerminalEntry, Transcript};

/// Commands offered as one-click shortcuts by front ends.
pub const QUICK_COMMANDS: [&str; 4] = [
    "git status",
    "git branch",
    "git log --oneline -5",
    "git config --list",
];

pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_SEED_HASH: &str = "a1b2c3d";
pub const DEFAULT_SEED_MESSAGE: &str = "Initial commit";
pub const DEFAULT_SEED_AUTHOR: &str = "System";
pub const DEFAULT_GIT_VERSION: &str = "2.43.0";
pub const DEFAULT_WORKSPACE: &str = "/workspace";
pub const DEFAULT_ORIGIN_URL: &str = "https://github.com/user/repo.git";

/// Command recorded in the transcript when a mock file is created.
pub const MOCK_FILE_COMMAND: &str = "# System: Created mock file";

/// `origin` pointing at [`DEFAULT_ORIGIN_URL`].
#[must_use]
pub fn default_remotes() -> BTreeMap<String, String> {
    BTreeMap::from([("origin".to_string(), DEFAULT_ORIGIN_URL.to_string())])
}

/// Initial state and fixed strings of a simulator session.
#[derive(Debug, Clone, Builder)]
pub struct SimulatorSettings {
    #[builder(setters(name = with_initial_branch), default = DEFAULT_BRANCH.to_string())]
    initial_branch: String,
    #[builder(setters(name = with_seed_hash), default = DEFAULT_SEED_HASH.to_string())]
    seed_hash: String,
    #[builder(setters(name = with_seed_message), default = DEFAULT_SEED_MESSAGE.to_string())]
    seed_message: String,
    #[builder(setters(name = with_seed_author), default = DEFAULT_SEED_AUTHOR.to_string())]
    seed_author: String,
    #[builder(setters(name = with_git_version), default = DEFAULT_GIT_VERSION.to_string())]
    git_version: String,
    #[builder(setters(name = with_workspace), default = DEFAULT_WORKSPACE.to_string())]
    workspace: String,
    #[builder(setters(name = with_user), default)]
    user: UserConfig,
    #[builder(setters(name = with_remotes), default = default_remotes())]
    remotes: BTreeMap<String, String>,
    /// Seed for reproducible hashes; `None` uses the thread RNG.
    #[builder(setters(name = with_rng_seed))]
    rng_seed: Option<u64>,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SimulatorSettings {
    #[must_use]
    pub fn initial_branch(&self) -> &str {
        &self.initial_branch
    }

    #[must_use]
    pub fn seed_hash(&self) -> &str {
        &self.seed_hash
    }

    #[must_use]
    pub fn seed_message(&self) -> &str {
        &self.seed_message
    }

    #[must_use]
    pub fn seed_author(&self) -> &str {
        &self.seed_author
    }

    #[must_use]
    pub fn git_version(&self) -> &str {
        &self.git_version
    }

    #[must_use]
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    #[must_use]
    pub const fn user(&self) -> &UserConfig {
        &self.user
    }

    #[must_use]
    pub const fn remotes(&self) -> &BTreeMap<String, String> {
        &self.remotes
    }

    #[must_use]
    pub const fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}

/// One simulator session: repository state plus its transcript.
///
/// Sessions never share state; create one `Simulator` per user.
pub struct Simulator {
    state: RepositoryState,
    transcript: Transcript,
    entropy: Box<dyn Entropy>,
    settings: SimulatorSettings,
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("state", &self.state)
            .field("transcript", &self.transcript.len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimulatorSettings::default())
    }
}

impl Simulator {
    /// New session; hashes come from `rng_seed` if set, else the thread RNG.
    #[must_use]
    pub fn new(settings: SimulatorSettings) -> Self {
        let entropy: Box<dyn Entropy> = match settings.rng_seed() {
            Some(seed) => Box::new(RngEntropy::seeded(seed)),
            None => Box::new(RngEntropy::thread()),
        };
        Self::with_entropy(settings, entropy)
    }

    #[must_use]
    pub fn with_entropy(settings: SimulatorSettings, entropy: Box<dyn Entropy>) -> Self {
        Self {
            state: RepositoryState::new(&settings),
            transcript: Transcript::new(),
            entropy,
            settings,
        }
    }

    /// Runs one command line and appends its entry to the transcript.
    ///
    /// Results are observed through [`Simulator::transcript`].
    pub fn execute(&mut self, line: &str) {
        let command = line.trim();
        let result = self.dispatch(command);
        let entry = TerminalEntry::from_result(command, result);
        debug!(
            command,
            is_error = entry.is_error,
            branch = %self.state.current_branch(),
            "executed command"
        );
        self.transcript.push(entry);
    }

    fn dispatch(&mut self, line: &str) -> SimResult<String> {
        let state = &mut self.state;
        match cmd::parse(line)? {
            Invocation::Version => Ok(query::version(&self.settings)),
            Invocation::Config(ConfigArgs::Set(key, value)) => {
                Ok(ops::set_config(state, key, value))
            }
            Invocation::Config(args) => Ok(query::config(state, &args)),
            Invocation::Init => Ok(query::init(&self.settings)),
            Invocation::Status => Ok(query::status(state)),
            Invocation::Branch(BranchArgs::List) => Ok(query::branch_list(state)),
            Invocation::Branch(BranchArgs::Create(name)) => ops::create_branch(state, &name),
            Invocation::Branch(BranchArgs::Delete(name)) => ops::delete_branch(state, &name),
            Invocation::Checkout(CheckoutArgs::Create(name)) => ops::checkout_new(state, &name),
            Invocation::Checkout(CheckoutArgs::Switch(name)) => ops::checkout(state, &name),
            Invocation::Add(args) => ops::add(state, &args),
            Invocation::Commit(args) => Ok(ops::commit(state, &args, self.entropy.as_mut())),
            Invocation::Log(args) => query::log(state, &args),
            Invocation::Merge { branch } => ops::merge(state, &branch),
            Invocation::Pull(args) => Ok(query::pull(state, &args)),
            Invocation::Push(args) => Ok(query::push(state, &args, self.entropy.as_mut())),
            Invocation::Clone { url } => Ok(query::clone(&url)),
            Invocation::Stash(StashArgs::Push { message }) => {
                Ok(ops::stash_push(state, message.as_deref()))
            }
            Invocation::Stash(StashArgs::List) => Ok(query::stash_list(state)),
            Invocation::Stash(StashArgs::Apply) => ops::stash_apply(state, false),
            Invocation::Stash(StashArgs::Pop) => ops::stash_apply(state, true),
            Invocation::Stash(StashArgs::Drop) => ops::stash_drop(state),
            Invocation::Stash(StashArgs::Clear) => Ok(ops::stash_clear(state)),
            Invocation::Rebase { branch } => query::rebase(state, &branch),
            Invocation::CherryPick { hash } => {
                Ok(ops::cherry_pick(state, &hash, self.entropy.as_mut()))
            }
        }
    }

    /// Adds an untracked-looking file to the working tree and records a
    /// system entry. `None` picks a random `file<N>.txt`.
    pub fn add_mock_file(&mut self, name: Option<&str>) {
        let file = name.map_or_else(
            || format!("file{}.txt", self.entropy.mock_file_number()),
            str::to_string,
        );
        let output = ops::add_mock_file(&mut self.state, &file);
        self.transcript
            .push(TerminalEntry::new(MOCK_FILE_COMMAND, output, false));
    }

    /// Wipes the transcript; repository state is kept.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub const fn state(&self) -> &RepositoryState {
        &self.state
    }

    #[must_use]
    pub fn current_branch(&self) -> &str {
        self.state.current_branch()
    }

    #[must_use]
    pub fn branches(&self) -> &[String] {
        self.state.branches()
    }

    #[must_use]
    pub const fn user(&self) -> &UserConfig {
        self.state.user()
    }

    #[must_use]
    pub const fn settings(&self) -> &SimulatorSettings {
        &self.settings
    }
}
