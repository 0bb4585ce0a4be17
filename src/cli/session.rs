// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session command arguments.
//!
//! ```text
//! repl [--no-banner]
//!   → read-eval-print loop on stdin
//! run <LINE>...            run "git status" "git branch"
//! run --script FILE        one command per line, '#' comments
//!   [--json]               → dump transcript as JSON
//!   [--fail-on-error]      → exit non-zero if any entry is an error
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `repl` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ReplArgs {
    /// Don't print the welcome banner.
    #[arg(long = "no-banner")]
    pub no_banner: bool,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Command lines to execute, in order (e.g. "git status").
    #[arg(value_name = "LINE", required_unless_present = "script", conflicts_with = "script")]
    pub lines: Vec<String>,

    /// Reads command lines from a file instead.
    #[arg(short = 'f', long = "script", value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Prints the transcript as JSON instead of terminal output.
    #[arg(long)]
    pub json: bool,

    /// Exits with a failure status if any command reported an error.
    #[arg(long = "fail-on-error")]
    pub fail_on_error: bool,
}
