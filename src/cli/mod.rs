// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitsim using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitsim [global options] [command]
//! repl                      (default)
//! run <LINE>... | --script FILE [--json] [--fail-on-error]
//! options
//! inis
//! version
//! ```

pub mod global;
pub mod session;


use crate::cli::global::GlobalOptions;
use crate::cli::session::{ReplArgs, RunArgs};
use clap::{Parser, Subcommand};

/// Interactive Git Command Simulator
///
/// Practice git commands against an in-memory repository.
#[derive(Debug, Parser)]
#[command(
    name = "gitsim",
    author,
    version,
    about = "Interactive Git command simulator",
    long_about = "gitsim Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Practice git commands against an in-memory repository.\n\n\
                  Invoking `gitsim` starts an interactive session. Use\n\
                  `gitsim run \"git status\" ...` to run commands non-interactively.\n\
                  Nothing touches the file system or the network.",
    after_help = "CONFIG FILES:\n\n\
                  gitsim reads `gitsim.toml` from the current directory if it\n\
                  exists. Additional files can be given with --config; later files\n\
                  override earlier ones. GITSIM_<SECTION>__<KEY> environment\n\
                  variables and --set KEY=VALUE override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files in use.
    Inis,

    /// Starts an interactive session (default).
    Repl(ReplArgs),

    /// Runs git commands non-interactively.
    Run(RunArgs),
}

/// Parses `std::env::args`, exiting with usage on error.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
