// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options, inis), repl, run
//! ```

pub mod config;
pub mod repl;
pub mod run;


use std::io::IsTerminal;

use crate::config::Config;
use crate::render::Renderer;

/// Renderer for stdout: colored only if enabled in config and stdout is a TTY.
#[must_use]
pub fn stdout_renderer(config: &Config) -> Renderer {
    let color = config.terminal.color && std::io::stdout().is_terminal();
    colored::control::set_override(color);
    Renderer::new(&config.terminal, color)
}
