// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `options` and `inis`.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Prints the effective configuration, one `key = value` per line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_options_command(config: &Config, out: &mut impl Write) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Prints the configuration files that were found, in load order.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_inis_command(config_files: &[String], out: &mut impl Write) -> Result<()> {
    if config_files.is_empty() {
        writeln!(out, "No configuration files loaded, using defaults")?;
    }
    for line in config_files {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

