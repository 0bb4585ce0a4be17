// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Non-interactive execution.
//!
//! ```text
//! run <LINE>...  |  run --script FILE
//!        |
//!        v
//!   Simulator::execute (one per line)
//!        |
//!        +--> rendered entries (default)
//!        +--> transcript JSON  (--json)
//!        |
//!   --fail-on-error: Err if any entry is an error
//! ```

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::cli::session::RunArgs;
use crate::config::Config;
use crate::error::{GitsimResult, Result, ScriptError, bail_out};
use crate::git::Simulator;
use crate::render::Renderer;

/// Command lines of a script: trimmed, without blank lines and `#` comments.
#[must_use]
pub fn script_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads a script file.
///
/// # Errors
///
/// Returns `ScriptError::ReadFailed` if the file cannot be read and
/// `ScriptError::Empty` if it contains no commands.
pub fn load_script(path: &Path) -> std::result::Result<Vec<String>, ScriptError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| ScriptError::ReadFailed {
        path: display.clone(),
        source,
    })?;
    let lines = script_lines(&content);
    if lines.is_empty() {
        return Err(ScriptError::Empty(display));
    }
    debug!(path = %path.display(), commands = lines.len(), "loaded script");
    Ok(lines)
}

/// Lines to run: the script named by `--script`, otherwise the positional
/// lines as given.
///
/// # Errors
///
/// Returns `GitsimError::Script` if the script cannot be loaded.
pub fn session_lines(args: &RunArgs) -> GitsimResult<Vec<String>> {
    match &args.script {
        Some(path) => Ok(load_script(path)?),
        None => Ok(args.lines.clone()),
    }
}

/// Executes `lines` in a fresh session and writes the result.
///
/// Returns the number of entries flagged as errors.
///
/// # Errors
///
/// Returns an error if writing to `out` or JSON serialization fails.
pub fn run_lines(
    sim: &mut Simulator,
    lines: &[String],
    renderer: &Renderer,
    json: bool,
    out: &mut impl Write,
) -> Result<usize> {
    for line in lines {
        sim.execute(line);
    }
    if json {
        writeln!(out, "{}", sim.transcript().to_json()?)?;
    } else if !sim.transcript().is_empty() {
        writeln!(out, "{}", renderer.transcript(sim.transcript()))?;
    }
    Ok(sim.transcript().error_count())
}

/// Main handler for the `run` command.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded, output cannot be written,
/// or `--fail-on-error` is set and a command failed.
pub fn run_run_command(args: &RunArgs, config: &Config) -> Result<()> {
    let lines = session_lines(args)?;

    let mut sim = Simulator::new(config.simulator_settings());
    let renderer = super::stdout_renderer(config);
    let stdout = std::io::stdout();
    let errors = run_lines(&mut sim, &lines, &renderer, args.json, &mut stdout.lock())?;

    info!(commands = lines.len(), errors, "run finished");
    if args.fail_on_error && errors > 0 {
        return Err(bail_out(format!(
            "{errors} of {} command(s) reported an error",
            lines.len()
        ))
        .into());
    }
    Ok(())
}
