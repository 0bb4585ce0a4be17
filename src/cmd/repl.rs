// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive session.
//!
//! ```text
//! loop:
//!   print prompt
//!   read line ──EOF──> quit
//!     ""            skip
//!     :meta         MetaCommand (touch, clear, history, quick, help, quit)
//!     exit / quit   quit
//!     otherwise     Simulator::execute, print output
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::cli::session::ReplArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::{QUICK_COMMANDS, Simulator};
use crate::render::Renderer;

const BANNER: &str = "Git simulator: try `git status`, or `:help` for session commands.";

const HELP: &str = "\
Session commands:
  :touch [name]   create a modified file (random name if omitted)
  :clear          clear the transcript (repository is kept)
  :history        list commands run so far
  :quick [N]      list quick commands, or run the Nth one
  :help           show this help
  :quit, exit     leave the session

Supported git commands:
  config init status branch checkout add commit log merge
  pull push clone stash rebase cherry-pick --version";

/// Session commands that never reach the simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Touch(Option<String>),
    Clear,
    History,
    Quick(Option<usize>),
    Help,
    Quit,
}

impl MetaCommand {
    /// Parses `:name [arg]`, plus the bare words `exit` and `quit`.
    ///
    /// Returns `None` for lines that should go to the simulator and
    /// `Some(Err(message))` for unknown or malformed meta commands.
    #[must_use]
    pub fn parse(line: &str) -> Option<std::result::Result<Self, String>> {
        let line = line.trim();
        if matches!(line, "exit" | "quit") {
            return Some(Ok(Self::Quit));
        }
        let rest = line.strip_prefix(':')?;
        let mut words = rest.split_whitespace();
        let name = words.next().unwrap_or_default();
        let arg = words.next();

        let command = match name {
            "touch" => Self::Touch(arg.map(str::to_string)),
            "clear" => Self::Clear,
            "history" => Self::History,
            "quick" => match arg.map(str::parse::<usize>) {
                None => Self::Quick(None),
                Some(Ok(n)) if (1..=QUICK_COMMANDS.len()).contains(&n) => Self::Quick(Some(n)),
                Some(_) => {
                    return Some(Err(format!(
                        "quick command number must be 1-{}",
                        QUICK_COMMANDS.len()
                    )));
                }
            },
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => return Some(Err(format!("unknown session command ':{other}', try :help"))),
        };
        Some(Ok(command))
    }
}

/// Whether the loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A simulator plus the renderer that shows it.
#[derive(Debug)]
pub struct ReplSession {
    sim: Simulator,
    renderer: Renderer,
}

impl ReplSession {
    #[must_use]
    pub const fn new(sim: Simulator, renderer: Renderer) -> Self {
        Self { sim, renderer }
    }

    #[must_use]
    pub const fn simulator(&self) -> &Simulator {
        &self.sim
    }

    /// Handles one input line and writes whatever it prints.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        match MetaCommand::parse(line) {
            Some(Ok(meta)) => return self.handle_meta(meta, out),
            Some(Err(message)) => {
                writeln!(out, "{}", self.renderer.note(&message))?;
                return Ok(Flow::Continue);
            }
            None => {}
        }

        self.execute(line, out)?;
        Ok(Flow::Continue)
    }

    fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<()> {
        self.sim.execute(line);
        if let Some(output) = self
            .sim
            .transcript()
            .last()
            .and_then(|entry| self.renderer.output(entry))
        {
            writeln!(out, "{output}")?;
        }
        Ok(())
    }

    fn handle_meta(&mut self, meta: MetaCommand, out: &mut impl Write) -> Result<Flow> {
        debug!(?meta, "session command");
        match meta {
            MetaCommand::Touch(name) => {
                self.sim.add_mock_file(name.as_deref());
                if let Some(entry) = self.sim.transcript().last() {
                    writeln!(out, "{}", self.renderer.note(&entry.output))?;
                }
            }
            MetaCommand::Clear => {
                self.sim.clear_transcript();
                writeln!(out, "{}", self.renderer.note("Transcript cleared."))?;
            }
            MetaCommand::History => {
                writeln!(out, "{}", self.renderer.history(self.sim.transcript()))?;
            }
            MetaCommand::Quick(None) => {
                writeln!(out, "{}", self.renderer.quick_commands(&QUICK_COMMANDS))?;
            }
            MetaCommand::Quick(Some(n)) => {
                let command = QUICK_COMMANDS[n - 1];
                writeln!(out, "{}{command}", self.renderer.prompt())?;
                self.execute(command, out)?;
            }
            MetaCommand::Help => writeln!(out, "{HELP}")?,
            MetaCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reads lines from `input` until EOF or a quit command.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing `out` fails.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "{}", self.renderer.prompt())?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }
            if self.handle_line(&line, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }
}

/// Main handler for the `repl` command.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or stdout cannot be written.
pub fn run_repl_command(args: &ReplArgs, config: &Config) -> Result<()> {
    let sim = Simulator::new(config.simulator_settings());
    let mut session = ReplSession::new(sim, super::stdout_renderer(config));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if !args.no_banner {
        writeln!(out, "{BANNER}")?;
    }

    info!(branch = %session.simulator().current_branch(), "session started");
    session.run(&mut std::io::stdin().lock(), &mut out)?;
    info!(
        commands = session.simulator().transcript().len(),
        errors = session.simulator().transcript().error_count(),
        "session ended"
    );
    Ok(())
}
