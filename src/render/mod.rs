// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal rendering of prompts and transcript entries.
//!
//! ```text
//! user@simulator:~/workspace$ git commit -m "x"     prompt (green/blue) + command
//! [main 3f9a2c1] x                                  output
//!  1 file(s) changed
//! error: branch 'x' not found                       error output (red)
//! # System: Created mock file                       system entry (dim)
//! ```
//!
//! Everything here returns `String`s; the caller decides where to print.


use colored::{ColoredString, Colorize};

use crate::config::types::TerminalConfig;
use crate::git::transcript::{TerminalEntry, Transcript};

/// Prefix of commands recorded by the session itself rather than typed.
const SYSTEM_PREFIX: char = '#';

#[derive(Debug, Clone, Copy)]
enum Tone {
    Host,
    Path,
    Error,
    Muted,
    Accent,
}

impl Tone {
    fn apply(self, text: &str) -> ColoredString {
        match self {
            Self::Host => text.green().bold(),
            Self::Path => text.blue().bold(),
            Self::Error => text.red(),
            Self::Muted => text.dimmed(),
            Self::Accent => text.cyan(),
        }
    }
}

/// Prompt text and color choice for one terminal.
///
/// With `color = true`, painted text still goes through `colored`'s global
/// switch; `cmd::stdout_renderer` sets it to match.
#[derive(Debug, Clone)]
pub struct Renderer {
    user_host: String,
    path: String,
    color: bool,
}

impl Renderer {
    #[must_use]
    pub fn new(terminal: &TerminalConfig, color: bool) -> Self {
        Self {
            user_host: format!("{}@{}", terminal.prompt_user, terminal.prompt_host),
            path: terminal.prompt_path.clone(),
            color,
        }
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if self.color {
            tone.apply(text).to_string()
        } else {
            text.to_string()
        }
    }

/// `user@simulator:~/workspace$ `
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "{}:{}$ ",
            self.paint(Tone::Host, &self.user_host),
            self.paint(Tone::Path, &self.path)
        )
    }

    /// Output of an entry without its command line. `None` if there is
    /// nothing to print.
    #[must_use]
    pub fn output(&self, entry: &TerminalEntry) -> Option<String> {
        if entry.output.is_empty() {
            return None;
        }
        Some(if entry.is_error {
            self.paint(Tone::Error, &entry.output)
        } else {
            entry.output.clone()
        })
    }

    /// Full entry: command line as it was typed, then its output.
    #[must_use]
    pub fn entry(&self, entry: &TerminalEntry) -> String {
        let mut text = if entry.command.starts_with(SYSTEM_PREFIX) {
            self.paint(Tone::Muted, &entry.command)
        } else {
            format!("{}{}", self.prompt(), entry.command)
        };
        if let Some(output) = self.output(entry) {
            text.push('\n');
            text.push_str(&output);
        }
        text
    }

    /// Every entry, oldest first, one after the other.
    #[must_use]
    pub fn transcript(&self, transcript: &Transcript) -> String {
        transcript
            .iter()
            .map(|entry| self.entry(entry))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Numbered command history (`:history`).
    #[must_use]
    pub fn history(&self, transcript: &Transcript) -> String {
        if transcript.is_empty() {
            return "No commands yet".to_string();
        }
        transcript
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let marker = if entry.is_error {
                    self.paint(Tone::Error, "!")
                } else {
                    " ".to_string()
                };
                format!("{:>4}{marker} {}", i + 1, entry.command)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Numbered quick commands (`:quick`).
    #[must_use]
    pub fn quick_commands(&self, commands: &[&str]) -> String {
        commands
            .iter()
            .enumerate()
            .map(|(i, command)| format!("  {} {command}", self.paint(Tone::Accent, &format!("[{}]", i + 1))))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Dimmed informational line.
    #[must_use]
    pub fn note(&self, text: &str) -> String {
        self.paint(Tone::Muted, text)
    }
}
