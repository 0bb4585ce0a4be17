// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Append-only command transcript.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::SimResult;

/// One executed command and what it printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalEntry {
    pub command: String,
    pub output: String,
    pub is_error: bool,
    pub timestamp: DateTime<Utc>,
}

impl TerminalEntry {
    #[must_use]
    pub fn new(command: impl Into<String>, output: impl Into<String>, is_error: bool) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
            is_error,
            timestamp: Utc::now(),
        }
    }

    /// Entry for a handler result: errors become flagged entries.
    #[must_use]
    pub fn from_result(command: impl Into<String>, result: SimResult<String>) -> Self {
        match result {
            Ok(output) => Self::new(command, output, false),
            Err(err) => Self::new(command, err.to_string(), true),
        }
    }
}

/// Ordered transcript of a session.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<TerminalEntry>,
}

impl Transcript {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: TerminalEntry) {
        self.entries.push(entry);
    }

    /// Drops the history. Repository state is not affected.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[TerminalEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TerminalEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TerminalEntry> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_error).count()
    }

    /// Pretty-printed JSON array of all entries.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
