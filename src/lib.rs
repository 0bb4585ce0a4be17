// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            repl / run / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            |
//!                            v
//!                 git (Simulator)        render
//!            parse -> query / ops  -->  prompt + transcript
//!              RepositoryState
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use gitsim::git::Simulator;
//!
//! let mut sim = Simulator::default();
//! sim.add_mock_file(Some("notes.txt"));
//! sim.execute("git add .");
//! sim.execute("git commit -m \"first note\"");
//!
//! let entry = sim.transcript().last().unwrap();
//! assert!(!entry.is_error);
//! assert!(entry.output.ends_with("first note\n 1 file(s) changed"));
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod render;
