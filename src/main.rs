// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Repl (default) | Run | Options | Inis | Version
//! ```

use std::process::ExitCode;

use gitsim::cli::global::GlobalOptions;
use gitsim::cli::session::ReplArgs;
use gitsim::cli::{self, Command};
use gitsim::cmd::config::{run_inis_command, run_options_command};
use gitsim::cmd::repl::run_repl_command;
use gitsim::cmd::run::run_run_command;
use gitsim::config::loader::ConfigLoader;
use gitsim::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use gitsim::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    // `version` and `inis` must work even with a broken config
    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            return finish(run_inis_command(
                &loader.format_loaded_files(),
                &mut std::io::stdout(),
            ));
        }
        _ => {}
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    finish(dispatch_command(cli.command, &config))
}

fn build_log_config(config: &Config) -> LogConfig {
    let global = &config.global;
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_ansi(config.terminal.color)
        .build()
}

fn dispatch_command(command: Option<Command>, config: &Config) -> gitsim::error::Result<()> {
    match command {
        Some(Command::Options) => run_options_command(config, &mut std::io::stdout()),
        Some(Command::Run(args)) => run_run_command(&args, config),
        Some(Command::Repl(args)) => run_repl_command(&args, config),
        None => run_repl_command(&ReplArgs::default(), config),
        Some(Command::Version | Command::Inis) => Ok(()),
    }
}

fn finish(result: gitsim::error::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("gitsim {}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(LOCAL_CONFIG_FILE);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> gitsim::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    loader.build()
}
