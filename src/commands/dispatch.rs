//! Command dispatch logic for hiersel
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use hiersel_core::config::SelectionConfig;
use hiersel_core::error::{HierselError, Result};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_config");
    }

    match &cli.command {
        None => Err(HierselError::UsageError(
            "no command given (try `hiersel --help`)".to_string(),
        )),

        Some(Commands::Replay {
            events,
            initial,
            unselect_all,
            columns,
        }) => {
            let mut config = config;
            if *unselect_all {
                config.unselect_all.enabled = true;
            }
            if !columns.is_empty() {
                config.target.columns = columns.clone();
            }
            commands::replay::execute(cli, config, events, initial.as_deref())
        }

        Some(Commands::Resolve { filter, path }) => {
            commands::resolve::execute(cli, &config, filter, path)
        }

        Some(Commands::Verify { filter }) => commands::verify::execute(cli, filter),
    }
}

fn load_config(cli: &Cli) -> Result<SelectionConfig> {
    match &cli.config {
        Some(path) => SelectionConfig::load(path),
        None => SelectionConfig::load_default(),
    }
}
