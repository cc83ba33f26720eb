use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::{Context, Result};
use std::path::Path;
use weatherdeck_core::{BundledSource, DashboardState, RecordSource, source_for_path};

pub fn run(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)?;

    let unit = cli
        .unit
        .map(Into::into)
        .unwrap_or(config.default_unit);

    let source = resolve_source(cli.data_file.as_deref(), config.data_file.as_deref())?;
    if cli.log_level.debug_enabled() {
        eprintln!("Loading records from {}", source.describe());
    }

    let mut state = DashboardState::new(unit);
    state
        .load_initial_data(source.as_ref())
        .with_context(|| format!("failed to load dataset from {}", source.describe()))?;

    match cli.command {
        None | Some(Commands::Dash) => handlers::dash::handle(state),

        Some(Commands::List { search }) => {
            handlers::list::handle(&mut state, search.as_deref(), cli.format)
        }

        Some(Commands::Export { format, output }) => {
            handlers::export::handle(&state, format, output.as_deref())
        }

        Some(Commands::Config) => {
            handlers::config::handle(&config_path, &config, source.as_ref(), unit, cli.format)
        }
    }
}

/// Priority: CLI flag, then config file, then the bundled demo dataset.
fn resolve_source(
    cli_path: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<Box<dyn RecordSource>> {
    match cli_path.or(config_path) {
        Some(path) => Ok(source_for_path(path)?),
        None => Ok(Box::new(BundledSource)),
    }
}
