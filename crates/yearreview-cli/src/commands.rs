use super::args::{Cli, Commands};
use super::handlers;
use super::logging;
use anyhow::{Context, Result};
use yearreview_runtime::{TeamConfig, Workspace, expand_tilde, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref());
    let data_dir = expand_tilde(&cli.data_dir);

    match cli.command {
        Commands::Analyze { input, year } => {
            let config = TeamConfig::load_or_default(&config_path)
                .with_context(|| format!("loading {}", config_path.display()))?;
            let year = year.unwrap_or(config.year);
            handlers::analyze::handle(&config, &input, year, cli.format)
        }

        Commands::Quarters { input, year } => {
            let config = TeamConfig::load_or_default(&config_path)
                .with_context(|| format!("loading {}", config_path.display()))?;
            let year = year.unwrap_or(config.year);
            handlers::quarters::handle(&config, &input, year, cli.format)
        }

        Commands::Member { key, refresh } => {
            let config = TeamConfig::load_from(&config_path)?;
            let workspace = Workspace::new(config, data_dir);
            handlers::member::handle(&workspace, &key, refresh, cli.format)
        }

        Commands::Team { refresh, output } => {
            let config = TeamConfig::load_from(&config_path)?;
            let workspace = Workspace::new(config, data_dir);
            handlers::team::handle(&workspace, refresh, output.as_deref(), cli.format)
        }

        Commands::Config => handlers::config::handle(&config_path, &data_dir, cli.format),
    }
}
