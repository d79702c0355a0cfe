use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "yearreview")]
#[command(about = "Group a team's yearly activity into projects", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Team configuration file (default: $YEARREVIEW_CONFIG or config/team_config.toml)")]
    pub config: Option<String>,

    #[arg(long, default_value = "data/raw", global = true)]
    pub data_dir: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Identify projects in one member data file")]
    Analyze {
        #[arg(long)]
        input: PathBuf,

        #[arg(long, help = "Target year (default: configured year)")]
        year: Option<i32>,
    },

    #[command(about = "Organize the projects of one member data file by quarter")]
    Quarters {
        #[arg(long)]
        input: PathBuf,

        #[arg(long, help = "Target year (default: configured year)")]
        year: Option<i32>,
    },

    #[command(about = "Analyze one configured member from the data directory")]
    Member {
        #[arg(help = "GitHub handle, member key or full name")]
        key: String,

        #[arg(long, help = "Ignore cached projects and re-run the analysis")]
        refresh: bool,
    },

    #[command(about = "Analyze every configured member and roll up the team")]
    Team {
        #[arg(long, help = "Ignore cached projects and re-run the analysis")]
        refresh: bool,

        #[arg(long, help = "Write the report to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    #[command(about = "Show the resolved team configuration")]
    Config,
}
