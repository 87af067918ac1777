//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Output format for the rendered station data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `station: module: sensor: value` lines
    #[default]
    List,
    /// Indented station/module tree
    Pretty,
    /// One JSON object keyed by station, module and sensor
    Json,
    /// InfluxDB line protocol
    Influx,
}

/// Netatmo credentials and connection arguments
#[derive(Debug, Clone, Default, Args)]
pub struct CredentialArgs {
    /// Netatmo login name
    #[arg(short, long, global = true, env = "NETATMO_USER")]
    pub user: Option<String>,

    /// Netatmo password
    #[arg(
        short,
        long,
        global = true,
        env = "NETATMO_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// A station filter, defaults to none (print everything)
    #[arg(short, long, global = true, env = "NETATMO_STATION")]
    pub station: Option<String>,

    /// Client ID of the Netatmo app registration
    #[arg(long, global = true, env = "NETATMO_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Client secret of the Netatmo app registration
    #[arg(
        long,
        global = true,
        env = "NETATMO_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub client_secret: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "NETATMO_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 'T', long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Parser)]
#[command(name = "atnet")]
#[command(author, version, about = "Read values from the Netatmo API and write to stdout", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the modules and the values in a greppable list
    List,

    /// Pretty print the stations and the modules attached
    Pretty,

    /// Output a machine readable JSON string
    Json {
        /// Indent the JSON object instead of printing a single line
        #[arg(long)]
        pretty: bool,
    },

    /// Output InfluxDB line format
    Influx {
        /// Append the measurement time (seconds precision) to every line
        #[arg(long)]
        timestamps: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// Output format selected by a rendering subcommand.
    pub fn format(&self) -> Option<OutputFormat> {
        match self {
            Commands::List => Some(OutputFormat::List),
            Commands::Pretty => Some(OutputFormat::Pretty),
            Commands::Json { .. } => Some(OutputFormat::Json),
            Commands::Influx { .. } => Some(OutputFormat::Influx),
            Commands::Config { .. } | Commands::Completions { .. } => None,
        }
    }
}

/// Configuration subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init,
}
