use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use atnet_cli::cli::{Cli, Commands};
use atnet_cli::commands::{cmd_config, cmd_show};
use atnet_cli::config::{Config, resolve_format};
use atnet_cli::format::FormatOptions;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "atnet", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{:#}", e);
            tracing::error!(error = %message, "atnet failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load();

    let (format, opts) = match &cli.command {
        Some(Commands::Config { action }) => return cmd_config(*action),
        Some(Commands::Json { pretty }) => (
            resolve_format(cli.command.as_ref().and_then(Commands::format), &config),
            FormatOptions::default().with_pretty_json(*pretty),
        ),
        Some(Commands::Influx { timestamps }) => (
            resolve_format(cli.command.as_ref().and_then(Commands::format), &config),
            FormatOptions::default().with_timestamps(*timestamps),
        ),
        command => (
            resolve_format(command.as_ref().and_then(Commands::format), &config),
            FormatOptions::default(),
        ),
    };

    if let Some(ref path) = cli.output {
        tracing::debug!("Output will be written to: {}", path.display());
    }

    cmd_show(
        &cli.credentials,
        &config,
        format,
        &opts,
        cli.output.as_ref(),
    )
    .await
}
