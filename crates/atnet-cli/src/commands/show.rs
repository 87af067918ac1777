//! Fetch the station collection and render it in the selected format.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use atnet_core::NetatmoClient;
use atnet_types::Station;
use time::format_description::well_known::Rfc3339;

use crate::cli::{CredentialArgs, OutputFormat};
use crate::config::{Config, resolve_client_options, resolve_credentials, resolve_station};
use crate::format::{FormatOptions, render};
use crate::util::write_output;

pub async fn cmd_show(
    args: &CredentialArgs,
    config: &Config,
    format: OutputFormat,
    opts: &FormatOptions,
    output: Option<&PathBuf>,
) -> Result<()> {
    let credentials = resolve_credentials(args, config);
    credentials.validate().map_err(|e| {
        anyhow!(
            "{}\n\nUse --user and --password (or NETATMO_USER and NETATMO_PASSWORD), and set \
             NETATMO_CLIENT_ID and NETATMO_CLIENT_SECRET or add them to {}",
            e,
            Config::path().display()
        )
    })?;
    let options = resolve_client_options(args, config);
    let filter = resolve_station(args, config);

    let client = NetatmoClient::authenticate(&credentials, &options)
        .await
        .context("Netatmo client error")?;
    tracing::debug!(base_url = client.base_url(), "authenticated");
    let collection = client
        .device_collection()
        .await
        .context("Unable to fetch device collection")?;

    let stations = collection.filter(&filter).into_stations();
    if stations.is_empty() && !filter.is_empty() {
        tracing::warn!(filter = %filter, "No station matches the filter");
    }
    log_measurement_times(&stations);

    let content = render(&stations, format, opts)?;
    write_output(output, &content)?;
    Ok(())
}

fn log_measurement_times(stations: &[Station]) {
    for station in stations {
        let latest = station
            .readings()
            .into_iter()
            .max_by_key(|r| r.timestamp)
            .and_then(|r| r.measured_at())
            .and_then(|t| t.format(&Rfc3339).ok());
        tracing::debug!(
            station = %station.name,
            station_type = %station.station_type,
            modules = station.modules().count(),
            latest = latest.as_deref().unwrap_or("none"),
            "station data"
        );
    }
}
