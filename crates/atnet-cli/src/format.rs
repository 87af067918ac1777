//! Output formatting for list, pretty, JSON, and InfluxDB line protocol output.
//!
//! Every formatter walks the stations in order, each station's modules
//! (linked modules first, then the station itself), and each module's sensors
//! in declaration order. Values go through the shared [`SensorValue`]
//! stringification in all four formats.
//!
//! [`SensorValue`]: atnet_types::SensorValue

use std::collections::BTreeMap;

use anyhow::Result;
use atnet_types::{SensorType, Station};

use crate::cli::OutputFormat;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Indent JSON output instead of a single line.
    pub pretty_json: bool,
    /// Append measurement timestamps to line protocol records.
    pub timestamps: bool,
}

impl FormatOptions {
    /// Create with indented JSON option.
    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }

    /// Create with line protocol timestamp option.
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Serialize value to JSON string, respecting the pretty option.
    pub fn as_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty_json {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json + "\n")
    }
}

/// Render the stations in the requested format.
pub fn render(stations: &[Station], format: OutputFormat, opts: &FormatOptions) -> Result<String> {
    Ok(match format {
        OutputFormat::List => format_list(stations),
        OutputFormat::Pretty => format_pretty(stations),
        OutputFormat::Json => format_json(stations, opts)?,
        OutputFormat::Influx => format_influx(stations, opts),
    })
}

// ============================================================================
// List formatting
// ============================================================================

/// One `station: module: sensor: value` line per reading.
#[must_use]
pub fn format_list(stations: &[Station]) -> String {
    let mut output = String::new();
    for station in stations {
        for reading in station.readings() {
            output.push_str(&format!(
                "{}: {}: {}: {}\n",
                reading.station, reading.module, reading.sensor, reading.value
            ));
        }
    }
    output
}

// ============================================================================
// Pretty formatting
// ============================================================================

/// Station header, tab-indented module headers, double-indented readings.
#[must_use]
pub fn format_pretty(stations: &[Station]) -> String {
    let mut output = String::new();
    for station in stations {
        output.push_str(&format!("Station: {}\n", station.name));
        for module in station.modules() {
            output.push_str(&format!("\t{}:\n", module.name));
            let (_, values) = module.sensor_data();
            for (sensor, value) in values {
                output.push_str(&format!("\t\t{}: {}\n", sensor, value));
            }
        }
    }
    output
}

// ============================================================================
// JSON formatting
// ============================================================================

/// Station name → module name → sensor name → stringified value.
pub type JsonTree = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

/// Build the three-level mapping written by [`format_json`].
///
/// A later station replaces an earlier one of the same name; within a
/// station, a later module replaces an earlier one of the same name.
#[must_use]
pub fn json_tree(stations: &[Station]) -> JsonTree {
    let mut tree = JsonTree::new();
    for station in stations {
        let mut modules: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for module in station.modules() {
            let (_, values) = module.sensor_data();
            let block = values
                .into_iter()
                .map(|(sensor, value)| (sensor.name().to_string(), value.to_string()))
                .collect();
            modules.insert(module.name.clone(), block);
        }
        tree.insert(station.name.clone(), modules);
    }
    tree
}

/// Serialize the station tree as one JSON object.
pub fn format_json(stations: &[Station], opts: &FormatOptions) -> Result<String> {
    opts.as_json(&json_tree(stations))
}

// ============================================================================
// InfluxDB line protocol formatting
// ============================================================================

/// Type suffix for integer-valued sensors (`co2`, `humidity`, `noise`).
#[must_use]
pub fn line_protocol_suffix(sensor: SensorType) -> &'static str {
    if sensor.is_integer() { "i" } else { "" }
}

/// Lowercase a tag value and replace spaces with underscores.
#[must_use]
pub fn tag_value(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// One `sensor,station=..,module=.. value=..` record per reading.
#[must_use]
pub fn format_influx(stations: &[Station], opts: &FormatOptions) -> String {
    let mut output = String::new();
    for station in stations {
        for reading in station.readings() {
            output.push_str(&format!(
                "{},station={},module={} value={}{}",
                reading.sensor.name().to_lowercase(),
                tag_value(&reading.station),
                tag_value(&reading.module),
                reading.value,
                line_protocol_suffix(reading.sensor)
            ));
            if opts.timestamps {
                output.push_str(&format!(" {}", reading.timestamp));
            }
            output.push('\n');
        }
    }
    output
}
