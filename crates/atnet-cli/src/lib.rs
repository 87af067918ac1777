//! Command-line interface for Netatmo weather stations.
//!
//! The `atnet` binary signs in to the Netatmo API with a username and
//! password, fetches the station list once, and writes the current readings
//! of every station and its modules to stdout.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `list` | Greppable `station: module: sensor: value` lines (default) |
//! | `pretty` | Indented station/module tree |
//! | `json` | One JSON object keyed by station, module and sensor |
//! | `influx` | InfluxDB line protocol |
//! | `config` | Manage CLI configuration |
//! | `completions` | Generate shell completions |
//!
//! # Configuration
//!
//! The CLI reads `~/.config/atnet/config.toml` (or platform equivalent).
//! Configuration options include:
//!
//! - `client_id` / `client_secret`: Netatmo app registration
//! - `username`: Netatmo login name
//! - `station`: Default station filter
//! - `base_url`: API base URL
//! - `timeout`: Request timeout in seconds
//! - `format`: Output format used when no subcommand is given
//!
//! The password is only taken from `--password` or `NETATMO_PASSWORD`.
//!
//! # Environment Variables
//!
//! - `NETATMO_USER`, `NETATMO_PASSWORD`: Login credentials
//! - `NETATMO_STATION`: Station filter (substring of the station name)
//! - `NETATMO_CLIENT_ID`, `NETATMO_CLIENT_SECRET`: App registration
//! - `NETATMO_BASE_URL`: API base URL
//! - `RUST_LOG`: Log filter, logs go to stderr
//!
//! # Examples
//!
//! ```bash
//! atnet -u me@example.com -p secret list
//! NETATMO_STATION=Cabin atnet pretty
//! atnet influx --timestamps --output readings.lp
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod util;
