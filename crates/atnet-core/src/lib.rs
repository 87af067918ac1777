//! Client library for the Netatmo weather station API.
//!
//! This crate authenticates against the Netatmo API with the OAuth2 password
//! grant, fetches the account's device list, and reshapes the flat
//! station/module records into [`Station`]s that carry their own modules.
//!
//! # Features
//!
//! - **Authentication**: OAuth2 password grant with the `read_station` scope
//! - **Device list**: a single authenticated GET, decoded from either the
//!   `devicelist` or the `getstationsdata` response shape
//! - **Association**: modules linked to their station by `main_device`
//! - **Filtering**: case-sensitive substring match on station names
//!
//! # Example
//!
//! ```no_run
//! use atnet_core::{ClientOptions, Credentials, NetatmoClient};
//!
//! # async fn example() -> atnet_core::Result<()> {
//! let credentials = Credentials {
//!     client_id: "app-id".into(),
//!     client_secret: "app-secret".into(),
//!     username: "me@example.com".into(),
//!     password: "hunter2".into(),
//! };
//! let client = NetatmoClient::authenticate(&credentials, &ClientOptions::default()).await?;
//! let stations = client.device_collection().await?.into_stations();
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod collection;
pub mod error;
pub mod wire;

pub use client::{ClientOptions, Credentials, NetatmoClient};
pub use collection::{DeviceCollection, filter_stations};
pub use error::{Error, Result};

// Re-export the data model for convenience
pub use atnet_types::{
    DashboardData, Module, ModuleType, Reading, SensorType, SensorValue, Station,
};
