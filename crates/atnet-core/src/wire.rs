//! Wire types for the Netatmo device list response.
//!
//! Two response shapes are accepted. The `devicelist` endpoint returns stations
//! in `body.devices` and every satellite in a separate `body.modules` list,
//! linked back through `main_device`; stations then list their modules by id
//! only. The `getstationsdata` endpoint nests full module records under each
//! station's `modules` array instead.

use atnet_types::{DashboardData, Module, ModuleType};
use serde::Deserialize;

/// Top-level response of the device list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceListResponse {
    pub body: DeviceListBody,
}

/// Parallel lists of station and module records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceListBody {
    #[serde(default)]
    pub devices: Vec<RawDevice>,
    #[serde(default)]
    pub modules: Vec<RawDevice>,
}

/// A station or module record as sent by the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDevice {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub station_name: String,
    #[serde(default)]
    pub module_name: String,
    #[serde(rename = "type", default)]
    pub device_type: ModuleType,
    #[serde(default)]
    pub dashboard_data: DashboardData,
    #[serde(default)]
    pub data_type: Option<Vec<String>>,
    #[serde(default)]
    pub main_device: Option<String>,
    #[serde(default)]
    pub modules: Vec<LinkedModule>,
}

/// Entry of a station's `modules` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LinkedModule {
    /// Module id only (`devicelist`); the record itself is in `body.modules`.
    Id(String),
    /// Full module record (`getstationsdata`).
    Device(Box<RawDevice>),
}

impl RawDevice {
    /// Convert the record into a domain module.
    pub fn to_module(&self) -> Module {
        Module {
            id: self.id.clone(),
            name: self.module_name.clone(),
            station_id: self.main_device.clone(),
            module_type: self.device_type,
            data_types: self.data_type.clone(),
            dashboard: self.dashboard_data.clone(),
        }
    }

    /// Full module records nested under this station.
    pub fn nested_modules(&self) -> impl Iterator<Item = &RawDevice> {
        self.modules.iter().filter_map(|linked| match linked {
            LinkedModule::Device(device) => Some(device.as_ref()),
            LinkedModule::Id(_) => None,
        })
    }
}
