//! Stations, their modules, and the readings extracted from them.

use time::OffsetDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{DashboardData, ModuleType, SensorType, SensorValue};

/// A sensor unit: either a satellite module or the base station itself.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Module {
    /// Device identifier (MAC address).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Identifier of the owning station, when the device is a satellite.
    pub station_id: Option<String>,
    /// Device type tag.
    pub module_type: ModuleType,
    /// Sensor names declared by the device, if it sent any.
    pub data_types: Option<Vec<String>>,
    /// Last reported values.
    pub dashboard: DashboardData,
}

impl Module {
    /// Sensors this module reports.
    ///
    /// A declared list naming at least one known sensor wins; otherwise the
    /// static table for the module type applies. Declared names that match no
    /// dashboard field are skipped, so a coarse declaration such as `["Wind"]`
    /// falls through to the table.
    #[must_use]
    pub fn sensors(&self) -> Vec<SensorType> {
        let declared: Vec<SensorType> = self
            .data_types
            .iter()
            .flatten()
            .filter_map(|name| match name.parse::<SensorType>() {
                Ok(sensor) => Some(sensor),
                Err(e) => {
                    tracing::debug!(module = %self.name, "skipping declared sensor: {}", e);
                    None
                }
            })
            .collect();
        if declared.is_empty() {
            tracing::trace!(module = %self.name, module_type = %self.module_type, "using sensor table");
            self.module_type.default_sensors().to_vec()
        } else {
            declared
        }
    }

    /// Extract the module's sensor values and their measurement timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use atnet_types::{DashboardData, Module, ModuleType, SensorType, SensorValue};
    ///
    /// let module = Module {
    ///     name: "Garden".into(),
    ///     module_type: ModuleType::Outdoor,
    ///     dashboard: DashboardData {
    ///         temperature: 12.25,
    ///         humidity: 81,
    ///         time_utc: 1_700_000_000,
    ///         ..Default::default()
    ///     },
    ///     ..Default::default()
    /// };
    ///
    /// let (timestamp, values) = module.sensor_data();
    /// assert_eq!(timestamp, 1_700_000_000);
    /// assert_eq!(values, vec![
    ///     (SensorType::Temperature, SensorValue::Float(12.25)),
    ///     (SensorType::Humidity, SensorValue::Integer(81)),
    /// ]);
    /// ```
    #[must_use]
    pub fn sensor_data(&self) -> (i64, Vec<(SensorType, SensorValue)>) {
        let values = self
            .sensors()
            .into_iter()
            .map(|sensor| (sensor, sensor.read(&self.dashboard)))
            .collect();
        (self.dashboard.time_utc, values)
    }
}

/// A base station together with the modules linked to it.
///
/// Ownership is fixed at construction: there is no way to attach or detach a
/// module afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Station {
    /// Station identifier (MAC address of the base unit).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Type tag of the base unit.
    pub station_type: ModuleType,
    main: Module,
    associated: Vec<Module>,
}

impl Station {
    /// Build a station from its own base-unit record and its linked modules.
    ///
    /// When the base unit carries no module name, the station name is used in
    /// its place.
    #[must_use]
    pub fn new(name: impl Into<String>, mut main: Module, associated: Vec<Module>) -> Self {
        let name = name.into();
        if main.name.is_empty() {
            main.name = name.clone();
        }
        Self {
            id: main.id.clone(),
            station_type: main.module_type,
            name,
            main,
            associated,
        }
    }

    /// The base unit's own module record.
    #[must_use]
    pub fn main_module(&self) -> &Module {
        &self.main
    }

    /// Linked satellite modules, excluding the base unit.
    #[must_use]
    pub fn associated_modules(&self) -> &[Module] {
        &self.associated
    }

    /// All modules of the station: linked modules first, then the station itself.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.associated.iter().chain(std::iter::once(&self.main))
    }

    /// Whether the station name contains `pattern` (case-sensitive).
    #[must_use]
    pub fn name_contains(&self, pattern: &str) -> bool {
        self.name.contains(pattern)
    }

    /// Flatten the station into one reading per (module, sensor).
    #[must_use]
    pub fn readings(&self) -> Vec<Reading> {
        self.modules()
            .flat_map(|module| {
                let (timestamp, values) = module.sensor_data();
                values.into_iter().map(move |(sensor, value)| Reading {
                    station: self.name.clone(),
                    module: module.name.clone(),
                    sensor,
                    value,
                    timestamp,
                })
            })
            .collect()
    }
}

/// One (station, module, sensor, value, timestamp) tuple.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    pub station: String,
    pub module: String,
    pub sensor: SensorType,
    pub value: SensorValue,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
}

impl Reading {
    /// The measurement time, if the timestamp is representable.
    #[must_use]
    pub fn measured_at(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(self.timestamp).ok()
    }
}
