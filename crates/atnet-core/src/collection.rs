//! Station/module association and station filtering.

use atnet_types::{Module, Station};

use crate::wire::{DeviceListResponse, RawDevice};

/// The stations of an account, each carrying its modules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceCollection {
    stations: Vec<Station>,
}

impl DeviceCollection {
    /// Link every module record to the station whose id equals its
    /// `main_device`.
    ///
    /// Modules nested under a station record belong to that station directly.
    /// A module that matches no station is dropped.
    pub fn associate(devices: &[RawDevice], modules: &[RawDevice]) -> Self {
        let stations = devices
            .iter()
            .map(|device| {
                let mut associated: Vec<Module> = Vec::new();
                for nested in device.nested_modules() {
                    let mut module = nested.to_module();
                    module.station_id.get_or_insert_with(|| device.id.clone());
                    associated.push(module);
                }
                associated.extend(
                    modules
                        .iter()
                        .filter(|m| m.main_device.as_deref() == Some(device.id.as_str()))
                        .map(RawDevice::to_module),
                );
                Station::new(device.station_name.clone(), device.to_module(), associated)
            })
            .collect();

        let orphans = modules
            .iter()
            .filter(|m| {
                !devices
                    .iter()
                    .any(|d| m.main_device.as_deref() == Some(d.id.as_str()))
            })
            .count();
        if orphans > 0 {
            tracing::debug!(orphans, "dropping modules without a matching station");
        }

        Self { stations }
    }

    /// Build the collection from a decoded API response.
    pub fn from_response(response: &DeviceListResponse) -> Self {
        Self::associate(&response.body.devices, &response.body.modules)
    }

    /// Keep only stations whose name contains `pattern`.
    ///
    /// An empty pattern keeps everything.
    #[must_use]
    pub fn filter(self, pattern: &str) -> Self {
        Self {
            stations: filter_stations(self.stations, pattern),
        }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn into_stations(self) -> Vec<Station> {
        self.stations
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }
}

/// Retain the stations whose name contains `pattern` (case-sensitive).
///
/// Modules are never filtered on their own; an empty pattern returns the input
/// unchanged.
///
/// ```
/// use atnet_core::filter_stations;
/// use atnet_types::{Module, Station};
///
/// let stations = vec![
///     Station::new("Home", Module::default(), Vec::new()),
///     Station::new("Cabin", Module::default(), Vec::new()),
/// ];
/// let kept = filter_stations(stations, "Cab");
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].name, "Cabin");
/// ```
pub fn filter_stations(stations: Vec<Station>, pattern: &str) -> Vec<Station> {
    if pattern.is_empty() {
        return stations;
    }
    stations
        .into_iter()
        .filter(|station| station.name_contains(pattern))
        .collect()
}
