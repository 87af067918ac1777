//! Core types for Netatmo weather station data.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Type of Netatmo weather device.
///
/// The upstream API tags every device with a short type string (`NAMain`,
/// `NAModule1`, ...). Tags outside the known set decode to
/// [`ModuleType::Unknown`] instead of failing, so a new device generation
/// only loses its readings rather than the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModuleType {
    /// Base station (indoor unit with CO2, noise and pressure sensors).
    #[cfg_attr(feature = "serde", serde(rename = "NAMain"))]
    Main,
    /// Outdoor temperature/humidity module.
    #[cfg_attr(feature = "serde", serde(rename = "NAModule1"))]
    Outdoor,
    /// Wind gauge.
    #[cfg_attr(feature = "serde", serde(rename = "NAModule2"))]
    Wind,
    /// Rain gauge.
    #[cfg_attr(feature = "serde", serde(rename = "NAModule3"))]
    Rain,
    /// Additional indoor module.
    #[cfg_attr(feature = "serde", serde(rename = "NAModule4"))]
    IndoorAux,
    /// Any tag this crate does not know about.
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl ModuleType {
    /// Sensors a device of this type reports when it does not declare its own
    /// `data_type` list.
    ///
    /// # Examples
    ///
    /// ```
    /// use atnet_types::{ModuleType, SensorType};
    ///
    /// assert_eq!(
    ///     ModuleType::Outdoor.default_sensors(),
    ///     &[SensorType::Temperature, SensorType::Humidity]
    /// );
    /// assert!(ModuleType::Unknown.default_sensors().is_empty());
    /// ```
    #[must_use]
    pub fn default_sensors(&self) -> &'static [SensorType] {
        use SensorType::*;

        match self {
            ModuleType::Main => &[
                Temperature,
                Humidity,
                Co2,
                Noise,
                Pressure,
                AbsolutePressure,
            ],
            ModuleType::Outdoor => &[Temperature, Humidity],
            ModuleType::Wind => &[WindAngle, WindStrength, GustAngle, GustStrength],
            ModuleType::Rain => &[Rain, Rain1Hour, Rain1Day],
            ModuleType::IndoorAux => &[Temperature, Humidity, Co2],
            ModuleType::Unknown => &[],
        }
    }
}

impl FromStr for ModuleType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NAMain" => Ok(ModuleType::Main),
            "NAModule1" => Ok(ModuleType::Outdoor),
            "NAModule2" => Ok(ModuleType::Wind),
            "NAModule3" => Ok(ModuleType::Rain),
            "NAModule4" => Ok(ModuleType::IndoorAux),
            other => Err(ParseError::UnknownModuleType(other.to_string())),
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleType::Main => write!(f, "Main station"),
            ModuleType::Outdoor => write!(f, "Outdoor module"),
            ModuleType::Wind => write!(f, "Wind gauge"),
            ModuleType::Rain => write!(f, "Rain gauge"),
            ModuleType::IndoorAux => write!(f, "Indoor module"),
            ModuleType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One named field of a device's dashboard data.
///
/// Each variant maps to exactly one field of [`DashboardData`] through
/// [`SensorType::read`], so there is no lookup by field name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorType {
    Temperature,
    Humidity,
    #[cfg_attr(feature = "serde", serde(rename = "CO2"))]
    Co2,
    Noise,
    Pressure,
    AbsolutePressure,
    Rain,
    Rain1Hour,
    Rain1Day,
    WindAngle,
    WindStrength,
    GustAngle,
    GustStrength,
}

impl SensorType {
    /// Every sensor type, in dashboard field order.
    pub const ALL: [SensorType; 13] = [
        SensorType::Temperature,
        SensorType::Humidity,
        SensorType::Co2,
        SensorType::Noise,
        SensorType::Pressure,
        SensorType::AbsolutePressure,
        SensorType::Rain,
        SensorType::Rain1Hour,
        SensorType::Rain1Day,
        SensorType::WindAngle,
        SensorType::WindStrength,
        SensorType::GustAngle,
        SensorType::GustStrength,
    ];

    /// The name used in `data_type` lists and in every output format.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SensorType::Temperature => "Temperature",
            SensorType::Humidity => "Humidity",
            SensorType::Co2 => "CO2",
            SensorType::Noise => "Noise",
            SensorType::Pressure => "Pressure",
            SensorType::AbsolutePressure => "AbsolutePressure",
            SensorType::Rain => "Rain",
            SensorType::Rain1Hour => "Rain1Hour",
            SensorType::Rain1Day => "Rain1Day",
            SensorType::WindAngle => "WindAngle",
            SensorType::WindStrength => "WindStrength",
            SensorType::GustAngle => "GustAngle",
            SensorType::GustStrength => "GustStrength",
        }
    }

    /// Whether the sensor reports whole numbers (CO2 in ppm, humidity in %,
    /// noise in dB).
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            SensorType::Co2 | SensorType::Humidity | SensorType::Noise
        )
    }

    /// Read this sensor's field out of a dashboard record.
    ///
    /// # Examples
    ///
    /// ```
    /// use atnet_types::{DashboardData, SensorType, SensorValue};
    ///
    /// let data = DashboardData {
    ///     temperature: 21.5,
    ///     humidity: 40,
    ///     ..Default::default()
    /// };
    /// assert_eq!(SensorType::Temperature.read(&data), SensorValue::Float(21.5));
    /// assert_eq!(SensorType::Humidity.read(&data), SensorValue::Integer(40));
    /// ```
    #[must_use]
    pub fn read(&self, data: &DashboardData) -> SensorValue {
        match self {
            SensorType::Temperature => SensorValue::Float(data.temperature),
            SensorType::Humidity => SensorValue::Integer(data.humidity),
            SensorType::Co2 => SensorValue::Integer(data.co2),
            SensorType::Noise => SensorValue::Integer(data.noise),
            SensorType::Pressure => SensorValue::Float(data.pressure),
            SensorType::AbsolutePressure => SensorValue::Float(data.absolute_pressure),
            SensorType::Rain => SensorValue::Float(data.rain),
            SensorType::Rain1Hour => SensorValue::Float(data.rain_1_hour),
            SensorType::Rain1Day => SensorValue::Float(data.rain_1_day),
            SensorType::WindAngle => SensorValue::Float(data.wind_angle),
            SensorType::WindStrength => SensorValue::Float(data.wind_strength),
            SensorType::GustAngle => SensorValue::Float(data.gust_angle),
            SensorType::GustStrength => SensorValue::Float(data.gust_strength),
        }
    }
}

impl FromStr for SensorType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SensorType::ALL
            .into_iter()
            .find(|sensor| sensor.name() == s)
            .ok_or_else(|| ParseError::UnknownSensorType(s.to_string()))
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single sensor value in its native representation.
///
/// `Display` is the one stringification rule shared by every output format:
/// floats with two decimals, integers in plain decimal, text verbatim, and
/// `-` for anything else.
///
/// ```
/// use atnet_types::SensorValue;
///
/// assert_eq!(SensorValue::Float(3.14159).to_string(), "3.14");
/// assert_eq!(SensorValue::Integer(42).to_string(), "42");
/// assert_eq!(SensorValue::Text("ok".into()).to_string(), "ok");
/// assert_eq!(SensorValue::Unsupported.to_string(), "-");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorValue {
    Float(f64),
    Integer(i64),
    Text(String),
    Unsupported,
}

/// Placeholder rendered for values with no textual form.
pub const PLACEHOLDER: &str = "-";

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorValue::Float(v) => write!(f, "{:.2}", v),
            SensorValue::Integer(v) => write!(f, "{}", v),
            SensorValue::Text(v) => f.write_str(v),
            SensorValue::Unsupported => f.write_str(PLACEHOLDER),
        }
    }
}

/// Last values reported by a device's sensors.
///
/// Only the fields relevant to the device type are sent by the API; the
/// others decode to zero.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DashboardData {
    /// Temperature in °C.
    #[cfg_attr(feature = "serde", serde(rename = "Temperature"))]
    pub temperature: f64,
    /// Relative humidity in %.
    #[cfg_attr(feature = "serde", serde(rename = "Humidity"))]
    pub humidity: i64,
    /// CO2 concentration in ppm.
    #[cfg_attr(feature = "serde", serde(rename = "CO2"))]
    pub co2: i64,
    /// Noise level in dB.
    #[cfg_attr(feature = "serde", serde(rename = "Noise"))]
    pub noise: i64,
    /// Sea-level pressure in mbar.
    #[cfg_attr(feature = "serde", serde(rename = "Pressure"))]
    pub pressure: f64,
    /// Measured pressure in mbar.
    #[cfg_attr(feature = "serde", serde(rename = "AbsolutePressure"))]
    pub absolute_pressure: f64,
    /// Last rain measurement in mm.
    #[cfg_attr(feature = "serde", serde(rename = "Rain"))]
    pub rain: f64,
    /// Rain over the last hour in mm.
    #[cfg_attr(feature = "serde", serde(rename = "sum_rain_1"))]
    pub rain_1_hour: f64,
    /// Rain since midnight in mm.
    #[cfg_attr(feature = "serde", serde(rename = "sum_rain_24"))]
    pub rain_1_day: f64,
    /// 5 minute average wind direction in degrees.
    #[cfg_attr(feature = "serde", serde(rename = "WindAngle"))]
    pub wind_angle: f64,
    /// 5 minute average wind speed in km/h.
    #[cfg_attr(feature = "serde", serde(rename = "WindStrength"))]
    pub wind_strength: f64,
    /// Direction of the strongest gust of the last 5 minutes in degrees.
    #[cfg_attr(feature = "serde", serde(rename = "GustAngle"))]
    pub gust_angle: f64,
    /// Speed of the strongest gust of the last 5 minutes in km/h.
    #[cfg_attr(feature = "serde", serde(rename = "GustStrength"))]
    pub gust_strength: f64,
    /// Unix timestamp (seconds) of the measurement.
    #[cfg_attr(feature = "serde", serde(rename = "time_utc"))]
    pub time_utc: i64,
}
