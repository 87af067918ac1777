//! Platform-agnostic types for Netatmo weather stations.
//!
//! This crate holds the data model shared by the API client (atnet-core) and
//! the command-line tool (atnet-cli).
//!
//! # Features
//!
//! - Station, module and reading types
//! - The static module type to sensor table
//! - A compile-time sensor name to dashboard field mapping
//! - The shared value stringification rule
//!
//! # Example
//!
//! ```
//! use atnet_types::{DashboardData, Module, ModuleType, Station};
//!
//! let main = Module {
//!     id: "70:ee:50:00:00:01".into(),
//!     module_type: ModuleType::Main,
//!     data_types: Some(vec!["Temperature".into(), "Humidity".into()]),
//!     dashboard: DashboardData { temperature: 21.5, humidity: 40, ..Default::default() },
//!     ..Default::default()
//! };
//! let station = Station::new("Home", main, Vec::new());
//!
//! for reading in station.readings() {
//!     println!("{}: {}: {}: {}", reading.station, reading.module, reading.sensor, reading.value);
//! }
//! ```

pub mod device;
pub mod error;
pub mod types;

pub use device::{Module, Reading, Station};
pub use error::ParseError;
pub use types::{DashboardData, ModuleType, PLACEHOLDER, SensorType, SensorValue};

#[cfg(test)]
mod tests {
    use super::*;

    fn main_module(declared: Option<&[&str]>) -> Module {
        Module {
            id: "70:ee:50:00:00:01".to_string(),
            name: String::new(),
            station_id: None,
            module_type: ModuleType::Main,
            data_types: declared.map(|d| d.iter().map(|s| s.to_string()).collect()),
            dashboard: DashboardData {
                temperature: 21.5,
                humidity: 40,
                co2: 612,
                noise: 38,
                pressure: 1013.4,
                absolute_pressure: 1001.2,
                time_utc: 1_700_000_000,
                ..Default::default()
            },
        }
    }

    fn module(id: &str, name: &str, module_type: ModuleType) -> Module {
        Module {
            id: id.to_string(),
            name: name.to_string(),
            station_id: Some("70:ee:50:00:00:01".to_string()),
            module_type,
            data_types: None,
            dashboard: DashboardData::default(),
        }
    }

    // --- Module type table ---

    #[test]
    fn test_default_sensors_per_module_type() {
        assert_eq!(ModuleType::Main.default_sensors().len(), 6);
        assert_eq!(
            ModuleType::Rain.default_sensors(),
            &[SensorType::Rain, SensorType::Rain1Hour, SensorType::Rain1Day]
        );
        assert_eq!(
            ModuleType::IndoorAux.default_sensors(),
            &[SensorType::Temperature, SensorType::Humidity, SensorType::Co2]
        );
        assert_eq!(ModuleType::Wind.default_sensors().len(), 4);
    }

    #[test]
    fn test_module_type_from_tag() {
        assert_eq!("NAMain".parse::<ModuleType>(), Ok(ModuleType::Main));
        assert_eq!("NAModule2".parse::<ModuleType>(), Ok(ModuleType::Wind));
        assert_eq!(
            "NAPlug".parse::<ModuleType>(),
            Err(ParseError::UnknownModuleType("NAPlug".to_string()))
        );
    }

    #[test]
    fn test_module_type_deserializes_unknown_tag() {
        let ty: ModuleType = serde_json::from_str("\"NACamera\"").unwrap();
        assert_eq!(ty, ModuleType::Unknown);
        let ty: ModuleType = serde_json::from_str("\"NAModule1\"").unwrap();
        assert_eq!(ty, ModuleType::Outdoor);
    }

    // --- Sensor names ---

    #[test]
    fn test_sensor_type_parse_is_case_sensitive() {
        assert_eq!("CO2".parse::<SensorType>(), Ok(SensorType::Co2));
        assert!("co2".parse::<SensorType>().is_err());
        assert!("Wind".parse::<SensorType>().is_err());
    }

    #[test]
    fn test_sensor_type_integer_valued() {
        let integers: Vec<_> = SensorType::ALL
            .into_iter()
            .filter(SensorType::is_integer)
            .collect();
        assert_eq!(
            integers,
            vec![SensorType::Humidity, SensorType::Co2, SensorType::Noise]
        );
    }

    #[test]
    fn test_sensor_type_read_rain_fields() {
        let data = DashboardData {
            rain: 0.2,
            rain_1_hour: 1.1,
            rain_1_day: 4.5,
            ..Default::default()
        };
        assert_eq!(SensorType::Rain1Hour.read(&data), SensorValue::Float(1.1));
        assert_eq!(SensorType::Rain1Day.read(&data), SensorValue::Float(4.5));
    }

    // --- Stringification ---

    #[test]
    fn test_value_to_string() {
        assert_eq!(SensorValue::Float(3.14159).to_string(), "3.14");
        assert_eq!(SensorValue::Float(21.5).to_string(), "21.50");
        assert_eq!(SensorValue::Integer(42).to_string(), "42");
        assert_eq!(SensorValue::Integer(-3).to_string(), "-3");
        assert_eq!(SensorValue::Text("ok".to_string()).to_string(), "ok");
        assert_eq!(SensorValue::Unsupported.to_string(), PLACEHOLDER);
    }

    // --- Extraction ---

    #[test]
    fn test_sensor_data_uses_declared_list() {
        let m = main_module(Some(&["Temperature", "Humidity"]));
        let (ts, values) = m.sensor_data();
        assert_eq!(ts, 1_700_000_000);
        assert_eq!(
            values,
            vec![
                (SensorType::Temperature, SensorValue::Float(21.5)),
                (SensorType::Humidity, SensorValue::Integer(40)),
            ]
        );
    }

    #[test]
    fn test_sensor_data_falls_back_to_type_table() {
        let m = main_module(None);
        let (_, values) = m.sensor_data();
        let sensors: Vec<_> = values.iter().map(|(s, _)| *s).collect();
        assert_eq!(sensors, ModuleType::Main.default_sensors());
    }

    #[test]
    fn test_sensor_data_empty_declared_list_uses_table() {
        let m = main_module(Some(&[]));
        assert_eq!(m.sensors().len(), 6);
    }

    #[test]
    fn test_sensor_data_skips_unknown_declared_names() {
        let m = main_module(Some(&["Temperature", "Wind", "Battery"]));
        assert_eq!(m.sensors(), vec![SensorType::Temperature]);
    }

    #[test]
    fn test_sensor_data_coarse_declaration_uses_table() {
        let mut m = module("06:00:00:00:00:01", "Wind", ModuleType::Wind);
        m.data_types = Some(vec!["Wind".to_string()]);
        m.dashboard.wind_strength = 12.0;
        let sensors: Vec<_> = m.sensor_data().1.into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            sensors,
            vec![
                SensorType::WindAngle,
                SensorType::WindStrength,
                SensorType::GustAngle,
                SensorType::GustStrength,
            ]
        );
    }

    #[test]
    fn test_sensor_data_unknown_type_is_empty() {
        let mut m = module("02:00:00:00:00:09", "Camera", ModuleType::Unknown);
        m.dashboard.temperature = 20.0;
        let (_, values) = m.sensor_data();
        assert!(values.is_empty());
    }

    #[test]
    fn test_sensor_data_emits_zero_valued_fields() {
        let m = module("02:00:00:00:00:03", "Rain", ModuleType::Rain);
        let (_, values) = m.sensor_data();
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|(_, v)| *v == SensorValue::Float(0.0)));
    }

    // --- Station ---

    #[test]
    fn test_station_modules_include_itself_last() {
        let station = Station::new(
            "Home",
            main_module(None),
            vec![
                module("02:00:00:00:00:01", "Outdoor", ModuleType::Outdoor),
                module("05:00:00:00:00:01", "Rain", ModuleType::Rain),
            ],
        );
        let names: Vec<_> = station.modules().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Outdoor", "Rain", "Home"]);
        assert_eq!(station.associated_modules().len(), 2);
        assert_eq!(station.id, "70:ee:50:00:00:01");
        assert_eq!(station.station_type, ModuleType::Main);
    }

    #[test]
    fn test_station_without_modules_still_lists_itself() {
        let station = Station::new("Home", main_module(None), Vec::new());
        assert_eq!(station.modules().count(), 1);
    }

    #[test]
    fn test_station_keeps_distinct_main_module_name() {
        let mut main = main_module(None);
        main.name = "Living room".to_string();
        let station = Station::new("Home", main, Vec::new());
        assert_eq!(station.main_module().name, "Living room");
    }

    #[test]
    fn test_station_readings_flatten() {
        let station = Station::new(
            "Home",
            main_module(Some(&["Temperature", "Humidity"])),
            Vec::new(),
        );
        let readings = station.readings();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].station, "Home");
        assert_eq!(readings[0].module, "Home");
        assert_eq!(readings[0].sensor, SensorType::Temperature);
        assert_eq!(readings[1].value, SensorValue::Integer(40));
    }

    #[test]
    fn test_reading_measured_at() {
        let station = Station::new("Home", main_module(Some(&["Noise"])), Vec::new());
        let reading = &station.readings()[0];
        let at = reading.measured_at().unwrap();
        assert_eq!(at.unix_timestamp(), 1_700_000_000);
    }

    // --- DashboardData decoding ---

    #[test]
    fn test_dashboard_data_decodes_upstream_names() {
        let json = r#"{
            "time_utc": 1700000000,
            "Temperature": 19.8,
            "CO2": 540,
            "sum_rain_1": 0.4,
            "sum_rain_24": 2.1,
            "GustStrength": 31
        }"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.time_utc, 1_700_000_000);
        assert!((data.temperature - 19.8).abs() < f64::EPSILON);
        assert_eq!(data.co2, 540);
        assert!((data.rain_1_hour - 0.4).abs() < f64::EPSILON);
        assert!((data.rain_1_day - 2.1).abs() < f64::EPSILON);
        assert!((data.gust_strength - 31.0).abs() < f64::EPSILON);
        assert_eq!(data.humidity, 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_sensor() -> impl Strategy<Value = SensorType> {
            proptest::sample::select(SensorType::ALL.to_vec())
        }

        fn any_module_type() -> impl Strategy<Value = ModuleType> {
            proptest::sample::select(vec![
                ModuleType::Main,
                ModuleType::Outdoor,
                ModuleType::Wind,
                ModuleType::Rain,
                ModuleType::IndoorAux,
                ModuleType::Unknown,
            ])
        }

        proptest! {
            #[test]
            fn extraction_matches_declared_list(
                declared in proptest::collection::vec(any_sensor(), 1..8),
                ty in any_module_type(),
            ) {
                let module = Module {
                    module_type: ty,
                    data_types: Some(declared.iter().map(|s| s.name().to_string()).collect()),
                    ..Default::default()
                };
                let (_, values) = module.sensor_data();
                let extracted: Vec<_> = values.into_iter().map(|(s, _)| s).collect();
                prop_assert_eq!(extracted, declared);
            }

            #[test]
            fn extraction_matches_type_table(ty in any_module_type()) {
                let module = Module { module_type: ty, ..Default::default() };
                let (_, values) = module.sensor_data();
                let extracted: Vec<_> = values.into_iter().map(|(s, _)| s).collect();
                prop_assert_eq!(extracted.as_slice(), ty.default_sensors());
            }

            #[test]
            fn float_values_have_two_decimals(v in -1.0e6f64..1.0e6) {
                let s = SensorValue::Float(v).to_string();
                let decimals = s.split('.').nth(1).map(str::len);
                prop_assert_eq!(decimals, Some(2));
            }

            #[test]
            fn integer_values_render_plain(v in any::<i64>()) {
                prop_assert_eq!(SensorValue::Integer(v).to_string(), v.to_string());
            }
        }
    }
}
