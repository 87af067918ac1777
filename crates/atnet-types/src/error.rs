//! Error types for parsing upstream identifiers in atnet-types.

use thiserror::Error;

/// Errors that can occur when interpreting Netatmo device metadata.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A `data_type` entry named no known dashboard field.
    #[error("Unknown sensor type: {0}")]
    UnknownSensorType(String),

    /// A device `type` tag outside the known module enumeration.
    #[error("Unknown module type: {0}")]
    UnknownModuleType(String),
}
