//! Error types for atnet-core.
//!
//! Only two failures are expected at runtime: the credential exchange
//! ([`Error::Authentication`]) and the device list request
//! ([`Error::Fetch`]). Both are terminal for the CLI; nothing here is retried.
//! The remaining variants report invalid client configuration before any
//! request is sent.

use thiserror::Error;

/// Errors that can occur while talking to the Netatmo API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The OAuth2 password grant was rejected or could not be completed.
    #[error("Authentication failed: {message}")]
    Authentication {
        /// HTTP status, when the server answered.
        status: Option<u16>,
        message: String,
    },

    /// The device list could not be retrieved or decoded.
    #[error("Failed to fetch device collection: {message}")]
    Fetch {
        /// HTTP status, when the server answered.
        status: Option<u16>,
        message: String,
    },

    /// A required credential was empty.
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// The configured base URL is not an http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn authentication(status: Option<u16>, message: impl Into<String>) -> Self {
        Error::Authentication {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn fetch(status: Option<u16>, message: impl Into<String>) -> Self {
        Error::Fetch {
            status,
            message: message.into(),
        }
    }
}

/// Result type alias using atnet-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
