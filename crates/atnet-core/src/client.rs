//! HTTP client for the Netatmo weather API.
//!
//! The client performs an OAuth2 password-grant token exchange when it is
//! created and then issues authenticated requests against the device list
//! endpoint.
//!
//! # Example
//!
//! ```no_run
//! use atnet_core::{ClientOptions, Credentials, NetatmoClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials {
//!     client_id: "app-id".into(),
//!     client_secret: "app-secret".into(),
//!     username: "me@example.com".into(),
//!     password: "hunter2".into(),
//! };
//!
//! let client = NetatmoClient::authenticate(&credentials, &ClientOptions::default()).await?;
//! let collection = client.device_collection().await?;
//!
//! for station in collection.filter("Home").stations() {
//!     println!("{} has {} modules", station.name, station.modules().count());
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;

use crate::collection::DeviceCollection;
use crate::error::{Error, Result};
use crate::wire::DeviceListResponse;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.netatmo.net";
/// Path of the OAuth2 token endpoint.
pub const TOKEN_PATH: &str = "/oauth2/token";
/// Path of the device list endpoint.
pub const DEVICE_LIST_PATH: &str = "/api/devicelist";
/// OAuth2 scope needed to read weather station data.
pub const SCOPE: &str = "read_station";
/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Application and account credentials for the password grant.
#[derive(Clone, Default)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Check that no credential is empty.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("client id", &self.client_id),
            ("client secret", &self.client_secret),
            ("username", &self.username),
            ("password", &self.password),
        ];
        match fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((name, _)) => Err(Error::MissingCredential(name)),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connection settings.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Token endpoint response.
#[derive(Debug, Clone, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Authenticated client for the Netatmo API.
#[derive(Debug, Clone)]
pub struct NetatmoClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl NetatmoClient {
    /// Exchange the credentials for an access token and return a ready client.
    pub async fn authenticate(credentials: &Credentials, options: &ClientOptions) -> Result<Self> {
        credentials.validate()?;
        let base_url = normalize_base_url(&options.base_url)?;

        let client = Client::builder().timeout(options.timeout).build()?;

        let url = format!("{}{}", base_url, TOKEN_PATH);
        tracing::debug!(url = %url, username = %credentials.username, "requesting access token");

        let form = [
            ("grant_type", "password"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
            ("scope", SCOPE),
        ];
        let response = client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::authentication(None, format!("{} unreachable: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            return Err(Error::authentication(Some(status.as_u16()), message));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            Error::authentication(Some(status.as_u16()), format!("invalid token response: {}", e))
        })?;
        tracing::debug!(expires_in = ?token.expires_in, "access token acquired");

        Ok(Self {
            client,
            base_url,
            access_token: token.access_token,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the account's stations with their modules attached.
    pub async fn device_collection(&self) -> Result<DeviceCollection> {
        let response = self.device_list().await?;
        let collection = DeviceCollection::from_response(&response);
        tracing::info!(stations = collection.len(), "fetched device collection");
        Ok(collection)
    }

    /// Fetch and decode the raw device list.
    pub async fn device_list(&self) -> Result<DeviceListResponse> {
        let url = format!("{}{}", self.base_url, DEVICE_LIST_PATH);
        tracing::debug!(url = %url, "requesting device list");

        let response = self
            .client
            .get(&url)
            .query(&[("app_type", "app_station")])
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| Error::fetch(None, format!("{} unreachable: {}", url, e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let message = error_message(response).await;
            return Err(Error::fetch(Some(status.as_u16()), message));
        }

        response.json().await.map_err(|e| {
            Error::fetch(Some(status.as_u16()), format!("invalid device list: {}", e))
        })
    }
}

fn normalize_base_url(base_url: &str) -> Result<String> {
    let base_url = base_url.trim_end_matches('/').to_string();
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(Error::InvalidUrl(format!(
            "URL must start with http:// or https://, got: {}",
            base_url
        )));
    }
    Ok(base_url)
}

/// Pull a readable message out of an error response.
///
/// The token endpoint answers `{"error": "invalid_grant"}`, the API endpoints
/// `{"error": {"code": 2, "message": "Invalid access token"}}`.
async fn error_message(response: Response) -> String {
    let status = response.status();
    response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| {
            let error = v.get("error")?;
            error
                .as_str()
                .or_else(|| error.get("message").and_then(|m| m.as_str()))
                .map(String::from)
        })
        .unwrap_or_else(|| status.to_string())
}
