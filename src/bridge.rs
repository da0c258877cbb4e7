//! HTTP transport to a Hue bridge.

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::config::BridgeConfig;
use crate::errors::Error;
use crate::response::{self, ApiResponse, Registered};
use crate::session::Session;

type Result<T> = std::result::Result<T, Error>;

/// An unauthenticated handle to a bridge at a known address.
///
/// The address is a host or IP (`192.168.1.2`, `hue.local:8080`); a full
/// `http://` or `https://` URL is used as is.
#[derive(Debug, Clone)]
pub struct Bridge {
    address: String,
    base_url: String,
    http: reqwest::Client,
}

impl Bridge {
    pub fn new(address: &str) -> Self {
        Self::with_client(address, reqwest::Client::new())
    }

    /// Create a bridge handle sharing an existing HTTP client.
    pub fn with_client(address: &str, http: reqwest::Client) -> Self {
        let address = address.trim().trim_end_matches('/');
        let base_url = if address.starts_with("http://") || address.starts_with("https://") {
            address.to_string()
        } else {
            format!("http://{address}")
        };
        Bridge {
            address: address.to_string(),
            base_url,
            http,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Register a new application user.
    ///
    /// The bridge only accepts this within a short window after its link
    /// button was pressed; otherwise it answers with error type 101.
    pub async fn create_user(&self, app_name: &str, device_name: &str) -> Result<String> {
        let body = json!({ "devicetype": format!("{app_name}#{device_name}") });
        let value = self.post_json("/api", &body).await?;
        let entries: Vec<ApiResponse<Registered>> =
            serde_json::from_value(value).map_err(Error::JsonLoad)?;
        response::successes(entries)?
            .into_iter()
            .next()
            .map(|registered| registered.username)
            .ok_or_else(|| Error::Bridge {
                kind: 0,
                address: "/api".to_string(),
                description: "registration returned no username".to_string(),
            })
    }

    /// Open a session with `username`.
    ///
    /// The credential is verified against the bridge; a rejected username
    /// fails with [`Error::Unauthorized`].
    pub async fn connect(&self, username: &str) -> Result<Session> {
        let value = self.get_json(&format!("/api/{username}/config")).await?;
        let config: BridgeConfig = serde_json::from_value(value).map_err(Error::JsonLoad)?;
        if !config.is_authorized() {
            return Err(Error::Unauthorized);
        }
        Ok(Session::new(self.clone(), username.to_string(), config))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.get_json(path).await?;
        serde_json::from_value(value).map_err(Error::JsonLoad)
    }

    pub(crate) async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!("GET {url}");
        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let value: Value = resp.json().await?;
        debug!("bridge response: {value:?}");
        response::check(value)
    }

    pub(crate) async fn put_json(&self, path: &str, body: &impl Serialize) -> Result<Value> {
        let url = self.url(path);
        debug!("PUT {url}");
        let resp = self.http.put(&url).json(body).send().await?.error_for_status()?;
        let value: Value = resp.json().await?;
        debug!("bridge response: {value:?}");
        response::check(value)
    }

    async fn post_json(&self, path: &str, body: &impl Serialize) -> Result<Value> {
        let url = self.url(path);
        debug!("POST {url}");
        let resp = self.http.post(&url).json(body).send().await?.error_for_status()?;
        let value: Value = resp.json().await?;
        debug!("bridge response: {value:?}");
        response::check(value)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
