//! Bridge discovery via the Hue discovery service.

use log::debug;
use serde::Deserialize;

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Hue's N-UPnP discovery endpoint.
pub const DISCOVERY_URL: &str = "https://discovery.meethue.com/";

/// A bridge reported by the discovery service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DiscoveredBridge {
    pub id: String,
    /// Address of the bridge on the local network
    #[serde(rename = "internalipaddress")]
    pub ip: String,
    #[serde(default)]
    pub port: Option<u16>,
}

/// Ask the discovery service at `url` for bridges reachable from this network.
///
/// One request, no retry.
///
/// # Examples
///
/// ```ignore
/// use hue_lights_rs::{DISCOVERY_URL, discover_bridges};
///
/// let bridges = discover_bridges(&reqwest::Client::new(), DISCOVERY_URL).await?;
/// for bridge in bridges {
///     println!("  {} - {}", bridge.ip, bridge.id);
/// }
/// ```
pub async fn discover_bridges(http: &reqwest::Client, url: &str) -> Result<Vec<DiscoveredBridge>> {
    debug!("GET {url}");
    let bridges: Vec<DiscoveredBridge> = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    debug!("discovered {} bridge(s)", bridges.len());
    Ok(bridges)
}

/// Resolves the address of the bridge to talk to.
#[derive(Debug, Clone)]
pub struct BridgeLocator {
    fixed: Option<String>,
    discovery_url: String,
    http: reqwest::Client,
}

impl BridgeLocator {
    pub fn new(fixed: Option<String>, discovery_url: &str) -> Self {
        BridgeLocator {
            fixed: fixed.filter(|address| !address.trim().is_empty()),
            discovery_url: discovery_url.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// The configured address, if any.
    pub fn fixed(&self) -> Option<&str> {
        self.fixed.as_deref()
    }

    /// Return the configured address, or the first discovered bridge.
    ///
    /// Households rarely have more than one bridge, so the first result is
    /// taken as is.
    pub async fn locate(&self) -> Result<String> {
        if let Some(address) = &self.fixed {
            return Ok(address.clone());
        }

        discover_bridges(&self.http, &self.discovery_url)
            .await?
            .into_iter()
            .next()
            .map(|bridge| match bridge.port {
                Some(port) if port != 80 && port != 443 => format!("{}:{port}", bridge.ip),
                _ => bridge.ip,
            })
            .ok_or(Error::NoBridgeFound)
    }
}
