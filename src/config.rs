//! Bridge configuration as reported by the bridge.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An application registered on the bridge.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WhitelistEntry {
    pub name: String,
    #[serde(rename = "create date", default)]
    pub create_date: Option<String>,
    #[serde(rename = "last use date", default)]
    pub last_use_date: Option<String>,
}

/// Configuration of a Hue bridge.
///
/// Unauthenticated requests to `/api/<username>/config` return a short
/// public subset; the `whitelist` only appears when the username is
/// accepted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BridgeConfig {
    pub name: String,
    #[serde(rename = "bridgeid", default)]
    pub bridge_id: Option<String>,
    #[serde(rename = "apiversion", default)]
    pub api_version: Option<String>,
    #[serde(rename = "swversion", default)]
    pub sw_version: Option<String>,
    #[serde(rename = "modelid", default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub whitelist: Option<HashMap<String, WhitelistEntry>>,
}

impl BridgeConfig {
    /// Whether the response was the full configuration of an authorized user.
    pub fn is_authorized(&self) -> bool {
        self.whitelist.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_public_config_is_not_authorized() {
        let config: BridgeConfig = serde_json::from_value(json!({
            "name": "Philips hue",
            "datastoreversion": "163",
            "swversion": "1967054020",
            "apiversion": "1.65.0",
            "mac": "00:17:88:aa:bb:cc",
            "bridgeid": "001788FFFEAABBCC",
            "factorynew": false,
            "modelid": "BSB002"
        }))
        .unwrap();
        assert!(!config.is_authorized());
        assert_eq!(config.bridge_id.as_deref(), Some("001788FFFEAABBCC"));
    }

    #[test]
    fn test_full_config_is_authorized() {
        let config: BridgeConfig = serde_json::from_value(json!({
            "name": "Philips hue",
            "whitelist": {
                "abc": {"name": "hue-lights-app#my-hue-device", "create date": "2024-01-01T00:00:00"}
            }
        }))
        .unwrap();
        assert!(config.is_authorized());
        assert_eq!(config.whitelist.unwrap()["abc"].name, "hue-lights-app#my-hue-device");
    }
}
