//! Runtime settings from the environment and the env file.

use std::env;
use std::path::PathBuf;

use log::warn;

use crate::discovery::DISCOVERY_URL;
use crate::store::{EnvFile, USERNAME_KEY};

pub const BRIDGE_IP_KEY: &str = "BRIDGE_IP";
pub const DISCOVERY_URL_KEY: &str = "HUE_DISCOVERY_URL";
pub const ENV_FILE_KEY: &str = "HUE_ENV_FILE";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Where to find the bridge and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Credential from the process environment; the env file's copy is
    /// read through [`crate::CredentialStore::load`]
    pub username: Option<String>,
    /// Fixed bridge address; discovery is used when unset
    pub bridge_ip: Option<String>,
    pub discovery_url: String,
    /// File new credentials are appended to
    pub env_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            username: None,
            bridge_ip: None,
            discovery_url: DISCOVERY_URL.to_string(),
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
        }
    }
}

impl Settings {
    /// Read settings from the process environment, falling back to the env
    /// file named by `HUE_ENV_FILE` (default `.env`).
    pub fn from_env() -> Self {
        let env_file = env::var(ENV_FILE_KEY)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENV_FILE.to_string());
        Self::from_sources(PathBuf::from(env_file), |key| env::var(key).ok())
    }

    /// Build settings from `lookup`, with the env file at `env_file` as fallback.
    ///
    /// An unreadable env file is logged and treated as empty.
    pub fn from_sources(env_file: PathBuf, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let entries = EnvFile::new(&env_file).entries().unwrap_or_else(|e| {
            warn!("ignoring {}: {e}", env_file.display());
            Vec::new()
        });
        let get = |key: &str| {
            lookup(key).filter(|v| !v.is_empty()).or_else(|| {
                entries
                    .iter()
                    .rev()
                    .find(|(k, v)| k == key && !v.is_empty())
                    .map(|(_, v)| v.clone())
            })
        };

        Settings {
            username: lookup(USERNAME_KEY).filter(|v| !v.is_empty()),
            bridge_ip: get(BRIDGE_IP_KEY),
            discovery_url: get(DISCOVERY_URL_KEY).unwrap_or_else(|| DISCOVERY_URL.to_string()),
            env_file,
        }
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_bridge_ip(mut self, address: &str) -> Self {
        self.bridge_ip = Some(address.to_string());
        self
    }

    pub fn with_discovery_url(mut self, url: &str) -> Self {
        self.discovery_url = url.to_string();
        self
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    #[test]
    fn test_env_file_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "BRIDGE_IP=10.0.0.5\nHUE_USERNAME=first\nHUE_USERNAME=second\n").unwrap();

        let settings = Settings::from_sources(path.clone(), |_| None);
        assert_eq!(settings.username, None);
        assert_eq!(settings.bridge_ip.as_deref(), Some("10.0.0.5"));
        assert_eq!(settings.discovery_url, DISCOVERY_URL);
        assert_eq!(settings.env_file, path);
    }

    #[test]
    fn test_process_env_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "HUE_USERNAME=from-file\nBRIDGE_IP=10.0.0.5").unwrap();

        let env = HashMap::from([
            ("HUE_USERNAME", "from-env".to_string()),
            ("BRIDGE_IP", String::new()),
            ("HUE_DISCOVERY_URL", "http://127.0.0.1:9/".to_string()),
        ]);
        let settings = Settings::from_sources(path, |key| env.get(key).cloned());
        assert_eq!(settings.username.as_deref(), Some("from-env"));
        assert_eq!(settings.bridge_ip.as_deref(), Some("10.0.0.5"));
        assert_eq!(settings.discovery_url, "http://127.0.0.1:9/");
    }

    #[test]
    fn test_missing_everything() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::from_sources(dir.path().join("absent"), |_| None);
        assert_eq!(settings.username, None);
        assert_eq!(settings.bridge_ip, None);
    }

    #[test]
    fn test_unreadable_env_file_falls_back_to_process_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, b"BRIDGE_IP=10.0.0.5\nNOTE=caf\xe9\n").unwrap();

        let env = HashMap::from([("HUE_USERNAME", "from-env".to_string())]);
        let settings = Settings::from_sources(path, |key| env.get(key).cloned());
        assert_eq!(settings.username.as_deref(), Some("from-env"));
        assert_eq!(settings.bridge_ip, None);
        assert_eq!(settings.discovery_url, DISCOVERY_URL);
    }

    #[test]
    fn test_env_file_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::from_sources(dir.path().to_path_buf(), |_| None);
        assert_eq!(settings.bridge_ip, None);
        assert_eq!(settings.env_file, dir.path());
    }
}
