//! Credential persistence in a `KEY=VALUE` env file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Key the bridge username is stored under.
pub const USERNAME_KEY: &str = "HUE_USERNAME";

/// Somewhere to keep the credential between runs.
pub trait CredentialStore {
    /// The stored credential, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Record a newly issued credential.
    fn persist(&mut self, credential: &str) -> Result<()>;
}

/// A dotenv-style file of `KEY=VALUE` lines.
///
/// Writes only ever append. When a key occurs more than once the last
/// occurrence wins, so an appended credential supersedes older ones.
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
}

impl EnvFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        EnvFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in file order. A missing file has none.
    ///
    /// Lines dotenvy cannot parse are skipped with a warning; a read error
    /// fails the whole file.
    pub fn entries(&self) -> Result<Vec<(String, String)>> {
        let lines = match dotenvy::from_path_iter(&self.path) {
            Ok(lines) => lines,
            Err(e) if e.not_found() => return Ok(Vec::new()),
            Err(e) => return Err(Error::EnvFile(e)),
        };

        let mut entries = Vec::new();
        for line in lines {
            match line {
                Ok(entry) => entries.push(entry),
                Err(dotenvy::Error::LineParse(line, index)) => {
                    warn!("{}: skipping line {index}: {line:?}", self.path.display());
                }
                Err(e) => return Err(Error::EnvFile(e)),
            }
        }
        Ok(entries)
    }

    /// The last value stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries()?
            .into_iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v))
    }

    /// Append `KEY=VALUE` on a new line, creating the file if needed.
    pub fn append(&self, key: &str, value: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::store("open", e))?;
        write!(file, "\n{key}={value}").map_err(|e| Error::store("write", e))?;
        info!("appended {key} to {}", self.path.display());
        Ok(())
    }
}

impl CredentialStore for EnvFile {
    fn load(&self) -> Result<Option<String>> {
        self.get(USERNAME_KEY)
    }

    fn persist(&mut self, credential: &str) -> Result<()> {
        self.append(USERNAME_KEY, credential)
    }
}
