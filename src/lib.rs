//! # hue_lights_rs
//!
//! Find a Philips Hue bridge on the local network, authenticate against it,
//! and switch its lights on and off from an interactive terminal menu.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hue_lights_rs::{
//!     Bridge, BridgeLocator, Brightness, CredentialStore, DISCOVERY_URL, EnvFile, Terminal, provision,
//! };
//!
//! async fn turn_on_desk() -> Result<(), Box<dyn std::error::Error>> {
//!     let address = BridgeLocator::new(None, DISCOVERY_URL).locate().await?;
//!     let bridge = Bridge::new(&address);
//!
//!     let mut store = EnvFile::new(".env");
//!     let mut credential = store.load()?;
//!     let stdin = std::io::stdin();
//!     let mut console = Terminal::new(stdin.lock(), std::io::stdout(), std::io::stderr());
//!
//!     let provisioned = provision::connect(&bridge, &mut credential, &mut store, &mut console).await?;
//!     provisioned.session.set_light_on(1, &Brightness::new()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pairing
//!
//! A bridge only hands out a new username within a short window after its
//! link button was pressed. [`provision::connect`] reuses a stored username
//! when the bridge still accepts it and otherwise registers once, appending
//! the new username to the env file as `HUE_USERNAME=<value>`. A refused
//! registration is shown to the operator and not retried.
//!
//! ## Configuration
//!
//! - `HUE_USERNAME`: stored credential
//! - `BRIDGE_IP`: fixed bridge address; skips discovery
//! - `HUE_DISCOVERY_URL`: discovery endpoint (default [`DISCOVERY_URL`])
//! - `HUE_ENV_FILE`: env file to read and append to (default `.env`)
//!
//! The process environment takes precedence over the env file.

mod bridge;
mod config;
mod console;
mod discovery;
mod errors;
mod light;
pub mod menu;
mod payload;
pub mod provision;
mod response;
mod session;
mod settings;
mod status;
mod store;
mod types;

// Re-export public API
pub use bridge::Bridge;
pub use config::{BridgeConfig, WhitelistEntry};
pub use console::{Banner, Console, Terminal, boxed};
pub use discovery::{BridgeLocator, DISCOVERY_URL, DiscoveredBridge, discover_bridges};
pub use errors::{Error, RegistrationFailure};
pub use light::Light;
pub use menu::Menu;
pub use payload::StateChange;
pub use provision::Provisioned;
pub use response::ApiError;
pub use session::Session;
pub use settings::Settings;
pub use status::LightState;
pub use store::{CredentialStore, EnvFile, USERNAME_KEY};
pub use types::{Brightness, HueSaturation, PowerMode};
