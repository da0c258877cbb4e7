//! Interactive menu for controlling Philips Hue lights.
//!
//! Reads `HUE_USERNAME` and `BRIDGE_IP` from the environment or `.env`.
//! Set `RUST_LOG=debug` to trace bridge traffic on stderr.

use hue_lights_rs::{EnvFile, Menu, Settings, Terminal};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env();
    let store = EnvFile::new(&settings.env_file);
    let console = Terminal::new(std::io::stdin().lock(), std::io::stdout(), std::io::stderr());

    Menu::new(settings, store, console).run().await;
}
