//! Obtaining an authorized session.
//!
//! A stored credential is tried first. If there is none, or the bridge
//! rejects it, the application registers once. Registration only succeeds
//! after someone pressed the bridge's link button, so a refused attempt is
//! reported to the operator and left for them to retry.

use log::{error, info, warn};

use crate::bridge::Bridge;
use crate::console::{Banner, Console};
use crate::errors::{Error, RegistrationFailure};
use crate::response::ApiError;
use crate::session::Session;
use crate::store::CredentialStore;

type Result<T> = std::result::Result<T, Error>;

/// Application half of the registration identity.
pub const APP_NAME: &str = "hue-lights-app";
/// Device half of the registration identity.
pub const DEVICE_NAME: &str = "my-hue-device";

const LINK_BUTTON_MESSAGE: &str =
    "The Link button on the bridge was not pressed. Please press the Link button and try again.";

/// An authorized session and the credential that opened it.
#[derive(Debug, Clone)]
pub struct Provisioned {
    pub session: Session,
    pub credential: String,
    /// Whether the credential was issued by this call.
    pub registered: bool,
}

/// Open a session on `bridge`, registering if `credential` is missing or
/// rejected.
///
/// A newly issued credential is persisted to `store` and written back to
/// `credential` as soon as the bridge hands it out, even if opening the
/// session with it then fails.
pub async fn connect<S, C>(
    bridge: &Bridge,
    credential: &mut Option<String>,
    store: &mut S,
    console: &mut C,
) -> Result<Provisioned>
where
    S: CredentialStore,
    C: Console,
{
    if let Some(username) = credential.as_deref() {
        match bridge.connect(username).await {
            Ok(session) => {
                return Ok(Provisioned {
                    session,
                    credential: username.to_string(),
                    registered: false,
                });
            }
            Err(e) => warn!("stored username rejected by {}: {e}", bridge.address()),
        }
    }

    console.error("Failed to connect with existing username, creating a new user...");
    let username = register(bridge, store, console).await?;
    *credential = Some(username.clone());
    let session = bridge.connect(&username).await?;
    Ok(Provisioned {
        session,
        credential: username,
        registered: true,
    })
}

/// Register this application on the bridge and persist the new credential.
///
/// On refusal the reason is shown and the operator must acknowledge it
/// before the call fails with [`Error::ProvisioningFailed`].
pub async fn register<S, C>(bridge: &Bridge, store: &mut S, console: &mut C) -> Result<String>
where
    S: CredentialStore,
    C: Console,
{
    let failure = match bridge.create_user(APP_NAME, DEVICE_NAME).await {
        Ok(username) => {
            console.print(&format!("Created user: {username}"));
            match store.persist(&username) {
                Ok(()) => info!("persisted new username for {}", bridge.address()),
                Err(e) => error!("could not persist new username: {e}"),
            }
            return Ok(username);
        }
        Err(Error::Bridge { kind, .. }) if kind == ApiError::LINK_BUTTON_NOT_PRESSED => {
            console.banner(Banner::Error);
            console.error(LINK_BUTTON_MESSAGE);
            RegistrationFailure::LinkButtonNotPressed
        }
        Err(e) => {
            let message = e.to_string();
            console.error(&format!("Unexpected error creating user: {message}"));
            RegistrationFailure::Other(message)
        }
    };

    console.pause();
    Err(Error::ProvisioningFailed(failure))
}
