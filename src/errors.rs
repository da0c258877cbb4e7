use std::fmt;

use crate::response::ApiError;

/// Why a registration attempt did not produce a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationFailure {
    /// The bridge refused because its link button was not pressed.
    LinkButtonNotPressed,
    /// Any other failure, with the raw message.
    Other(String),
}

impl fmt::Display for RegistrationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationFailure::LinkButtonNotPressed => {
                write!(f, "the link button on the bridge was not pressed")
            }
            RegistrationFailure::Other(msg) => write!(f, "{msg}"),
        }
    }
}

/// All error types that can occur when talking to a Hue bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// An HTTP request to the bridge or the discovery service failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The env file could not be read.
    #[error("env file error: {0}")]
    EnvFile(dotenvy::Error),

    /// Writing the credential store failed.
    #[error("credential store {action} error: {err:?}")]
    Store { action: String, err: std::io::Error },

    /// Discovery returned no bridges.
    #[error("could not find a Hue bridge")]
    NoBridgeFound,

    /// The bridge rejected the credential.
    #[error("unauthorized user")]
    Unauthorized,

    /// The bridge answered with an error entry.
    #[error("bridge error {kind} at {address:?}: {description}")]
    Bridge {
        kind: u16,
        address: String,
        description: String,
    },

    /// Neither the stored credential nor a new registration yielded a session.
    #[error("could not create a new Hue bridge user: {0}")]
    ProvisioningFailed(RegistrationFailure),

    /// The light id is not known to the bridge.
    #[error("invalid light id: {0}")]
    InvalidLightId(u32),

    /// The light id typed by the operator is not a number.
    #[error("invalid light id: {0}")]
    InvalidLightIdString(String),

    /// Attempted to send a [`crate::StateChange`] with no attributes set.
    #[error("invalid state change; no attributes set")]
    NoAttribute,
}

impl Error {
    /// Create a new credential store error
    pub fn store(action: &str, err: std::io::Error) -> Self {
        Error::Store {
            action: action.to_string(),
            err,
        }
    }

    /// Whether this is a registration refusal caused by the link button.
    pub fn is_link_button(&self) -> bool {
        matches!(
            self,
            Error::ProvisioningFailed(RegistrationFailure::LinkButtonNotPressed)
        )
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        if err.kind == ApiError::UNAUTHORIZED_USER {
            return Error::Unauthorized;
        }
        Error::Bridge {
            kind: err.kind,
            address: err.address,
            description: err.description,
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
