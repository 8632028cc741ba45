//! StreamKeeper Error Types
//!
//! Centralized error handling for the player bus calls and startup.

use thiserror::Error;

/// Central error type for StreamKeeper
#[derive(Error, Debug)]
pub enum KeeperError {
    #[error("Player {service} is not running on the session bus")]
    PlayerUnavailable { service: String },

    #[error("D-Bus error: {0}")]
    Bus(#[from] zbus::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for StreamKeeper operations
pub type KeeperResult<T> = Result<T, KeeperError>;

impl KeeperError {
    /// Classify a bus error raised while talking to `service`.
    ///
    /// Replies saying nobody owns the name mean the player is not running;
    /// anything else is reported as a plain bus failure.
    pub fn from_bus(service: &str, err: zbus::Error) -> Self {
        let fdo_err = match err {
            zbus::Error::FDO(e) => *e,
            e => zbus::fdo::Error::from(e),
        };

        match fdo_err {
            zbus::fdo::Error::ServiceUnknown(_) | zbus::fdo::Error::NameHasNoOwner(_) => {
                KeeperError::PlayerUnavailable {
                    service: service.to_string(),
                }
            }
            other => KeeperError::Bus(other.into()),
        }
    }

    /// True when the error means the player is simply not running
    pub fn is_unavailable(&self) -> bool {
        matches!(self, KeeperError::PlayerUnavailable { .. })
    }
}
