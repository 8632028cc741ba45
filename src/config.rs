use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{KeeperError, KeeperResult};
use crate::players::mpris_utils;

/// Seconds between status polls
pub const POLL_TIME: u64 = 2;
/// Minimum seconds between play/pause attempts
pub const COOLDOWN_TIME: u64 = 10;

/// Watchdog configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Player to watch: a bare name (`vlc`) or a full MPRIS bus name
    pub mpris_service: String,
    pub poll_interval_secs: u64,
    pub cooldown_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mpris_service: "org.mpris.MediaPlayer2.vlc".to_string(),
            poll_interval_secs: POLL_TIME,
            cooldown_secs: COOLDOWN_TIME,
        }
    }
}

impl Config {
    /// Load config from `path`, or from the default location when present.
    ///
    /// An explicitly named file must exist and parse. The default file is
    /// optional and falls back to the defaults when it fails to parse.
    pub fn load(path: Option<&Path>) -> KeeperResult<Self> {
        match path {
            Some(p) => Self::load_strict(p),
            None => Self::load_lenient(&config_path()),
        }
    }

    fn load_strict(path: &Path) -> KeeperResult<Self> {
        if !path.exists() {
            return Err(KeeperError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn load_lenient(path: &Path) -> KeeperResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    "⚠️ Config file {} invalid, using defaults: {}",
                    path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Reject values the watchdog cannot run with
    pub fn validate(&self) -> KeeperResult<()> {
        if self.mpris_service.trim().is_empty() {
            return Err(KeeperError::Config("mpris_service is empty".to_string()));
        }
        if self.poll_interval_secs == 0 {
            return Err(KeeperError::Config(
                "poll_interval_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Full bus name of the watched player
    pub fn service_name(&self) -> String {
        mpris_utils::service_name(&self.mpris_service)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("streamkeeper")
        .join("config.json")
}
