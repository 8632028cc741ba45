use async_trait::async_trait;
use std::fmt;

use crate::error::KeeperResult;

/// Playback status reported by an MPRIS player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
    /// Any non-standard string a player chooses to report
    Other(String),
}

impl PlaybackStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "Playing" => PlaybackStatus::Playing,
            "Paused" => PlaybackStatus::Paused,
            "Stopped" => PlaybackStatus::Stopped,
            other => PlaybackStatus::Other(other.to_string()),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackStatus::Playing)
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackStatus::Playing => f.write_str("Playing"),
            PlaybackStatus::Paused => f.write_str("Paused"),
            PlaybackStatus::Stopped => f.write_str("Stopped"),
            PlaybackStatus::Other(s) => f.write_str(s),
        }
    }
}

#[async_trait]
pub trait PlayerControl: Send + Sync {
    /// Read the player's current playback status
    async fn playback_status(&self) -> KeeperResult<PlaybackStatus>;

    /// Toggle play/pause
    async fn play_pause(&self) -> KeeperResult<()>;

    /// Bus name of the player, for log lines
    fn name(&self) -> &str;
}

pub mod mpris;
pub mod mpris_utils;
