//! Stream watchdog loop
//!
//! Polls the player's playback status and toggles play/pause whenever the
//! stream is not playing, at most once per cooldown window.

use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::players::{PlaybackStatus, PlayerControl};

/// Result of one play/pause attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Sent,
    Failed(String),
}

/// What a single poll observed and did
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    /// Status could not be read; nothing else happened
    Unavailable(String),
    Observed {
        status: PlaybackStatus,
        /// Status differs from the previous successful read
        changed: bool,
        action: Option<ActionOutcome>,
    },
}

impl Tick {
    pub fn action(&self) -> Option<&ActionOutcome> {
        match self {
            Tick::Observed { action, .. } => action.as_ref(),
            Tick::Unavailable(_) => None,
        }
    }
}

/// Loop state carried between polls
#[derive(Debug, Clone, Default)]
pub struct MonitorState {
    pub previous_status: Option<PlaybackStatus>,
    /// Time of the last play/pause attempt, successful or not.
    /// `None` until the first attempt, so the first eligible poll fires.
    pub last_action: Option<Instant>,
}

impl MonitorState {
    pub fn cooldown_elapsed(&self, now: Instant, cooldown: Duration) -> bool {
        match self.last_action {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= cooldown,
        }
    }
}

pub struct Monitor<P> {
    player: P,
    poll_interval: Duration,
    cooldown: Duration,
    state: MonitorState,
}

impl<P: PlayerControl> Monitor<P> {
    pub fn new(player: P, poll_interval: Duration, cooldown: Duration) -> Self {
        Self {
            player,
            poll_interval,
            cooldown,
            state: MonitorState::default(),
        }
    }

    pub fn from_config(player: P, config: &Config) -> Self {
        Self::new(player, config.poll_interval(), config.cooldown())
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Toggle play/pause once. Failures are logged and returned, never raised.
    pub async fn send_play_pause(&self) -> ActionOutcome {
        match self.player.play_pause().await {
            Ok(()) => {
                info!("▶️ Sent play/pause to {}", self.player.name());
                ActionOutcome::Sent
            }
            Err(e) => {
                warn!("⚠️ Play/pause via MPRIS failed: {}", e);
                ActionOutcome::Failed(e.to_string())
            }
        }
    }

    /// Run one poll against the clock value `now`.
    pub async fn tick(&mut self, now: Instant) -> Tick {
        let status = match self.player.playback_status().await {
            Ok(status) => status,
            Err(e) => {
                if e.is_unavailable() {
                    warn!("⚠️ {} not available, is the player running?", self.player.name());
                } else {
                    warn!("⚠️ Reading status from {} failed: {}", self.player.name(), e);
                }
                return Tick::Unavailable(e.to_string());
            }
        };

        let changed = self.state.previous_status.as_ref() != Some(&status);
        if changed {
            info!("📺 Player status: {}", status);
            self.state.previous_status = Some(status.clone());
        } else {
            debug!("Player status unchanged: {}", status);
        }

        let action = if !status.is_playing() && self.state.cooldown_elapsed(now, self.cooldown) {
            let outcome = self.send_play_pause().await;
            // Cooldown restarts on the attempt, whatever the outcome
            self.state.last_action = Some(now);
            Some(outcome)
        } else {
            None
        };

        Tick::Observed {
            status,
            changed,
            action,
        }
    }

    /// Poll forever. Only process termination stops the loop.
    pub async fn run(&mut self) {
        info!(
            "👀 Watching {} (poll {:?}, cooldown {:?})",
            self.player.name(),
            self.poll_interval,
            self.cooldown
        );

        loop {
            self.tick(Instant::now()).await;
            sleep(self.poll_interval).await;
        }
    }
}
