//! Mock MPRIS Player for Testing
//!
//! Replays scripted status reads and records every play/pause attempt.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::time::Instant;

use streamkeeper::error::{KeeperError, KeeperResult};
use streamkeeper::players::{PlaybackStatus, PlayerControl};

/// One scripted answer to a status read
#[derive(Debug, Clone)]
pub enum Read {
    Status(&'static str),
    Unavailable,
    /// Bus failure other than the player being absent
    BusError,
}

/// Mock player that answers from a script, then holds a steady status
#[derive(Debug)]
pub struct MockPlayer {
    script: Mutex<VecDeque<Read>>,
    steady: Read,
    /// Clock readings of every play/pause attempt
    pub toggles: Mutex<Vec<Instant>>,
    /// Make every play/pause fail
    pub fail_toggles: AtomicBool,
}

impl MockPlayer {
    pub fn new(steady: Read) -> Self {
        Self::with_script(Vec::new(), steady)
    }

    pub fn with_script(script: Vec<Read>, steady: Read) -> Self {
        Self {
            script: Mutex::new(script.into()),
            steady,
            toggles: Mutex::new(Vec::new()),
            fail_toggles: AtomicBool::new(false),
        }
    }

    pub fn failing(self) -> Self {
        self.fail_toggles.store(true, Ordering::SeqCst);
        self
    }

    pub fn toggle_count(&self) -> usize {
        self.toggles.lock().unwrap().len()
    }

    /// Whole seconds from `start` to each attempt
    pub fn toggle_offsets(&self, start: Instant) -> Vec<u64> {
        self.toggles
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.duration_since(start).as_secs())
            .collect()
    }
}

#[async_trait]
impl PlayerControl for MockPlayer {
    async fn playback_status(&self) -> KeeperResult<PlaybackStatus> {
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.steady.clone());
        match next {
            Read::Status(s) => Ok(PlaybackStatus::parse(s)),
            Read::Unavailable => Err(KeeperError::PlayerUnavailable {
                service: self.name().to_string(),
            }),
            Read::BusError => Err(KeeperError::Bus(zbus::Error::Failure(
                "Mock status read failure".to_string(),
            ))),
        }
    }

    async fn play_pause(&self) -> KeeperResult<()> {
        self.toggles.lock().unwrap().push(Instant::now());
        if self.fail_toggles.load(Ordering::SeqCst) {
            return Err(KeeperError::Bus(zbus::Error::Failure(
                "Mock play/pause failure".to_string(),
            )));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "org.mpris.MediaPlayer2.mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_mock_player_follows_script() {
        let mock = MockPlayer::with_script(vec![Read::Unavailable], Read::Status("Paused"));

        assert_err!(mock.playback_status().await);
        assert_eq!(mock.playback_status().await.unwrap(), PlaybackStatus::Paused);
        assert_eq!(mock.playback_status().await.unwrap(), PlaybackStatus::Paused);
    }

    #[tokio::test]
    async fn test_mock_player_records_failed_toggles() {
        let mock = MockPlayer::new(Read::Status("Stopped")).failing();
        assert_err!(mock.play_pause().await);
        assert_eq!(mock.toggle_count(), 1);

        let ok = MockPlayer::new(Read::Status("Stopped"));
        assert_ok!(ok.play_pause().await);
    }
}
