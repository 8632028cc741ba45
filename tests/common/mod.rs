pub mod mock_player;

use std::time::Duration;

use streamkeeper::monitor::Monitor;

pub use mock_player::{MockPlayer, Read};

pub const POLL: Duration = Duration::from_secs(2);
pub const COOLDOWN: Duration = Duration::from_secs(10);

/// Monitor with the stock 2s poll / 10s cooldown
pub fn monitor(player: MockPlayer) -> Monitor<MockPlayer> {
    Monitor::new(player, POLL, COOLDOWN)
}
