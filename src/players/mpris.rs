use async_trait::async_trait;
use tracing::debug;
use zbus::proxy::CacheProperties;
use zbus::Connection as ZBusConnection;

use crate::error::{KeeperError, KeeperResult};
use crate::players::mpris_utils::MprisPlayerProxy;
use crate::players::{PlaybackStatus, PlayerControl};

/// MPRIS player reached over the session bus.
///
/// Every call opens its own session connection, so nothing needs tearing
/// down when the process is killed.
pub struct MprisPlayer {
    service_name: String,
}

impl MprisPlayer {
    pub fn new(service_name: String) -> Self {
        Self { service_name }
    }

    async fn get_proxy<'a>(
        conn: &'a ZBusConnection,
        service_name: &'a str,
    ) -> zbus::Result<MprisPlayerProxy<'a>> {
        // Every read must hit the player, never the proxy cache
        let proxy = MprisPlayerProxy::builder(conn)
            .destination(service_name)?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;
        Ok(proxy)
    }

    async fn read_status(&self) -> zbus::Result<String> {
        let conn = ZBusConnection::session().await?;
        let proxy = Self::get_proxy(&conn, &self.service_name).await?;
        proxy.playback_status().await
    }

    async fn toggle(&self) -> zbus::Result<()> {
        let conn = ZBusConnection::session().await?;
        let proxy = Self::get_proxy(&conn, &self.service_name).await?;
        proxy.play_pause().await
    }
}

#[async_trait]
impl PlayerControl for MprisPlayer {
    async fn playback_status(&self) -> KeeperResult<PlaybackStatus> {
        let raw = self
            .read_status()
            .await
            .map_err(|e| KeeperError::from_bus(&self.service_name, e))?;
        debug!("{} PlaybackStatus = {}", self.service_name, raw);
        Ok(PlaybackStatus::parse(&raw))
    }

    async fn play_pause(&self) -> KeeperResult<()> {
        self.toggle()
            .await
            .map_err(|e| KeeperError::from_bus(&self.service_name, e))
    }

    fn name(&self) -> &str {
        &self.service_name
    }
}
