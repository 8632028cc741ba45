use zbus::proxy;

/// Well-known bus name prefix shared by every MPRIS player
pub const MPRIS_PREFIX: &str = "org.mpris.MediaPlayer2.";

#[proxy(
    interface = "org.mpris.MediaPlayer2.Player",
    default_path = "/org/mpris/MediaPlayer2"
)]
pub trait MprisPlayer {
    fn play_pause(&self) -> zbus::Result<()>;

    #[zbus(property)]
    fn playback_status(&self) -> zbus::Result<String>;
}

/// Expand a bare player name (`vlc`) into its MPRIS bus name.
///
/// Names that already contain a dot are taken as full bus names.
pub fn service_name(player: &str) -> String {
    let player = player.trim();
    if player.contains('.') {
        player.to_string()
    } else {
        format!("{}{}", MPRIS_PREFIX, player)
    }
}
