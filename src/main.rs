//! StreamKeeper - keeps an unattended MPRIS player on its live stream
//!
//! Polls the player over the session bus and sends play/pause when the
//! stream has stalled.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use streamkeeper::config::Config;
use streamkeeper::monitor::{ActionOutcome, Monitor};
use streamkeeper::players::mpris::MprisPlayer;
use streamkeeper::players::PlayerControl;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to ~/.config/streamkeeper/config.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Player to watch, e.g. `vlc` or `org.mpris.MediaPlayer2.vlc`
    #[arg(short, long)]
    service: Option<String>,

    /// Seconds between status polls
    #[arg(long)]
    poll: Option<u64>,

    /// Minimum seconds between play/pause attempts
    #[arg(long)]
    cooldown: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Watch the player until killed (default)
    Run,
    /// Print the player's playback status once
    Status,
    /// Send a single play/pause
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(service) = args.service {
        config.mpris_service = service;
    }
    if let Some(poll) = args.poll {
        config.poll_interval_secs = poll;
    }
    if let Some(cooldown) = args.cooldown {
        config.cooldown_secs = cooldown;
    }
    config.validate()?;

    let player = MprisPlayer::new(config.service_name());

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            info!("📡 StreamKeeper v{} starting...", env!("CARGO_PKG_VERSION"));
            let mut monitor = Monitor::from_config(player, &config);
            monitor.run().await;
        }
        Command::Status => {
            let status = player.playback_status().await?;
            println!("{}", status);
        }
        Command::Toggle => {
            let monitor = Monitor::from_config(player, &config);
            if let ActionOutcome::Failed(reason) = monitor.send_play_pause().await {
                anyhow::bail!("play/pause failed: {}", reason);
            }
        }
    }

    Ok(())
}
