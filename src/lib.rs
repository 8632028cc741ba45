//! StreamKeeper Library
//!
//! Keeps an MPRIS media player showing its stream by toggling play/pause
//! whenever playback stalls.

pub mod config;
pub mod error;
pub mod monitor;
pub mod players;
