//! Transport state enumeration

use std::fmt;

use serde::{Deserialize, Serialize};

/// AVTransport state of a speaker, in its UPnP wire spelling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportState {
    Playing,
    PausedPlayback,
    Stopped,
    Transitioning,
    #[default]
    Unknown,
}

impl TransportState {
    /// Parse from a Sonos transport state string
    ///
    /// Matching is case-insensitive. "PAUSED" is accepted as an alias of
    /// "PAUSED_PLAYBACK"; anything unrecognised maps to `Unknown`.
    pub fn from_transport_state(state: &str) -> Self {
        match state.trim().to_uppercase().as_str() {
            "PLAYING" => TransportState::Playing,
            "PAUSED_PLAYBACK" | "PAUSED" => TransportState::PausedPlayback,
            "STOPPED" => TransportState::Stopped,
            "TRANSITIONING" => TransportState::Transitioning,
            _ => TransportState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportState::Playing => "PLAYING",
            TransportState::PausedPlayback => "PAUSED_PLAYBACK",
            TransportState::Stopped => "STOPPED",
            TransportState::Transitioning => "TRANSITIONING",
            TransportState::Unknown => "UNKNOWN",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, TransportState::Playing)
    }
}

impl fmt::Display for TransportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
