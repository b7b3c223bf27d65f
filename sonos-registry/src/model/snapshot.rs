//! Point-in-time speaker views

use serde::{Deserialize, Serialize};

use super::{Track, TransportState};

/// Everything a status read knows about one speaker
///
/// For a group member whose own track is empty, `track` holds the
/// coordinator's track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerSnapshot {
    pub name: String,
    pub alias: Option<String>,
    pub ip: String,
    pub volume: u8,
    pub muted: bool,
    pub state: TransportState,
    pub group_coordinator: Option<String>,
    pub track: Option<Track>,
}

impl SpeakerSnapshot {
    /// Name to show users: the alias when one is configured
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// True when the speaker follows another speaker's playback
    pub fn is_follower(&self) -> bool {
        self.group_coordinator
            .as_deref()
            .is_some_and(|coordinator| coordinator != self.name)
    }
}

/// One entry of a status listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeakerStatus {
    Available(SpeakerSnapshot),
    /// The speaker is cached but failed to answer a status read
    Unreachable { name: String, error: String },
}

impl SpeakerStatus {
    pub fn name(&self) -> &str {
        match self {
            SpeakerStatus::Available(snapshot) => &snapshot.name,
            SpeakerStatus::Unreachable { name, .. } => name,
        }
    }

    pub fn snapshot(&self) -> Option<&SpeakerSnapshot> {
        match self {
            SpeakerStatus::Available(snapshot) => Some(snapshot),
            SpeakerStatus::Unreachable { .. } => None,
        }
    }
}
