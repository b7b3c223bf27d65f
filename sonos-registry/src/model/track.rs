//! Track information type

use serde::{Deserialize, Serialize};

use crate::device::TrackInfo;
use crate::duration::parse_duration;

/// The track a speaker is playing, with times in whole seconds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: u64,
    pub position: u64,
    /// May be empty for sources without artwork
    pub art_uri: String,
}

impl Track {
    /// Convert raw device output, `None` when nothing is loaded
    pub fn from_track_info(info: TrackInfo) -> Option<Self> {
        if info.is_empty() {
            return None;
        }

        Some(Self {
            duration: parse_duration(&info.duration),
            position: parse_duration(&info.position),
            title: info.title,
            artist: info.artist,
            album: info.album,
            art_uri: info.album_art,
        })
    }

    /// Fraction of the track already played (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            0.0
        } else {
            (self.position.min(self.duration) as f64) / (self.duration as f64)
        }
    }
}
