//! Seams to the discovery and control protocol.
//!
//! The registry never speaks SSDP or SOAP itself. Anything that can find
//! speakers implements [`Discovery`], and every speaker it finds is handed
//! over as a [`DeviceRef`]. All calls are blocking and may wait on the
//! network until the protocol layer's own timeout elapses.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::DeviceError;

/// Shared handle to a speaker owned by the protocol layer
pub type DeviceRef = Arc<dyn Device>;

/// Result type for calls into the protocol layer
pub type DeviceResult<T> = std::result::Result<T, DeviceError>;

/// Raw output of the AVTransport `GetTransportInfo` action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportInfo {
    /// e.g. "PLAYING", "PAUSED_PLAYBACK", "STOPPED"
    pub current_transport_state: String,
    pub current_transport_status: String,
    pub current_speed: String,
}

/// Raw output of the AVTransport `GetPositionInfo` action plus DIDL fields
///
/// Times are `H:MM:SS` strings exactly as the device reports them. Group
/// members that are not the coordinator report an empty title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
    pub position: String,
    pub album_art: String,
}

impl TrackInfo {
    /// Nothing is loaded, or this speaker mirrors a coordinator
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }
}

/// A named entry from the speaker's "Sonos Favorites" container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub title: String,
    pub uri: String,
    /// DIDL-Lite resource metadata to send along with the URI
    pub resource_meta_data: String,
}

impl Favorite {
    pub fn new(
        title: impl Into<String>,
        uri: impl Into<String>,
        resource_meta_data: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
            resource_meta_data: resource_meta_data.into(),
        }
    }
}

/// Group descriptor as reported by a speaker
#[derive(Clone)]
pub struct Group {
    pub coordinator: DeviceRef,
}

impl Group {
    pub fn new(coordinator: DeviceRef) -> Self {
        Self { coordinator }
    }

    /// Whether `device` is this group's coordinator
    pub fn is_coordinator(&self, device: &dyn Device) -> bool {
        self.coordinator.name() == device.name()
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("coordinator", &self.coordinator.name())
            .finish()
    }
}

/// A speaker on the network
///
/// Identity is the device name, unique per household.
pub trait Device: Send + Sync {
    fn name(&self) -> &str;
    fn ip_address(&self) -> &str;

    fn transport_info(&self) -> DeviceResult<TransportInfo>;
    fn track_info(&self) -> DeviceResult<TrackInfo>;

    fn play(&self) -> DeviceResult<()>;
    fn pause(&self) -> DeviceResult<()>;
    fn stop(&self) -> DeviceResult<()>;
    fn next(&self) -> DeviceResult<()>;
    fn previous(&self) -> DeviceResult<()>;

    fn volume(&self) -> DeviceResult<u8>;
    fn set_volume(&self, volume: u8) -> DeviceResult<()>;
    fn mute(&self) -> DeviceResult<bool>;
    fn set_mute(&self, muted: bool) -> DeviceResult<()>;

    /// Make this speaker follow `coordinator`
    fn join(&self, coordinator: &dyn Device) -> DeviceResult<()>;
    /// Leave the current group and become a standalone speaker
    fn unjoin(&self) -> DeviceResult<()>;
    /// Current group, `None` when the device reports no group
    fn group(&self) -> DeviceResult<Option<Group>>;

    fn favorites(&self) -> DeviceResult<Vec<Favorite>>;
    fn play_uri(&self, uri: &str, metadata: &str) -> DeviceResult<()>;
}

impl fmt::Debug for dyn Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("name", &self.name())
            .field("ip_address", &self.ip_address())
            .finish()
    }
}

/// One-shot network discovery
pub trait Discovery: Send + Sync {
    /// Enumerate reachable speakers, giving up after `timeout`
    ///
    /// An empty vector is a valid answer; the registry treats it the same as
    /// an error and keeps what it already knows.
    fn discover(&self, timeout: Duration) -> DeviceResult<Vec<DeviceRef>>;
}

impl<F> Discovery for F
where
    F: Fn(Duration) -> DeviceResult<Vec<DeviceRef>> + Send + Sync,
{
    fn discover(&self, timeout: Duration) -> DeviceResult<Vec<DeviceRef>> {
        self(timeout)
    }
}
